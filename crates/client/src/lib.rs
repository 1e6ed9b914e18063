//! Top-level client tying the runtime and a chat frontend together.
//!
//! ```text
//! Client
//!   ├─→ Runtime (session registry, workers, reaper)
//!   └─→ Frontend (chat platform adapter, receives a RuntimeHandle)
//! ```
mod builder;

pub use builder::ClientBuilder;

pub use client_frontend_core::Frontend;

use anyhow::Result;

/// Owns the runtime for the lifetime of the frontend.
///
/// # Lifecycle
///
/// 1. Stop anything left running (start-up is a clean slate)
/// 2. Hand a [`runtime::RuntimeHandle`] to the frontend and wait for it to quit
/// 3. Stop every session and the background reaper
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until it exits, then shut the runtime down.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, or a shutdown error if the frontend
    /// exited cleanly.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();
        handle.stop_all().await;

        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        let shutdown_result = self.runtime.shutdown().await;
        if let Err(error) = &shutdown_result {
            tracing::error!(%error, "Runtime shutdown failed");
        }

        frontend_result?;
        shutdown_result.map_err(Into::into)
    }
}
