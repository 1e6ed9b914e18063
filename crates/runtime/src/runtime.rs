//! High-level runtime orchestrator.
//!
//! The runtime owns the session registry and the eviction worker, and exposes
//! a builder-based API for clients to open and drive sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::info;

use game_core::{GameConfig, PcgRng, RngOracle};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::registry::SessionRegistry;
use crate::workers::ReaperWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Period between two ticks of a running session.
    pub tick_interval: Duration,
    /// How long a finished session stays registered before eviction.
    pub eviction_grace: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Panels queued per session before new ones are dropped. Victory, defeat
    /// and closing frames are never dropped.
    pub render_buffer_size: usize,
    /// Base seed for reproducible sessions. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            tick_interval: Duration::from_secs(2),
            eviction_grace: Duration::from_secs(60),
            command_buffer_size: 32,
            event_buffer_size: 100,
            render_buffer_size: 16,
            seed: None,
        }
    }
}

impl RuntimeConfig {
    fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() {
            return Err(RuntimeError::InvalidConfig {
                reason: "tick interval must be non-zero",
            });
        }
        if self.command_buffer_size == 0 || self.render_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig {
                reason: "channel buffers must be non-zero",
            });
        }
        if self.event_buffer_size == 0 {
            return Err(RuntimeError::InvalidConfig {
                reason: "event buffer must be non-zero",
            });
        }
        Ok(())
    }
}

/// Main runtime that hosts hunting sessions.
///
/// Runtime owns the background reaper; [`RuntimeHandle`] provides a cloneable
/// façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    reaper_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to a specific event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop every session and the reaper.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.stop_all().await;

        self.reaper_handle.abort();
        match self.reaper_handle.await {
            Ok(()) => {}
            Err(error) if error.is_cancelled() => {}
            Err(error) => return Err(RuntimeError::WorkerJoin(error)),
        }

        info!(target: "runtime", "Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    rng: Option<Arc<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the spawn oracle (defaults to [`PcgRng`]).
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Arc::new(rng));
        self
    }

    /// Build the runtime. Must be called inside a Tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        self.config.validate()?;

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let registry = Arc::new(SessionRegistry::new(event_bus.clone()));
        let rng = self
            .rng
            .unwrap_or_else(|| Arc::new(PcgRng) as Arc<dyn RngOracle>);

        let reaper = ReaperWorker::new(
            Arc::clone(&registry),
            event_bus.subscribe(Topic::Lifecycle),
            self.config.eviction_grace,
        );
        let reaper_handle = tokio::spawn(reaper.run());

        info!(
            target: "runtime",
            tick_interval_ms = self.config.tick_interval.as_millis() as u64,
            eviction_grace_secs = self.config.eviction_grace.as_secs(),
            "Runtime started"
        );

        let handle = RuntimeHandle::new(self.config, rng, event_bus, registry);

        Ok(Runtime {
            handle,
            reaper_handle,
        })
    }
}
