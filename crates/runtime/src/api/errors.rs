//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and render sinks so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("invalid runtime configuration: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("runtime worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

/// Failure reported by a [`crate::RenderSink`].
///
/// Render faults are logged by the render worker and never halt a session.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("render target is unavailable")]
    Unavailable,

    #[error("render sink rejected frame: {0}")]
    Rejected(String),
}
