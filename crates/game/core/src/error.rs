//! Error types for session transitions and tick evaluation.
//!
//! - [`TransitionError`]: a lifecycle request that does not apply to the
//!   current status. Callers treat it as a no-op acknowledgement.
//! - [`TickError`]: the tick could not be computed. The controller fails
//!   closed and stops the session; ticks are never retried.
use crate::state::SessionStatus;

/// A lifecycle request rejected by the session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("session already started")]
    AlreadyStarted,

    #[error("session already finished ({status})")]
    AlreadyTerminated { status: SessionStatus },
}

/// A state bound that must hold at every observable point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("character health {health} outside 0..={max_health}")]
    CharacterHealth { health: u32, max_health: u32 },

    #[error("monster health {health} outside 0..={max_health}")]
    MonsterHealth { health: u32, max_health: u32 },

    #[error("character level must be positive")]
    ZeroLevel,
}

/// Failure while evaluating a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TickError {
    #[error("tick requested while session is {status}")]
    NotRunning { status: SessionStatus },

    #[error("arithmetic overflow computing {quantity}")]
    Overflow { quantity: &'static str },

    #[error("state invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
