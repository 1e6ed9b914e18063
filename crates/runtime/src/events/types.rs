//! Event payloads published on the bus.
use game_core::{OwnerId, SessionSnapshot, SessionStatus, TickOutcome};
use serde::{Deserialize, Serialize};

use crate::types::SessionId;

/// Per-tick activity of a running session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A tick was applied.
    Ticked {
        session_id: SessionId,
        outcome: TickOutcome,
        snapshot: SessionSnapshot,
    },

    /// A tick failed and the session was stopped without retry.
    TickFaulted {
        session_id: SessionId,
        error: String,
    },
}

/// Why a session reached its terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Victory,
    Defeat,
    /// Explicit stop request (including replacement by a newer session).
    Stopped,
    /// Tick fault; the session failed closed.
    Faulted,
}

/// Session lifecycle transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Opened {
        session_id: SessionId,
        owner: OwnerId,
    },
    Started {
        session_id: SessionId,
        owner: OwnerId,
    },
    Ended {
        session_id: SessionId,
        owner: OwnerId,
        status: SessionStatus,
        reason: EndReason,
    },
    /// Removed from the registry after its grace period.
    Evicted {
        session_id: SessionId,
        owner: OwnerId,
    },
}
