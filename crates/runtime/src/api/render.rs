//! Boundary between the session controller and whatever displays it.
use async_trait::async_trait;
use game_core::SessionSnapshot;
use serde::{Deserialize, Serialize};

use super::errors::RenderError;

/// How a session ended on its own (as opposed to being stopped).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    Victory,
    Defeat,
}

/// A unit of work for a [`RenderSink`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderFrame {
    /// Per-tick status panel; replaces the previous panel in place.
    Panel(SessionSnapshot),

    /// Plain-text announcement of a victory or defeat.
    Outcome {
        outcome: SessionOutcome,
        snapshot: SessionSnapshot,
    },

    /// Final frame of a session: interaction affordances must be disabled
    /// permanently.
    Closed(SessionSnapshot),
}

impl RenderFrame {
    pub fn snapshot(&self) -> &SessionSnapshot {
        match self {
            RenderFrame::Panel(snapshot)
            | RenderFrame::Outcome { snapshot, .. }
            | RenderFrame::Closed(snapshot) => snapshot,
        }
    }
}

/// Consumer of render frames for a single session.
///
/// Frames are delivered in order by a dedicated render worker; a slow or
/// failing sink never delays the session's next tick.
#[async_trait]
pub trait RenderSink: Send + Sync {
    async fn render(&self, frame: RenderFrame) -> Result<(), RenderError>;
}

/// Sink that discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

#[async_trait]
impl RenderSink for NullSink {
    async fn render(&self, _frame: RenderFrame) -> Result<(), RenderError> {
        Ok(())
    }
}
