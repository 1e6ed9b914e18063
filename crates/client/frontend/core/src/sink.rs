//! [`RenderSink`] that draws a session onto its chat panel.
use std::sync::Arc;

use async_trait::async_trait;
use runtime::{RenderError, RenderFrame, RenderSink, SessionOutcome};

use crate::panel::{DEFEAT_TEXT, VICTORY_TEXT, panel_embed};
use crate::surface::{ChannelId, ChatSurface, MessageId, OutgoingMessage, SurfaceError};

/// Renders one session into the message that hosts its panel.
pub struct ChatRenderSink {
    surface: Arc<dyn ChatSurface>,
    channel: ChannelId,
    panel: MessageId,
}

impl ChatRenderSink {
    pub fn new(surface: Arc<dyn ChatSurface>, channel: ChannelId, panel: MessageId) -> Self {
        Self {
            surface,
            channel,
            panel,
        }
    }
}

#[async_trait]
impl RenderSink for ChatRenderSink {
    async fn render(&self, frame: RenderFrame) -> Result<(), RenderError> {
        let result = match frame {
            RenderFrame::Panel(snapshot) => {
                self.surface
                    .edit_embed(self.panel, panel_embed(&snapshot))
                    .await
            }
            RenderFrame::Outcome { outcome, .. } => {
                let text = match outcome {
                    SessionOutcome::Victory => VICTORY_TEXT,
                    SessionOutcome::Defeat => DEFEAT_TEXT,
                };
                self.surface
                    .send(self.channel, OutgoingMessage::text(text))
                    .await
                    .map(|_| ())
            }
            RenderFrame::Closed(_) => self.surface.disable_controls(self.panel).await,
        };
        result.map_err(into_render_error)
    }
}

fn into_render_error(error: SurfaceError) -> RenderError {
    match error {
        SurfaceError::Closed => RenderError::Unavailable,
        other => RenderError::Rejected(other.to_string()),
    }
}
