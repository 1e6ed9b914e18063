//! Render worker that delivers frames to a session's [`RenderSink`].
//!
//! Frames arrive on two lanes. Per-tick panels use a bounded queue fed with
//! `try_send`, so a slow sink drops panels instead of gating the next tick.
//! `Outcome` and `Closed` frames use an unbounded lane and are never dropped;
//! a session sends at most two of them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{RenderFrame, RenderSink};
use crate::types::SessionId;

/// Sending side of a session's render lanes, held by the session worker.
pub struct RenderLanes {
    pub panels: mpsc::Sender<RenderFrame>,
    pub finals: mpsc::UnboundedSender<RenderFrame>,
}

pub struct RenderWorker {
    session_id: SessionId,
    sink: Arc<dyn RenderSink>,
    panel_rx: mpsc::Receiver<RenderFrame>,
    final_rx: mpsc::UnboundedReceiver<RenderFrame>,
}

impl RenderWorker {
    /// Creates the worker together with the lanes that feed it.
    pub fn channel(
        session_id: SessionId,
        sink: Arc<dyn RenderSink>,
        panel_capacity: usize,
    ) -> (Self, RenderLanes) {
        let (panels, panel_rx) = mpsc::channel(panel_capacity);
        let (finals, final_rx) = mpsc::unbounded_channel();
        let worker = Self {
            session_id,
            sink,
            panel_rx,
            final_rx,
        };
        (worker, RenderLanes { panels, finals })
    }

    /// Main worker loop. Ends when the session worker drops both lanes.
    ///
    /// Queued panels always go out before a final frame: nothing is sent on
    /// the panel lane after a final frame.
    pub async fn run(mut self) {
        loop {
            let frame = tokio::select! {
                biased;
                Some(frame) = self.panel_rx.recv() => frame,
                Some(frame) = self.final_rx.recv() => frame,
                else => break,
            };

            if let Err(error) = self.sink.render(frame).await {
                warn!(
                    target: "runtime::render",
                    session_id = %self.session_id,
                    %error,
                    "Render sink failed; session continues"
                );
            }
        }
        debug!(target: "runtime::render", session_id = %self.session_id, "Render worker stopped");
    }
}
