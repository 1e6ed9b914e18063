//! Evicts finished sessions from the registry after a grace period.
//!
//! Listens on the lifecycle topic. Every `Ended` event arms a delayed eviction
//! for that exact session id; if the subscription lags, all currently finished
//! entries are re-armed instead.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

use game_core::OwnerId;

use crate::events::{Event, LifecycleEvent};
use crate::registry::SessionRegistry;
use crate::types::SessionId;

pub(crate) struct ReaperWorker {
    registry: Arc<SessionRegistry>,
    lifecycle_rx: broadcast::Receiver<Event>,
    grace: Duration,
}

impl ReaperWorker {
    pub(crate) fn new(
        registry: Arc<SessionRegistry>,
        lifecycle_rx: broadcast::Receiver<Event>,
        grace: Duration,
    ) -> Self {
        Self {
            registry,
            lifecycle_rx,
            grace,
        }
    }

    pub(crate) async fn run(mut self) {
        loop {
            match self.lifecycle_rx.recv().await {
                Ok(Event::Lifecycle(LifecycleEvent::Ended {
                    session_id, owner, ..
                })) => self.schedule_eviction(owner, session_id),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(
                        target: "runtime::reaper",
                        skipped,
                        "Lifecycle subscription lagged; re-arming evictions"
                    );
                    for (owner, session_id) in self.registry.terminal_sessions().await {
                        self.schedule_eviction(owner, session_id);
                    }
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!(target: "runtime::reaper", "Reaper stopped");
    }

    fn schedule_eviction(&self, owner: OwnerId, session_id: SessionId) {
        let registry = Arc::clone(&self.registry);
        let grace = self.grace;
        tokio::spawn(async move {
            tokio::time::sleep(grace).await;
            registry.evict(owner, session_id).await;
        });
    }
}
