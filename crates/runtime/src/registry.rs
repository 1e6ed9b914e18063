//! Owner-keyed table of live sessions.
//!
//! At most one session is registered per owner. Entries outlive their
//! session's terminal transition by the eviction grace period so late button
//! presses still reach a handle that answers "already finished".
use std::collections::HashMap;

use tokio::sync::Mutex;
use tracing::debug;

use game_core::OwnerId;

use crate::api::SessionHandle;
use crate::events::{Event, EventBus, LifecycleEvent};
use crate::types::SessionId;

pub(crate) struct SessionRegistry {
    sessions: Mutex<HashMap<OwnerId, SessionHandle>>,
    event_bus: EventBus,
}

impl SessionRegistry {
    pub(crate) fn new(event_bus: EventBus) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            event_bus,
        }
    }

    /// Registers `handle`, returning the session it replaced (if any).
    pub(crate) async fn insert(&self, handle: SessionHandle) -> Option<SessionHandle> {
        self.sessions.lock().await.insert(handle.owner(), handle)
    }

    pub(crate) async fn get(&self, owner: OwnerId) -> Option<SessionHandle> {
        self.sessions.lock().await.get(&owner).cloned()
    }

    pub(crate) async fn handles(&self) -> Vec<SessionHandle> {
        self.sessions.lock().await.values().cloned().collect()
    }

    pub(crate) async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Session ids currently registered with a terminal status.
    pub(crate) async fn terminal_sessions(&self) -> Vec<(OwnerId, SessionId)> {
        self.sessions
            .lock()
            .await
            .values()
            .filter(|handle| handle.status().is_terminal())
            .map(|handle| (handle.owner(), handle.session_id()))
            .collect()
    }

    /// Removes the owner's entry if it is still `session_id` and finished.
    ///
    /// A newer session for the same owner is never touched.
    pub(crate) async fn evict(&self, owner: OwnerId, session_id: SessionId) -> bool {
        let removed = {
            let mut sessions = self.sessions.lock().await;
            match sessions.get(&owner) {
                Some(handle)
                    if handle.session_id() == session_id && handle.status().is_terminal() =>
                {
                    sessions.remove(&owner)
                }
                _ => None,
            }
        };

        let Some(handle) = removed else {
            return false;
        };

        debug!(
            target: "runtime::registry",
            session_id = %handle.session_id(),
            %owner,
            "Session evicted"
        );
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Evicted { session_id, owner }));
        true
    }
}
