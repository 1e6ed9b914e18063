//! Cloneable façades for clients.
//!
//! [`RuntimeHandle`] manages sessions per owner; [`SessionHandle`] hides the
//! channel plumbing of one session and offers async helpers for the lifecycle
//! commands the input gateway issues.
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use game_core::{
    OwnerId, RngOracle, SessionSnapshot, SessionState, SessionStatus, compute_seed,
};

use super::errors::{Result, RuntimeError};
use super::render::RenderSink;
use crate::events::{Event, EventBus, LifecycleEvent, Topic};
use crate::registry::SessionRegistry;
use crate::runtime::RuntimeConfig;
use crate::types::SessionId;
use crate::workers::{Command, RenderWorker, SessionWorker, WorkerContext};

/// Context discriminator used when deriving a session seed from a base seed.
const SESSION_SEED_CONTEXT: u32 = 0x5e55;

/// Session manager façade shared by every client task.
///
/// Cloning is cheap; all clones see the same registry.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Arc<Shared>,
}

struct Shared {
    config: RuntimeConfig,
    rng: Arc<dyn RngOracle>,
    event_bus: EventBus,
    registry: Arc<SessionRegistry>,
    next_session_id: AtomicU64,
}

impl RuntimeHandle {
    pub(crate) fn new(
        config: RuntimeConfig,
        rng: Arc<dyn RngOracle>,
        event_bus: EventBus,
        registry: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            inner: Arc::new(Shared {
                config,
                rng,
                event_bus,
                registry,
                next_session_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.inner.config
    }

    /// Creates an idle session for `owner` and spawns its workers.
    ///
    /// An owner has at most one session: a previous one is stopped (its final
    /// frame still renders through its own sink) and replaced.
    pub async fn open_session(
        &self,
        owner: OwnerId,
        name: impl Into<String>,
        sink: Arc<dyn RenderSink>,
    ) -> Result<SessionHandle> {
        let shared = &self.inner;
        let config = &shared.config;
        let session_id = SessionId(shared.next_session_id.fetch_add(1, Ordering::Relaxed));
        let seed = match config.seed {
            Some(base) => compute_seed(base, session_id.0, SESSION_SEED_CONTEXT),
            None => rand::random(),
        };

        let state = SessionState::new(owner, name, &config.game_config, seed);
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);
        let (status_tx, status_rx) = watch::channel(state.status());

        let (render_worker, render_lanes) =
            RenderWorker::channel(session_id, sink, config.render_buffer_size);
        tokio::spawn(render_worker.run());

        let session_worker = SessionWorker::new(
            WorkerContext {
                session_id,
                config: config.game_config,
                rng: Arc::clone(&shared.rng),
                tick_interval: config.tick_interval,
                event_bus: shared.event_bus.clone(),
            },
            state,
            command_rx,
            command_tx.downgrade(),
            render_lanes,
            status_tx,
        );
        tokio::spawn(session_worker.run());

        let handle = SessionHandle::new(session_id, owner, command_tx, status_rx);
        let previous = shared.registry.insert(handle.clone()).await;

        info!(target: "runtime::registry", %session_id, %owner, "Session opened");
        shared
            .event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Opened { session_id, owner }));

        if let Some(previous) = previous {
            debug!(
                target: "runtime::registry",
                replaced = %previous.session_id(),
                %session_id,
                "Replacing previous session"
            );
            if let Err(error) = previous.stop().await {
                warn!(target: "runtime::registry", %error, "Failed to stop replaced session");
            }
        }

        Ok(handle)
    }

    /// The owner's registered session, if any (possibly already finished).
    pub async fn session(&self, owner: OwnerId) -> Option<SessionHandle> {
        self.inner.registry.get(owner).await
    }

    /// Number of registered sessions, finished ones awaiting eviction included.
    pub async fn session_count(&self) -> usize {
        self.inner.registry.len().await
    }

    /// Stops every registered session. Used on startup and shutdown.
    pub async fn stop_all(&self) {
        let handles = self.inner.registry.handles().await;
        let mut stopped = 0usize;
        for handle in handles {
            match handle.stop().await {
                Ok(StopAck::Stopped) => stopped += 1,
                Ok(StopAck::AlreadyFinished(_)) => {}
                Err(error) => warn!(
                    target: "runtime::registry",
                    session_id = %handle.session_id(),
                    %error,
                    "Failed to stop session"
                ),
            }
        }
        if stopped > 0 {
            info!(target: "runtime::registry", stopped, "Stopped active sessions");
        }
    }

    /// Subscribe to a specific event topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.inner.event_bus.subscribe(topic)
    }
}

/// Acknowledgement for a start request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartAck {
    /// The session moved to `Running` and its tick schedule is armed.
    Started,
    /// Duplicate trigger while already running; nothing changed.
    AlreadyStarted,
    /// The session is over; nothing changed.
    AlreadyFinished(SessionStatus),
}

/// Acknowledgement for a stop request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopAck {
    /// The session moved to `Stopped`, its schedule was cancelled and a final
    /// frame was requested.
    Stopped,
    /// The session was already terminal; nothing was cancelled or rendered.
    AlreadyFinished(SessionStatus),
}

/// Client-facing handle to one session worker.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    session_id: SessionId,
    owner: OwnerId,
    command_tx: mpsc::Sender<Command>,
    status_rx: watch::Receiver<SessionStatus>,
}

impl SessionHandle {
    pub(crate) fn new(
        session_id: SessionId,
        owner: OwnerId,
        command_tx: mpsc::Sender<Command>,
        status_rx: watch::Receiver<SessionStatus>,
    ) -> Self {
        Self {
            session_id,
            owner,
            command_tx,
            status_rx,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Authorization key: the only identity allowed to drive this session.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Latest status published by the worker.
    pub fn status(&self) -> SessionStatus {
        *self.status_rx.borrow()
    }

    /// Waits until the session reaches a terminal status and returns it.
    pub async fn finished(&self) -> SessionStatus {
        let mut status_rx = self.status_rx.clone();
        let waited = status_rx
            .wait_for(|status| status.is_terminal())
            .await
            .map(|status| *status);
        match waited {
            Ok(status) => status,
            // Worker gone: whatever it published last is final.
            Err(_) => *status_rx.borrow(),
        }
    }

    /// Requests `Idle -> Running`. Duplicate requests are acknowledged as no-ops.
    pub async fn start(&self) -> Result<StartAck> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Start { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Requests `-> Stopped`. Idempotent.
    pub async fn stop(&self) -> Result<StopAck> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Stop { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current session state (read-only snapshot).
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QuerySnapshot { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
