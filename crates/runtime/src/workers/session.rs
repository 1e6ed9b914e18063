//! Session worker that owns the authoritative [`game_core::SessionState`].
//!
//! Receives commands from [`SessionHandle`](crate::SessionHandle) and from its
//! tick schedule, advances the state via [`game_core::SessionEngine`], queues
//! render frames and publishes events to the EventBus. It is the single
//! writer of its session's state.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, error, info, trace, warn};

use game_core::{
    GameConfig, RngOracle, SessionEngine, SessionSnapshot, SessionState, SessionStatus,
    TickOutcome, TransitionError,
};

use super::render::RenderLanes;
use super::scheduler::{CancelToken, TickSchedule};
use crate::api::{RenderFrame, SessionOutcome, StartAck, StopAck};
use crate::events::{EndReason, Event, EventBus, LifecycleEvent, SessionEvent};
use crate::types::SessionId;

/// Commands that can be sent to the session worker
pub enum Command {
    /// `Idle -> Running` and arm the tick schedule.
    Start { reply: oneshot::Sender<StartAck> },
    /// Any non-terminal status `-> Stopped`.
    Stop { reply: oneshot::Sender<StopAck> },
    /// Issued by the tick schedule. `done` fires once the tick's effects have
    /// been issued.
    Tick {
        token: CancelToken,
        done: oneshot::Sender<()>,
    },
    /// Query the current session state (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Everything a worker needs besides its channels.
pub struct WorkerContext {
    pub session_id: SessionId,
    pub config: GameConfig,
    pub rng: Arc<dyn RngOracle>,
    pub tick_interval: Duration,
    pub event_bus: EventBus,
}

/// Background task that processes session commands.
pub struct SessionWorker {
    session_id: SessionId,
    state: SessionState,
    config: GameConfig,
    rng: Arc<dyn RngOracle>,
    tick_interval: Duration,
    command_rx: mpsc::Receiver<Command>,
    /// Weak so the worker does not keep its own command channel alive.
    command_tx: mpsc::WeakSender<Command>,
    render: RenderLanes,
    status_tx: watch::Sender<SessionStatus>,
    event_bus: EventBus,
    schedule: Option<TickSchedule>,
}

impl SessionWorker {
    /// Creates a new session worker.
    pub fn new(
        context: WorkerContext,
        state: SessionState,
        command_rx: mpsc::Receiver<Command>,
        command_tx: mpsc::WeakSender<Command>,
        render: RenderLanes,
        status_tx: watch::Sender<SessionStatus>,
    ) -> Self {
        let WorkerContext {
            session_id,
            config,
            rng,
            tick_interval,
            event_bus,
        } = context;

        Self {
            session_id,
            state,
            config,
            rng,
            tick_interval,
            command_rx,
            command_tx,
            render,
            status_tx,
            event_bus,
            schedule: None,
        }
    }

    /// Main worker loop. Ends once every handle and the schedule are gone.
    pub async fn run(mut self) {
        debug!(
            target: "runtime::session",
            session_id = %self.session_id,
            owner = %self.state.authorization_key(),
            "Session worker started"
        );

        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command);
        }

        self.cancel_schedule();
        debug!(target: "runtime::session", session_id = %self.session_id, "Session worker stopped");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Start { reply } => {
                let ack = self.handle_start();
                if reply.send(ack).is_err() {
                    debug!("Start reply channel closed (caller dropped)");
                }
            }
            Command::Stop { reply } => {
                let ack = self.handle_stop();
                if reply.send(ack).is_err() {
                    debug!("Stop reply channel closed (caller dropped)");
                }
            }
            Command::Tick { token, done } => {
                self.handle_tick(&token);
                // Scheduler may already be gone after a cancel; that is fine.
                let _ = done.send(());
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.state.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_start(&mut self) -> StartAck {
        match self.state.start() {
            Ok(()) => {}
            Err(TransitionError::AlreadyStarted) => {
                debug!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    "Duplicate start ignored"
                );
                return StartAck::AlreadyStarted;
            }
            Err(TransitionError::AlreadyTerminated { status }) => {
                return StartAck::AlreadyFinished(status);
            }
        }

        let Some(command_tx) = self.command_tx.upgrade() else {
            // No handle left to observe the session; nothing to drive.
            warn!(
                target: "runtime::session",
                session_id = %self.session_id,
                "Start with no live handles; stopping"
            );
            self.halt(EndReason::Stopped);
            return StartAck::AlreadyFinished(self.state.status());
        };

        self.schedule = Some(TickSchedule::spawn(
            self.session_id,
            self.tick_interval,
            command_tx,
        ));
        self.publish_status();

        info!(
            target: "runtime::session",
            session_id = %self.session_id,
            interval_ms = self.tick_interval.as_millis() as u64,
            "Session started"
        );
        self.event_bus
            .publish(Event::Lifecycle(LifecycleEvent::Started {
                session_id: self.session_id,
                owner: self.state.authorization_key(),
            }));

        StartAck::Started
    }

    fn handle_stop(&mut self) -> StopAck {
        let status = self.state.status();
        if status.is_terminal() {
            trace!(
                target: "runtime::session",
                session_id = %self.session_id,
                %status,
                "Stop on finished session ignored"
            );
            return StopAck::AlreadyFinished(status);
        }

        self.halt(EndReason::Stopped);
        StopAck::Stopped
    }

    fn handle_tick(&mut self, token: &CancelToken) {
        if token.is_cancelled() {
            trace!(
                target: "runtime::session",
                session_id = %self.session_id,
                "Discarding tick from cancelled schedule"
            );
            return;
        }

        let result = SessionEngine::new(&mut self.state, &self.config).tick(self.rng.as_ref());

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                error!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    %error,
                    "Tick failed; stopping session"
                );
                self.event_bus
                    .publish(Event::Session(SessionEvent::TickFaulted {
                        session_id: self.session_id,
                        error: error.to_string(),
                    }));
                self.halt(EndReason::Faulted);
                return;
            }
        };

        let snapshot = self.state.snapshot();
        self.event_bus.publish(Event::Session(SessionEvent::Ticked {
            session_id: self.session_id,
            outcome,
            snapshot: snapshot.clone(),
        }));

        match outcome {
            TickOutcome::Victory => self.conclude(SessionOutcome::Victory, snapshot),
            TickOutcome::Defeat { .. } => self.conclude(SessionOutcome::Defeat, snapshot),
            TickOutcome::Encounter {
                kind,
                level,
                leveled_up,
            } => {
                debug!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    %kind,
                    level,
                    leveled_up,
                    kills = snapshot.kills,
                    "Monster spawned"
                );
                self.request_render(RenderFrame::Panel(snapshot));
            }
            TickOutcome::Exchange { .. } => {
                self.request_render(RenderFrame::Panel(snapshot));
            }
        }
    }

    /// Terminal transition reached by the engine itself (Won or Dead).
    fn conclude(&mut self, outcome: SessionOutcome, snapshot: SessionSnapshot) {
        self.cancel_schedule();
        self.publish_status();

        let reason = match outcome {
            SessionOutcome::Victory => EndReason::Victory,
            SessionOutcome::Defeat => EndReason::Defeat,
        };
        info!(
            target: "runtime::session",
            session_id = %self.session_id,
            ?reason,
            kills = snapshot.kills,
            level = snapshot.level,
            "Session finished"
        );

        self.request_render(RenderFrame::Outcome {
            outcome,
            snapshot: snapshot.clone(),
        });
        self.request_render(RenderFrame::Closed(snapshot));
        self.publish_ended(reason);
    }

    /// Moves a non-terminal session to `Stopped`, cancels its schedule and
    /// requests the final frame.
    fn halt(&mut self, reason: EndReason) {
        if let Err(error) = self.state.stop() {
            trace!(target: "runtime::session", session_id = %self.session_id, %error, "Halt skipped");
            return;
        }
        self.cancel_schedule();
        self.publish_status();

        info!(
            target: "runtime::session",
            session_id = %self.session_id,
            ?reason,
            "Session stopped"
        );

        self.request_render(RenderFrame::Closed(self.state.snapshot()));
        self.publish_ended(reason);
    }

    fn cancel_schedule(&mut self) {
        if let Some(schedule) = self.schedule.take()
            && schedule.cancel()
        {
            trace!(target: "runtime::session", session_id = %self.session_id, "Tick schedule cancelled");
        }
    }

    /// Fire-and-forget hand-off to the render worker. Panels may be dropped
    /// when the sink lags; final frames never are.
    fn request_render(&self, frame: RenderFrame) {
        if !matches!(frame, RenderFrame::Panel(_)) {
            if self.render.finals.send(frame).is_err() {
                warn!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    "Render worker gone; final frame dropped"
                );
            }
            return;
        }

        match self.render.panels.try_send(frame) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    "Render queue full; panel dropped"
                );
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                warn!(
                    target: "runtime::session",
                    session_id = %self.session_id,
                    "Render worker gone; frame dropped"
                );
            }
        }
    }

    fn publish_status(&self) {
        self.status_tx.send_replace(self.state.status());
    }

    fn publish_ended(&self, reason: EndReason) {
        self.event_bus.publish(Event::Lifecycle(LifecycleEvent::Ended {
            session_id: self.session_id,
            owner: self.state.authorization_key(),
            status: self.state.status(),
            reason,
        }));
    }
}
