//! Timer that drives a session's ticks.
//!
//! The scheduler is a small task that waits one interval, asks the session
//! worker to run a tick, and waits for that tick's effects to be issued before
//! arming the next interval. Ticks of one session are therefore strictly
//! serialized. Cancellation goes through an explicit [`CancelToken`] that the
//! worker checks before running any tick, so a tick already queued when the
//! token is cancelled is discarded instead of executed.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::trace;

use super::session::Command;
use crate::types::SessionId;

/// One-shot cancellation flag shared between a schedule and its worker.
#[derive(Clone, Debug)]
pub struct CancelToken {
    state: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            state: Arc::new(watch::channel(false).0),
        }
    }

    /// Cancels the token. Returns `true` only for the call that flipped it.
    pub fn cancel(&self) -> bool {
        self.state.send_if_modified(|cancelled| {
            if *cancelled {
                false
            } else {
                *cancelled = true;
                true
            }
        })
    }

    pub fn is_cancelled(&self) -> bool {
        *self.state.borrow()
    }

    /// Resolves once the token is cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// An armed tick schedule owned by a session worker.
pub struct TickSchedule {
    token: CancelToken,
}

impl TickSchedule {
    /// Spawns the timer task. The first tick fires one `interval` from now.
    pub fn spawn(
        session_id: SessionId,
        interval: Duration,
        command_tx: mpsc::Sender<Command>,
    ) -> Self {
        let token = CancelToken::new();
        tokio::spawn(run_schedule(
            session_id,
            interval,
            command_tx,
            token.clone(),
        ));
        Self { token }
    }

    /// Cancels the schedule. Returns `false` if it was already cancelled.
    pub fn cancel(&self) -> bool {
        self.token.cancel()
    }
}

async fn run_schedule(
    session_id: SessionId,
    interval: Duration,
    command_tx: mpsc::Sender<Command>,
    token: CancelToken,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let (done_tx, done_rx) = oneshot::channel();
        let command = Command::Tick {
            token: token.clone(),
            done: done_tx,
        };
        if command_tx.send(command).await.is_err() {
            break;
        }
        // Next interval is armed only after this tick's effects were issued.
        if done_rx.await.is_err() {
            break;
        }
    }

    trace!(target: "runtime::scheduler", %session_id, "tick schedule finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_reports_only_the_first_call() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.cancel());
        assert!(!token.cancel());
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_resolves_after_cancel() {
        let token = CancelToken::new();
        let waiter = token.clone();
        let task = tokio::spawn(async move { waiter.cancelled().await });
        token.cancel();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn schedule_waits_for_tick_completion() {
        let (tx, mut rx) = mpsc::channel(4);
        let schedule = TickSchedule::spawn(SessionId(1), Duration::from_secs(2), tx);

        let Some(Command::Tick { done, .. }) = rx.recv().await else {
            panic!("expected a tick");
        };
        // Hold the first tick open for a long time: no second tick is issued.
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());

        done.send(()).unwrap();
        assert!(matches!(rx.recv().await, Some(Command::Tick { .. })));

        schedule.cancel();
    }
}
