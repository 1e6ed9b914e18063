#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use game_core::{FixedRng, GameConfig};
use runtime::{RenderError, RenderFrame, RenderSink, Runtime, RuntimeConfig};
use tokio::sync::{Semaphore, mpsc};

/// Forwards every frame to the test.
pub struct ChannelSink(mpsc::UnboundedSender<RenderFrame>);

#[async_trait]
impl RenderSink for ChannelSink {
    async fn render(&self, frame: RenderFrame) -> Result<(), RenderError> {
        self.0.send(frame).map_err(|_| RenderError::Unavailable)
    }
}

pub fn channel_sink() -> (Arc<dyn RenderSink>, mpsc::UnboundedReceiver<RenderFrame>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Arc::new(ChannelSink(tx)), rx)
}

/// Rejects every frame but counts the attempts.
#[derive(Default)]
pub struct FailingSink {
    pub calls: AtomicUsize,
}

#[async_trait]
impl RenderSink for FailingSink {
    async fn render(&self, _frame: RenderFrame) -> Result<(), RenderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(RenderError::Rejected("message deleted".into()))
    }
}

/// Blocks every frame until [`StalledSink::release`], then forwards them.
pub struct StalledSink {
    gate: Semaphore,
    frames: mpsc::UnboundedSender<RenderFrame>,
}

impl StalledSink {
    pub fn release(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl RenderSink for StalledSink {
    async fn render(&self, frame: RenderFrame) -> Result<(), RenderError> {
        let _permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| RenderError::Unavailable)?;
        self.frames.send(frame).map_err(|_| RenderError::Unavailable)
    }
}

pub fn stalled_sink() -> (Arc<StalledSink>, mpsc::UnboundedReceiver<RenderFrame>) {
    let (frames, rx) = mpsc::unbounded_channel();
    let sink = StalledSink {
        gate: Semaphore::new(0),
        frames,
    };
    (Arc::new(sink), rx)
}

pub async fn runtime_with(game_config: GameConfig) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            seed: Some(7),
            ..RuntimeConfig::default()
        })
        .rng(FixedRng(0))
        .build()
        .await
        .expect("runtime builds")
}

pub async fn runtime() -> Runtime {
    runtime_with(GameConfig::default()).await
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<RenderFrame>) -> Vec<RenderFrame> {
    let mut frames = Vec::new();
    while let Ok(frame) = rx.try_recv() {
        frames.push(frame);
    }
    frames
}

/// Waits for exactly `count` frames, advancing paused time as needed.
pub async fn recv_frames(
    rx: &mut mpsc::UnboundedReceiver<RenderFrame>,
    count: usize,
) -> Vec<RenderFrame> {
    let mut frames = Vec::with_capacity(count);
    for _ in 0..count {
        frames.push(rx.recv().await.expect("sink still attached"));
    }
    frames
}
