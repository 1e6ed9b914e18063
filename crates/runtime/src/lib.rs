//! Session loop controller for the hunting minigame.
//!
//! This crate wires the pure session model from `game-core` into timed,
//! concurrent sessions. Consumers embed [`Runtime`] to open sessions, drive
//! them through [`SessionHandle`], and receive frames through a
//! [`RenderSink`] they supply.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod types;

mod registry;
mod workers;

pub use api::{
    NullSink, RenderError, RenderFrame, RenderSink, Result, RuntimeError, RuntimeHandle,
    SessionHandle, SessionOutcome, StartAck, StopAck,
};
pub use events::{EndReason, Event, EventBus, LifecycleEvent, SessionEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use types::SessionId;
pub use workers::CancelToken;
