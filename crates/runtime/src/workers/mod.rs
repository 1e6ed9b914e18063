//! Background workers that own mutable runtime state.
//!
//! Each session runs a [`SessionWorker`] (state owner), a [`RenderWorker`]
//! (ordered frame delivery) and, while running, a
//! [`TickSchedule`](scheduler::TickSchedule). A single [`ReaperWorker`] evicts
//! finished sessions.
mod reaper;
mod render;
mod scheduler;
mod session;

pub(crate) use reaper::ReaperWorker;
pub use render::{RenderLanes, RenderWorker};
pub use scheduler::CancelToken;
pub use session::{Command, SessionWorker, WorkerContext};
