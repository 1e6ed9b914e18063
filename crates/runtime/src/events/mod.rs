//! Topic-based event bus for runtime events.
//!
//! Session workers publish tick results and lifecycle transitions here;
//! the runtime's reaper and any observers subscribe to the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{EndReason, LifecycleEvent, SessionEvent};
