//! Terminal chat emulator for the hunting bot.
//!
//! Stands in for a real chat service: typed lines become channel messages,
//! `/click` presses buttons and `/as` switches who is speaking. The bot side
//! goes through the same [`InputGateway`](client_frontend_core::InputGateway)
//! a real platform adapter would use.
mod app;
mod config;
mod input;
pub mod logging;
mod terminal;
mod transcript;

pub use app::{CliFrontend, UserDirectory};
pub use config::CliConfig;
pub use terminal::TerminalSurface;
pub use transcript::{Author, Transcript, TranscriptEntry};
