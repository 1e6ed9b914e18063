//! Chat platform boundary.
//!
//! A [`ChatSurface`] is whatever actually shows messages to people: a real chat
//! service, or the terminal emulator. The gateway and the render sink only ever
//! talk to the platform through this trait.
use std::fmt;

use async_trait::async_trait;
use game_core::OwnerId;
use strum::{AsRefStr, Display};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u64);

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A chat participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct User {
    pub id: OwnerId,
    pub name: String,
}

impl User {
    pub fn new(id: OwnerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Interactive affordances attached to a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display)]
pub enum Control {
    #[strum(serialize = "Start Hunting")]
    StartHunting,
}

/// A control and whether it can still be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub control: Control,
    pub disabled: bool,
}

impl ControlState {
    pub const fn enabled(control: Control) -> Self {
        Self {
            control,
            disabled: false,
        }
    }
}

/// Rich block shown under a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    /// 24-bit RGB accent.
    pub color: u32,
}

/// A message the bot wants to post.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub embed: Option<Embed>,
    pub controls: Vec<ControlState>,
}

impl OutgoingMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("message {0} does not exist")]
    UnknownMessage(MessageId),

    #[error("chat surface is closed")]
    Closed,

    #[error("chat platform error: {0}")]
    Platform(String),
}

/// Outbound operations the bot performs on the chat platform.
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Posts a new message and returns its id.
    async fn send(
        &self,
        channel: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, SurfaceError>;

    /// Replaces the embed of an existing message in place.
    async fn edit_embed(&self, message: MessageId, embed: Embed) -> Result<(), SurfaceError>;

    /// Permanently disables every control of a message.
    async fn disable_controls(&self, message: MessageId) -> Result<(), SurfaceError>;
}
