//! Inbound traffic from the chat platform.
//!
//! Everything the gateway reacts to arrives as a [`GatewayCommand`]; platform
//! adapters translate their own message and widget callbacks into it.
use std::str::FromStr;

use strum::{AsRefStr, EnumString};

use crate::surface::{ChannelId, Control, MessageId, User};

/// Prefixed text commands understood by the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ChatCommand {
    /// Open a new hunting session for the author.
    Hunt,
}

/// A chat message posted by a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IncomingMessage {
    pub channel: ChannelId,
    pub author: User,
    pub content: String,
}

/// A user pressing a control attached to one of the bot's messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlPress {
    pub channel: ChannelId,
    pub message: MessageId,
    pub control: Control,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCommand {
    Message(IncomingMessage),
    Press(ControlPress),
}

/// Result of matching a message against the command prefix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedMessage {
    /// Plain chatter; not addressed to the bot.
    Chatter,
    Command(ChatCommand),
    /// Prefixed, but not a command the bot knows.
    Unknown(String),
}

/// Parses `content` as `<prefix><name> [args..]`.
///
/// Command names are case-sensitive, matching the lowercase names users type.
pub fn parse_message(content: &str, prefix: &str) -> ParsedMessage {
    let Some(rest) = content.trim_start().strip_prefix(prefix) else {
        return ParsedMessage::Chatter;
    };
    if rest.starts_with(char::is_whitespace) {
        return ParsedMessage::Chatter;
    }
    let Some(name) = rest.split_whitespace().next() else {
        return ParsedMessage::Chatter;
    };
    match ChatCommand::from_str(name) {
        Ok(command) => ParsedMessage::Command(command),
        Err(_) => ParsedMessage::Unknown(name.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunt_is_recognized() {
        assert_eq!(
            parse_message("!hunt", "!"),
            ParsedMessage::Command(ChatCommand::Hunt)
        );
        assert_eq!(
            parse_message("  !hunt now", "!"),
            ParsedMessage::Command(ChatCommand::Hunt)
        );
    }

    #[test]
    fn unprefixed_text_is_chatter() {
        assert_eq!(parse_message("hunt", "!"), ParsedMessage::Chatter);
        assert_eq!(parse_message("hello there", "!"), ParsedMessage::Chatter);
        assert_eq!(parse_message("!", "!"), ParsedMessage::Chatter);
        assert_eq!(parse_message("! hunt", "!"), ParsedMessage::Chatter);
    }

    #[test]
    fn unknown_commands_keep_their_name() {
        assert_eq!(
            parse_message("!fish", "!"),
            ParsedMessage::Unknown("fish".into())
        );
        assert_eq!(
            parse_message("!Hunt", "!"),
            ParsedMessage::Unknown("Hunt".into())
        );
    }

    #[test]
    fn custom_prefix() {
        assert_eq!(
            parse_message("$$hunt", "$$"),
            ParsedMessage::Command(ChatCommand::Hunt)
        );
        assert_eq!(parse_message("!hunt", "$$"), ParsedMessage::Chatter);
    }
}
