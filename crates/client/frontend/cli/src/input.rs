//! Line input processing for the terminal emulator.
//!
//! Slash commands control the emulator itself; every other line is chat.
use client_frontend_core::MessageId;

/// High-level outcome of processing one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application.
    Quit,
    /// Speak as someone else from now on.
    SwitchUser(String),
    /// Press the start control of a panel (latest one when `None`).
    Click(Option<MessageId>),
    /// Post a chat message as the current speaker.
    Say(String),
    /// Explain the emulator commands.
    Help,
    /// Malformed emulator command; the text explains why.
    Invalid(&'static str),
    /// No meaningful command was produced.
    None,
}

pub const HELP_TEXT: &str =
    "/as <name> switch speaker | /click [message id] press Start Hunting | /quit exit";

pub fn parse_line(line: &str) -> InputAction {
    let line = line.trim();
    if line.is_empty() {
        return InputAction::None;
    }
    let Some(command) = line.strip_prefix('/') else {
        return InputAction::Say(line.to_owned());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match name {
        "quit" | "exit" => InputAction::Quit,
        "help" => InputAction::Help,
        "as" => match argument {
            Some(user) => InputAction::SwitchUser(user.to_owned()),
            None => InputAction::Invalid("usage: /as <name>"),
        },
        "click" => match argument.map(str::parse::<u64>) {
            None => InputAction::Click(None),
            Some(Ok(id)) => InputAction::Click(Some(MessageId(id))),
            Some(Err(_)) => InputAction::Invalid("usage: /click [message id]"),
        },
        _ => InputAction::Invalid("unknown command, try /help"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_chat() {
        assert_eq!(parse_line("!hunt"), InputAction::Say("!hunt".into()));
        assert_eq!(parse_line("  hi all "), InputAction::Say("hi all".into()));
        assert_eq!(parse_line("   "), InputAction::None);
    }

    #[test]
    fn emulator_commands() {
        assert_eq!(parse_line("/quit"), InputAction::Quit);
        assert_eq!(parse_line("/as bob"), InputAction::SwitchUser("bob".into()));
        assert_eq!(parse_line("/click"), InputAction::Click(None));
        assert_eq!(
            parse_line("/click 3"),
            InputAction::Click(Some(MessageId(3)))
        );
    }

    #[test]
    fn malformed_commands_are_reported() {
        assert!(matches!(parse_line("/as"), InputAction::Invalid(_)));
        assert!(matches!(parse_line("/click three"), InputAction::Invalid(_)));
        assert!(matches!(parse_line("/dance"), InputAction::Invalid(_)));
    }
}
