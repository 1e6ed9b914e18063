//! Text and layout of everything the bot posts.
use std::fmt::Write;

use game_core::SessionSnapshot;

use crate::surface::{Control, ControlState, Embed, OutgoingMessage};

pub const WELCOME_TEXT: &str = "Hello, welcome to the Hunting Game!";
pub const PANEL_TITLE: &str = "Hunting Game";
pub const START_PROMPT: &str = "Start the game by clicking the \"Start Hunting\" button.";
pub const VICTORY_TEXT: &str = "You won!";
pub const DEFEAT_TEXT: &str = "You have died.";
pub const UNKNOWN_COMMAND_TEXT: &str = "Sorry, I don't recognize that command.";
pub const COMMAND_FAILED_TEXT: &str = "An error occurred while processing your command.";

pub const PANEL_COLOR: u32 = 0x00ff00;

const BORDER_CELL: &str = "◻️";
const BORDER_WIDTH: usize = 12;
/// Hangul filler: renders as blank but is not collapsed like spaces.
const FILLER: &str = "ㅤ";
const SPACER_WIDTH: usize = 15;
const MISSING_MONSTER: &str = "None";

/// Icon for a monster kind label. Unknown kinds render as `?`.
pub fn monster_icon(kind: &str) -> &'static str {
    match kind {
        "Rat" => "🐀",
        "Boar" => "🐗",
        "Goblin" => "👺",
        _ => "?",
    }
}

/// The `!hunt` reply: greeting, start prompt and the start control.
pub fn welcome_message() -> OutgoingMessage {
    OutgoingMessage {
        content: Some(WELCOME_TEXT.to_owned()),
        embed: Some(Embed {
            title: PANEL_TITLE.to_owned(),
            description: START_PROMPT.to_owned(),
            color: PANEL_COLOR,
        }),
        controls: vec![ControlState::enabled(Control::StartHunting)],
    }
}

/// Status panel for one snapshot; replaces the welcome embed in place.
pub fn panel_embed(snapshot: &SessionSnapshot) -> Embed {
    Embed {
        title: PANEL_TITLE.to_owned(),
        description: panel_description(snapshot),
        color: PANEL_COLOR,
    }
}

pub fn panel_description(snapshot: &SessionSnapshot) -> String {
    let border = BORDER_CELL.repeat(BORDER_WIDTH);
    let spacer = format!("{BORDER_CELL}{}", FILLER.repeat(SPACER_WIDTH));

    let (icon, monster_health) = match &snapshot.monster {
        Some(monster) => (monster_icon(&monster.kind), monster.health.to_string()),
        None => ("?", MISSING_MONSTER.to_owned()),
    };

    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "{BORDER_CELL}{FILLER}Level: {}", snapshot.level);
    let _ = writeln!(out, "{BORDER_CELL}{FILLER}Exp: {}", snapshot.experience);
    let _ = writeln!(out, "{BORDER_CELL}{FILLER}Silver: {}", snapshot.currency);
    let _ = writeln!(out, "{BORDER_CELL}{FILLER}M/Killed: {}", snapshot.kills);
    let _ = writeln!(out, "{border}");
    let _ = writeln!(out, "{spacer}");
    let _ = writeln!(
        out,
        "{BORDER_CELL}{FILLER}👨❤️{}{FILLER}⚔️{FILLER}{icon}❤️{monster_health}",
        snapshot.health
    );
    let _ = writeln!(out, "{spacer}");
    let _ = writeln!(out, "{border}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MonsterSnapshot, OwnerId, SessionStatus};

    fn snapshot(monster: Option<MonsterSnapshot>) -> SessionSnapshot {
        SessionSnapshot {
            owner: OwnerId(1),
            name: "hunter".into(),
            level: 2,
            experience: 30,
            currency: 25,
            health: 246,
            max_health: 250,
            monster,
            kills: 4,
            status: SessionStatus::Running,
        }
    }

    fn goblin(health: u32) -> MonsterSnapshot {
        MonsterSnapshot {
            kind: "Goblin".into(),
            level: 2,
            health,
            max_health: 40,
        }
    }

    #[test]
    fn icons_cover_known_kinds() {
        assert_eq!(monster_icon("Rat"), "🐀");
        assert_eq!(monster_icon("Boar"), "🐗");
        assert_eq!(monster_icon("Goblin"), "👺");
        assert_eq!(monster_icon("Dragon"), "?");
    }

    #[test]
    fn panel_lists_stats_and_combat_line() {
        let text = panel_description(&snapshot(Some(goblin(30))));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "◻️".repeat(12));
        assert_eq!(lines[1], "◻️ㅤLevel: 2");
        assert_eq!(lines[2], "◻️ㅤExp: 30");
        assert_eq!(lines[3], "◻️ㅤSilver: 25");
        assert_eq!(lines[4], "◻️ㅤM/Killed: 4");
        assert_eq!(lines[7], "◻️ㅤ👨❤️246ㅤ⚔️ㅤ👺❤️30");
        assert_eq!(lines[9], lines[0]);
        assert_eq!(lines[6], lines[8]);
    }

    #[test]
    fn missing_monster_is_marked() {
        let text = panel_description(&snapshot(None));
        assert!(text.contains("👨❤️246ㅤ⚔️ㅤ?❤️None"));
    }

    #[test]
    fn welcome_offers_the_start_control() {
        let message = welcome_message();
        assert_eq!(message.content.as_deref(), Some(WELCOME_TEXT));
        assert_eq!(message.embed.unwrap().title, "Hunting Game");
        assert_eq!(
            message.controls,
            vec![ControlState::enabled(Control::StartHunting)]
        );
    }
}
