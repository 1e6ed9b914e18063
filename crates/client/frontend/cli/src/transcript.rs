//! Bounded chat transcript shown by the terminal emulator.
use std::collections::VecDeque;

use client_frontend_core::{ControlState, Embed, MessageId, OutgoingMessage, SurfaceError};

/// Who wrote a transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Author {
    Bot,
    User(String),
    /// Emulator hints; not part of the chat.
    Notice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub id: MessageId,
    pub author: Author,
    pub content: Option<String>,
    pub embed: Option<Embed>,
    pub controls: Vec<ControlState>,
}

impl TranscriptEntry {
    fn has_enabled_control(&self) -> bool {
        self.controls.iter().any(|state| !state.disabled)
    }
}

/// Circular buffer of chat entries. Ids keep increasing after old entries
/// fall off the front.
#[derive(Clone, Debug)]
pub struct Transcript {
    entries: VecDeque<TranscriptEntry>,
    capacity: usize,
    last_id: u64,
}

impl Transcript {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            last_id: 0,
        }
    }

    /// Appends a bot message and returns its id.
    pub fn post(&mut self, message: OutgoingMessage) -> MessageId {
        self.push(Author::Bot, message.content, message.embed, message.controls)
    }

    pub fn say(&mut self, user: &str, text: impl Into<String>) -> MessageId {
        self.push(
            Author::User(user.to_owned()),
            Some(text.into()),
            None,
            Vec::new(),
        )
    }

    pub fn notice(&mut self, text: impl Into<String>) -> MessageId {
        self.push(Author::Notice, Some(text.into()), None, Vec::new())
    }

    pub fn edit_embed(&mut self, id: MessageId, embed: Embed) -> Result<(), SurfaceError> {
        self.entry_mut(id)?.embed = Some(embed);
        Ok(())
    }

    pub fn disable_controls(&mut self, id: MessageId) -> Result<(), SurfaceError> {
        for state in &mut self.entry_mut(id)?.controls {
            state.disabled = true;
        }
        Ok(())
    }

    pub fn is_clickable(&self, id: MessageId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.has_enabled_control())
    }

    /// Most recent message that still has a pressable control.
    pub fn latest_clickable(&self) -> Option<MessageId> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.has_enabled_control())
            .map(|entry| entry.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TranscriptEntry> {
        self.entries.iter()
    }

    /// Plain-text rendering, oldest first.
    pub fn render_lines(&self, bot_name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in &self.entries {
            let content = entry.content.as_deref().unwrap_or_default();
            match &entry.author {
                Author::Bot => lines.push(format!("[{}] {bot_name}: {content}", entry.id)),
                Author::User(name) => lines.push(format!("[{}] {name}: {content}", entry.id)),
                Author::Notice => lines.push(format!("  * {content}")),
            }

            if let Some(embed) = &entry.embed {
                lines.push(format!("  ┃ {}", embed.title));
                lines.extend(
                    embed
                        .description
                        .lines()
                        .map(|line| format!("  ┃ {line}")),
                );
            }

            for state in &entry.controls {
                if state.disabled {
                    lines.push(format!("  [ {} ] (disabled)", state.control));
                } else {
                    lines.push(format!("  [ {} ]", state.control));
                }
            }
        }
        lines
    }

    fn push(
        &mut self,
        author: Author,
        content: Option<String>,
        embed: Option<Embed>,
        controls: Vec<ControlState>,
    ) -> MessageId {
        self.last_id += 1;
        let id = MessageId(self.last_id);
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(TranscriptEntry {
            id,
            author,
            content,
            embed,
            controls,
        });
        id
    }

    fn entry_mut(&mut self, id: MessageId) -> Result<&mut TranscriptEntry, SurfaceError> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(SurfaceError::UnknownMessage(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::Control;

    fn panel_message() -> OutgoingMessage {
        OutgoingMessage {
            content: Some("hello".into()),
            embed: Some(Embed {
                title: "Hunting Game".into(),
                description: "line one\nline two".into(),
                color: 0x00ff00,
            }),
            controls: vec![ControlState::enabled(Control::StartHunting)],
        }
    }

    #[test]
    fn ids_increase_and_old_entries_drop() {
        let mut transcript = Transcript::new(2);
        let first = transcript.say("alice", "one");
        transcript.say("alice", "two");
        let third = transcript.say("alice", "three");

        assert_eq!(first, MessageId(1));
        assert_eq!(third, MessageId(3));
        assert_eq!(transcript.iter().count(), 2);
        assert_eq!(
            transcript.disable_controls(first),
            Err(SurfaceError::UnknownMessage(first))
        );
    }

    #[test]
    fn panels_are_edited_in_place_and_disabled() {
        let mut transcript = Transcript::new(8);
        let panel = transcript.post(panel_message());
        transcript.say("alice", "go");

        assert_eq!(transcript.latest_clickable(), Some(panel));

        let updated = Embed {
            title: "Hunting Game".into(),
            description: "Level: 2".into(),
            color: 0x00ff00,
        };
        transcript.edit_embed(panel, updated).unwrap();
        transcript.disable_controls(panel).unwrap();

        assert!(!transcript.is_clickable(panel));
        assert_eq!(transcript.latest_clickable(), None);

        let lines = transcript.render_lines("HuntBot");
        assert_eq!(lines[0], "[1] HuntBot: hello");
        assert_eq!(lines[2], "  ┃ Level: 2");
        assert_eq!(lines[3], "  [ Start Hunting ] (disabled)");
        assert_eq!(lines[4], "[2] alice: go");
    }

    #[test]
    fn render_shows_every_description_line() {
        let mut transcript = Transcript::new(4);
        transcript.post(panel_message());
        transcript.notice("nothing to click");

        let lines = transcript.render_lines("HuntBot");
        assert_eq!(
            lines,
            vec![
                "[1] HuntBot: hello",
                "  ┃ Hunting Game",
                "  ┃ line one",
                "  ┃ line two",
                "  [ Start Hunting ]",
                "  * nothing to click",
            ]
        );
    }
}
