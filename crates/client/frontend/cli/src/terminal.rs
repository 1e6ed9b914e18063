//! Terminal-backed [`ChatSurface`].
//!
//! The terminal stays in cooked mode so typed lines are read normally; the
//! transcript is repainted on the alternate screen after every change.
use std::io::{self, Stdout, Write};

use async_trait::async_trait;
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tokio::sync::Mutex;
use tracing::warn;

use client_frontend_core::{
    ChannelId, ChatSurface, Embed, MessageId, OutgoingMessage, SurfaceError,
};

use crate::transcript::Transcript;

/// Restores the primary screen when dropped.
pub struct TerminalGuard {
    _private: (),
}

pub fn init() -> io::Result<TerminalGuard> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(TerminalGuard { _private: () })
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(error) = restore() {
            warn!(target: "frontend::cli", %error, "Failed to restore terminal");
        }
    }
}

struct Screen {
    transcript: Transcript,
    speaker: String,
}

pub struct TerminalSurface {
    bot_name: String,
    screen: Mutex<Screen>,
}

impl TerminalSurface {
    pub fn new(bot_name: impl Into<String>, capacity: usize, speaker: impl Into<String>) -> Self {
        Self {
            bot_name: bot_name.into(),
            screen: Mutex::new(Screen {
                transcript: Transcript::new(capacity),
                speaker: speaker.into(),
            }),
        }
    }

    pub async fn set_speaker(&self, speaker: impl Into<String>) {
        self.screen.lock().await.speaker = speaker.into();
    }

    pub async fn record_user(&self, user: &str, text: &str) -> MessageId {
        self.screen.lock().await.transcript.say(user, text)
    }

    pub async fn notice(&self, text: impl Into<String>) {
        self.screen.lock().await.transcript.notice(text);
    }

    pub async fn is_clickable(&self, message: MessageId) -> bool {
        self.screen.lock().await.transcript.is_clickable(message)
    }

    pub async fn latest_clickable(&self) -> Option<MessageId> {
        self.screen.lock().await.transcript.latest_clickable()
    }

    pub async fn redraw(&self) -> io::Result<()> {
        let screen = self.screen.lock().await;
        let height = terminal::size().map(|(_, rows)| rows as usize).unwrap_or(24);
        let lines = visible_lines(
            screen.transcript.render_lines(&self.bot_name),
            height.saturating_sub(2),
        );
        draw(&mut io::stdout(), &lines, &screen.speaker)
    }

    /// Applies a transcript change and repaints. A failed repaint is logged
    /// rather than reported; the change itself has already happened.
    async fn apply<T>(
        &self,
        change: impl FnOnce(&mut Transcript) -> Result<T, SurfaceError>,
    ) -> Result<T, SurfaceError> {
        let value = change(&mut self.screen.lock().await.transcript)?;
        if let Err(error) = self.redraw().await {
            warn!(target: "frontend::cli", %error, "Failed to redraw terminal");
        }
        Ok(value)
    }
}

#[async_trait]
impl ChatSurface for TerminalSurface {
    async fn send(
        &self,
        _channel: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, SurfaceError> {
        self.apply(|transcript| Ok(transcript.post(message))).await
    }

    async fn edit_embed(&self, message: MessageId, embed: Embed) -> Result<(), SurfaceError> {
        self.apply(|transcript| transcript.edit_embed(message, embed))
            .await
    }

    async fn disable_controls(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.apply(|transcript| transcript.disable_controls(message))
            .await
    }
}

/// Keeps the newest lines that fit in `rows`.
fn visible_lines(mut lines: Vec<String>, rows: usize) -> Vec<String> {
    let overflow = lines.len().saturating_sub(rows);
    lines.drain(..overflow);
    lines
}

fn draw(out: &mut Stdout, lines: &[String], speaker: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    let prompt_row = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
    queue!(out, MoveTo(0, prompt_row), Print(format!("{speaker}> ")))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_newest_lines_are_visible() {
        let lines: Vec<String> = (0..5).map(|i| i.to_string()).collect();
        assert_eq!(visible_lines(lines.clone(), 2), vec!["3", "4"]);
        assert_eq!(visible_lines(lines.clone(), 10), lines);
        assert!(visible_lines(lines, 0).is_empty());
    }
}
