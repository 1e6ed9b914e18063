//! Terminal chat emulator: one channel, many speakers, one bot.
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use client_frontend_core::{
    Control, ControlPress, Dispatch, Frontend, GatewayCommand, GatewayConfig, IncomingMessage,
    InputGateway, MessageId, User,
};
use game_core::OwnerId;
use runtime::RuntimeHandle;

use crate::config::CliConfig;
use crate::input::{HELP_TEXT, InputAction, parse_line};
use crate::terminal::{self, TerminalSurface};

/// Hands out a stable [`OwnerId`] per speaker name.
#[derive(Debug, Default)]
pub struct UserDirectory {
    ids: HashMap<String, OwnerId>,
}

impl UserDirectory {
    pub fn resolve(&mut self, name: &str) -> User {
        let next = OwnerId(self.ids.len() as u64 + 1);
        let id = *self.ids.entry(name.to_owned()).or_insert(next);
        User::new(id, name)
    }
}

pub struct CliFrontend {
    gateway_config: GatewayConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(gateway_config: GatewayConfig, cli_config: CliConfig) -> Self {
        Self {
            gateway_config,
            cli_config,
        }
    }

    async fn press(
        &self,
        gateway: &InputGateway,
        surface: &TerminalSurface,
        speaker: &User,
        target: Option<MessageId>,
    ) {
        let target = match target {
            Some(message) => Some(message),
            None => surface.latest_clickable().await,
        };
        let Some(message) = target else {
            surface.notice("There is nothing to click.").await;
            return;
        };
        if !surface.is_clickable(message).await {
            surface
                .notice(format!("Message {message} has no active button."))
                .await;
            return;
        }

        let dispatch = gateway
            .dispatch(GatewayCommand::Press(ControlPress {
                channel: self.gateway_config.channel,
                message,
                control: Control::StartHunting,
                user: speaker.clone(),
            }))
            .await;
        debug!(target: "frontend::cli", ?dispatch, "Press dispatched");
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        info!(target: "frontend::cli", channel = %self.gateway_config.channel, "CLI frontend starting");

        let surface = Arc::new(TerminalSurface::new(
            self.cli_config.bot_name.clone(),
            self.cli_config.message_capacity,
            self.cli_config.user.clone(),
        ));
        let gateway = InputGateway::new(handle, surface.clone(), self.gateway_config.clone());

        let mut users = UserDirectory::default();
        let mut speaker = users.resolve(&self.cli_config.user);

        let _guard = terminal::init()?;
        surface
            .notice(format!(
                "Type {}hunt to play. {HELP_TEXT}",
                self.gateway_config.prefix
            ))
            .await;
        surface.redraw().await?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            match parse_line(&line) {
                InputAction::Quit => break,
                InputAction::SwitchUser(name) => {
                    speaker = users.resolve(&name);
                    surface.set_speaker(&speaker.name).await;
                }
                InputAction::Say(text) => {
                    surface.record_user(&speaker.name, &text).await;
                    let dispatch = gateway
                        .dispatch(GatewayCommand::Message(IncomingMessage {
                            channel: self.gateway_config.channel,
                            author: speaker.clone(),
                            content: text,
                        }))
                        .await;
                    if let Dispatch::Opened { session_id, .. } = dispatch {
                        debug!(target: "frontend::cli", %session_id, "Session opened from terminal");
                    }
                }
                InputAction::Click(target) => {
                    self.press(&gateway, &surface, &speaker, target).await;
                }
                InputAction::Help => surface.notice(HELP_TEXT).await,
                InputAction::Invalid(reason) => surface.notice(reason).await,
                InputAction::None => {}
            }
            surface.redraw().await?;
        }

        info!(target: "frontend::cli", "CLI frontend stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speakers_keep_their_ids() {
        let mut users = UserDirectory::default();
        let alice = users.resolve("alice");
        let bob = users.resolve("bob");

        assert_eq!(alice.id, OwnerId(1));
        assert_eq!(bob.id, OwnerId(2));
        assert_eq!(users.resolve("alice"), alice);
    }
}
