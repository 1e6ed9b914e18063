//! Input gateway: turns chat traffic into session commands.
//!
//! The gateway filters by channel, routes prefixed commands, opens sessions
//! for `hunt` and forwards start presses to the session that owns the panel.
//! Presses from anyone but the session owner are ignored without a reply.
use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, error, info, trace, warn};

use runtime::{RuntimeHandle, SessionHandle, SessionId, StartAck};

use crate::command::{
    ChatCommand, ControlPress, GatewayCommand, IncomingMessage, ParsedMessage, parse_message,
};
use crate::config::GatewayConfig;
use crate::panel::{COMMAND_FAILED_TEXT, UNKNOWN_COMMAND_TEXT, welcome_message};
use crate::sink::ChatRenderSink;
use crate::surface::{ChatSurface, Control, MessageId, OutgoingMessage, User};

/// What the gateway did with one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    Ignored(Ignored),
    /// A session was opened and its welcome panel posted.
    Opened {
        session_id: SessionId,
        panel: MessageId,
    },
    /// A start press reached its session.
    Start(StartAck),
    /// Prefixed command the bot does not know; the user was told so.
    Unrecognized,
    /// Handling failed; logged and, for commands, reported to the channel.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    OtherChannel,
    Chatter,
    /// Press on a panel the gateway does not (or no longer) track.
    UnknownPanel,
    /// Press from someone other than the session owner.
    Unauthorized,
}

pub struct InputGateway {
    runtime: RuntimeHandle,
    surface: Arc<dyn ChatSurface>,
    config: GatewayConfig,
    panels: Mutex<HashMap<MessageId, SessionHandle>>,
}

impl InputGateway {
    pub fn new(runtime: RuntimeHandle, surface: Arc<dyn ChatSurface>, config: GatewayConfig) -> Self {
        Self {
            runtime,
            surface,
            config,
            panels: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub async fn dispatch(&self, command: GatewayCommand) -> Dispatch {
        match command {
            GatewayCommand::Message(message) => self.on_message(message).await,
            GatewayCommand::Press(press) => self.on_press(press).await,
        }
    }

    async fn on_message(&self, message: IncomingMessage) -> Dispatch {
        if message.channel != self.config.channel {
            trace!(target: "frontend::gateway", channel = %message.channel, "Message outside channel");
            return Dispatch::Ignored(Ignored::OtherChannel);
        }
        debug!(
            target: "frontend::gateway",
            author = %message.author.name,
            content = %message.content,
            "Message received"
        );

        match parse_message(&message.content, &self.config.prefix) {
            ParsedMessage::Chatter => Dispatch::Ignored(Ignored::Chatter),
            ParsedMessage::Command(ChatCommand::Hunt) => match self.open_hunt(&message.author).await
            {
                Ok(dispatch) => dispatch,
                Err(error) => {
                    error!(
                        target: "frontend::gateway",
                        author = %message.author.name,
                        error = ?error,
                        "Failed to handle hunt command"
                    );
                    self.reply(COMMAND_FAILED_TEXT).await;
                    Dispatch::Failed
                }
            },
            ParsedMessage::Unknown(name) => {
                debug!(target: "frontend::gateway", command = %name, "Unknown command");
                self.reply(UNKNOWN_COMMAND_TEXT).await;
                Dispatch::Unrecognized
            }
        }
    }

    async fn open_hunt(&self, author: &User) -> Result<Dispatch> {
        let channel = self.config.channel;
        let panel = self.surface.send(channel, welcome_message()).await?;
        let sink = Arc::new(ChatRenderSink::new(
            Arc::clone(&self.surface),
            channel,
            panel,
        ));

        let session = self
            .runtime
            .open_session(author.id, author.name.clone(), sink)
            .await?;
        let session_id = session.session_id();

        {
            let mut panels = self.panels.lock().await;
            panels.retain(|_, handle| !handle.status().is_terminal());
            panels.insert(panel, session);
        }

        info!(
            target: "frontend::gateway",
            %session_id,
            owner = %author.name,
            %panel,
            "Hunt opened"
        );
        Ok(Dispatch::Opened { session_id, panel })
    }

    async fn on_press(&self, press: ControlPress) -> Dispatch {
        if press.channel != self.config.channel {
            return Dispatch::Ignored(Ignored::OtherChannel);
        }

        let Some(session) = self.panels.lock().await.get(&press.message).cloned() else {
            debug!(target: "frontend::gateway", panel = %press.message, "Press on untracked panel");
            return Dispatch::Ignored(Ignored::UnknownPanel);
        };

        if press.user.id != session.owner() {
            debug!(
                target: "frontend::gateway",
                session_id = %session.session_id(),
                user = %press.user.name,
                "Ignoring press from non-owner"
            );
            return Dispatch::Ignored(Ignored::Unauthorized);
        }

        match press.control {
            Control::StartHunting => match session.start().await {
                Ok(ack) => {
                    debug!(
                        target: "frontend::gateway",
                        session_id = %session.session_id(),
                        ?ack,
                        "Start pressed"
                    );
                    Dispatch::Start(ack)
                }
                Err(error) => {
                    error!(
                        target: "frontend::gateway",
                        session_id = %session.session_id(),
                        %error,
                        "Failed to start session"
                    );
                    Dispatch::Failed
                }
            },
        }
    }

    async fn reply(&self, text: &str) {
        if let Err(error) = self
            .surface
            .send(self.config.channel, OutgoingMessage::text(text))
            .await
        {
            warn!(target: "frontend::gateway", %error, "Failed to send reply");
        }
    }
}
