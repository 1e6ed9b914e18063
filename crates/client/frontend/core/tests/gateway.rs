use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use client_frontend_core::panel::{
    COMMAND_FAILED_TEXT, UNKNOWN_COMMAND_TEXT, VICTORY_TEXT, WELCOME_TEXT,
};
use client_frontend_core::{
    ChannelId, ChatSurface, Control, ControlPress, Dispatch, Embed, GatewayCommand,
    GatewayConfig, Ignored, IncomingMessage, InputGateway, MessageId, OutgoingMessage,
    SurfaceError, User,
};
use game_core::{FixedRng, GameConfig, OwnerId, SessionStatus};
use runtime::{Runtime, RuntimeConfig, StartAck};

const CHANNEL: ChannelId = ChannelId(100);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Op {
    Send {
        id: MessageId,
        message: OutgoingMessage,
    },
    Edit {
        message: MessageId,
        embed: Embed,
    },
    Disable {
        message: MessageId,
    },
}

#[derive(Default)]
struct MockSurface {
    ops: Mutex<Vec<Op>>,
    next_id: AtomicU64,
    reject_embeds: bool,
}

impl MockSurface {
    fn ops(&self) -> Vec<Op> {
        self.ops.lock().unwrap().clone()
    }

    fn texts(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Send { message, .. } if message.embed.is_none() => message.content,
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ChatSurface for MockSurface {
    async fn send(
        &self,
        channel: ChannelId,
        message: OutgoingMessage,
    ) -> Result<MessageId, SurfaceError> {
        assert_eq!(channel, CHANNEL);
        if self.reject_embeds && message.embed.is_some() {
            return Err(SurfaceError::Platform("embeds disabled".into()));
        }
        let id = MessageId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        self.ops.lock().unwrap().push(Op::Send { id, message });
        Ok(id)
    }

    async fn edit_embed(&self, message: MessageId, embed: Embed) -> Result<(), SurfaceError> {
        self.ops.lock().unwrap().push(Op::Edit { message, embed });
        Ok(())
    }

    async fn disable_controls(&self, message: MessageId) -> Result<(), SurfaceError> {
        self.ops.lock().unwrap().push(Op::Disable { message });
        Ok(())
    }
}

fn alice() -> User {
    User::new(OwnerId(1), "alice")
}

fn bob() -> User {
    User::new(OwnerId(2), "bob")
}

fn say(author: User, content: &str) -> GatewayCommand {
    GatewayCommand::Message(IncomingMessage {
        channel: CHANNEL,
        author,
        content: content.into(),
    })
}

fn press(user: User, message: MessageId) -> GatewayCommand {
    GatewayCommand::Press(ControlPress {
        channel: CHANNEL,
        message,
        control: Control::StartHunting,
        user,
    })
}

async fn setup(game_config: GameConfig, surface: Arc<MockSurface>) -> (Runtime, InputGateway) {
    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            seed: Some(1),
            ..RuntimeConfig::default()
        })
        .rng(FixedRng(1))
        .build()
        .await
        .unwrap();
    let gateway = InputGateway::new(runtime.handle(), surface, GatewayConfig::new(CHANNEL, "!"));
    (runtime, gateway)
}

async fn open(gateway: &InputGateway, user: User) -> MessageId {
    match gateway.dispatch(say(user, "!hunt")).await {
        Dispatch::Opened { panel, .. } => panel,
        other => panic!("expected a session, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn hunt_posts_welcome_and_owner_starts_it() {
    let surface = Arc::new(MockSurface::default());
    let (runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    let panel = open(&gateway, alice()).await;
    let Op::Send { id, message } = &surface.ops()[0] else {
        panic!("expected the welcome message");
    };
    assert_eq!(*id, panel);
    assert_eq!(message.content.as_deref(), Some(WELCOME_TEXT));

    assert_eq!(
        gateway.dispatch(press(alice(), panel)).await,
        Dispatch::Start(StartAck::Started)
    );
    assert_eq!(
        gateway.dispatch(press(alice(), panel)).await,
        Dispatch::Start(StartAck::AlreadyStarted)
    );

    tokio::time::sleep(Duration::from_millis(2_100)).await;

    let edits: Vec<Embed> = surface
        .ops()
        .into_iter()
        .filter_map(|op| match op {
            Op::Edit { message, embed } if message == panel => Some(embed),
            _ => None,
        })
        .collect();
    assert_eq!(edits.len(), 1);
    assert!(edits[0].description.contains("M/Killed: 1"));
    assert!(edits[0].description.contains("🐗❤️20"));

    let session = runtime.handle().session(OwnerId(1)).await.unwrap();
    assert_eq!(session.status(), SessionStatus::Running);
}

#[tokio::test(start_paused = true)]
async fn presses_from_other_users_are_ignored() {
    let surface = Arc::new(MockSurface::default());
    let (runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    let panel = open(&gateway, alice()).await;
    let before = surface.ops().len();

    assert_eq!(
        gateway.dispatch(press(bob(), panel)).await,
        Dispatch::Ignored(Ignored::Unauthorized)
    );
    tokio::time::sleep(Duration::from_secs(10)).await;

    assert_eq!(surface.ops().len(), before);
    let session = runtime.handle().session(OwnerId(1)).await.unwrap();
    assert_eq!(session.status(), SessionStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn traffic_outside_the_channel_is_dropped() {
    let surface = Arc::new(MockSurface::default());
    let (_runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    let dispatch = gateway
        .dispatch(GatewayCommand::Message(IncomingMessage {
            channel: ChannelId(7),
            author: alice(),
            content: "!hunt".into(),
        }))
        .await;

    assert_eq!(dispatch, Dispatch::Ignored(Ignored::OtherChannel));
    assert!(surface.ops().is_empty());
}

#[tokio::test(start_paused = true)]
async fn chatter_and_unknown_commands() {
    let surface = Arc::new(MockSurface::default());
    let (_runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    assert_eq!(
        gateway.dispatch(say(alice(), "good morning")).await,
        Dispatch::Ignored(Ignored::Chatter)
    );
    assert_eq!(
        gateway.dispatch(say(alice(), "!fish")).await,
        Dispatch::Unrecognized
    );
    assert_eq!(surface.texts(), vec![UNKNOWN_COMMAND_TEXT.to_owned()]);
}

#[tokio::test(start_paused = true)]
async fn press_on_unknown_panel_is_ignored() {
    let surface = Arc::new(MockSurface::default());
    let (_runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    assert_eq!(
        gateway.dispatch(press(alice(), MessageId(999))).await,
        Dispatch::Ignored(Ignored::UnknownPanel)
    );
}

#[tokio::test(start_paused = true)]
async fn failed_hunt_reports_an_error() {
    let surface = Arc::new(MockSurface {
        reject_embeds: true,
        ..MockSurface::default()
    });
    let (runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    assert_eq!(gateway.dispatch(say(alice(), "!hunt")).await, Dispatch::Failed);
    assert_eq!(surface.texts(), vec![COMMAND_FAILED_TEXT.to_owned()]);
    assert!(runtime.handle().session(OwnerId(1)).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn victory_is_announced_and_the_panel_disabled() {
    let config = GameConfig {
        level_up_experience: 10,
        campaign_level: 2,
        ..GameConfig::default()
    };
    let surface = Arc::new(MockSurface::default());
    let (_runtime, gateway) = setup(config, surface.clone()).await;

    let panel = open(&gateway, alice()).await;
    gateway.dispatch(press(alice(), panel)).await;
    tokio::time::sleep(Duration::from_secs(9)).await;

    assert_eq!(surface.texts(), vec![VICTORY_TEXT.to_owned()]);
    assert_eq!(surface.ops().last(), Some(&Op::Disable { message: panel }));
    assert_eq!(
        gateway.dispatch(press(alice(), panel)).await,
        Dispatch::Start(StartAck::AlreadyFinished(SessionStatus::Won))
    );
}

#[tokio::test(start_paused = true)]
async fn new_hunt_disables_the_previous_panel() {
    let surface = Arc::new(MockSurface::default());
    let (_runtime, gateway) = setup(GameConfig::default(), surface.clone()).await;

    let first = open(&gateway, alice()).await;
    gateway.dispatch(press(alice(), first)).await;
    let second = open(&gateway, alice()).await;
    assert_ne!(first, second);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(surface.ops().contains(&Op::Disable { message: first }));
    assert!(!surface.ops().contains(&Op::Disable { message: second }));
    assert_eq!(
        gateway.dispatch(press(alice(), first)).await,
        Dispatch::Ignored(Ignored::UnknownPanel)
    );
}
