//! Cross-frontend primitives for hosting the hunting game in a chat.
//!
//! Houses the platform boundary ([`ChatSurface`]), the tagged inbound command
//! type, the input gateway that authorizes and routes it, panel formatting and
//! the render sink that draws sessions into chat messages.
pub mod command;
pub mod config;
pub mod frontend;
pub mod gateway;
pub mod panel;
pub mod sink;
pub mod surface;

pub use command::{ChatCommand, ControlPress, GatewayCommand, IncomingMessage, ParsedMessage};
pub use config::GatewayConfig;
pub use frontend::Frontend;
pub use gateway::{Dispatch, Ignored, InputGateway};
pub use sink::ChatRenderSink;
pub use surface::{
    ChannelId, ChatSurface, Control, ControlState, Embed, MessageId, OutgoingMessage,
    SurfaceError, User,
};
