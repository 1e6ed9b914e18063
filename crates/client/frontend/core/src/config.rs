//! Gateway configuration shared by every chat front end.
use crate::surface::ChannelId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// The only channel whose traffic is processed.
    pub channel: ChannelId,
    pub prefix: String,
}

impl GatewayConfig {
    pub fn new(channel: ChannelId, prefix: impl Into<String>) -> Self {
        Self {
            channel,
            prefix: prefix.into(),
        }
    }
}
