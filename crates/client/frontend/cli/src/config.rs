//! CLI-specific configuration for the terminal chat emulator.
use std::env;

/// Terminal emulator configuration.
///
/// This contains settings specific to the terminal interface, separate from
/// the gateway configuration shared by every chat front end.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Initial speaker.
    pub user: String,
    /// Name shown on the bot's own messages.
    pub bot_name: String,
    /// Transcript entries kept on screen.
    pub message_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            user: "player".to_owned(),
            bot_name: "HuntBot".to_owned(),
            message_capacity: 64,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_USER` - Initial speaker name (default: player)
    /// - `CLI_BOT_NAME` - Bot display name (default: HuntBot)
    /// - `CLI_MESSAGE_CAPACITY` - Transcript capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(user) = read_env::<String>("CLI_USER").filter(|u| !u.trim().is_empty()) {
            config.user = user.trim().to_owned();
        }
        if let Some(name) = read_env::<String>("CLI_BOT_NAME").filter(|n| !n.trim().is_empty()) {
            config.bot_name = name.trim().to_owned();
        }
        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(4);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
