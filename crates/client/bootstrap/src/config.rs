//! Bot configuration structures and loaders.
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use runtime::RuntimeConfig;
use thiserror::Error;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;
pub const DEFAULT_EVICTION_GRACE_SECS: u64 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {key}")]
    Missing { key: &'static str },

    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Platform credential. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

/// Configuration required to bootstrap the bot runtime and its chat front end.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Credential for a hosted chat platform. The terminal emulator runs
    /// without one; platform adapters fetch it through [`Self::require_token`].
    pub token: Option<BotToken>,
    /// The only channel whose messages are processed.
    pub channel_id: u64,
    pub command_prefix: String,
    pub tick_interval: Duration,
    pub eviction_grace: Duration,
    pub seed: Option<u64>,
    /// Log directory name for this run.
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl BotConfig {
    pub fn new(channel_id: u64) -> Self {
        Self {
            token: None,
            channel_id,
            command_prefix: DEFAULT_COMMAND_PREFIX.to_owned(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            eviction_grace: Duration::from_secs(DEFAULT_EVICTION_GRACE_SECS),
            seed: None,
            session_id: None,
            log_dir: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HUNT_BOT_TOKEN` - Platform credential (only needed by platform adapters)
    /// - `HUNT_CHANNEL_ID` - Channel to listen on (required)
    /// - `HUNT_COMMAND_PREFIX` - Command prefix (default: `!`)
    /// - `HUNT_TICK_INTERVAL_MS` - Tick interval (default: 2000)
    /// - `HUNT_EVICTION_GRACE_SECS` - Grace before finished sessions are evicted (default: 60)
    /// - `HUNT_SEED` - Fixed RNG seed (default: random per session)
    /// - `HUNT_SESSION_ID` - Log directory name (default: auto-generated)
    /// - `HUNT_LOG_DIR` - Log root (default: platform-specific)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_id = required(&lookup, "HUNT_CHANNEL_ID")?;

        let mut config = Self::new(channel_id);
        config.token = lookup("HUNT_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(BotToken::new);

        if let Some(prefix) = lookup("HUNT_COMMAND_PREFIX") {
            if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid {
                    key: "HUNT_COMMAND_PREFIX",
                    value: prefix,
                    reason: "must be non-empty without whitespace",
                });
            }
            config.command_prefix = prefix;
        }

        if let Some(ms) = optional::<u64>(&lookup, "HUNT_TICK_INTERVAL_MS")? {
            if ms == 0 {
                return Err(ConfigError::Invalid {
                    key: "HUNT_TICK_INTERVAL_MS",
                    value: ms.to_string(),
                    reason: "must be greater than zero",
                });
            }
            config.tick_interval = Duration::from_millis(ms);
        }

        if let Some(secs) = optional::<u64>(&lookup, "HUNT_EVICTION_GRACE_SECS")? {
            config.eviction_grace = Duration::from_secs(secs);
        }

        config.seed = optional(&lookup, "HUNT_SEED")?;
        config.session_id = lookup("HUNT_SESSION_ID").filter(|id| !id.is_empty());
        config.log_dir = lookup("HUNT_LOG_DIR").map(PathBuf::from);

        Ok(config)
    }

    /// The platform credential, for adapters that log in to a hosted service.
    pub fn require_token(&self) -> Result<&BotToken, ConfigError> {
        self.token.as_ref().ok_or(ConfigError::Missing {
            key: "HUNT_BOT_TOKEN",
        })
    }

    /// Runtime tunables derived from this configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            tick_interval: self.tick_interval,
            eviction_grace: self.eviction_grace,
            seed: self.seed,
            ..RuntimeConfig::default()
        }
    }
}

fn required<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<T, ConfigError> {
    optional(lookup, key)?.ok_or(ConfigError::Missing { key })
}

fn optional<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid {
            key,
            value,
            reason: "not a valid number",
        })
}
