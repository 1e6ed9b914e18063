use std::fmt;

use crate::config::GameConfig;

/// Opaque identity of a chat user. Doubles as the session authorization key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnerId(pub u64);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@{}>", self.0)
    }
}

/// The user's hunter. Owned exclusively by one session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub owner: OwnerId,
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub currency: u64,
    pub health: u32,
    /// Fixed at session creation; level-ups restore health but never raise it.
    pub max_health: u32,
}

impl Character {
    /// Creates a level-1 character at full health.
    pub fn new(owner: OwnerId, name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            owner,
            name: name.into(),
            level: 1,
            experience: 0,
            currency: 0,
            health: config.max_health,
            max_health: config.max_health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}
