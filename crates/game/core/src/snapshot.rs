//! Immutable views of a session handed across the render boundary.
use crate::state::{OwnerId, SessionStatus};

/// Point-in-time copy of everything a status panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub owner: OwnerId,
    pub name: String,
    pub level: u32,
    pub experience: u32,
    pub currency: u64,
    pub health: u32,
    pub max_health: u32,
    pub monster: Option<MonsterSnapshot>,
    pub kills: u64,
    pub status: SessionStatus,
}

/// Monster portion of a snapshot.
///
/// `kind` is the monster's label (`"Rat"`, `"Boar"`, `"Goblin"`) so sinks can
/// map it to an icon without depending on the enum.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSnapshot {
    pub kind: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
}
