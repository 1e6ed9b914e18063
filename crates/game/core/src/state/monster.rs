use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::config::GameConfig;
use crate::rng::RngOracle;

/// Monster species. Every variant is spawnable with equal probability.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, VariantArray,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterKind {
    Rat,
    Boar,
    Goblin,
}

/// The current opponent. Replaced, never revived, when a new one spawns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub kind: MonsterKind,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
}

impl Monster {
    /// Creates a monster at full health (`level * monster_health_per_level`).
    pub fn new(kind: MonsterKind, level: u32, config: &GameConfig) -> Self {
        let max_health = level.saturating_mul(config.monster_health_per_level);
        Self {
            kind,
            level,
            health: max_health,
            max_health,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Spawns a monster matching the character's level.
///
/// The kind is drawn uniformly from [`MonsterKind::VARIANTS`] using `rng`
/// and `seed`; the same pair always yields the same monster.
pub fn spawn_monster(
    character_level: u32,
    config: &GameConfig,
    rng: &(impl RngOracle + ?Sized),
    seed: u64,
) -> Monster {
    let kinds = MonsterKind::VARIANTS;
    let kind = kinds[rng.pick_index(seed, kinds.len())];
    Monster::new(kind, character_level, config)
}
