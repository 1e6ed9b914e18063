/// Game configuration constants and tunable parameters.
///
/// Every rule in [`crate::combat`] and [`crate::progression`] reads its numbers
/// from here so tests and alternative rule sets can tweak them without touching
/// the rule code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Character health pool. Fixed for the lifetime of a session.
    pub max_health: u32,
    /// Monster health granted per monster level.
    pub monster_health_per_level: u32,
    /// Player attack damage per character level.
    pub player_damage_per_level: u32,
    /// Monster retaliation damage per monster level.
    pub monster_damage_per_level: u32,
    /// Experience awarded for each kill.
    pub kill_experience: u32,
    /// Experience required to gain a level.
    pub level_up_experience: u32,
    /// Currency awarded per character level for each kill.
    pub kill_currency_per_level: u64,
    /// Reaching this level clears the campaign.
    pub campaign_level: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: u32 = 250;
    pub const DEFAULT_MONSTER_HEALTH_PER_LEVEL: u32 = 20;
    pub const DEFAULT_PLAYER_DAMAGE_PER_LEVEL: u32 = 5;
    pub const DEFAULT_MONSTER_DAMAGE_PER_LEVEL: u32 = 2;
    pub const DEFAULT_KILL_EXPERIENCE: u32 = 10;
    pub const DEFAULT_LEVEL_UP_EXPERIENCE: u32 = 100;
    pub const DEFAULT_KILL_CURRENCY_PER_LEVEL: u64 = 5;
    pub const DEFAULT_CAMPAIGN_LEVEL: u32 = 4;

    pub const fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            monster_health_per_level: Self::DEFAULT_MONSTER_HEALTH_PER_LEVEL,
            player_damage_per_level: Self::DEFAULT_PLAYER_DAMAGE_PER_LEVEL,
            monster_damage_per_level: Self::DEFAULT_MONSTER_DAMAGE_PER_LEVEL,
            kill_experience: Self::DEFAULT_KILL_EXPERIENCE,
            level_up_experience: Self::DEFAULT_LEVEL_UP_EXPERIENCE,
            kill_currency_per_level: Self::DEFAULT_KILL_CURRENCY_PER_LEVEL,
            campaign_level: Self::DEFAULT_CAMPAIGN_LEVEL,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
