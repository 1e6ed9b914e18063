//! Damage calculation and application.

use crate::config::GameConfig;
use crate::error::TickError;
use crate::state::{Character, Monster};

/// Damage dealt by the character's attack.
///
/// # Formula
///
/// ```text
/// damage = player_damage_per_level * character.level   (default 5 * level)
/// ```
pub fn player_attack_damage(character: &Character, config: &GameConfig) -> Result<u32, TickError> {
    config
        .player_damage_per_level
        .checked_mul(character.level)
        .ok_or(TickError::Overflow {
            quantity: "player attack damage",
        })
}

/// Damage dealt by a monster's retaliation.
///
/// # Formula
///
/// ```text
/// damage = monster_damage_per_level * monster.level   (default 2 * level)
/// ```
pub fn retaliation_damage(monster: &Monster, config: &GameConfig) -> Result<u32, TickError> {
    config
        .monster_damage_per_level
        .checked_mul(monster.level)
        .ok_or(TickError::Overflow {
            quantity: "monster retaliation damage",
        })
}

/// Apply damage to current HP.
///
/// Returns the new HP value, clamped to 0.
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}
