//! Combat exchange rules.
//!
//! Every function here is pure: it takes the combatants by reference and
//! returns the updated copy. Health is clamped to zero before any check reads
//! it, so victory and defeat detection never see negative values.
mod damage;

pub use damage::{apply_damage, player_attack_damage, retaliation_damage};

use crate::config::GameConfig;
use crate::error::TickError;
use crate::state::{Character, Monster};

/// The character strikes the monster.
pub fn apply_player_attack(
    character: &Character,
    monster: &Monster,
    config: &GameConfig,
) -> Result<Monster, TickError> {
    let damage = player_attack_damage(character, config)?;
    Ok(Monster {
        health: apply_damage(monster.health, damage),
        ..monster.clone()
    })
}

/// The monster strikes back. A dead monster does not retaliate.
pub fn apply_monster_retaliation(
    character: &Character,
    monster: &Monster,
    config: &GameConfig,
) -> Result<Character, TickError> {
    if !monster.is_alive() {
        return Ok(character.clone());
    }
    let damage = retaliation_damage(monster, config)?;
    Ok(Character {
        health: apply_damage(character.health, damage),
        ..character.clone()
    })
}

/// True once the monster has no health left.
pub fn check_victory(monster: &Monster) -> bool {
    monster.health == 0
}

/// True once the character has no health left.
pub fn check_defeat(character: &Character) -> bool {
    character.health == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MonsterKind, OwnerId};

    fn character(level: u32, health: u32) -> Character {
        let config = GameConfig::default();
        Character {
            level,
            health,
            ..Character::new(OwnerId(1), "hunter", &config)
        }
    }

    #[test]
    fn attack_and_retaliation_at_level_two() {
        let config = GameConfig::default();
        let hunter = character(2, 250);
        let boar = Monster::new(MonsterKind::Boar, 2, &config);
        assert_eq!(boar.health, 40);

        let boar = apply_player_attack(&hunter, &boar, &config).unwrap();
        assert_eq!(boar.health, 30);
        assert!(!check_victory(&boar));

        let hunter = apply_monster_retaliation(&hunter, &boar, &config).unwrap();
        assert_eq!(hunter.health, 246);
    }

    #[test]
    fn monster_health_clamps_at_zero() {
        let config = GameConfig::default();
        let hunter = character(3, 250);
        let rat = Monster {
            health: 4,
            ..Monster::new(MonsterKind::Rat, 1, &config)
        };

        let rat = apply_player_attack(&hunter, &rat, &config).unwrap();
        assert_eq!(rat.health, 0);
        assert!(check_victory(&rat));
    }

    #[test]
    fn dead_monster_does_not_retaliate() {
        let config = GameConfig::default();
        let hunter = character(1, 100);
        let goblin = Monster {
            health: 0,
            ..Monster::new(MonsterKind::Goblin, 5, &config)
        };

        let after = apply_monster_retaliation(&hunter, &goblin, &config).unwrap();
        assert_eq!(after.health, 100);
    }

    #[test]
    fn character_health_clamps_at_zero() {
        let config = GameConfig::default();
        let hunter = character(1, 5);
        let goblin = Monster::new(MonsterKind::Goblin, 10, &config);

        let goblin = apply_player_attack(&hunter, &goblin, &config).unwrap();
        assert!(goblin.is_alive());

        let hunter = apply_monster_retaliation(&hunter, &goblin, &config).unwrap();
        assert_eq!(hunter.health, 0);
        assert!(check_defeat(&hunter));
    }

    #[test]
    fn health_stays_in_bounds_across_many_exchanges() {
        let config = GameConfig::default();
        for level in 1..=6 {
            let mut hunter = character(level, config.max_health);
            let mut monster = Monster::new(MonsterKind::Rat, level * 3, &config);
            while monster.is_alive() && hunter.is_alive() {
                monster = apply_player_attack(&hunter, &monster, &config).unwrap();
                hunter = apply_monster_retaliation(&hunter, &monster, &config).unwrap();
                assert!(hunter.health <= hunter.max_health);
                assert!(monster.health <= monster.max_health);
            }
        }
    }

    #[test]
    fn oversized_level_reports_overflow() {
        let config = GameConfig::default();
        let hunter = character(u32::MAX, 250);
        let rat = Monster::new(MonsterKind::Rat, 1, &config);

        assert!(matches!(
            apply_player_attack(&hunter, &rat, &config),
            Err(TickError::Overflow { .. })
        ));
    }
}
