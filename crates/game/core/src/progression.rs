//! Kill rewards, leveling and the campaign win condition.

use crate::config::GameConfig;
use crate::error::TickError;
use crate::state::{Character, Monster};

/// Grants the per-kill currency and experience.
///
/// Currency scales with the character's level at the moment of the award.
pub fn award_kill(character: &Character, config: &GameConfig) -> Result<Character, TickError> {
    let bounty = config
        .kill_currency_per_level
        .checked_mul(u64::from(character.level))
        .ok_or(TickError::Overflow {
            quantity: "kill currency",
        })?;
    let currency = character
        .currency
        .checked_add(bounty)
        .ok_or(TickError::Overflow { quantity: "currency" })?;
    let experience = character
        .experience
        .checked_add(config.kill_experience)
        .ok_or(TickError::Overflow {
            quantity: "experience",
        })?;

    Ok(Character {
        currency,
        experience,
        ..character.clone()
    })
}

/// Levels the character up once experience reaches the threshold.
///
/// A level-up resets experience to zero and restores health to the (fixed)
/// maximum; `max_health` itself does not grow.
pub fn check_level_up(character: &Character, config: &GameConfig) -> Result<Character, TickError> {
    if character.experience < config.level_up_experience {
        return Ok(character.clone());
    }
    let level = character
        .level
        .checked_add(1)
        .ok_or(TickError::Overflow { quantity: "level" })?;

    Ok(Character {
        level,
        experience: 0,
        health: character.max_health,
        ..character.clone()
    })
}

/// The campaign is cleared at `campaign_level` once no living monster remains.
pub fn check_campaign_complete(
    character: &Character,
    monster: Option<&Monster>,
    config: &GameConfig,
) -> bool {
    character.level >= config.campaign_level && !monster.is_some_and(Monster::is_alive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{MonsterKind, OwnerId};

    fn hunter() -> Character {
        Character::new(OwnerId(3), "hunter", &GameConfig::default())
    }

    #[test]
    fn kill_awards_currency_by_level_and_flat_experience() {
        let config = GameConfig::default();
        let character = Character {
            level: 3,
            currency: 7,
            experience: 20,
            ..hunter()
        };

        let character = award_kill(&character, &config).unwrap();
        assert_eq!(character.currency, 22);
        assert_eq!(character.experience, 30);
    }

    #[test]
    fn level_up_resets_experience_and_heals() {
        let config = GameConfig::default();
        let character = Character {
            experience: 95,
            health: 12,
            ..hunter()
        };

        let character = award_kill(&character, &config).unwrap();
        assert_eq!(character.experience, 105);

        let character = check_level_up(&character, &config).unwrap();
        assert_eq!(character.level, 2);
        assert_eq!(character.experience, 0);
        assert_eq!(character.health, character.max_health);
        assert_eq!(character.max_health, 250);
    }

    #[test]
    fn below_threshold_is_unchanged() {
        let config = GameConfig::default();
        let character = Character {
            experience: 99,
            ..hunter()
        };
        assert_eq!(check_level_up(&character, &config).unwrap(), character);
    }

    #[test]
    fn campaign_requires_level_and_no_living_monster() {
        let config = GameConfig::default();
        let veteran = Character {
            level: 4,
            ..hunter()
        };
        let alive = Monster::new(MonsterKind::Rat, 4, &config);
        let dead = Monster {
            health: 0,
            ..alive.clone()
        };

        assert!(check_campaign_complete(&veteran, None, &config));
        assert!(check_campaign_complete(&veteran, Some(&dead), &config));
        assert!(!check_campaign_complete(&veteran, Some(&alive), &config));
        assert!(!check_campaign_complete(&hunter(), None, &config));
    }
}
