//! Tick reducer for [`SessionState`].
//!
//! [`SessionEngine::tick`] is the only place combat and progression rules are
//! applied to a live session. A tick is evaluated on a working copy and
//! committed only if every rule succeeded and the state invariants still hold,
//! so a faulting tick never leaves a half-applied state behind.

mod outcome;

pub use outcome::TickOutcome;

use crate::combat::{
    apply_monster_retaliation, apply_player_attack, check_defeat, check_victory,
};
use crate::config::GameConfig;
use crate::error::TickError;
use crate::progression::{award_kill, check_campaign_complete, check_level_up};
use crate::rng::{RngOracle, compute_seed};
use crate::state::{Monster, SessionState, SessionStatus, spawn_monster};

/// RNG context discriminator for monster spawns.
const SPAWN_ROLL: u32 = 0;

/// Engine that advances a session by one tick.
pub struct SessionEngine<'a> {
    state: &'a mut SessionState,
    config: &'a GameConfig,
}

impl<'a> SessionEngine<'a> {
    pub fn new(state: &'a mut SessionState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Evaluates one tick.
    ///
    /// Performs exactly one of:
    /// 1. no monster or a defeated one: finish the campaign, or spawn the next
    ///    monster and reward the kill;
    /// 2. a live monster: player attack, retaliation if it survived, defeat
    ///    check.
    ///
    /// On error the session state is left untouched.
    pub fn tick(&mut self, rng: &(impl RngOracle + ?Sized)) -> Result<TickOutcome, TickError> {
        let status = self.state.status();
        if status != SessionStatus::Running {
            return Err(TickError::NotRunning { status });
        }

        let mut working = self.state.clone();
        let outcome = match working.monster.clone() {
            Some(monster) if !check_victory(&monster) => {
                Self::exchange(&mut working, monster, self.config)?
            }
            _ => Self::encounter(&mut working, self.config, rng)?,
        };

        working.nonce = working
            .nonce
            .checked_add(1)
            .ok_or(TickError::Overflow { quantity: "nonce" })?;
        working.validate()?;

        *self.state = working;
        Ok(outcome)
    }

    fn encounter(
        state: &mut SessionState,
        config: &GameConfig,
        rng: &(impl RngOracle + ?Sized),
    ) -> Result<TickOutcome, TickError> {
        if check_campaign_complete(&state.character, state.monster.as_ref(), config) {
            state.finish(SessionStatus::Won)?;
            return Ok(TickOutcome::Victory);
        }

        let seed = compute_seed(state.seed, state.nonce, SPAWN_ROLL);
        let monster = spawn_monster(state.character.level, config, rng, seed);
        let (kind, level) = (monster.kind, monster.level);
        state.monster = Some(monster);

        state.kills = state
            .kills
            .checked_add(1)
            .ok_or(TickError::Overflow { quantity: "kills" })?;

        let rewarded = award_kill(&state.character, config)?;
        let character = check_level_up(&rewarded, config)?;
        let leveled_up = character.level > rewarded.level;
        state.character = character;

        Ok(TickOutcome::Encounter {
            kind,
            level,
            leveled_up,
        })
    }

    fn exchange(
        state: &mut SessionState,
        monster: Monster,
        config: &GameConfig,
    ) -> Result<TickOutcome, TickError> {
        let struck = apply_player_attack(&state.character, &monster, config)?;
        let character = apply_monster_retaliation(&state.character, &struck, config)?;

        let damage_dealt = monster.health - struck.health;
        let damage_taken = state.character.health - character.health;
        let monster_defeated = check_victory(&struck);

        state.monster = Some(struck);
        state.character = character;

        if check_defeat(&state.character) {
            state.finish(SessionStatus::Dead)?;
            return Ok(TickOutcome::Defeat { damage_taken });
        }

        Ok(TickOutcome::Exchange {
            damage_dealt,
            damage_taken,
            monster_defeated,
        })
    }
}
