//! Authoritative session state.
//!
//! A [`SessionState`] aggregates one character, the current monster, the kill
//! counter and the lifecycle status. Runtime layers clone or snapshot it but
//! mutate it exclusively through [`crate::engine::SessionEngine`] and the
//! transition methods below.
mod character;
mod monster;

pub use character::{Character, OwnerId};
pub use monster::{Monster, MonsterKind, spawn_monster};

use strum::{AsRefStr, Display};

use crate::config::GameConfig;
use crate::error::{InvariantViolation, TransitionError};
use crate::snapshot::{MonsterSnapshot, SessionSnapshot};

/// Lifecycle of a session. `Won`, `Dead` and `Stopped` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionStatus {
    #[default]
    Idle,
    Running,
    Won,
    Dead,
    Stopped,
}

impl SessionStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Dead | Self::Stopped)
    }
}

/// Canonical state of one user's hunt.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub character: Character,
    pub monster: Option<Monster>,
    /// Monotonically non-decreasing.
    pub kills: u64,
    status: SessionStatus,
    /// RNG seed fixed at creation; combined with `nonce` for every roll.
    pub seed: u64,
    /// Number of ticks applied so far.
    pub nonce: u64,
}

impl SessionState {
    /// Creates an idle session for `owner`.
    pub fn new(owner: OwnerId, name: impl Into<String>, config: &GameConfig, seed: u64) -> Self {
        Self {
            character: Character::new(owner, name, config),
            monster: None,
            kills: 0,
            status: SessionStatus::Idle,
            seed,
            nonce: 0,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Identity permitted to drive this session.
    pub fn authorization_key(&self) -> OwnerId {
        self.character.owner
    }

    /// `Idle -> Running`. Any other source state is rejected.
    pub fn start(&mut self) -> Result<(), TransitionError> {
        match self.status {
            SessionStatus::Idle => {
                self.status = SessionStatus::Running;
                Ok(())
            }
            SessionStatus::Running => Err(TransitionError::AlreadyStarted),
            status => Err(TransitionError::AlreadyTerminated { status }),
        }
    }

    /// Any non-terminal state `-> Stopped`.
    pub fn stop(&mut self) -> Result<(), TransitionError> {
        self.finish(SessionStatus::Stopped)
    }

    /// Moves into a terminal state. Terminal states never change again.
    pub(crate) fn finish(&mut self, terminal: SessionStatus) -> Result<(), TransitionError> {
        debug_assert!(terminal.is_terminal());
        if self.status.is_terminal() {
            return Err(TransitionError::AlreadyTerminated {
                status: self.status,
            });
        }
        self.status = terminal;
        Ok(())
    }

    /// Checks the health bounds of both combatants.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let character = &self.character;
        if character.health > character.max_health {
            return Err(InvariantViolation::CharacterHealth {
                health: character.health,
                max_health: character.max_health,
            });
        }
        if character.level == 0 {
            return Err(InvariantViolation::ZeroLevel);
        }
        if let Some(monster) = &self.monster
            && monster.health > monster.max_health
        {
            return Err(InvariantViolation::MonsterHealth {
                health: monster.health,
                max_health: monster.max_health,
            });
        }
        Ok(())
    }

    /// Immutable view handed to render sinks.
    pub fn snapshot(&self) -> SessionSnapshot {
        let character = &self.character;
        SessionSnapshot {
            owner: character.owner,
            name: character.name.clone(),
            level: character.level,
            experience: character.experience,
            currency: character.currency,
            health: character.health,
            max_health: character.max_health,
            monster: self.monster.as_ref().map(|monster| MonsterSnapshot {
                kind: monster.kind.as_ref().to_owned(),
                level: monster.level,
                health: monster.health,
                max_health: monster.max_health,
            }),
            kills: self.kills,
            status: self.status,
        }
    }
}
