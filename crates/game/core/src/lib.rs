//! Session model for the hunting minigame.
//!
//! `game-core` defines the canonical rules (spawning, combat exchange, kill
//! rewards, leveling, campaign completion) and the session state they act on.
//! Nothing here performs I/O or suspends: the runtime crate owns timing and
//! lifecycle, and every state change flows through [`engine::SessionEngine`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod state;

pub use combat::{
    apply_damage, apply_monster_retaliation, apply_player_attack, check_defeat, check_victory,
};
pub use config::GameConfig;
pub use engine::{SessionEngine, TickOutcome};
pub use error::{InvariantViolation, TickError, TransitionError};
pub use progression::{award_kill, check_campaign_complete, check_level_up};
pub use rng::{FixedRng, PcgRng, RngOracle, compute_seed};
pub use snapshot::{MonsterSnapshot, SessionSnapshot};
pub use state::{
    Character, Monster, MonsterKind, OwnerId, SessionState, SessionStatus, spawn_monster,
};
