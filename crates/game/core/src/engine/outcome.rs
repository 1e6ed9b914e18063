use crate::state::MonsterKind;

/// What a single tick did. Exactly one variant per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TickOutcome {
    /// A new monster spawned and the previous kill was rewarded.
    Encounter {
        kind: MonsterKind,
        level: u32,
        leveled_up: bool,
    },
    /// The character attacked and, if the monster survived, took retaliation.
    Exchange {
        damage_dealt: u32,
        damage_taken: u32,
        monster_defeated: bool,
    },
    /// Campaign level reached with no living monster. Session is `Won`.
    Victory,
    /// Retaliation emptied the character's health. Session is `Dead`.
    Defeat { damage_taken: u32 },
}

impl TickOutcome {
    /// True when the tick moved the session into a terminal state.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Victory | Self::Defeat { .. })
    }
}
