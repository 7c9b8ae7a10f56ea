use crate::catalog::{CharacterClass, Species};
use crate::stats::{STAT_CEILING, STAT_COUNT, STAT_FLOOR, Stat};

/// Combined floor and ceiling for one stat of a species/class pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBounds {
    pub floor: u8,
    pub ceiling: u8,
}

impl StatBounds {
    /// The universal `1..=9` range.
    pub const UNIVERSAL: Self = Self {
        floor: STAT_FLOOR,
        ceiling: STAT_CEILING,
    };

    pub const fn new(floor: u8, ceiling: u8) -> Self {
        Self { floor, ceiling }
    }

    pub const fn contains(&self, value: u8) -> bool {
        self.floor <= value && value <= self.ceiling
    }

    /// No value satisfies both ends.
    pub const fn is_conflicting(&self) -> bool {
        self.floor > self.ceiling
    }
}

impl Default for StatBounds {
    fn default() -> Self {
        Self::UNIVERSAL
    }
}

/// Per-stat bounds for a species/class pair, schema order.
pub fn effective_bounds(species: &Species, class: &CharacterClass) -> [StatBounds; STAT_COUNT] {
    let species_caps = species.resolve_caps();
    Stat::ALL.map(|stat| StatBounds {
        floor: species.floor(stat).max(class.floor(stat)),
        ceiling: species_caps[stat].min(class.cap(stat)),
    })
}

/// First stat in schema order whose combined floor exceeds its ceiling.
pub fn first_conflict(species: &Species, class: &CharacterClass) -> Option<(Stat, StatBounds)> {
    Stat::ALL
        .into_iter()
        .zip(effective_bounds(species, class))
        .find(|(_, bounds)| bounds.is_conflicting())
}
