//! Caller-owned character records and the class-change decisions computed
//! for them.

use crate::advancement::EdgeKind;
use crate::catalog::Species;
use crate::stats::StatVector;

/// One finished class tenure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CareerEntry {
    pub class_id: String,
    /// Every stat reached the class cap before leaving.
    pub maxed: bool,
    /// Points gained over the tenure. Never zero; empty tenures are dropped.
    pub stats_gained: u32,
}

/// A character build.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub species_id: String,
    pub gender_id: String,
    pub class_id: String,
    pub stats: StatVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_available: u32,
    /// Snapshot of `stats` taken when the current class was adopted.
    pub stats_at_class_start: StatVector,
    #[cfg_attr(feature = "serde", serde(default))]
    pub career_history: Vec<CareerEntry>,
}

impl Character {
    /// A fresh character at the species' starting stats.
    pub fn new(species: &Species, gender_id: impl Into<String>, class_id: impl Into<String>) -> Self {
        let stats = species.resolve_base_stats();
        Self {
            species_id: species.id.clone(),
            gender_id: gender_id.into(),
            class_id: class_id.into(),
            stats,
            xp_available: 0,
            stats_at_class_start: stats,
            career_history: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_stats(mut self, stats: StatVector) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_xp(mut self, xp_available: u32) -> Self {
        self.xp_available = xp_available;
        self
    }

    /// Points gained since the current class was adopted. Decreases do not
    /// offset increases.
    pub fn points_gained(&self) -> u32 {
        self.stats.points_above(&self.stats_at_class_start)
    }
}

/// An accepted class change, ready to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassChange {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    pub cost: u32,
    pub xp_remaining: u32,
    /// Entry for the class being left, `None` when nothing was gained in it.
    pub career_entry: Option<CareerEntry>,
}

impl ClassChange {
    pub const fn is_free(&self) -> bool {
        self.kind.is_free()
    }

    /// Returns `character` moved into the new class: XP spent, tenure
    /// recorded, and the stat snapshot retaken.
    pub fn apply_to(&self, mut character: Character) -> Character {
        character.xp_available = self.xp_remaining;
        if let Some(entry) = &self.career_entry {
            character.career_history.push(entry.clone());
        }
        character.class_id = self.to.clone();
        character.stats_at_class_start = character.stats;
        character
    }
}
