//! Class definitions.
//!
//! Every class caps all 20 stats, may demand minimums, and carries the
//! advancement metadata the [`AdvancementGraph`](crate::advancement::AdvancementGraph)
//! is built from.

use std::collections::BTreeMap;

use crate::stats::{CapsPolicy, STAT_CEILING, STAT_FLOOR, Stat, StatTable, StatVector, parse_caps};

use super::error::CatalogError;
use super::registry::{CatalogEntry, EntryKind, Registry};

/// All classes in catalog order.
pub type ClassCatalog = Registry<CharacterClass>;

/// Formats a class id for display: first character uppercased, underscores
/// replaced with spaces. Hyphens are kept (`"half-orc"` → `"Half-orc"`).
pub fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect::<String>()
            .replace('_', " "),
        None => String::new(),
    }
}

/// A character class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterClass {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    /// Thematic grouping, informational only.
    pub vocation: String,
    /// Cap for every stat.
    pub stat_maximums: StatVector,
    /// Requirements. Empty for most beginner classes.
    pub stat_minimums: StatTable,
    /// `None` marks a beginner class.
    pub prerequisite: Option<String>,
    /// Classes reachable from this one at no XP cost.
    pub free_advances: Vec<String>,
    /// XP needed to adopt this class through its prerequisite.
    pub xp_cost: u32,
}

impl CharacterClass {
    /// Creates a beginner class with the given caps and no requirements.
    pub fn new(id: impl Into<String>, stat_maximums: StatVector) -> Self {
        let id = id.into();
        Self {
            name: display_name(&id),
            image: format!("classes/Class_Overview_{id}.png"),
            id,
            description: String::new(),
            icon: String::new(),
            vocation: String::new(),
            stat_maximums,
            stat_minimums: StatTable::new(),
            prerequisite: None,
            free_advances: Vec::new(),
            xp_cost: 0,
        }
    }

    /// Creates a class from a positional cap string, parsed once here.
    pub fn from_caps(
        id: impl Into<String>,
        caps: &str,
        policy: CapsPolicy,
    ) -> Result<Self, CatalogError> {
        let id = id.into();
        match parse_caps(caps, policy) {
            Ok(stat_maximums) => Ok(Self::new(id, stat_maximums)),
            Err(source) => Err(CatalogError::MalformedCaps { class: id, source }),
        }
    }

    #[must_use]
    pub fn with_minimums(mut self, minimums: impl Into<StatTable>) -> Self {
        self.stat_minimums = minimums.into();
        self
    }

    /// Makes this class reachable from `prerequisite` for `xp_cost`.
    #[must_use]
    pub fn with_prerequisite(mut self, prerequisite: impl Into<String>, xp_cost: u32) -> Self {
        self.prerequisite = Some(prerequisite.into());
        self.xp_cost = xp_cost;
        self
    }

    #[must_use]
    pub fn with_free_advances<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.free_advances = targets.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_vocation(mut self, vocation: impl Into<String>) -> Self {
        self.vocation = vocation.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>, icon: impl Into<String>) -> Self {
        self.description = description.into();
        self.icon = icon.into();
        self
    }

    pub fn is_beginner(&self) -> bool {
        self.prerequisite.is_none()
    }

    pub fn cap(&self, stat: Stat) -> u8 {
        self.stat_maximums[stat]
    }

    /// Class floor for `stat`, [`STAT_FLOOR`] when none is declared.
    pub fn floor(&self, stat: Stat) -> u8 {
        self.stat_minimums.get(stat).unwrap_or(STAT_FLOOR)
    }

    pub fn lists_free_advance(&self, target: &str) -> bool {
        self.free_advances.iter().any(|t| t == target)
    }

    /// Checks caps are in range and no minimum exceeds its cap.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (stat, cap) in self.stat_maximums.iter() {
            if !(STAT_FLOOR..=STAT_CEILING).contains(&cap) {
                return Err(CatalogError::CapOutOfRange {
                    class: self.id.clone(),
                    stat,
                    cap,
                });
            }
        }
        for (stat, minimum) in self.stat_minimums.iter() {
            let maximum = self.cap(stat);
            if minimum > maximum {
                return Err(CatalogError::ClassBoundsInverted {
                    class: self.id.clone(),
                    stat,
                    minimum,
                    maximum,
                });
            }
        }
        Ok(())
    }
}

impl CatalogEntry for CharacterClass {
    const KIND: EntryKind = EntryKind::Class;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Registry<CharacterClass> {
    /// Vocation tag → class ids, each list in catalog order.
    pub fn vocations(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for class in self.iter() {
            groups
                .entry(class.vocation.as_str())
                .or_default()
                .push(class.id.as_str());
        }
        groups
    }

    /// Classes without a prerequisite, in catalog order.
    pub fn beginners(&self) -> impl Iterator<Item = &CharacterClass> {
        self.iter().filter(|class| class.is_beginner())
    }
}
