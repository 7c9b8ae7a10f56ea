//! Species definitions.
//!
//! A species sets a character's starting stats, narrows the universal stat
//! range with optional floors and caps, and fixes the resource pools.

use crate::stats::{DEFAULT_STAT_VALUE, STAT_CEILING, STAT_FLOOR, Stat, StatTable, StatVector};

use super::error::CatalogError;
use super::registry::{CatalogEntry, EntryKind, Registry};

/// All species in definition order.
pub type SpeciesCatalog = Registry<Species>;

/// Health, stamina and mana granted by a species.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourcePools {
    pub health: u32,
    pub stamina: u32,
    pub mana: u32,
}

impl ResourcePools {
    pub const fn new(health: u32, stamina: u32, mana: u32) -> Self {
        Self {
            health,
            stamina,
            mana,
        }
    }
}

/// A playable species.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Species {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
    /// Floors. Stats without an entry have no species floor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_minimums: StatTable,
    /// Caps. Stats without an entry are capped at [`STAT_CEILING`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub stat_maximums: StatTable,
    /// Starting values. Stats without an entry start at [`DEFAULT_STAT_VALUE`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_stats: StatTable,
    pub health: u32,
    pub stamina: u32,
    pub mana: u32,
}

impl Species {
    /// Creates a species with no stat constraints and the given pools.
    pub fn new(id: impl Into<String>, name: impl Into<String>, pools: ResourcePools) -> Self {
        let id = id.into();
        Self {
            image: format!("species/{id}.png"),
            id,
            name: name.into(),
            description: String::new(),
            icon: String::new(),
            stat_minimums: StatTable::new(),
            stat_maximums: StatTable::new(),
            base_stats: StatTable::new(),
            health: pools.health,
            stamina: pools.stamina,
            mana: pools.mana,
        }
    }

    #[must_use]
    pub fn with_minimums(mut self, minimums: impl Into<StatTable>) -> Self {
        self.stat_minimums = minimums.into();
        self
    }

    #[must_use]
    pub fn with_maximums(mut self, maximums: impl Into<StatTable>) -> Self {
        self.stat_maximums = maximums.into();
        self
    }

    #[must_use]
    pub fn with_base_stats(mut self, base_stats: impl Into<StatTable>) -> Self {
        self.base_stats = base_stats.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub const fn pools(&self) -> ResourcePools {
        ResourcePools::new(self.health, self.stamina, self.mana)
    }

    /// Starting stat vector: the default value everywhere, replaced by the
    /// species base value where one is declared.
    pub fn resolve_base_stats(&self) -> StatVector {
        self.base_stats.resolve(DEFAULT_STAT_VALUE)
    }

    /// Full cap vector: declared caps, [`STAT_CEILING`] elsewhere.
    pub fn resolve_caps(&self) -> StatVector {
        self.stat_maximums.resolve(STAT_CEILING)
    }

    /// Species floor for `stat`, [`STAT_FLOOR`] when none is declared.
    pub fn floor(&self, stat: Stat) -> u8 {
        self.stat_minimums.get(stat).unwrap_or(STAT_FLOOR)
    }

    /// Points each base stat sits above the default, for stats that start higher.
    pub fn stat_bonuses(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        self.base_stats
            .iter()
            .filter(|&(_, value)| value > DEFAULT_STAT_VALUE)
            .map(|(stat, value)| (stat, value - DEFAULT_STAT_VALUE))
    }

    /// Checks that no declared floor exceeds the declared cap for the same stat.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (stat, minimum) in self.stat_minimums.iter() {
            if let Some(maximum) = self.stat_maximums.get(stat) {
                if minimum > maximum {
                    return Err(CatalogError::SpeciesBoundsInverted {
                        species: self.id.clone(),
                        stat,
                        minimum,
                        maximum,
                    });
                }
            }
        }
        Ok(())
    }
}

impl CatalogEntry for Species {
    const KIND: EntryKind = EntryKind::Species;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elf() -> Species {
        Species::new("elf", "Elf", ResourcePools::new(80, 90, 120))
            .with_minimums([(Stat::Agility, 3), (Stat::Awareness, 3)])
            .with_maximums([(Stat::Endurance, 7), (Stat::Athletics, 7)])
            .with_base_stats([
                (Stat::Agility, 3),
                (Stat::Awareness, 3),
                (Stat::Marksmanship, 3),
            ])
    }

    #[test]
    fn base_stats_default_where_absent() {
        let stats = elf().resolve_base_stats();
        assert_eq!(stats[Stat::Agility], 3);
        assert_eq!(stats[Stat::Marksmanship], 3);
        for stat in Stat::ALL {
            if !elf().base_stats.contains(stat) {
                assert_eq!(stats[stat], DEFAULT_STAT_VALUE, "{stat}");
            }
        }
    }

    #[test]
    fn caps_default_to_ceiling() {
        let caps = elf().resolve_caps();
        assert_eq!(caps[Stat::Endurance], 7);
        assert_eq!(caps[Stat::Athletics], 7);
        assert_eq!(caps[Stat::Fighting], STAT_CEILING);
        assert_eq!(caps, elf().resolve_caps());
    }

    #[test]
    fn floor_defaults_to_one() {
        assert_eq!(elf().floor(Stat::Agility), 3);
        assert_eq!(elf().floor(Stat::Endurance), STAT_FLOOR);
    }

    #[test]
    fn bonuses_report_points_above_default() {
        let bonuses: Vec<_> = elf().stat_bonuses().collect();
        assert_eq!(
            bonuses,
            vec![
                (Stat::Agility, 1),
                (Stat::Awareness, 1),
                (Stat::Marksmanship, 1)
            ]
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let broken = elf().with_maximums([(Stat::Agility, 2)]);
        assert_eq!(
            broken.validate(),
            Err(CatalogError::SpeciesBoundsInverted {
                species: "elf".into(),
                stat: Stat::Agility,
                minimum: 3,
                maximum: 2,
            })
        );
        assert!(elf().validate().is_ok());
    }
}
