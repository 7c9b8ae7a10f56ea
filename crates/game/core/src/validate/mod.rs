//! Build validation.
//!
//! [`BuildValidator`] answers two questions against a frozen [`Catalog`]:
//! is this stat vector legal for a species/class pair, and may a character
//! move from one class to another with the XP it has. Every check is pure;
//! nothing here mutates the catalog or the character.

mod bounds;
mod character;
mod error;

pub use bounds::{StatBounds, effective_bounds, first_conflict};
pub use character::{CareerEntry, Character, ClassChange};
pub use error::ValidationError;

use crate::catalog::{Catalog, CharacterClass, Species};
use crate::stats::{STAT_COUNT, Stat, StatVector};

/// Validation queries over a catalog.
#[derive(Clone, Copy, Debug)]
pub struct BuildValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> BuildValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    fn pair(&self, species: &str, class: &str) -> Result<(&'a Species, &'a CharacterClass), ValidationError> {
        let species = self.catalog.species().get(species)?;
        let class = self.catalog.classes().get(class)?;
        Ok((species, class))
    }

    /// Per-stat floor and ceiling for a species/class pair.
    pub fn effective_bounds(
        &self,
        species: &str,
        class: &str,
    ) -> Result<[StatBounds; STAT_COUNT], ValidationError> {
        let (species, class) = self.pair(species, class)?;
        Ok(effective_bounds(species, class))
    }

    /// Checks every stat lies within the pair's bounds.
    ///
    /// An incompatible pair is reported as [`ValidationError::ConflictingBounds`]
    /// before any value is looked at. Otherwise the first out-of-range stat in
    /// schema order is reported.
    pub fn check_stat_bounds(
        &self,
        species: &str,
        class: &str,
        stats: &StatVector,
    ) -> Result<(), ValidationError> {
        let (species, class) = self.pair(species, class)?;
        let bounds = effective_bounds(species, class);

        if let Some(stat) = Stat::ALL
            .into_iter()
            .find(|stat| bounds[stat.index()].is_conflicting())
        {
            let conflict = bounds[stat.index()];
            return Err(ValidationError::ConflictingBounds {
                species: species.id.clone(),
                class: class.id.clone(),
                stat,
                floor: conflict.floor,
                ceiling: conflict.ceiling,
            });
        }

        for (stat, value) in stats.iter() {
            let StatBounds { floor, ceiling } = bounds[stat.index()];
            if !(floor..=ceiling).contains(&value) {
                return Err(ValidationError::OutOfBounds {
                    stat,
                    value,
                    floor,
                    ceiling,
                });
            }
        }
        Ok(())
    }

    /// XP to spend moving from `current` to `target`, zero for a free advance.
    pub fn check_transition(
        &self,
        current: &str,
        target: &str,
        available_xp: u32,
    ) -> Result<u32, ValidationError> {
        let required = self
            .catalog
            .advancement()
            .transition_cost(current, target)?;
        if required > available_xp {
            return Err(ValidationError::InsufficientXp {
                required,
                available: available_xp,
            });
        }
        Ok(required)
    }

    /// Checks every class minimum is met.
    pub fn check_class_requirements(
        &self,
        class: &str,
        stats: &StatVector,
    ) -> Result<(), ValidationError> {
        let class = self.catalog.classes().get(class)?;
        for stat in Stat::ALL {
            let Some(required) = class.stat_minimums.get(stat) else {
                continue;
            };
            let value = stats[stat];
            if value < required {
                return Err(ValidationError::RequirementNotMet {
                    stat,
                    value,
                    required,
                });
            }
        }
        Ok(())
    }

    /// True if every stat is at or above the class cap.
    pub fn is_class_maxed(&self, class: &str, stats: &StatVector) -> Result<bool, ValidationError> {
        let class = self.catalog.classes().get(class)?;
        Ok(stats.iter().all(|(stat, value)| value >= class.cap(stat)))
    }

    /// Resolves the character's ids and checks its stats.
    pub fn check_character(&self, character: &Character) -> Result<(), ValidationError> {
        self.catalog.genders().get(&character.gender_id)?;
        self.check_stat_bounds(&character.species_id, &character.class_id, &character.stats)
    }

    /// Decides whether `character` may move to `target`.
    ///
    /// Order of checks: an edge must exist, the target's minimums must be met,
    /// then the character must afford the cost.
    pub fn plan_class_change(
        &self,
        character: &Character,
        target: &str,
    ) -> Result<ClassChange, ValidationError> {
        let kind = self
            .catalog
            .advancement()
            .edge(&character.class_id, target)?
            .ok_or_else(|| ValidationError::Ineligible {
                from: character.class_id.clone(),
                to: target.to_string(),
            })?;

        self.check_class_requirements(target, &character.stats)?;
        let cost = self.check_transition(&character.class_id, target, character.xp_available)?;

        let stats_gained = character.points_gained();
        let career_entry = if stats_gained == 0 {
            None
        } else {
            Some(CareerEntry {
                class_id: character.class_id.clone(),
                maxed: self.is_class_maxed(&character.class_id, &character.stats)?,
                stats_gained,
            })
        };

        Ok(ClassChange {
            from: character.class_id.clone(),
            to: target.to_string(),
            kind,
            cost,
            xp_remaining: character.xp_available - cost,
            career_entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advancement::EdgeKind;
    use crate::catalog::{EntryKind, Gender, NotFound, ResourcePools};
    use crate::error::{ErrorSeverity, FeudalError};

    fn catalog() -> Catalog {
        let elf = Species::new("elf", "Elf", ResourcePools::new(80, 90, 120))
            .with_maximums([(Stat::Endurance, 7), (Stat::Athletics, 7)])
            .with_base_stats([(Stat::Agility, 3), (Stat::Awareness, 3)]);
        let troll = Species::new("troll", "Troll", ResourcePools::new(150, 120, 20))
            .with_minimums([(Stat::Fighting, 4), (Stat::Endurance, 4)]);

        let classes = vec![
            CharacterClass::new("peasant", StatVector::filled(4))
                .with_free_advances(["farmer", "soldier"]),
            CharacterClass::new("beggar", StatVector::filled(4)).with_free_advances(["thief"]),
            CharacterClass::new("farmer", StatVector::filled(5)).with_prerequisite("peasant", 0),
            CharacterClass::new("soldier", StatVector::filled(6))
                .with_prerequisite("peasant", 500)
                .with_minimums([(Stat::Fighting, 3)]),
            CharacterClass::new("warrior", StatVector::filled(7))
                .with_prerequisite("soldier", 1000)
                .with_minimums([(Stat::Fighting, 4), (Stat::Endurance, 4)]),
            CharacterClass::new("thief", StatVector::filled(6)).with_prerequisite("beggar", 500),
            CharacterClass::new("rogue", StatVector::filled(7)).with_prerequisite("thief", 1500),
            CharacterClass::new("assassin", StatVector::filled(8))
                .with_prerequisite("rogue", 2500),
            CharacterClass::new(
                "mage",
                StatVector::filled(8)
                    .with(Stat::Endurance, 5)
                    .with(Stat::Fighting, 3),
            ),
        ];

        Catalog::builder()
            .species([elf, troll])
            .classes(classes)
            .genders([Gender::new("female", "Female")])
            .build()
            .unwrap()
    }

    #[test]
    fn elf_mage_endurance_is_capped_by_class() {
        let catalog = catalog();
        let validator = catalog.validator();
        let stats = StatVector::default().with(Stat::Endurance, 6);
        assert_eq!(
            validator.check_stat_bounds("elf", "mage", &stats),
            Err(ValidationError::OutOfBounds {
                stat: Stat::Endurance,
                value: 6,
                floor: 1,
                ceiling: 5,
            })
        );
        let stats = stats.with(Stat::Endurance, 5);
        assert_eq!(validator.check_stat_bounds("elf", "mage", &stats), Ok(()));
    }

    #[test]
    fn first_violation_in_schema_order_wins() {
        let catalog = catalog();
        let stats = StatVector::default()
            .with(Stat::Wisdom, 9)
            .with(Stat::Agility, 0);
        assert!(matches!(
            catalog.validator().check_stat_bounds("elf", "mage", &stats),
            Err(ValidationError::OutOfBounds {
                stat: Stat::Agility,
                ..
            })
        ));
    }

    #[test]
    fn incompatible_pair_reports_conflict_before_values() {
        let catalog = catalog();
        let err = catalog
            .validator()
            .check_stat_bounds("troll", "mage", &StatVector::filled(0))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::ConflictingBounds {
                species: "troll".into(),
                class: "mage".into(),
                stat: Stat::Fighting,
                floor: 4,
                ceiling: 3,
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Integrity);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let catalog = catalog();
        let err = catalog
            .validator()
            .check_stat_bounds("gnome", "mage", &StatVector::default())
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotFound(NotFound::new(EntryKind::Species, "gnome"))
        );
        assert_eq!(err.error_code(), "CATALOG_SPECIES_NOT_FOUND");
    }

    #[test]
    fn thief_cannot_jump_to_assassin() {
        let catalog = catalog();
        assert_eq!(
            catalog.validator().check_transition("thief", "assassin", 9999),
            Err(ValidationError::Ineligible {
                from: "thief".into(),
                to: "assassin".into(),
            })
        );
    }

    #[test]
    fn peasant_to_farmer_is_free_without_xp() {
        let catalog = catalog();
        assert_eq!(catalog.validator().check_transition("peasant", "farmer", 0), Ok(0));
    }

    #[test]
    fn soldier_to_warrior_needs_xp() {
        let catalog = catalog();
        let err = catalog
            .validator()
            .check_transition("soldier", "warrior", 500)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InsufficientXp {
                required: 1000,
                available: 500,
            }
        );
        assert_eq!(err.error_code(), "VALIDATION_INSUFFICIENT_XP");
        assert_eq!(
            catalog.validator().check_transition("soldier", "warrior", 1000),
            Ok(1000)
        );
    }

    #[test]
    fn class_requirements_report_first_shortfall() {
        let catalog = catalog();
        let validator = catalog.validator();
        let stats = StatVector::default();
        assert_eq!(
            validator.check_class_requirements("warrior", &stats),
            Err(ValidationError::RequirementNotMet {
                stat: Stat::Endurance,
                value: 2,
                required: 4,
            })
        );
        let stats = stats.with(Stat::Endurance, 4).with(Stat::Fighting, 4);
        assert_eq!(validator.check_class_requirements("warrior", &stats), Ok(()));
    }

    #[test]
    fn maxed_means_every_stat_at_cap() {
        let catalog = catalog();
        let validator = catalog.validator();
        assert!(validator.is_class_maxed("peasant", &StatVector::filled(4)).unwrap());
        let almost = StatVector::filled(4).with(Stat::Will, 3);
        assert!(!validator.is_class_maxed("peasant", &almost).unwrap());
    }

    fn elf_peasant(catalog: &Catalog) -> Character {
        let elf = catalog.species().get("elf").unwrap();
        Character::new(elf, "female", "peasant")
    }

    #[test]
    fn check_character_resolves_every_id() {
        let catalog = catalog();
        let validator = catalog.validator();
        let character = elf_peasant(&catalog);
        assert_eq!(validator.check_character(&character), Ok(()));

        let mut unknown = character.clone();
        unknown.gender_id = "other".into();
        assert_eq!(
            validator.check_character(&unknown),
            Err(ValidationError::NotFound(NotFound::new(EntryKind::Gender, "other")))
        );
    }

    #[test]
    fn empty_tenure_leaves_no_career_entry() {
        let catalog = catalog();
        let character = elf_peasant(&catalog);
        let change = catalog
            .validator()
            .plan_class_change(&character, "farmer")
            .unwrap();
        assert_eq!(change.kind, EdgeKind::Free);
        assert_eq!(change.cost, 0);
        assert_eq!(change.career_entry, None);

        let moved = change.apply_to(character);
        assert_eq!(moved.class_id, "farmer");
        assert!(moved.career_history.is_empty());
    }

    #[test]
    fn class_change_records_tenure_and_spends_xp() {
        let catalog = catalog();
        let validator = catalog.validator();
        let character = elf_peasant(&catalog)
            .with_stats(StatVector::filled(4))
            .with_xp(600);

        let change = validator.plan_class_change(&character, "soldier").unwrap();
        assert_eq!(change.kind, EdgeKind::Free);
        assert_eq!(change.xp_remaining, 600);
        let entry = change.career_entry.clone().unwrap();
        assert!(entry.maxed);
        assert_eq!(entry.stats_gained, character.points_gained());

        let soldier = change.apply_to(character);
        assert_eq!(soldier.career_history, vec![entry]);
        assert_eq!(soldier.points_gained(), 0);

        let stats = soldier.stats.with(Stat::Fighting, 5);
        let soldier = soldier.with_stats(stats);
        assert_eq!(
            validator.plan_class_change(&soldier, "warrior"),
            Err(ValidationError::InsufficientXp {
                required: 1000,
                available: 600,
            })
        );
        assert!(matches!(
            validator.plan_class_change(&soldier, "assassin"),
            Err(ValidationError::Ineligible { .. })
        ));
    }
}
