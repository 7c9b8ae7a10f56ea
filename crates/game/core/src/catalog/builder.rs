//! The assembled, immutable catalog.

use crate::advancement::AdvancementGraph;
use crate::config::CatalogConfig;
use crate::stats::Stat;
use crate::validate::{BuildValidator, first_conflict};

use super::class::{CharacterClass, ClassCatalog};
use super::error::CatalogError;
use super::gender::{Gender, GenderCatalog};
use super::species::{Species, SpeciesCatalog};

/// A species/class pair that can never hold a legal stat vector.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncompatiblePair {
    pub species: String,
    pub class: String,
    /// First conflicting stat in schema order.
    pub stat: Stat,
    pub floor: u8,
    pub ceiling: u8,
}

impl From<IncompatiblePair> for CatalogError {
    fn from(pair: IncompatiblePair) -> Self {
        CatalogError::IncompatiblePair {
            species: pair.species,
            class: pair.class,
            stat: pair.stat,
            floor: pair.floor,
            ceiling: pair.ceiling,
        }
    }
}

/// Species, classes, genders and the advancement graph, checked for
/// consistency and frozen.
#[derive(Clone, Debug)]
pub struct Catalog {
    species: SpeciesCatalog,
    classes: ClassCatalog,
    genders: GenderCatalog,
    advancement: AdvancementGraph,
    incompatible: Vec<IncompatiblePair>,
    config: CatalogConfig,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn species(&self) -> &SpeciesCatalog {
        &self.species
    }

    pub fn classes(&self) -> &ClassCatalog {
        &self.classes
    }

    pub fn genders(&self) -> &GenderCatalog {
        &self.genders
    }

    pub fn advancement(&self) -> &AdvancementGraph {
        &self.advancement
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Pairs found at build time, species order then class order.
    pub fn incompatible_pairs(&self) -> &[IncompatiblePair] {
        &self.incompatible
    }

    pub fn validator(&self) -> BuildValidator<'_> {
        BuildValidator::new(self)
    }
}

/// Collects catalog entries and checks them into a [`Catalog`].
#[derive(Clone, Debug, Default)]
pub struct CatalogBuilder {
    species: Vec<Species>,
    classes: Vec<CharacterClass>,
    genders: Vec<Gender>,
    config: CatalogConfig,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn species(mut self, species: impl IntoIterator<Item = Species>) -> Self {
        self.species.extend(species);
        self
    }

    #[must_use]
    pub fn classes(mut self, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        self.classes.extend(classes);
        self
    }

    #[must_use]
    pub fn genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders.extend(genders);
        self
    }

    /// Checks, in order: duplicate ids, per-species and per-class bounds,
    /// the advancement graph, then species/class compatibility.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let species = SpeciesCatalog::from_entries(self.species)?;
        let classes = ClassCatalog::from_entries(self.classes)?;
        let genders = GenderCatalog::from_entries(self.genders)?;

        for entry in species.iter() {
            entry.validate()?;
        }
        for class in classes.iter() {
            class.validate()?;
        }

        let advancement = AdvancementGraph::build(&classes)?;

        let mut incompatible = Vec::new();
        for entry in species.iter() {
            for class in classes.iter() {
                if let Some((stat, bounds)) = first_conflict(entry, class) {
                    incompatible.push(IncompatiblePair {
                        species: entry.id.clone(),
                        class: class.id.clone(),
                        stat,
                        floor: bounds.floor,
                        ceiling: bounds.ceiling,
                    });
                }
            }
        }

        if !self.config.allow_incompatible_pairs {
            if let Some(pair) = incompatible.first() {
                return Err(pair.clone().into());
            }
        }

        Ok(Catalog {
            species,
            classes,
            genders,
            advancement,
            incompatible,
            config: self.config,
        })
    }
}
