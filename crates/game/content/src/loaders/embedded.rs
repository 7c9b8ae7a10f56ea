//! The stock catalog, compiled into the binary.

use feudal_core::{Catalog, CatalogConfig};

use crate::loaders::factory::build_catalog;
use crate::loaders::{ClassLoader, ConfigLoader, GenderLoader, LoadResult, SpeciesLoader};

pub const SPECIES_RON: &str = include_str!("../../data/species.ron");
pub const CLASSES_RON: &str = include_str!("../../data/classes.ron");
pub const ADVANCEMENT_RON: &str = include_str!("../../data/advancement.ron");
pub const GENDERS_RON: &str = include_str!("../../data/genders.ron");
pub const CATALOG_TOML: &str = include_str!("../../data/catalog.toml");

/// Builds the stock catalog without touching the filesystem.
pub fn embedded_catalog() -> LoadResult<Catalog> {
    embedded_catalog_with(ConfigLoader::parse(CATALOG_TOML)?)
}

/// Builds the stock data under a caller-chosen config.
pub fn embedded_catalog_with(config: CatalogConfig) -> LoadResult<Catalog> {
    let species = SpeciesLoader::parse(SPECIES_RON)?;
    let classes = ClassLoader::parse(CLASSES_RON, ADVANCEMENT_RON, config.caps_policy)?;
    let genders = GenderLoader::parse(GENDERS_RON)?;
    build_catalog(config, species, classes, genders)
}
