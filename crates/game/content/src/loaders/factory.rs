//! Content factory for building the catalog from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use feudal_core::{Catalog, CatalogConfig, CharacterClass, Gender, Species};

use crate::loaders::{ClassLoader, ConfigLoader, GenderLoader, LoadResult, SpeciesLoader};

/// Content factory that loads the catalog from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.toml      (optional)
/// ├── species.ron
/// ├── classes.ron
/// ├── advancement.ron
/// └── genders.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
    config: Option<CatalogConfig>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            config: None,
        }
    }

    /// Uses `config` instead of reading `catalog.toml`.
    #[must_use]
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load catalog configuration from `catalog.toml`, defaulting when absent.
    pub fn load_config(&self) -> LoadResult<CatalogConfig> {
        match self.config {
            Some(config) => Ok(config),
            None => ConfigLoader::load_or_default(&self.data_dir.join("catalog.toml")),
        }
    }

    /// Load species from `species.ron`.
    pub fn load_species(&self) -> LoadResult<Vec<Species>> {
        SpeciesLoader::load(&self.data_dir.join("species.ron"))
    }

    /// Load classes from `classes.ron` and `advancement.ron`.
    pub fn load_classes(&self, config: &CatalogConfig) -> LoadResult<Vec<CharacterClass>> {
        ClassLoader::load(
            &self.data_dir.join("classes.ron"),
            &self.data_dir.join("advancement.ron"),
            config.caps_policy,
        )
    }

    /// Load genders from `genders.ron`.
    pub fn load_genders(&self) -> LoadResult<Vec<Gender>> {
        GenderLoader::load(&self.data_dir.join("genders.ron"))
    }

    /// Load every file and build the checked catalog.
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let config = self.load_config()?;
        let species = self.load_species()?;
        let classes = self.load_classes(&config)?;
        let genders = self.load_genders()?;
        build_catalog(config, species, classes, genders)
            .with_context(|| format!("invalid catalog in {}", self.data_dir.display()))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Builds a catalog from loaded entries and reports what was built.
pub(crate) fn build_catalog(
    config: CatalogConfig,
    species: Vec<Species>,
    classes: Vec<CharacterClass>,
    genders: Vec<Gender>,
) -> LoadResult<Catalog> {
    let catalog = Catalog::builder()
        .config(config)
        .species(species)
        .classes(classes)
        .genders(genders)
        .build()?;

    let incompatible = catalog.incompatible_pairs();
    if !incompatible.is_empty() {
        tracing::warn!(
            pairs = incompatible.len(),
            first_species = %incompatible[0].species,
            first_class = %incompatible[0].class,
            "catalog has species/class pairs with no legal stat vector"
        );
    }

    tracing::info!(
        species = catalog.species().len(),
        classes = catalog.classes().len(),
        beginners = catalog.advancement().roots().count(),
        genders = catalog.genders().len(),
        "catalog loaded"
    );
    Ok(catalog)
}
