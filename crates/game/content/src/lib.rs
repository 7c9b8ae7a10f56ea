//! Catalog data and loaders.
//!
//! This crate ships the stock species, class, advancement and gender data and
//! the loaders that turn RON/TOML files into a checked
//! [`Catalog`](feudal_core::Catalog):
//! - Species (`species.ron`)
//! - Classes and their caps (`classes.ron`)
//! - Class advancement (`advancement.ron`)
//! - Genders (`genders.ron`)
//! - Catalog configuration (`catalog.toml`)
//!
//! The same files are embedded, so [`embedded_catalog`] works without a data
//! directory.

pub mod loaders;

pub use loaders::{
    AdvancementSpec, ClassLoader, ClassSpec, ConfigLoader, ContentFactory, GenderLoader,
    LoadResult, SpeciesLoader, embedded_catalog, embedded_catalog_with,
};
