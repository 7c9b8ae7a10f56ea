//! Species, class and gender catalogs.
//!
//! Entries are collected by [`CatalogBuilder`], checked once, and frozen into
//! a [`Catalog`] that is read-only for its whole lifetime.

mod builder;
mod class;
mod error;
mod gender;
mod registry;
mod species;

pub use builder::{Catalog, CatalogBuilder, IncompatiblePair};
pub use class::{CharacterClass, ClassCatalog, display_name};
pub use error::CatalogError;
pub use gender::{Gender, GenderCatalog};
pub use registry::{CatalogEntry, EntryKind, NotFound, Registry};
pub use species::{ResourcePools, Species, SpeciesCatalog};
