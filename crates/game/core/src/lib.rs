//! Character build rules shared by loaders and tools.
//!
//! `feudal-core` defines the stat schema, the species, class and gender
//! catalogs, the class advancement graph and the validator that checks a
//! character against them. It performs no I/O: catalog data is handed to
//! [`CatalogBuilder`], checked once, and frozen into a [`Catalog`] that can be
//! shared freely across threads.
pub mod advancement;
pub mod catalog;
pub mod config;
pub mod error;
pub mod stats;
pub mod validate;

pub use advancement::{AdvancementGraph, EdgeKind, GraphError, Transition, TransitionError};
pub use catalog::{
    Catalog, CatalogBuilder, CatalogEntry, CatalogError, CharacterClass, ClassCatalog, EntryKind,
    Gender, GenderCatalog, IncompatiblePair, NotFound, Registry, ResourcePools, Species,
    SpeciesCatalog, display_name,
};
pub use config::CatalogConfig;
pub use error::{ErrorSeverity, FeudalError};
pub use stats::{
    CapsPolicy, DEFAULT_STAT_VALUE, FALLBACK_CAP, MalformedCapsData, STAT_CEILING, STAT_COUNT,
    STAT_FLOOR, Stat, StatTable, StatVector, format_caps, parse_caps,
};
pub use validate::{
    BuildValidator, CareerEntry, Character, ClassChange, StatBounds, ValidationError,
    effective_bounds,
};
