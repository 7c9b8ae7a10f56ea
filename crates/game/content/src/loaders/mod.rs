//! Content loaders for reading catalog data from files.
//!
//! Each loader exposes `load(path)` for files on disk and `parse(source)` for
//! text already in memory, which is how the embedded catalog is built.

pub mod classes;
pub mod config;
pub mod embedded;
pub mod factory;
pub mod genders;
pub mod species;

pub use classes::{AdvancementSpec, ClassLoader, ClassSpec};
pub use config::ConfigLoader;
pub use embedded::{embedded_catalog, embedded_catalog_with};
pub use factory::ContentFactory;
pub use genders::GenderLoader;
pub use species::SpeciesLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
