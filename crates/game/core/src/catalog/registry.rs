//! Ordered, id-indexed storage shared by the species, class and gender catalogs.

use std::collections::HashMap;

use crate::error::{ErrorSeverity, FeudalError};

use super::error::CatalogError;

/// Which catalog an id belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EntryKind {
    Species,
    Class,
    Gender,
}

/// An id did not match any catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unknown {kind} '{id}'")]
pub struct NotFound {
    pub kind: EntryKind,
    pub id: String,
}

impl NotFound {
    pub fn new(kind: EntryKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl FeudalError for NotFound {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self.kind {
            EntryKind::Species => "CATALOG_SPECIES_NOT_FOUND",
            EntryKind::Class => "CATALOG_CLASS_NOT_FOUND",
            EntryKind::Gender => "CATALOG_GENDER_NOT_FOUND",
        }
    }
}

/// A value stored in a [`Registry`].
pub trait CatalogEntry {
    const KIND: EntryKind;

    fn id(&self) -> &str;
}

/// Entries kept in definition order with O(1) lookup by id.
#[derive(Clone, Debug)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogEntry> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a registry, rejecting repeated ids.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entry: T) -> Result<(), CatalogError> {
        let id = entry.id().to_string();
        if self.index.contains_key(&id) {
            return Err(CatalogError::DuplicateId { kind: T::KIND, id });
        }
        self.index.insert(id, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Exact lookup by id.
    pub fn get(&self, id: &str) -> Result<&T, NotFound> {
        self.index
            .get(id)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| NotFound::new(T::KIND, id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of `id` in definition order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// All entries in definition order.
    pub fn list(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(T::id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CatalogEntry> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}
