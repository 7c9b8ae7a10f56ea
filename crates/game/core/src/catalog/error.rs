//! Catalog construction errors.
//!
//! Everything here means the catalog data is inconsistent; none of these
//! errors can be caused by a character.

use crate::advancement::GraphError;
use crate::error::{ErrorSeverity, FeudalError};
use crate::stats::{MalformedCapsData, Stat};

use super::registry::EntryKind;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// Two entries of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: EntryKind, id: String },

    /// A species floor exceeds its own cap.
    #[error("species '{species}' has {stat} minimum {minimum} above maximum {maximum}")]
    SpeciesBoundsInverted {
        species: String,
        stat: Stat,
        minimum: u8,
        maximum: u8,
    },

    /// A class minimum exceeds its own cap.
    #[error("class '{class}' has {stat} minimum {minimum} above cap {maximum}")]
    ClassBoundsInverted {
        class: String,
        stat: Stat,
        minimum: u8,
        maximum: u8,
    },

    /// A class cap lies outside the universal stat range. Only reachable for
    /// classes built with [`CharacterClass::new`]; parsed cap strings are
    /// always in range.
    ///
    /// [`CharacterClass::new`]: crate::catalog::CharacterClass::new
    #[error("class '{class}' caps {stat} at {cap}, outside 1..=9")]
    CapOutOfRange { class: String, stat: Stat, cap: u8 },

    /// A class cap string failed strict parsing.
    #[error("class '{class}' has malformed caps: {source}")]
    MalformedCaps {
        class: String,
        source: MalformedCapsData,
    },

    /// A species/class pair can never produce a legal stat vector.
    #[error(
        "species '{species}' and class '{class}' conflict on {stat}: floor {floor} above ceiling {ceiling}"
    )]
    IncompatiblePair {
        species: String,
        class: String,
        stat: Stat,
        floor: u8,
        ceiling: u8,
    },

    #[error(transparent)]
    Advancement(#[from] GraphError),
}

impl FeudalError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Integrity
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            SpeciesBoundsInverted { .. } => "CATALOG_SPECIES_BOUNDS_INVERTED",
            ClassBoundsInverted { .. } => "CATALOG_CLASS_BOUNDS_INVERTED",
            CapOutOfRange { .. } => "CATALOG_CAP_OUT_OF_RANGE",
            MalformedCaps { .. } => "CATALOG_MALFORMED_CAPS",
            IncompatiblePair { .. } => "CATALOG_INCOMPATIBLE_PAIR",
            Advancement(inner) => inner.error_code(),
        }
    }
}
