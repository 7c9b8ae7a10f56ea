//! Common error infrastructure for feudal-core.
//!
//! Domain-specific errors (`CatalogError`, `GraphError`, `TransitionError`,
//! `ValidationError`) live next to the code that produces them. This module
//! holds the shared severity classification and the trait they all implement.

/// Severity level of an error, used for categorization and handling.
///
/// - **Validation**: the caller's request was rejected (bad stat value,
///   ineligible transition, not enough XP). Nothing is wrong with the catalog.
/// - **Integrity**: the catalog data itself is inconsistent (dangling class
///   reference, minimum above maximum). Fix the data.
/// - **Internal**: an invariant the code relies on did not hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Integrity,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Integrity => "integrity",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the error points at bad catalog data or a bug.
    pub const fn is_data_problem(&self) -> bool {
        matches!(self, Self::Integrity | Self::Internal)
    }
}

/// Common trait for all feudal-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by who has to act: caller (validation) or data owner
///   (integrity)
/// - Error codes are stable strings suitable for logs and UI message lookup
pub trait FeudalError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl FeudalError for crate::stats::MalformedCapsData {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Integrity
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TokenCount { .. } => "CAPS_TOKEN_COUNT",
            Self::BadToken { .. } => "CAPS_BAD_TOKEN",
        }
    }
}
