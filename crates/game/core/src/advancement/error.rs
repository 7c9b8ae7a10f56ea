//! Advancement errors.
//!
//! [`GraphError`] is raised while the graph is built from catalog data.
//! [`TransitionError`] is raised by queries against a built graph.

use crate::catalog::NotFound;
use crate::error::{ErrorSeverity, FeudalError};

/// Inconsistent advancement data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GraphError {
    #[error("class '{class}' requires unknown class '{prerequisite}'")]
    DanglingPrerequisite { class: String, prerequisite: String },

    #[error("class '{class}' lists unknown free advance '{target}'")]
    DanglingFreeAdvance { class: String, target: String },

    #[error("beginner class '{class}' has xp cost {xp_cost}")]
    BeginnerWithCost { class: String, xp_cost: u32 },

    #[error("class '{class}' is its own prerequisite ancestor")]
    PrerequisiteCycle { class: String },
}

impl FeudalError for GraphError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Integrity
    }

    fn error_code(&self) -> &'static str {
        use GraphError::*;
        match self {
            DanglingPrerequisite { .. } => "ADVANCEMENT_DANGLING_PREREQUISITE",
            DanglingFreeAdvance { .. } => "ADVANCEMENT_DANGLING_FREE_ADVANCE",
            BeginnerWithCost { .. } => "ADVANCEMENT_BEGINNER_WITH_COST",
            PrerequisiteCycle { .. } => "ADVANCEMENT_PREREQUISITE_CYCLE",
        }
    }
}

/// A single-step transition query failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// No prerequisite or free-advance edge leads from `from` to `to`.
    #[error("'{to}' cannot be reached from '{from}' in one step")]
    Ineligible { from: String, to: String },
}

impl FeudalError for TransitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(inner) => inner.error_code(),
            Self::Ineligible { .. } => "ADVANCEMENT_INELIGIBLE",
        }
    }
}
