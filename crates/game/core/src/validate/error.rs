use crate::advancement::TransitionError;
use crate::catalog::NotFound;
use crate::error::{ErrorSeverity, FeudalError};
use crate::stats::Stat;

/// A character build or class change was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error("{stat} is {value}, allowed {floor}..={ceiling}")]
    OutOfBounds {
        stat: Stat,
        value: u8,
        floor: u8,
        ceiling: u8,
    },

    /// The species/class pair admits no value for `stat`.
    #[error(
        "species '{species}' cannot be a '{class}': {stat} floor {floor} above ceiling {ceiling}"
    )]
    ConflictingBounds {
        species: String,
        class: String,
        stat: Stat,
        floor: u8,
        ceiling: u8,
    },

    #[error("'{to}' cannot be reached from '{from}' in one step")]
    Ineligible { from: String, to: String },

    #[error("needs {required} xp, {available} available")]
    InsufficientXp { required: u32, available: u32 },

    #[error("{stat} is {value}, class requires {required}")]
    RequirementNotMet { stat: Stat, value: u8, required: u8 },
}

impl From<TransitionError> for ValidationError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotFound(inner) => Self::NotFound(inner),
            TransitionError::Ineligible { from, to } => Self::Ineligible { from, to },
        }
    }
}

impl FeudalError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConflictingBounds { .. } => ErrorSeverity::Integrity,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use ValidationError::*;
        match self {
            NotFound(inner) => inner.error_code(),
            OutOfBounds { .. } => "VALIDATION_OUT_OF_BOUNDS",
            ConflictingBounds { .. } => "VALIDATION_CONFLICTING_BOUNDS",
            Ineligible { .. } => "VALIDATION_INELIGIBLE",
            InsufficientXp { .. } => "VALIDATION_INSUFFICIENT_XP",
            RequirementNotMet { .. } => "VALIDATION_REQUIREMENT_NOT_MET",
        }
    }
}
