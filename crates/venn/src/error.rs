//! Error types for Venn operations.
//!
//! [`VennError`] is the single error type returned by the library. Apart from
//! [`VennError::Io`] and [`VennError::Export`], every variant describes a
//! recoverable, local validation failure: the diagram state is left exactly
//! as it was before the failed call.

use std::io;

use thiserror::Error;

use venn_core::{identifier::Id, scale::UnknownValueError};
use venn_script::ParseError;

/// The main error type for Venn operations.
///
/// # Diagnostic Variants
///
/// The `Script` variant keeps the script source next to the structured
/// diagnostics so that front ends can render labeled snippets.
#[derive(Debug, Error)]
pub enum VennError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Script { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown region `{0}`")]
    UnknownRegion(Id),

    #[error("Invalid rating {value} for `{id}`: ratings range from 1 to 5")]
    InvalidRating { id: Id, value: i32 },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for VennError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<UnknownValueError> for VennError {
    fn from(error: UnknownValueError) -> Self {
        Self::Configuration(error.to_string())
    }
}

impl VennError {
    /// Create a new `Script` error with the associated source code.
    pub fn new_script_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Script {
            err,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use venn_core::scale::Axis;

    use super::*;

    #[test]
    fn test_unknown_value_becomes_configuration_error() {
        let err: VennError = UnknownValueError::new(Axis::Stage, "Later").into();
        assert!(matches!(err, VennError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: `Later` is not a value of the stage axis"
        );
    }

    #[test]
    fn test_invalid_rating_message() {
        let err = VennError::InvalidRating {
            id: Id::new("intent"),
            value: 7,
        };
        assert_eq!(
            err.to_string(),
            "Invalid rating 7 for `intent`: ratings range from 1 to 5"
        );
    }
}
