//! Error types for the layout solver

use thiserror::Error;

/// Errors that can occur while validating or solving a layout
///
/// All variants are raised during up-front validation, before any
/// geometry is computed; there is never partial layout state to roll
/// back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Not exactly two of width, height, and aspect were supplied
    #[error(
        "exactly two of width, height, and aspect must be specified \
         (got width={width:?}, height={height:?}, aspect={aspect:?})"
    )]
    InvalidConstraint {
        width: Option<f64>,
        height: Option<f64>,
        aspect: Option<f64>,
    },

    /// A configuration value outside the recognized set
    #[error("invalid layout configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// A structurally valid request whose geometry cannot be realized
    #[error("unsupported layout combination: {reason}")]
    UnsupportedCombination { reason: String },
}

impl LayoutError {
    /// Create an invalid constraint error from the supplied inputs
    pub fn invalid_constraint(
        width: Option<f64>,
        height: Option<f64>,
        aspect: Option<f64>,
    ) -> Self {
        Self::InvalidConstraint {
            width,
            height,
            aspect,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an unsupported combination error
    pub fn unsupported_combination(reason: impl Into<String>) -> Self {
        Self::UnsupportedCombination {
            reason: reason.into(),
        }
    }
}
