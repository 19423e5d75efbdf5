//! Constraint resolution: choosing a grid-geometry strategy
//!
//! Exactly two of width, height, and aspect must be supplied; the pair
//! determines which dimension of the figure is fixed and which grows
//! from the panel content.

use super::error::LayoutError;

/// The grid-geometry strategy implied by the supplied constraints
///
/// Carries the two caller-supplied values; the third dimension is
/// derived later by the geometry calculator, once row/column counts
/// and padding are known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Figure width is fixed; height grows from content
    WidthConstrained { width: f64, aspect: f64 },
    /// Figure height is fixed; width grows from content
    HeightConstrained { height: f64, aspect: f64 },
    /// Both figure dimensions are fixed; aspect is derived from content
    WidthAndHeightConstrained { width: f64, height: f64 },
}

/// Pick the strategy for the supplied constraints
///
/// Fails with [`LayoutError::InvalidConstraint`] unless exactly two of
/// the three values are present. Supplying all three is always an
/// error, even if the values happen to be mutually consistent.
pub fn infer_strategy(
    width: Option<f64>,
    height: Option<f64>,
    aspect: Option<f64>,
) -> Result<Strategy, LayoutError> {
    match (width, height, aspect) {
        (Some(width), None, Some(aspect)) => Ok(Strategy::WidthConstrained { width, aspect }),
        (None, Some(height), Some(aspect)) => Ok(Strategy::HeightConstrained { height, aspect }),
        (Some(width), Some(height), None) => {
            Ok(Strategy::WidthAndHeightConstrained { width, height })
        }
        _ => Err(LayoutError::invalid_constraint(width, height, aspect)),
    }
}
