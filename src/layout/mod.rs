//! Constrained panel-grid layout solver
//!
//! Given a grid shape, two of {width, height, aspect}, padding, and an
//! optional colorbar configuration, this module derives the absolute
//! figure size and the exact normalized bounding box of every panel
//! and colorbar, plus axis-sharing hints. The computation is a pure
//! function of the [`LayoutSpec`]; nothing persists between calls.

pub mod config;
pub mod constraint;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod sharing;
pub mod types;

pub use config::{CbarLocation, CbarMode, LayoutSpec, ShareMode, SpecError};
pub use constraint::{infer_strategy, Strategy};
pub use error::LayoutError;
pub use geometry::{resolve_geometry, EdgePads, ResolvedGeometry};
pub use sharing::{AxisSharing, SharingGroup};
pub use types::{FigureDimensions, LayoutResult, Rect, Tile};

/// Solve a layout spec into panel and colorbar boxes
///
/// Validation happens entirely up front: configuration errors and the
/// two-of-three size constraint are rejected before any geometry is
/// computed. The result is deterministic; calling this twice with the
/// same spec yields bit-identical boxes.
pub fn compute_layout(spec: &LayoutSpec) -> Result<LayoutResult, LayoutError> {
    spec.validate()?;
    let strategy = infer_strategy(spec.width, spec.height, spec.aspect)?;
    let geometry = resolve_geometry(spec, strategy)?;
    let placement = placement::place_boxes(spec, &geometry);
    Ok(LayoutResult {
        figure: FigureDimensions {
            width: geometry.width,
            height: geometry.height,
            aspect: geometry.aspect,
        },
        rows: spec.rows,
        cols: spec.cols,
        panels: placement.panels,
        colorbars: placement.colorbars,
        sharex: sharing::build_x_sharing(spec.sharex, spec.rows, spec.cols),
        sharey: sharing::build_y_sharing(spec.sharey, spec.rows, spec.cols),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_layout_basic() {
        let spec = LayoutSpec::new(2, 3).with_width(8.0).with_aspect(0.618);
        let layout = compute_layout(&spec).unwrap();
        assert_eq!(layout.panels.len(), 6);
        assert!(layout.colorbars.is_empty());
        assert_eq!(layout.figure.width, 8.0);
    }

    #[test]
    fn test_compute_layout_rejects_overconstrained() {
        let spec = LayoutSpec::new(1, 1)
            .with_width(1.0)
            .with_height(1.0)
            .with_aspect(1.0);
        let err = compute_layout(&spec).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_compute_layout_rejects_unconstrained() {
        let spec = LayoutSpec::new(1, 1);
        let err = compute_layout(&spec).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConstraint { .. }));
    }

    #[test]
    fn test_compute_layout_validates_configuration_first() {
        // bad grid shape is reported even though constraints are also bad
        let spec = LayoutSpec::new(0, 1);
        let err = compute_layout(&spec).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_compute_layout_idempotent() {
        let spec = LayoutSpec::new(2, 2)
            .with_width(8.0)
            .with_aspect(0.5)
            .with_cbar_mode(CbarMode::Each)
            .with_cbar_location(CbarLocation::Right);
        let first = compute_layout(&spec).unwrap();
        let second = compute_layout(&spec).unwrap();
        assert_eq!(first, second);
    }
}
