//! Grid geometry: panel, tile, and figure dimensions
//!
//! Turns a validated [`LayoutSpec`] and an inferred [`Strategy`] into a
//! [`ResolvedGeometry`], built once per layout request. All values are
//! exact floating-point arithmetic in inches; a caller-supplied width
//! or height is carried through bit for bit.

use super::config::{CbarLocation, CbarMode, LayoutSpec};
use super::constraint::Strategy;
use super::error::LayoutError;

/// Effective outer padding in inches
///
/// For single/edge colorbar modes this includes the strip
/// (`thickness + long_side_pad`) reserved at the colorbar's edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePads {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

/// Memoized intermediate geometry for one layout request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    pub strategy: Strategy,
    /// Figure width in inches
    pub width: f64,
    /// Figure height in inches
    pub height: f64,
    /// Panel aspect ratio (height / width); derived when both figure
    /// dimensions were supplied
    pub aspect: f64,
    /// Plot-area width of one panel in inches
    pub panel_width: f64,
    /// Plot-area height of one panel in inches
    pub panel_height: f64,
    /// Full tile width in inches (panel plus per-panel colorbar space)
    pub tile_width: f64,
    /// Full tile height in inches (panel plus per-panel colorbar space)
    pub tile_height: f64,
    pub pads: EdgePads,
}

/// Compute panel, tile, and figure dimensions for the given strategy
///
/// Fails with [`LayoutError::UnsupportedCombination`] when the
/// constrained dimensions, padding, and colorbar configuration leave
/// no positive panel area.
pub fn resolve_geometry(
    spec: &LayoutSpec,
    strategy: Strategy,
) -> Result<ResolvedGeometry, LayoutError> {
    let rows = spec.rows as f64;
    let cols = spec.cols as f64;
    let (horizontal_pad, vertical_pad) = spec.internal_pad;
    let strip = spec.cbar_thickness + spec.cbar_long_side_pad;
    let location = spec.cbar_location;

    let mut pads = EdgePads {
        top: spec.top_pad,
        bottom: spec.bottom_pad,
        left: spec.left_pad,
        right: spec.right_pad,
    };
    if matches!(
        spec.cbar_mode,
        Some(CbarMode::Single) | Some(CbarMode::Edge)
    ) {
        match location {
            CbarLocation::Top => pads.top += strip,
            CbarLocation::Bottom => pads.bottom += strip,
            CbarLocation::Left => pads.left += strip,
            CbarLocation::Right => pads.right += strip,
        }
    }
    let pads = pads;

    let each = matches!(spec.cbar_mode, Some(CbarMode::Each));
    let each_left_right = each && location.is_left_right();
    let each_bottom_top = each && location.is_bottom_top();

    let panel_width_of = |figure_width: f64| {
        let mut inner = figure_width - pads.left - pads.right - (cols - 1.0) * horizontal_pad;
        if each_left_right {
            inner -= cols * strip;
        }
        inner / cols
    };
    let panel_height_of = |figure_height: f64| {
        let mut inner = figure_height - pads.top - pads.bottom - (rows - 1.0) * vertical_pad;
        if each_bottom_top {
            inner -= rows * strip;
        }
        inner / rows
    };

    let (width, height, panel_width, panel_height) = match strategy {
        Strategy::WidthConstrained { width, aspect } => {
            let panel_width = panel_width_of(width);
            let panel_height = panel_width * aspect;
            let mut height =
                rows * panel_height + (rows - 1.0) * vertical_pad + pads.top + pads.bottom;
            if each_bottom_top {
                height += rows * strip;
            }
            (width, height, panel_width, panel_height)
        }
        Strategy::HeightConstrained { height, aspect } => {
            let panel_height = panel_height_of(height);
            let panel_width = panel_height / aspect;
            let mut width =
                cols * panel_width + (cols - 1.0) * horizontal_pad + pads.left + pads.right;
            if each_left_right {
                width += cols * strip;
            }
            (width, height, panel_width, panel_height)
        }
        Strategy::WidthAndHeightConstrained { width, height } => {
            (width, height, panel_width_of(width), panel_height_of(height))
        }
    };

    if panel_width <= 0.0 || panel_height <= 0.0 {
        return Err(LayoutError::unsupported_combination(format!(
            "cannot fit {} x {} panels with the requested padding and \
             colorbar configuration (panel size {:.4} x {:.4} in)",
            spec.rows, spec.cols, panel_width, panel_height
        )));
    }

    let aspect = match strategy {
        Strategy::WidthConstrained { aspect, .. } => aspect,
        Strategy::HeightConstrained { aspect, .. } => aspect,
        Strategy::WidthAndHeightConstrained { .. } => panel_height / panel_width,
    };

    let tile_width = if each_left_right {
        panel_width + strip
    } else {
        panel_width
    };
    let tile_height = if each_bottom_top {
        panel_height + strip
    } else {
        panel_height
    };

    Ok(ResolvedGeometry {
        strategy,
        width,
        height,
        aspect,
        panel_width,
        panel_height,
        tile_width,
        tile_height,
        pads,
    })
}
