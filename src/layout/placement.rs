//! Box placement: tiles, panel boxes, and colorbar boxes
//!
//! Converts resolved geometry into the ordered list of figure-absolute
//! bounding boxes. Tiles are generated with row 0 at the bottom of the
//! figure and returned in reading order (top-left first, left to
//! right, then top row to bottom row), the order plotting consumers
//! expect.

use super::config::{CbarLocation, CbarMode, LayoutSpec};
use super::geometry::ResolvedGeometry;
use super::types::{Rect, Tile};

/// Tiles and the panel/colorbar boxes derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub tiles: Vec<Tile>,
    pub panels: Vec<Rect>,
    pub colorbars: Vec<Rect>,
}

/// Place all panel and colorbar boxes for one layout request
pub fn place_boxes(spec: &LayoutSpec, geometry: &ResolvedGeometry) -> Placement {
    let tiles = generate_tiles(spec, geometry);
    let panels = tiles.iter().map(Tile::panel_box).collect();
    let colorbars = match spec.cbar_mode {
        None => Vec::new(),
        Some(CbarMode::Each) => tiles.iter().filter_map(Tile::colorbar_box).collect(),
        Some(CbarMode::Single) => vec![single_colorbar(spec, geometry)],
        Some(CbarMode::Edge) => edge_colorbars(spec, geometry),
    };
    Placement {
        tiles,
        panels,
        colorbars,
    }
}

/// Generate the tile grid in reading order
fn generate_tiles(spec: &LayoutSpec, geometry: &ResolvedGeometry) -> Vec<Tile> {
    let (horizontal_pad, vertical_pad) = spec.internal_pad;
    let (panel, colorbar) = tile_local_boxes(spec, geometry);
    let mut tiles = Vec::with_capacity(spec.rows * spec.cols);
    // row 0 sits at the bottom of the figure; emit top row first
    for row in (0..spec.rows).rev() {
        for col in 0..spec.cols {
            let x0 = (geometry.pads.left
                + col as f64 * (geometry.tile_width + horizontal_pad))
                / geometry.width;
            let y0 = (geometry.pads.bottom
                + row as f64 * (geometry.tile_height + vertical_pad))
                / geometry.height;
            tiles.push(Tile {
                x0,
                y0,
                width: geometry.tile_width / geometry.width,
                height: geometry.tile_height / geometry.height,
                panel,
                colorbar,
            });
        }
    }
    tiles
}

/// Local sub-boxes of one tile, normalized to the tile
///
/// Without per-panel colorbars the plot area covers the whole tile.
/// With them, the plot area shrinks away from the colorbar edge by
/// `thickness + long_side_pad`, and the colorbar is trimmed by the
/// short-side pad at each end of its length.
fn tile_local_boxes(spec: &LayoutSpec, geometry: &ResolvedGeometry) -> (Rect, Option<Rect>) {
    if !matches!(spec.cbar_mode, Some(CbarMode::Each)) {
        return (Rect::new(0.0, 0.0, 1.0, 1.0), None);
    }
    let tile_width = geometry.tile_width;
    let tile_height = geometry.tile_height;
    let thickness = spec.cbar_thickness;
    let strip = thickness + spec.cbar_long_side_pad;
    let short_pad = spec.cbar_short_side_pad;
    match spec.cbar_location {
        CbarLocation::Bottom => (
            Rect::new(
                0.0,
                strip / tile_height,
                1.0,
                geometry.panel_height / tile_height,
            ),
            Some(Rect::new(
                short_pad / tile_width,
                0.0,
                (tile_width - 2.0 * short_pad) / tile_width,
                thickness / tile_height,
            )),
        ),
        CbarLocation::Top => (
            Rect::new(0.0, 0.0, 1.0, geometry.panel_height / tile_height),
            Some(Rect::new(
                short_pad / tile_width,
                (tile_height - thickness) / tile_height,
                (tile_width - 2.0 * short_pad) / tile_width,
                thickness / tile_height,
            )),
        ),
        CbarLocation::Right => (
            Rect::new(0.0, 0.0, geometry.panel_width / tile_width, 1.0),
            Some(Rect::new(
                (tile_width - thickness) / tile_width,
                short_pad / tile_height,
                thickness / tile_width,
                (tile_height - 2.0 * short_pad) / tile_height,
            )),
        ),
        CbarLocation::Left => (
            Rect::new(
                strip / tile_width,
                0.0,
                geometry.panel_width / tile_width,
                1.0,
            ),
            Some(Rect::new(
                0.0,
                short_pad / tile_height,
                thickness / tile_width,
                (tile_height - 2.0 * short_pad) / tile_height,
            )),
        ),
    }
}

/// The one colorbar box for single mode
///
/// The colorbar sits in the strip reserved by the effective padding,
/// offset from the figure edge by the original (unadjusted) pad, and
/// spans the plotting region minus a short-side pad at each end.
fn single_colorbar(spec: &LayoutSpec, geometry: &ResolvedGeometry) -> Rect {
    let width = geometry.width;
    let height = geometry.height;
    let thickness = spec.cbar_thickness;
    let short_pad = spec.cbar_short_side_pad;
    match spec.cbar_location {
        CbarLocation::Bottom => Rect::new(
            (spec.left_pad + short_pad) / width,
            spec.bottom_pad / height,
            (width - spec.left_pad - spec.right_pad - 2.0 * short_pad) / width,
            thickness / height,
        ),
        CbarLocation::Top => Rect::new(
            (spec.left_pad + short_pad) / width,
            (height - spec.top_pad - thickness) / height,
            (width - spec.left_pad - spec.right_pad - 2.0 * short_pad) / width,
            thickness / height,
        ),
        CbarLocation::Right => Rect::new(
            (width - spec.right_pad - thickness) / width,
            (spec.bottom_pad + short_pad) / height,
            thickness / width,
            (height - spec.top_pad - spec.bottom_pad - 2.0 * short_pad) / height,
        ),
        CbarLocation::Left => Rect::new(
            spec.left_pad / width,
            (spec.bottom_pad + short_pad) / height,
            thickness / width,
            (height - spec.top_pad - spec.bottom_pad - 2.0 * short_pad) / height,
        ),
    }
}

/// One colorbar per column (bottom/top) or per row (left/right)
///
/// Column colorbars are returned left to right; row colorbars top to
/// bottom, matching the panel reading order.
fn edge_colorbars(spec: &LayoutSpec, geometry: &ResolvedGeometry) -> Vec<Rect> {
    let width = geometry.width;
    let height = geometry.height;
    let (horizontal_pad, vertical_pad) = spec.internal_pad;
    let thickness = spec.cbar_thickness;
    let short_pad = spec.cbar_short_side_pad;
    match spec.cbar_location {
        CbarLocation::Bottom => (0..spec.cols)
            .map(|col| {
                Rect::new(
                    (geometry.pads.left
                        + col as f64 * (geometry.tile_width + horizontal_pad)
                        + short_pad)
                        / width,
                    spec.bottom_pad / height,
                    (geometry.tile_width - 2.0 * short_pad) / width,
                    thickness / height,
                )
            })
            .collect(),
        CbarLocation::Top => (0..spec.cols)
            .map(|col| {
                Rect::new(
                    (geometry.pads.left
                        + col as f64 * (geometry.tile_width + horizontal_pad)
                        + short_pad)
                        / width,
                    (height - spec.top_pad - thickness) / height,
                    (geometry.tile_width - 2.0 * short_pad) / width,
                    thickness / height,
                )
            })
            .collect(),
        CbarLocation::Right => (0..spec.rows)
            .rev()
            .map(|row| {
                Rect::new(
                    (width - spec.right_pad - thickness) / width,
                    (geometry.pads.bottom
                        + row as f64 * (geometry.tile_height + vertical_pad)
                        + short_pad)
                        / height,
                    thickness / width,
                    (geometry.tile_height - 2.0 * short_pad) / height,
                )
            })
            .collect(),
        CbarLocation::Left => (0..spec.rows)
            .rev()
            .map(|row| {
                Rect::new(
                    spec.left_pad / width,
                    (geometry.pads.bottom
                        + row as f64 * (geometry.tile_height + vertical_pad)
                        + short_pad)
                        / height,
                    thickness / width,
                    (geometry.tile_height - 2.0 * short_pad) / height,
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::constraint::infer_strategy;
    use super::super::geometry::resolve_geometry;
    use super::*;

    fn place(spec: &LayoutSpec) -> Placement {
        let strategy = infer_strategy(spec.width, spec.height, spec.aspect).unwrap();
        let geometry = resolve_geometry(spec, strategy).unwrap();
        place_boxes(spec, &geometry)
    }

    fn base_spec(rows: usize, cols: usize) -> LayoutSpec {
        LayoutSpec::new(rows, cols).with_width(8.0).with_aspect(0.5)
    }

    #[test]
    fn test_panel_count_and_no_colorbars() {
        let placement = place(&base_spec(2, 3));
        assert_eq!(placement.panels.len(), 6);
        assert!(placement.colorbars.is_empty());
    }

    #[test]
    fn test_reading_order() {
        let placement = place(&base_spec(2, 2));
        let panels = &placement.panels;
        // first panel is top-left
        assert!(panels[0].x0 < panels[1].x0);
        assert!(panels[0].y0 > panels[2].y0);
        // same row shares y0, same column shares x0
        assert_eq!(panels[0].y0, panels[1].y0);
        assert_eq!(panels[0].x0, panels[2].x0);
    }

    #[test]
    fn test_single_mode_one_colorbar() {
        for location in [
            CbarLocation::Top,
            CbarLocation::Bottom,
            CbarLocation::Left,
            CbarLocation::Right,
        ] {
            let spec = base_spec(2, 2)
                .with_cbar_mode(CbarMode::Single)
                .with_cbar_location(location);
            let placement = place(&spec);
            assert_eq!(placement.colorbars.len(), 1);
        }
    }

    #[test]
    fn test_edge_mode_colorbar_counts() {
        let spec = base_spec(3, 2)
            .with_cbar_mode(CbarMode::Edge)
            .with_cbar_location(CbarLocation::Bottom);
        assert_eq!(place(&spec).colorbars.len(), 2);

        let spec = base_spec(3, 2)
            .with_cbar_mode(CbarMode::Edge)
            .with_cbar_location(CbarLocation::Right);
        assert_eq!(place(&spec).colorbars.len(), 3);
    }

    #[test]
    fn test_each_mode_colorbar_count() {
        let spec = base_spec(2, 3)
            .with_cbar_mode(CbarMode::Each)
            .with_cbar_location(CbarLocation::Bottom);
        let placement = place(&spec);
        assert_eq!(placement.colorbars.len(), 6);
    }

    #[test]
    fn test_each_bottom_panel_sits_above_colorbar() {
        let spec = base_spec(1, 1)
            .with_cbar_mode(CbarMode::Each)
            .with_cbar_location(CbarLocation::Bottom);
        let placement = place(&spec);
        let panel = placement.panels[0];
        let colorbar = placement.colorbars[0];
        // colorbar at the bottom of the tile, long-side pad below the panel
        assert!(colorbar.y0 < panel.y0);
        assert!(panel.y0 > colorbar.y1());
    }

    #[test]
    fn test_single_bottom_short_side_pad_trims_length() {
        let spec = base_spec(1, 2)
            .with_cbar_mode(CbarMode::Single)
            .with_cbar_location(CbarLocation::Bottom)
            .with_cbar_short_side_pad(0.25);
        let placement = place(&spec);
        let colorbar = placement.colorbars[0];
        let geometry = {
            let strategy = infer_strategy(spec.width, spec.height, spec.aspect).unwrap();
            resolve_geometry(&spec, strategy).unwrap()
        };
        let expected = (8.0 - 0.25 - 0.25 - 2.0 * 0.25) / geometry.width;
        assert!((colorbar.width - expected).abs() < 1e-12);
    }
}
