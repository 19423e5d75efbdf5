//! Core geometric types for the layout solver

use std::fmt::Write as _;

use super::sharing::AxisSharing;

/// A bounding rectangle in figure-normalized coordinates
///
/// `(x0, y0)` is the lower-left corner; all four values are fractions
/// of the figure dimensions in `[0, 1]`, matching the convention a
/// plotting collaborator expects for placing drawable regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn x1(&self) -> f64 {
        self.x0 + self.width
    }

    /// Top edge y-coordinate
    pub fn y1(&self) -> f64 {
        self.y0 + self.height
    }
}

/// One grid cell's full allocated area, including its own colorbar
/// space when the per-panel colorbar mode is active
///
/// A tile carries its absolute origin and size in figure-normalized
/// coordinates plus local sub-boxes (normalized to the tile itself)
/// for the plot area and, optionally, the tile's own colorbar. Tiles
/// are created once per layout computation and are immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    /// Plot-area box in tile-local coordinates
    pub panel: Rect,
    /// Per-panel colorbar box in tile-local coordinates, if any
    pub colorbar: Option<Rect>,
}

impl Tile {
    /// Transform a tile-local box into figure-absolute coordinates
    ///
    /// The affine map is `abs = origin + local * size` on each axis.
    pub fn to_figure(&self, local: &Rect) -> Rect {
        Rect::new(
            self.x0 + local.x0 * self.width,
            self.y0 + local.y0 * self.height,
            local.width * self.width,
            local.height * self.height,
        )
    }

    /// The tile's plot-area box in figure-absolute coordinates
    pub fn panel_box(&self) -> Rect {
        self.to_figure(&self.panel)
    }

    /// The tile's colorbar box in figure-absolute coordinates, if any
    pub fn colorbar_box(&self) -> Option<Rect> {
        self.colorbar.as_ref().map(|local| self.to_figure(local))
    }
}

/// Fully resolved physical figure dimensions
///
/// Exactly one of the three values was derived; the other two equal
/// the caller-supplied inputs bit for bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureDimensions {
    /// Figure width in inches
    pub width: f64,
    /// Figure height in inches
    pub height: f64,
    /// Panel aspect ratio (height / width)
    pub aspect: f64,
}

/// The complete result of one layout computation
///
/// Panel boxes are in reading order: the first element is the top-left
/// panel, traversal proceeds left-to-right, then top row to bottom
/// row. Colorbar boxes follow the ordering rules of the active mode
/// (per-panel: same reading order as panels; per-edge: left-to-right
/// columns or top-to-bottom rows; single: exactly one box).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub figure: FigureDimensions,
    pub rows: usize,
    pub cols: usize,
    pub panels: Vec<Rect>,
    pub colorbars: Vec<Rect>,
    pub sharex: AxisSharing,
    pub sharey: AxisSharing,
}

impl LayoutResult {
    /// Render the layout as a deterministic plain-text report
    ///
    /// Coordinates are printed with four decimal places; used by the
    /// CLI and by output-stability tests.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "figure: {:.4} x {:.4} in (aspect {:.4})",
            self.figure.width, self.figure.height, self.figure.aspect
        );
        let _ = writeln!(out, "grid: {} rows x {} cols", self.rows, self.cols);
        for (i, panel) in self.panels.iter().enumerate() {
            let _ = writeln!(
                out,
                "panel {}: [{:.4}, {:.4}, {:.4}, {:.4}]",
                i, panel.x0, panel.y0, panel.width, panel.height
            );
        }
        for (i, cbar) in self.colorbars.iter().enumerate() {
            let _ = writeln!(
                out,
                "colorbar {}: [{:.4}, {:.4}, {:.4}, {:.4}]",
                i, cbar.x0, cbar.y0, cbar.width, cbar.height
            );
        }
        let _ = writeln!(
            out,
            "sharex: {}, x tick labels: {:?}",
            self.sharex.mode, self.sharex.label_visible
        );
        let _ = writeln!(
            out,
            "sharey: {}, y tick labels: {:?}",
            self.sharey.mode, self.sharey.label_visible
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(0.1, 0.2, 0.5, 0.25);
        assert_eq!(rect.x1(), 0.6);
        assert_eq!(rect.y1(), 0.45);
    }

    #[test]
    fn test_tile_transform_identity() {
        let tile = Tile {
            x0: 0.25,
            y0: 0.5,
            width: 0.5,
            height: 0.25,
            panel: Rect::new(0.0, 0.0, 1.0, 1.0),
            colorbar: None,
        };
        let panel = tile.panel_box();
        assert_eq!(panel, Rect::new(0.25, 0.5, 0.5, 0.25));
        assert_eq!(tile.colorbar_box(), None);
    }

    #[test]
    fn test_tile_transform_sub_box() {
        let tile = Tile {
            x0: 0.1,
            y0: 0.2,
            width: 0.4,
            height: 0.5,
            panel: Rect::new(0.0, 0.5, 1.0, 0.5),
            colorbar: Some(Rect::new(0.25, 0.0, 0.5, 0.2)),
        };
        assert_eq!(tile.panel_box(), Rect::new(0.1, 0.45, 0.4, 0.25));
        assert_eq!(
            tile.colorbar_box(),
            Some(Rect::new(0.2, 0.2, 0.2, 0.1))
        );
    }
}
