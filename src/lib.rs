//! Panelgrid - exact panel-grid layouts for publication figures
//!
//! This library computes pixel/inch-exact rectangular layouts for
//! grids of plot panels (and optional colorbars) inside a fixed-size
//! figure, given two of {width, height, aspect}. It only decides
//! *where* rectangular regions go; a plotting collaborator realizes
//! them as drawable axes.
//!
//! # Example
//!
//! ```rust
//! use panelgrid::{compute_layout, LayoutSpec};
//!
//! let spec = LayoutSpec::new(2, 3).with_width(8.0).with_aspect(0.618);
//! let layout = compute_layout(&spec).unwrap();
//!
//! assert_eq!(layout.panels.len(), 6);
//! assert_eq!(layout.figure.width, 8.0);
//! ```

pub mod layout;

pub use layout::{
    compute_layout, AxisSharing, CbarLocation, CbarMode, FigureDimensions, LayoutError,
    LayoutResult, LayoutSpec, Rect, ShareMode, SharingGroup, SpecError, Strategy,
};
