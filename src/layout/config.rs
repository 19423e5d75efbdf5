//! Layout specification: grid shape, size constraints, padding,
//! colorbar configuration, and axis-sharing modes
//!
//! A [`LayoutSpec`] can be built programmatically with `with_*`
//! methods or loaded from TOML. All physical values are in inches.

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::error::LayoutError;

/// Errors that can occur when loading a layout spec from TOML
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to read layout spec file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse layout spec TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Colorbar mode: how many colorbars the figure carries
///
/// `None` (no colorbar) is expressed as `Option::<CbarMode>::None` on
/// the spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CbarMode {
    /// One colorbar spanning the full plotting region at one edge
    Single,
    /// One colorbar per row (left/right) or per column (top/bottom)
    Edge,
    /// One colorbar attached to every individual panel
    Each,
}

/// Edge of the figure (or of each panel) the colorbar sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CbarLocation {
    Top,
    Bottom,
    Left,
    Right,
}

impl CbarLocation {
    /// True for left/right placements, which consume figure width
    pub fn is_left_right(&self) -> bool {
        matches!(self, CbarLocation::Left | CbarLocation::Right)
    }

    /// True for bottom/top placements, which consume figure height
    pub fn is_bottom_top(&self) -> bool {
        matches!(self, CbarLocation::Bottom | CbarLocation::Top)
    }
}

impl fmt::Display for CbarLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CbarLocation::Top => "top",
            CbarLocation::Bottom => "bottom",
            CbarLocation::Left => "left",
            CbarLocation::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Axis-sharing policy for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareMode {
    /// All panels share the axis with the first panel
    All,
    /// Panels in the same grid row share the axis
    Row,
    /// Panels in the same grid column share the axis
    Col,
    /// Every panel has an independent axis
    None,
}

impl From<bool> for ShareMode {
    fn from(shared: bool) -> Self {
        if shared {
            ShareMode::All
        } else {
            ShareMode::None
        }
    }
}

impl fmt::Display for ShareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShareMode::All => "all",
            ShareMode::Row => "row",
            ShareMode::Col => "col",
            ShareMode::None => "none",
        };
        write!(f, "{}", name)
    }
}

/// Immutable input to one layout computation
///
/// Exactly two of `width`, `height`, and `aspect` must be set before
/// the spec is solved; see [`crate::layout::compute_layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    /// Number of rows of panels
    pub rows: usize,
    /// Number of columns of panels
    pub cols: usize,
    /// Figure width in inches
    pub width: Option<f64>,
    /// Figure height in inches
    pub height: Option<f64>,
    /// Panel aspect ratio (height / width)
    pub aspect: Option<f64>,
    /// Spacing between the top of the figure and the panels
    pub top_pad: f64,
    /// Spacing between the bottom of the figure and the panels
    pub bottom_pad: f64,
    /// Spacing between the left of the figure and the panels
    pub left_pad: f64,
    /// Spacing between the right of the figure and the panels
    pub right_pad: f64,
    /// (horizontal, vertical) spacing between panels
    pub internal_pad: (f64, f64),
    /// Colorbar mode; `None` for no colorbars
    pub cbar_mode: Option<CbarMode>,
    /// Edge the colorbar(s) sit on
    pub cbar_location: CbarLocation,
    /// Colorbar thickness in inches
    pub cbar_thickness: f64,
    /// Inset trimmed from each end of a colorbar along its length
    pub cbar_short_side_pad: f64,
    /// Spacing between a colorbar and its adjacent panel(s)
    pub cbar_long_side_pad: f64,
    /// X-axis sharing policy
    pub sharex: ShareMode,
    /// Y-axis sharing policy
    pub sharey: ShareMode,
}

const DEFAULT_EDGE_PAD: f64 = 0.25;
const DEFAULT_INTERNAL_PAD: f64 = 0.33;
const DEFAULT_CBAR_THICKNESS: f64 = 0.125;
const DEFAULT_CBAR_LONG_SIDE_PAD: f64 = 0.5;

impl LayoutSpec {
    /// Create a spec for a `rows` x `cols` grid with default padding
    /// and no colorbar
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            width: None,
            height: None,
            aspect: None,
            top_pad: DEFAULT_EDGE_PAD,
            bottom_pad: DEFAULT_EDGE_PAD,
            left_pad: DEFAULT_EDGE_PAD,
            right_pad: DEFAULT_EDGE_PAD,
            internal_pad: (DEFAULT_INTERNAL_PAD, DEFAULT_INTERNAL_PAD),
            cbar_mode: None,
            cbar_location: CbarLocation::Right,
            cbar_thickness: DEFAULT_CBAR_THICKNESS,
            cbar_short_side_pad: 0.0,
            cbar_long_side_pad: DEFAULT_CBAR_LONG_SIDE_PAD,
            sharex: ShareMode::All,
            sharey: ShareMode::All,
        }
    }

    /// Convenience constructor for single-panel figures
    pub fn single() -> Self {
        Self::new(1, 1)
    }

    /// Set the figure width constraint (inches)
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the figure height constraint (inches)
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the panel aspect ratio constraint (height / width)
    pub fn with_aspect(mut self, aspect: f64) -> Self {
        self.aspect = Some(aspect);
        self
    }

    /// Set all four edge pads to the same value
    pub fn with_pads(mut self, pad: f64) -> Self {
        self.top_pad = pad;
        self.bottom_pad = pad;
        self.left_pad = pad;
        self.right_pad = pad;
        self
    }

    pub fn with_top_pad(mut self, pad: f64) -> Self {
        self.top_pad = pad;
        self
    }

    pub fn with_bottom_pad(mut self, pad: f64) -> Self {
        self.bottom_pad = pad;
        self
    }

    pub fn with_left_pad(mut self, pad: f64) -> Self {
        self.left_pad = pad;
        self
    }

    pub fn with_right_pad(mut self, pad: f64) -> Self {
        self.right_pad = pad;
        self
    }

    /// Set the same internal pad in both directions
    pub fn with_internal_pad(mut self, pad: f64) -> Self {
        self.internal_pad = (pad, pad);
        self
    }

    /// Set the horizontal and vertical internal pads separately
    pub fn with_internal_pads(mut self, horizontal: f64, vertical: f64) -> Self {
        self.internal_pad = (horizontal, vertical);
        self
    }

    pub fn with_cbar_mode(mut self, mode: CbarMode) -> Self {
        self.cbar_mode = Some(mode);
        self
    }

    pub fn with_cbar_location(mut self, location: CbarLocation) -> Self {
        self.cbar_location = location;
        self
    }

    pub fn with_cbar_thickness(mut self, thickness: f64) -> Self {
        self.cbar_thickness = thickness;
        self
    }

    pub fn with_cbar_short_side_pad(mut self, pad: f64) -> Self {
        self.cbar_short_side_pad = pad;
        self
    }

    pub fn with_cbar_long_side_pad(mut self, pad: f64) -> Self {
        self.cbar_long_side_pad = pad;
        self
    }

    pub fn with_sharex(mut self, mode: ShareMode) -> Self {
        self.sharex = mode;
        self
    }

    pub fn with_sharey(mut self, mode: ShareMode) -> Self {
        self.sharey = mode;
        self
    }

    /// Load a spec from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load a spec from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SpecError> {
        let raw: RawSpec = toml::from_str(content)?;
        let spec = raw.into_spec()?;
        Ok(spec)
    }

    /// Check configuration values before any geometry is computed
    ///
    /// The two-of-three width/height/aspect constraint is checked
    /// separately by the constraint resolver.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.rows < 1 || self.cols < 1 {
            return Err(LayoutError::invalid_configuration(format!(
                "grid must have at least one row and one column (got {} x {})",
                self.rows, self.cols
            )));
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("aspect", self.aspect),
        ] {
            if let Some(value) = value {
                if value <= 0.0 {
                    return Err(LayoutError::invalid_configuration(format!(
                        "{} must be positive (got {})",
                        name, value
                    )));
                }
            }
        }
        let (horizontal_pad, vertical_pad) = self.internal_pad;
        for (name, value) in [
            ("top_pad", self.top_pad),
            ("bottom_pad", self.bottom_pad),
            ("left_pad", self.left_pad),
            ("right_pad", self.right_pad),
            ("internal_pad (horizontal)", horizontal_pad),
            ("internal_pad (vertical)", vertical_pad),
            ("cbar_thickness", self.cbar_thickness),
            ("cbar_short_side_pad", self.cbar_short_side_pad),
            ("cbar_long_side_pad", self.cbar_long_side_pad),
        ] {
            if value < 0.0 {
                return Err(LayoutError::invalid_configuration(format!(
                    "{} must be non-negative (got {})",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// TOML structure mirroring `LayoutSpec`, with looser input types
/// (scalar-or-pair internal pad, bool-or-mode sharing)
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpec {
    rows: usize,
    cols: usize,
    width: Option<f64>,
    height: Option<f64>,
    aspect: Option<f64>,
    top_pad: Option<f64>,
    bottom_pad: Option<f64>,
    left_pad: Option<f64>,
    right_pad: Option<f64>,
    internal_pad: Option<RawInternalPad>,
    cbar_mode: Option<CbarMode>,
    cbar_location: Option<CbarLocation>,
    cbar_thickness: Option<f64>,
    cbar_short_side_pad: Option<f64>,
    cbar_long_side_pad: Option<f64>,
    sharex: Option<RawShareMode>,
    sharey: Option<RawShareMode>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInternalPad {
    Uniform(f64),
    Pair(f64, f64),
    Other(Vec<f64>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawShareMode {
    Flag(bool),
    Mode(ShareMode),
}

impl RawSpec {
    fn into_spec(self) -> Result<LayoutSpec, LayoutError> {
        let mut spec = LayoutSpec::new(self.rows, self.cols);
        spec.width = self.width;
        spec.height = self.height;
        spec.aspect = self.aspect;
        if let Some(pad) = self.top_pad {
            spec.top_pad = pad;
        }
        if let Some(pad) = self.bottom_pad {
            spec.bottom_pad = pad;
        }
        if let Some(pad) = self.left_pad {
            spec.left_pad = pad;
        }
        if let Some(pad) = self.right_pad {
            spec.right_pad = pad;
        }
        match self.internal_pad {
            Some(RawInternalPad::Uniform(pad)) => spec.internal_pad = (pad, pad),
            Some(RawInternalPad::Pair(horizontal, vertical)) => {
                spec.internal_pad = (horizontal, vertical)
            }
            Some(RawInternalPad::Other(values)) => {
                return Err(LayoutError::invalid_configuration(format!(
                    "internal_pad must be a number or a pair of numbers \
                     (got a sequence of length {})",
                    values.len()
                )));
            }
            None => {}
        }
        spec.cbar_mode = self.cbar_mode;
        if let Some(location) = self.cbar_location {
            spec.cbar_location = location;
        }
        if let Some(thickness) = self.cbar_thickness {
            spec.cbar_thickness = thickness;
        }
        if let Some(pad) = self.cbar_short_side_pad {
            spec.cbar_short_side_pad = pad;
        }
        if let Some(pad) = self.cbar_long_side_pad {
            spec.cbar_long_side_pad = pad;
        }
        if let Some(mode) = self.sharex {
            spec.sharex = mode.resolve();
        }
        if let Some(mode) = self.sharey {
            spec.sharey = mode.resolve();
        }
        Ok(spec)
    }
}

impl RawShareMode {
    fn resolve(self) -> ShareMode {
        match self {
            RawShareMode::Flag(shared) => ShareMode::from(shared),
            RawShareMode::Mode(mode) => mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_spec() {
        let spec = LayoutSpec::new(2, 3);
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.cols, 3);
        assert_eq!(spec.top_pad, 0.25);
        assert_eq!(spec.internal_pad, (0.33, 0.33));
        assert_eq!(spec.cbar_mode, None);
        assert_eq!(spec.cbar_location, CbarLocation::Right);
        assert_eq!(spec.cbar_thickness, 0.125);
        assert_eq!(spec.cbar_short_side_pad, 0.0);
        assert_eq!(spec.cbar_long_side_pad, 0.5);
        assert_eq!(spec.sharex, ShareMode::All);
        assert_eq!(spec.sharey, ShareMode::All);
    }

    #[test]
    fn test_builder_pattern() {
        let spec = LayoutSpec::new(1, 2)
            .with_width(8.0)
            .with_aspect(0.5)
            .with_pads(0.1)
            .with_internal_pads(0.2, 0.4)
            .with_cbar_mode(CbarMode::Single)
            .with_cbar_location(CbarLocation::Bottom)
            .with_sharex(ShareMode::Col)
            .with_sharey(ShareMode::None);
        assert_eq!(spec.width, Some(8.0));
        assert_eq!(spec.aspect, Some(0.5));
        assert_eq!(spec.left_pad, 0.1);
        assert_eq!(spec.internal_pad, (0.2, 0.4));
        assert_eq!(spec.cbar_mode, Some(CbarMode::Single));
        assert_eq!(spec.cbar_location, CbarLocation::Bottom);
        assert_eq!(spec.sharex, ShareMode::Col);
        assert_eq!(spec.sharey, ShareMode::None);
    }

    #[test]
    fn test_single_constructor() {
        let spec = LayoutSpec::single();
        assert_eq!((spec.rows, spec.cols), (1, 1));
    }

    #[test]
    fn test_from_toml_full() {
        let toml_str = r#"
rows = 2
cols = 3
width = 8.0
aspect = 0.618
top_pad = 0.1
internal_pad = [0.2, 0.4]
cbar_mode = "single"
cbar_location = "bottom"
cbar_thickness = 0.2
sharex = "col"
sharey = false
"#;
        let spec = LayoutSpec::from_toml(toml_str).expect("spec should parse");
        assert_eq!(spec.rows, 2);
        assert_eq!(spec.cols, 3);
        assert_eq!(spec.width, Some(8.0));
        assert_eq!(spec.height, None);
        assert_eq!(spec.aspect, Some(0.618));
        assert_eq!(spec.top_pad, 0.1);
        assert_eq!(spec.bottom_pad, 0.25);
        assert_eq!(spec.internal_pad, (0.2, 0.4));
        assert_eq!(spec.cbar_mode, Some(CbarMode::Single));
        assert_eq!(spec.cbar_location, CbarLocation::Bottom);
        assert_eq!(spec.cbar_thickness, 0.2);
        assert_eq!(spec.sharex, ShareMode::Col);
        assert_eq!(spec.sharey, ShareMode::None);
    }

    #[test]
    fn test_from_toml_scalar_internal_pad() {
        let toml_str = "rows = 1\ncols = 1\nwidth = 4.0\nheight = 3.0\ninternal_pad = 0.5";
        let spec = LayoutSpec::from_toml(toml_str).expect("spec should parse");
        assert_eq!(spec.internal_pad, (0.5, 0.5));
    }

    #[test]
    fn test_from_toml_invalid_internal_pad_length() {
        let toml_str = "rows = 1\ncols = 1\ninternal_pad = [1.0, 2.0, 3.0]";
        let err = LayoutSpec::from_toml(toml_str).unwrap_err();
        assert!(matches!(
            err,
            SpecError::Layout(LayoutError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_from_toml_invalid_cbar_mode() {
        let toml_str = "rows = 1\ncols = 1\ncbar_mode = \"invalid\"";
        assert!(matches!(
            LayoutSpec::from_toml(toml_str),
            Err(SpecError::Parse(_))
        ));
    }

    #[test]
    fn test_from_toml_share_flag() {
        let toml_str = "rows = 2\ncols = 2\nwidth = 4.0\nheight = 3.0\nsharex = true";
        let spec = LayoutSpec::from_toml(toml_str).expect("spec should parse");
        assert_eq!(spec.sharex, ShareMode::All);
    }

    #[test]
    fn test_validate_zero_rows() {
        let spec = LayoutSpec::new(0, 2).with_width(4.0).with_height(3.0);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_negative_pad() {
        let spec = LayoutSpec::new(1, 1)
            .with_width(4.0)
            .with_height(3.0)
            .with_left_pad(-0.1);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_non_positive_width() {
        let spec = LayoutSpec::new(1, 1).with_width(0.0).with_height(3.0);
        assert!(matches!(
            spec.validate(),
            Err(LayoutError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_validate_ok() {
        let spec = LayoutSpec::new(2, 2).with_width(8.0).with_aspect(0.618);
        assert!(spec.validate().is_ok());
    }
}
