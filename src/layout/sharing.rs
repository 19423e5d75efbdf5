//! Axis-sharing groups and tick-label visibility hints
//!
//! Built after box placement; consumers use group membership to alias
//! axis ranges, and the visibility flags to hide redundant tick labels
//! on inner panels. Panel indices refer to the reading order of
//! [`super::types::LayoutResult::panels`].

use super::config::ShareMode;

/// Panels sharing one axis with a reference panel
///
/// The reference is always the first member in traversal order; with
/// mode `none` every panel is its own singleton group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharingGroup {
    /// Index of the panel whose axis the others alias
    pub reference: usize,
    /// Indices of all panels in the group, including the reference
    pub members: Vec<usize>,
}

/// Sharing policy for one axis, resolved to groups and label hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSharing {
    pub mode: ShareMode,
    pub groups: Vec<SharingGroup>,
    /// Per-panel tick-label visibility hint, in panel reading order
    pub label_visible: Vec<bool>,
}

fn build_groups(mode: ShareMode, rows: usize, cols: usize) -> Vec<SharingGroup> {
    let count = rows * cols;
    match mode {
        ShareMode::All => vec![SharingGroup {
            reference: 0,
            members: (0..count).collect(),
        }],
        ShareMode::Row => (0..rows)
            .map(|row| SharingGroup {
                reference: row * cols,
                members: (0..cols).map(|col| row * cols + col).collect(),
            })
            .collect(),
        ShareMode::Col => (0..cols)
            .map(|col| SharingGroup {
                reference: col,
                members: (0..rows).map(|row| row * cols + col).collect(),
            })
            .collect(),
        ShareMode::None => (0..count)
            .map(|index| SharingGroup {
                reference: index,
                members: vec![index],
            })
            .collect(),
    }
}

/// Build x-axis sharing for a grid
///
/// Under `all` and `col` sharing, only bottom-row panels keep their
/// x tick labels; inner panels would duplicate them.
pub fn build_x_sharing(mode: ShareMode, rows: usize, cols: usize) -> AxisSharing {
    let suppress_inner = matches!(mode, ShareMode::All | ShareMode::Col);
    let label_visible = (0..rows)
        .flat_map(|row| {
            let visible = !suppress_inner || row == rows - 1;
            std::iter::repeat(visible).take(cols)
        })
        .collect();
    AxisSharing {
        mode,
        groups: build_groups(mode, rows, cols),
        label_visible,
    }
}

/// Build y-axis sharing for a grid
///
/// Under `all` and `row` sharing, only leftmost-column panels keep
/// their y tick labels.
pub fn build_y_sharing(mode: ShareMode, rows: usize, cols: usize) -> AxisSharing {
    let suppress_inner = matches!(mode, ShareMode::All | ShareMode::Row);
    let label_visible = (0..rows)
        .flat_map(|_| (0..cols).map(move |col| !suppress_inner || col == 0))
        .collect();
    AxisSharing {
        mode,
        groups: build_groups(mode, rows, cols),
        label_visible,
    }
}
