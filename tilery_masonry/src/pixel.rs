// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell→pixel conversion for rendering hosts (kurbo-based).

use kurbo::Rect;

use crate::types::PlacedTile;

/// Pixel geometry of one grid cell: uniform cell size plus the gap between
/// adjacent cells. Gaps are not applied around the outer edge; hosts add
/// their own padding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellMetrics {
    /// Side length of one cell in logical pixels.
    pub cell_size: f64,
    /// Gap between adjacent cells in logical pixels.
    pub gap: f64,
}

impl CellMetrics {
    /// Creates metrics from a cell size and inter-cell gap.
    #[must_use]
    pub const fn new(cell_size: f64, gap: f64) -> Self {
        Self { cell_size, gap }
    }

    /// The pixel rectangle covered by `tile`, with the grid origin at (0, 0).
    ///
    /// A tile spanning several cells also covers the gaps between them.
    #[must_use]
    pub fn tile_rect(&self, tile: &PlacedTile) -> Rect {
        let step = self.cell_size + self.gap;
        let x0 = f64::from(tile.col - 1) * step;
        let y0 = f64::from(tile.row - 1) * step;
        let width =
            f64::from(tile.span.width) * self.cell_size + f64::from(tile.span.width - 1) * self.gap;
        let height = f64::from(tile.span.height) * self.cell_size
            + f64::from(tile.span.height - 1) * self.gap;
        Rect::new(x0, y0, x0 + width, y0 + height)
    }
}
