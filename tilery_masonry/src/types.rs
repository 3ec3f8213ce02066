// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core placement types: spans, cell rectangles, and placed tiles.

/// The width × height footprint an item occupies, in grid cells.
///
/// Spans are produced by a caller-supplied mapping from domain data (for
/// example a quantity-derived tile class); the packer only clamps them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl Span {
    /// Create a new span from cell counts.
    #[inline(always)]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Create a span from fractional cell counts.
    ///
    /// Each dimension is rounded half-up and floored at one cell. Non-finite
    /// values resolve to one cell.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Values are clamped into the `u32` range before the cast."
    )]
    pub fn rounded(width: f64, height: f64) -> Self {
        fn round_dim(value: f64) -> u32 {
            // Non-finite values and values rounding below one cell resolve
            // to one cell.
            if !value.is_finite() || value <= 0.5 {
                return 1;
            }
            let shifted = value + 0.5;
            if shifted >= u32::MAX as f64 {
                u32::MAX
            } else {
                shifted as u32
            }
        }
        Self {
            width: round_dim(width),
            height: round_dim(height),
        }
    }

    /// Clamp this span so it fits into a grid of `columns` columns.
    ///
    /// Width is clamped into `[1, columns]`; height is floored at one cell.
    ///
    /// `columns` must be at least one.
    #[must_use]
    pub const fn clamp_to_columns(self, columns: u32) -> Self {
        debug_assert!(columns >= 1, "clamp_to_columns requires columns >= 1");
        let width = if self.width < 1 {
            1
        } else if self.width > columns {
            columns
        } else {
            self.width
        };
        let height = if self.height < 1 { 1 } else { self.height };
        Self { width, height }
    }
}

/// A rectangle of grid cells with a 1-based top-left corner.
///
/// The rectangle covers columns `col..col + width` and rows
/// `row..row + height`, both half-open in cell terms: two rectangles that
/// merely touch along an edge do not overlap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellRect {
    /// Starting column (1-based).
    pub col: u32,
    /// Starting row (1-based).
    pub row: u32,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl CellRect {
    /// Create a new cell rectangle.
    ///
    /// `width` and `height` must be at least one cell.
    #[inline(always)]
    pub const fn new(col: u32, row: u32, width: u32, height: u32) -> Self {
        debug_assert!(width >= 1 && height >= 1, "CellRect must be at least 1×1");
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// The last column covered by this rectangle (inclusive).
    #[inline]
    #[must_use]
    pub const fn last_col(&self) -> u32 {
        self.col + self.width - 1
    }

    /// The last row covered by this rectangle (inclusive).
    #[inline]
    #[must_use]
    pub const fn last_row(&self) -> u32 {
        self.row + self.height - 1
    }

    /// Whether this rectangle shares any cell with `other`.
    #[inline]
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.col <= other.last_col()
            && other.col <= self.last_col()
            && self.row <= other.last_row()
            && other.row <= self.last_row()
    }
}

/// One packed item: its position in the input sequence, its chosen top-left
/// cell, and the clamped span actually used.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    /// Position of the item in the input sequence passed to the packer.
    pub index: usize,
    /// Starting column (1-based). Always satisfies
    /// `col + span.width - 1 <= columns`.
    pub col: u32,
    /// Starting row (1-based).
    pub row: u32,
    /// The clamped span this tile occupies.
    pub span: Span,
}

impl PlacedTile {
    /// The cells occupied by this tile.
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> CellRect {
        CellRect::new(self.col, self.row, self.span.width, self.span.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellRect, Span};

    #[test]
    fn rounded_spans_floor_at_one_cell() {
        assert_eq!(Span::rounded(0.0, -3.0), Span::new(1, 1));
        assert_eq!(Span::rounded(0.4, 0.6), Span::new(1, 1));
        assert_eq!(Span::rounded(1.5, 2.4), Span::new(2, 2));
    }

    #[test]
    fn non_finite_dimensions_resolve_to_one_cell() {
        assert_eq!(Span::rounded(f64::NAN, f64::NAN), Span::new(1, 1));
        assert_eq!(
            Span::rounded(f64::INFINITY, f64::INFINITY),
            Span::new(1, 1)
        );
        assert_eq!(
            Span::rounded(f64::NEG_INFINITY, 2.0),
            Span::new(1, 2)
        );
    }

    #[test]
    fn clamp_bounds_width_by_columns() {
        assert_eq!(Span::new(9, 2).clamp_to_columns(3), Span::new(3, 2));
        assert_eq!(Span::new(0, 0).clamp_to_columns(3), Span::new(1, 1));
        assert_eq!(Span::new(2, 5).clamp_to_columns(4), Span::new(2, 5));
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let a = CellRect::new(1, 1, 2, 2);
        let b = CellRect::new(3, 1, 1, 2);
        let c = CellRect::new(1, 3, 2, 1);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(!a.overlaps(&c));

        let d = CellRect::new(2, 2, 2, 2);
        assert!(a.overlaps(&d));
        assert!(d.overlaps(&a));
    }

    #[test]
    fn last_cell_accessors_are_inclusive() {
        let r = CellRect::new(2, 3, 2, 4);
        assert_eq!(r.last_col(), 3);
        assert_eq!(r.last_row(), 6);
    }
}
