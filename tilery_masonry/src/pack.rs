// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The packing pass: first-fit per column with a two-tier tie-break.

use alloc::vec::Vec;
use core::cmp;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::occupancy::OccupancyGrid;
use crate::types::{CellRect, PlacedTile, Span};

/// Candidate placements per tile; grids rarely have more columns than this.
type Candidates = SmallVec<[(u32, u32); 8]>;

/// Pack `items` into a grid of `columns` columns.
///
/// Items are processed in input order. For each item the span from `to_span`
/// is clamped (width into `[1, columns]`, height floored at one cell), the
/// first-fit row is computed for every valid starting column, and the
/// placement is chosen in two tiers:
///
/// 1. Among candidates that keep the tile's bottom edge at or above the
///    highest occupied row (placing there cannot grow the layout), reuse the
///    column last used for this clamped width, else the leftmost.
/// 2. Otherwise take the overall first fit (lowest row, leftmost column),
///    except that the column last used for this width is preferred when its
///    first-fit row is no worse. This keeps same-width tiles visually
///    stacked without ever increasing total height.
///
/// The result always contains one [`PlacedTile`] per input item, with no two
/// occupied rectangles overlapping, sorted into reading order (ascending
/// row, then column). Packing is fully deterministic; every call starts from
/// an empty grid.
///
/// `columns == 0` yields an empty result. The per-column row scan is capped
/// at `max(1000, 8 × items.len())`; a tile whose every scan exceeds the cap
/// is placed at column 1 one row below all occupied rows.
///
/// ```rust
/// use tilery_masonry::{Span, pack_tiles};
///
/// // Three unit tiles share the first row of a 3-column grid.
/// let spans = [Span::new(1, 1); 3];
/// let placed = pack_tiles(&spans, |s| *s, 3);
/// assert!(placed.iter().all(|t| t.row == 1));
/// assert_eq!(placed.iter().map(|t| t.col).collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn pack_tiles<T, F>(items: &[T], mut to_span: F, columns: u32) -> Vec<PlacedTile>
where
    F: FnMut(&T) -> Span,
{
    if columns == 0 {
        return Vec::new();
    }

    let item_count = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let row_cap = cmp::max(1000, item_count.saturating_mul(8));

    let mut grid = OccupancyGrid::new();
    // Column last chosen for each clamped width, local to this pass.
    let mut last_col_by_width: HashMap<u32, u32> = HashMap::new();
    let mut placed: Vec<PlacedTile> = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let span = to_span(item).clamp_to_columns(columns);

        // First-fit row for every valid starting column, in column order.
        let mut candidates: Candidates = SmallVec::new();
        for col in 1..=columns - span.width + 1 {
            if let Some(row) = grid.first_free_row(col, span, row_cap) {
                candidates.push((col, row));
            }
        }

        let last_col = last_col_by_width.get(&span.width).copied();
        let (col, row) = choose_cell(&candidates, span, &grid, last_col)
            // Every scan hit the row cap: place below everything used so far.
            .unwrap_or((1, grid.max_occupied_row() + 1));

        grid.occupy(CellRect::new(col, row, span.width, span.height));
        last_col_by_width.insert(span.width, col);
        placed.push(PlacedTile {
            index,
            col,
            row,
            span,
        });
    }

    // Reading order. Two tiles cannot share a starting cell, so the key is
    // unique and the order fully determined.
    placed.sort_unstable_by_key(|tile| (tile.row, tile.col));
    placed
}

/// Apply the two-tier tie-break over the first-fit candidates.
fn choose_cell(
    candidates: &Candidates,
    span: Span,
    grid: &OccupancyGrid,
    last_col: Option<u32>,
) -> Option<(u32, u32)> {
    let (mut best_col, mut best_row) = *candidates.first()?;
    for &(col, row) in &candidates[1..] {
        if row < best_row {
            best_row = row;
            best_col = col;
        }
    }

    // Top band: candidates whose bottom edge stays at or above the highest
    // occupied row. Placing there cannot grow the layout.
    let max_row = grid.max_occupied_row();
    let mut band_leftmost = None;
    let mut band_last_col = None;
    for &(col, row) in candidates {
        if row + span.height - 1 <= max_row {
            if band_leftmost.is_none() {
                band_leftmost = Some((col, row));
            }
            if last_col == Some(col) {
                band_last_col = Some((col, row));
            }
        }
    }
    if let Some(cell) = band_last_col.or(band_leftmost) {
        return Some(cell);
    }

    // No top-band fit. Prefer the column last used for this width when its
    // first-fit row is no worse than the best row, so same-width tiles keep
    // stacking without pushing the layout taller.
    if let Some(last_col) = last_col {
        if let Some(&(col, row)) = candidates.iter().find(|&&(col, _)| col == last_col) {
            if row <= best_row {
                return Some((col, row));
            }
        }
    }
    Some((best_col, best_row))
}
