// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sparse occupancy grid for a single packing pass.
//!
//! Rows are materialized on demand and hold a bitset of occupied columns.
//! The grid is owned by one packing invocation and discarded with it; it is
//! not part of the public data model.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::types::{CellRect, Span};

/// Occupied cells, keyed by 1-based row. A missing row is entirely free.
pub(crate) struct OccupancyGrid {
    rows: HashMap<u32, RowMask>,
    max_occupied_row: u32,
}

/// Bitset of occupied columns within one row.
///
/// Columns are 1-based; bit positions are used directly, so bit 0 of the
/// first word is never set. One inline word covers grids up to 63 columns.
#[derive(Default)]
struct RowMask {
    words: SmallVec<[u64; 1]>,
}

impl RowMask {
    fn is_set(&self, col: u32) -> bool {
        let word = (col / 64) as usize;
        self.words
            .get(word)
            .is_some_and(|w| w & (1_u64 << (col % 64)) != 0)
    }

    fn set(&mut self, col: u32) {
        let word = (col / 64) as usize;
        if self.words.len() <= word {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1_u64 << (col % 64);
    }
}

impl OccupancyGrid {
    pub(crate) fn new() -> Self {
        Self {
            rows: HashMap::new(),
            max_occupied_row: 0,
        }
    }

    /// The highest occupied row, or zero before any placement.
    pub(crate) const fn max_occupied_row(&self) -> u32 {
        self.max_occupied_row
    }

    /// Whether every cell of `rect` is free.
    pub(crate) fn is_free(&self, rect: CellRect) -> bool {
        if rect.row > self.max_occupied_row {
            return true;
        }
        for row in rect.row..=rect.last_row() {
            // Rows below everything placed so far are free.
            if row > self.max_occupied_row {
                break;
            }
            let Some(mask) = self.rows.get(&row) else {
                continue;
            };
            for col in rect.col..=rect.last_col() {
                if mask.is_set(col) {
                    return false;
                }
            }
        }
        true
    }

    /// Mark every cell of `rect` occupied.
    ///
    /// The rectangle must currently be free.
    pub(crate) fn occupy(&mut self, rect: CellRect) {
        debug_assert!(
            self.is_free(rect),
            "occupancy invariant violated: rectangle already occupied"
        );
        for row in rect.row..=rect.last_row() {
            let mask = self.rows.entry(row).or_default();
            for col in rect.col..=rect.last_col() {
                mask.set(col);
            }
        }
        self.max_occupied_row = self.max_occupied_row.max(rect.last_row());
    }

    /// First-fit row for a tile of `span` starting at column `col`: the
    /// smallest row at which the tile's full rectangle is free, scanning
    /// upward from row 1.
    ///
    /// The scan terminates at the first row past [`Self::max_occupied_row`]
    /// at the latest; `row_cap` is a safety bound against pathological
    /// inputs, and `None` is returned only when it is exceeded.
    pub(crate) fn first_free_row(&self, col: u32, span: Span, row_cap: u32) -> Option<u32> {
        let mut row = 1;
        loop {
            if row > self.max_occupied_row {
                return Some(row);
            }
            if self.is_free(CellRect::new(col, row, span.width, span.height)) {
                return Some(row);
            }
            row += 1;
            if row > row_cap {
                return None;
            }
        }
    }
}
