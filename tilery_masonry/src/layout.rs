// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the packing inputs and caches placements.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::pack::pack_tiles;
use crate::types::{PlacedTile, Span};

/// Controller for a masonry grid over an owned item list.
///
/// This type:
/// - stores the item list, the span function, and the column count,
/// - caches the most recent placement vector,
/// - recomputes it at most once after any input change.
///
/// It does *not* know about any widget/view system; host frameworks are
/// expected to wrap this, call [`MasonryLayout::placements`] from their
/// update cycle, and render one positioned box per [`PlacedTile`].
pub struct MasonryLayout<T, F> {
    items: Vec<T>,
    to_span: F,
    columns: u32,

    dirty: bool,
    placements: Vec<PlacedTile>,
}

impl<T, F> Debug for MasonryLayout<T, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MasonryLayout")
            .field("len", &self.items.len())
            .field("columns", &self.columns)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}

impl<T, F> MasonryLayout<T, F>
where
    F: FnMut(&T) -> Span,
{
    /// Creates an empty layout with the given span function and column count.
    #[must_use]
    pub fn new(to_span: F, columns: u32) -> Self {
        Self::with_items(Vec::new(), to_span, columns)
    }

    /// Creates a layout over `items` with the given span function and column count.
    #[must_use]
    pub fn with_items(items: Vec<T>, to_span: F, columns: u32) -> Self {
        Self {
            items,
            to_span,
            columns,
            dirty: true,
            placements: Vec::new(),
        }
    }

    /// Returns the current column count.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Sets the column count.
    pub fn set_columns(&mut self, columns: u32) {
        if columns != self.columns {
            self.columns = columns;
            self.dirty = true;
        }
    }

    /// Returns a shared view of the items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns a mutable reference to the items, marking the cached placements dirty.
    pub fn items_mut(&mut self) -> &mut Vec<T> {
        self.dirty = true;
        &mut self.items
    }

    /// Replaces the item list.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.dirty = true;
    }

    /// Replaces the span function, marking the cached placements dirty.
    pub fn set_span_fn(&mut self, to_span: F) {
        self.to_span = to_span;
        self.dirty = true;
    }

    /// Number of items in the layout.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the layout holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes or returns the cached placements, in reading order.
    #[must_use]
    pub fn placements(&mut self) -> &[PlacedTile] {
        if self.dirty {
            self.placements = pack_tiles(&self.items, &mut self.to_span, self.columns);
            self.dirty = false;
        }
        &self.placements
    }

    /// Total grid height in rows, for host sizing. Zero when empty.
    #[must_use]
    pub fn content_rows(&mut self) -> u32 {
        self.placements()
            .iter()
            .map(|tile| tile.cells().last_row())
            .max()
            .unwrap_or(0)
    }
}
