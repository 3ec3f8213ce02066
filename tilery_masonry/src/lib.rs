// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilery Masonry: deterministic tile packing for masonry grids.
//!
//! This crate packs an ordered list of items, each with a rectangular
//! footprint in grid cells, into a fixed number of columns. It is the layout
//! core behind pantry/gallery style grids where tiles of different sizes
//! should fill gaps near the top and visually stack by width.
//!
//! The core concepts are:
//!
//! - [`Span`]: the width × height footprint (in cells) an item occupies.
//! - [`PlacedTile`]: one input item (by position) with its chosen 1-based
//!   top-left cell and the clamped span actually used.
//! - [`pack_tiles`]: the packing pass itself — first-fit per column with a
//!   two-tier tie-break (top-band fill, then same-width column stacking),
//!   returning placements sorted into reading order.
//! - [`MasonryLayout`]: a small controller that owns the item list, the span
//!   function, and the column count, and caches the most recent placements.
//!
//! The packer is a pure function: identical inputs produce bit-for-bit
//! identical placements, every invocation starts from an empty occupancy
//! grid, and no state survives between invocations. Repacking on any input
//! change is the intended usage model.
//!
//! This crate deliberately does **not** know about widgets, styling, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Sorting/filtering the item list before packing.
//! - Supplying the span function (for example via [`TileClass`]).
//! - Rendering one positioned box per [`PlacedTile`] (with the `kurbo`
//!   feature, `CellMetrics` converts placements to pixel rectangles).
//!
//! ## Minimal example
//!
//! ```rust
//! use tilery_masonry::{Span, pack_tiles};
//!
//! // A large 3×3 tile followed by two unit tiles, packed into 3 columns.
//! let spans = [Span::new(3, 3), Span::new(1, 1), Span::new(1, 1)];
//! let placed = pack_tiles(&spans, |s| *s, 3);
//!
//! assert_eq!(placed.len(), 3);
//! // The large tile fills the full width; the unit tiles go below it.
//! assert_eq!((placed[0].col, placed[0].row), (1, 1));
//! assert_eq!((placed[1].col, placed[1].row), (1, 4));
//! assert_eq!((placed[2].col, placed[2].row), (2, 4));
//! ```
//!
//! For a retained-style host, wrap the same inputs in a [`MasonryLayout`]
//! and call [`MasonryLayout::placements`] from your update cycle; the
//! placements are recomputed only after items, span function, or column
//! count change.
//!
//! ## Features
//!
//! - `std` *(default)*: forwards to `kurbo/std` when `kurbo` is enabled.
//! - `kurbo`: enables `CellMetrics` for cell→pixel rectangle conversion.
//! - `libm`: forwards to `kurbo/libm` for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod occupancy;
mod pack;
#[cfg(feature = "kurbo")]
mod pixel;
mod tile;
mod types;

pub use layout::MasonryLayout;
pub use pack::pack_tiles;
#[cfg(feature = "kurbo")]
pub use pixel::CellMetrics;
pub use tile::TileClass;
pub use types::{CellRect, PlacedTile, Span};
