// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coarse tile sizes derived from item quantities.

use crate::types::Span;

/// A quantity-derived tile size, the stock span mapping for pantry-style
/// grids where bigger stock gets a bigger tile.
///
/// Hosts with their own sizing scheme can ignore this and pass any span
/// function to the packer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// 1×1 tile, for single items.
    Single,
    /// 1×2 tile, for a small stack.
    Tall,
    /// 2×1 tile, for a shelf-row quantity.
    Wide,
    /// 2×2 tile, for bulk stock.
    Block,
}

impl TileClass {
    /// Classify a stock quantity.
    #[must_use]
    pub const fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0..=1 => Self::Single,
            2..=4 => Self::Tall,
            5..=8 => Self::Wide,
            _ => Self::Block,
        }
    }

    /// The grid footprint of this class.
    #[must_use]
    pub const fn span(self) -> Span {
        match self {
            Self::Single => Span::new(1, 1),
            Self::Tall => Span::new(1, 2),
            Self::Wide => Span::new(2, 1),
            Self::Block => Span::new(2, 2),
        }
    }
}
