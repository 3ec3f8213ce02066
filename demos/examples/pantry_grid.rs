// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packs a pantry inventory into a masonry grid and prints it.
//!
//! Tile sizes are derived from stock quantities via [`TileClass`]; the
//! column count comes from a [`ColumnResolver`] fed a static style, standing
//! in for the host's real style system.

use std::num::NonZeroU32;

use tilery_columns::{ColumnResolver, StaticStyle};
use tilery_masonry::{MasonryLayout, TileClass};

struct PantryItem {
    name: &'static str,
    quantity: u32,
}

const PANTRY: &[PantryItem] = &[
    PantryItem { name: "rolled oats", quantity: 12 },
    PantryItem { name: "olive oil", quantity: 1 },
    PantryItem { name: "canned tomatoes", quantity: 6 },
    PantryItem { name: "black beans", quantity: 4 },
    PantryItem { name: "basmati rice", quantity: 9 },
    PantryItem { name: "soy sauce", quantity: 1 },
    PantryItem { name: "dried pasta", quantity: 7 },
    PantryItem { name: "peanut butter", quantity: 2 },
    PantryItem { name: "coconut milk", quantity: 3 },
    PantryItem { name: "honey", quantity: 1 },
];

fn main() {
    let mut resolver = ColumnResolver::new(NonZeroU32::new(6).unwrap());
    resolver.set_viewport_width(1024.0);
    let style = StaticStyle::new(Some("4"), None);
    let columns = resolver.refresh(Some(&style));

    let mut layout = MasonryLayout::with_items(
        PANTRY.iter().collect::<Vec<_>>(),
        |item: &&PantryItem| TileClass::from_quantity(item.quantity).span(),
        columns,
    );
    let placements = layout.placements().to_vec();

    let rows = placements
        .iter()
        .map(|tile| tile.cells().last_row())
        .max()
        .unwrap_or(0);
    let mut canvas = vec![vec!['.'; columns as usize]; rows as usize];
    for (tile, letter) in placements.iter().zip((b'A'..).map(char::from)) {
        let cells = tile.cells();
        for row in cells.row..=cells.last_row() {
            for col in cells.col..=cells.last_col() {
                canvas[(row - 1) as usize][(col - 1) as usize] = letter;
            }
        }
    }

    println!("{columns} columns, {rows} rows:");
    println!();
    for row in &canvas {
        println!("  {}", row.iter().collect::<String>());
    }
    println!();
    for (tile, letter) in placements.iter().zip((b'A'..).map(char::from)) {
        let item = &PANTRY[tile.index];
        println!(
            "  {letter}: {} ×{} at column {}, row {}",
            item.name, item.quantity, tile.col, tile.row
        );
    }
}
