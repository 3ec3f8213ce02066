// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tilery Columns: responsive column-count resolution for masonry grids.
//!
//! The column count of a masonry grid is configuration, not layout: it lives
//! in the host's style system and changes with the viewport. This crate
//! keeps only the *policy* — the breakpoint threshold table, change
//! detection, and the container→root→fallback resolution chain — and leaves
//! observer registration (resize observers, media-query listeners) to the
//! host.
//!
//! The core concepts are:
//!
//! - [`Breakpoints`]: the set of fixed max-width thresholds the viewport
//!   currently sits at or below.
//! - [`StyleSource`]: the host seam for reading the raw column-count style
//!   value from a grid container and from the document root.
//! - [`ColumnResolver`]: a small controller holding the fallback count, the
//!   last resolved count, and the active breakpoint set.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::num::NonZeroU32;
//! use tilery_columns::{ColumnResolver, StaticStyle};
//!
//! let mut resolver = ColumnResolver::new(NonZeroU32::new(6).unwrap());
//!
//! // The host reports viewport changes; a toggled breakpoint means the
//! // style may now resolve differently and should be re-read.
//! let crossed = resolver.set_viewport_width(880.0);
//! assert!(crossed);
//!
//! let style = StaticStyle::new(Some("4"), None);
//! assert_eq!(resolver.refresh(Some(&style)), 4);
//!
//! // Malformed values keep the previous count; a gone container resets
//! // to the fallback.
//! let style = StaticStyle::new(Some("abc"), None);
//! assert_eq!(resolver.refresh(Some(&style)), 4);
//! assert_eq!(resolver.refresh(None::<&StaticStyle<'_>>), 6);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod breakpoints;
mod resolver;
mod style;

pub use breakpoints::{BREAKPOINT_WIDTHS, Breakpoints};
pub use resolver::ColumnResolver;
pub use style::{COLUMN_PROPERTY, StaticStyle, StyleSource, parse_columns};
