// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam for reading the column-count style value.

use core::num::NonZeroU32;

/// Name of the style property carrying the column count, for hosts backed
/// by CSS-like custom properties.
pub const COLUMN_PROPERTY: &str = "--masonry-columns";

/// Source of the raw column-count style value.
///
/// Implementations read [`COLUMN_PROPERTY`] (or their own equivalent) from
/// the grid container and from the document root; the resolver consults
/// them in that order. Both reads are optional — returning `None` means the
/// property is not set at that level.
pub trait StyleSource {
    /// Raw property value on the grid container, if set.
    fn container_value(&self) -> Option<&str>;

    /// Raw property value on the document root, if set.
    fn root_value(&self) -> Option<&str>;
}

/// A [`StyleSource`] over fixed string values, for tests and demos.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticStyle<'a> {
    container: Option<&'a str>,
    root: Option<&'a str>,
}

impl<'a> StaticStyle<'a> {
    /// Creates a source from optional container and root values.
    #[must_use]
    pub const fn new(container: Option<&'a str>, root: Option<&'a str>) -> Self {
        Self { container, root }
    }
}

impl StyleSource for StaticStyle<'_> {
    fn container_value(&self) -> Option<&str> {
        self.container
    }

    fn root_value(&self) -> Option<&str> {
        self.root
    }
}

/// Parses a column-count style value into a positive integer.
///
/// The value is trimmed and parsed as a decimal integer; non-numeric and
/// non-positive values yield `None` so callers can fall back.
#[must_use]
pub fn parse_columns(value: &str) -> Option<NonZeroU32> {
    let parsed: u32 = value.trim().parse().ok()?;
    NonZeroU32::new(parsed)
}

#[cfg(test)]
mod tests {
    use super::{StaticStyle, StyleSource, parse_columns};

    #[test]
    fn numeric_values_parse() {
        assert_eq!(parse_columns("4").map(|n| n.get()), Some(4));
        assert_eq!(parse_columns("  12 ").map(|n| n.get()), Some(12));
    }

    #[test]
    fn non_positive_and_malformed_values_are_rejected() {
        assert_eq!(parse_columns("0"), None);
        assert_eq!(parse_columns("-1"), None);
        assert_eq!(parse_columns("abc"), None);
        assert_eq!(parse_columns(""), None);
        assert_eq!(parse_columns("4.5"), None);
    }

    #[test]
    fn static_style_exposes_both_levels() {
        let style = StaticStyle::new(Some("3"), Some("6"));
        assert_eq!(style.container_value(), Some("3"));
        assert_eq!(style.root_value(), Some("6"));
        assert_eq!(StaticStyle::default().container_value(), None);
    }
}
