// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that tracks breakpoints and the resolved column count.

use core::num::NonZeroU32;

use crate::breakpoints::Breakpoints;
use crate::style::{StyleSource, parse_columns};

/// Resolves the live column count for a masonry container.
///
/// The resolver holds a fallback count, the last resolved count, and the
/// active breakpoint set. Hosts wire it to their environment:
///
/// - report viewport width changes through
///   [`ColumnResolver::set_viewport_width`] (from a resize observer or
///   media-query listeners) and call [`ColumnResolver::refresh`] when it
///   reports a crossing,
/// - call `refresh` with the container's [`StyleSource`] while the container
///   is mounted, and with `None` once it goes away.
///
/// The resolved count is always positive; every failure mode (missing
/// container, malformed style value) degrades to the previous count or the
/// fallback, never to an error.
#[derive(Debug, Clone)]
pub struct ColumnResolver {
    fallback: NonZeroU32,
    columns: NonZeroU32,
    breakpoints: Breakpoints,
}

impl ColumnResolver {
    /// Creates a resolver that starts at (and falls back to) `fallback`.
    #[must_use]
    pub const fn new(fallback: NonZeroU32) -> Self {
        Self {
            fallback,
            columns: fallback,
            breakpoints: Breakpoints::empty(),
        }
    }

    /// The current column count.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns.get()
    }

    /// The fallback column count.
    #[must_use]
    pub const fn fallback(&self) -> u32 {
        self.fallback.get()
    }

    /// The breakpoints active at the last reported viewport width.
    #[must_use]
    pub const fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Records a new viewport width.
    ///
    /// Returns `true` when any breakpoint threshold toggled; the host should
    /// then [`refresh`](Self::refresh), since the style may resolve to a
    /// different count on the other side of the threshold.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        let active = Breakpoints::at_width(width);
        let crossed = active != self.breakpoints;
        self.breakpoints = active;
        crossed
    }

    /// Re-reads the column count and returns it.
    ///
    /// With a source, the container value is consulted first, then the root
    /// value; when both are missing or malformed the previous count is kept.
    /// With `None` (no mounted container) the resolver resets to the
    /// fallback and observes nothing.
    pub fn refresh<S>(&mut self, source: Option<&S>) -> u32
    where
        S: StyleSource + ?Sized,
    {
        match source {
            None => self.columns = self.fallback,
            Some(source) => {
                let resolved = source
                    .container_value()
                    .and_then(parse_columns)
                    .or_else(|| source.root_value().and_then(parse_columns));
                if let Some(columns) = resolved {
                    self.columns = columns;
                }
            }
        }
        self.columns.get()
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use super::ColumnResolver;
    use crate::breakpoints::Breakpoints;
    use crate::style::StaticStyle;

    fn resolver() -> ColumnResolver {
        ColumnResolver::new(NonZeroU32::new(6).unwrap())
    }

    #[test]
    fn starts_at_the_fallback() {
        let resolver = resolver();
        assert_eq!(resolver.columns(), 6);
        assert_eq!(resolver.fallback(), 6);
        assert_eq!(resolver.breakpoints(), Breakpoints::empty());
    }

    #[test]
    fn container_value_wins_over_root() {
        let mut resolver = resolver();
        let style = StaticStyle::new(Some("4"), Some("8"));
        assert_eq!(resolver.refresh(Some(&style)), 4);

        let style = StaticStyle::new(None, Some("8"));
        assert_eq!(resolver.refresh(Some(&style)), 8);
    }

    #[test]
    fn malformed_values_keep_the_previous_count() {
        let mut resolver = resolver();
        let style = StaticStyle::new(Some("4"), None);
        assert_eq!(resolver.refresh(Some(&style)), 4);

        for bad in ["abc", "-1", "0", ""] {
            let style = StaticStyle::new(Some(bad), None);
            assert_eq!(resolver.refresh(Some(&style)), 4, "value {bad:?}");
        }

        // A malformed container value still falls through to the root.
        let style = StaticStyle::new(Some("abc"), Some("3"));
        assert_eq!(resolver.refresh(Some(&style)), 3);
    }

    #[test]
    fn missing_container_resets_to_the_fallback() {
        let mut resolver = resolver();
        let style = StaticStyle::new(Some("4"), None);
        assert_eq!(resolver.refresh(Some(&style)), 4);
        assert_eq!(resolver.refresh(None::<&StaticStyle<'_>>), 6);
    }

    #[test]
    fn viewport_changes_report_breakpoint_crossings() {
        let mut resolver = resolver();

        // First report from the empty set.
        assert!(resolver.set_viewport_width(1000.0));
        assert_eq!(
            resolver.breakpoints(),
            Breakpoints::XL | Breakpoints::LG
        );

        // Resizes within a band do not toggle anything.
        assert!(!resolver.set_viewport_width(1100.0));

        // Crossing 900 does.
        assert!(resolver.set_viewport_width(899.0));
        assert!(resolver.breakpoints().contains(Breakpoints::MD));

        // And widening back out toggles again.
        assert!(resolver.set_viewport_width(1920.0));
        assert_eq!(resolver.breakpoints(), Breakpoints::empty());
    }
}
