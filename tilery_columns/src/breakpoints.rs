// Copyright 2025 the Tilery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed viewport breakpoint table.

use bitflags::bitflags;

/// Max-width thresholds (logical px) at which hosts re-read the column
/// count, widest first. The table is fixed and matches the flag order of
/// [`Breakpoints`].
pub const BREAKPOINT_WIDTHS: [f64; 5] = [1400.0, 1200.0, 900.0, 600.0, 420.0];

bitflags! {
    /// The set of max-width breakpoints a viewport sits at or below.
    ///
    /// A flag is active when `viewport width <= threshold`, so narrower
    /// viewports activate supersets of wider ones.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Breakpoints: u8 {
        /// Viewport is at most 1400px wide.
        const XL = 1 << 0;
        /// Viewport is at most 1200px wide.
        const LG = 1 << 1;
        /// Viewport is at most 900px wide.
        const MD = 1 << 2;
        /// Viewport is at most 600px wide.
        const SM = 1 << 3;
        /// Viewport is at most 420px wide.
        const XS = 1 << 4;
    }
}

impl Breakpoints {
    /// The breakpoints active at the given viewport width.
    #[must_use]
    pub fn at_width(width: f64) -> Self {
        let flags = [Self::XL, Self::LG, Self::MD, Self::SM, Self::XS];
        let mut active = Self::empty();
        for (flag, threshold) in flags.into_iter().zip(BREAKPOINT_WIDTHS) {
            if width <= threshold {
                active |= flag;
            }
        }
        active
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoints;

    #[test]
    fn wide_viewports_activate_nothing() {
        assert_eq!(Breakpoints::at_width(1920.0), Breakpoints::empty());
        assert_eq!(Breakpoints::at_width(1400.1), Breakpoints::empty());
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Breakpoints::at_width(1400.0), Breakpoints::XL);
        assert_eq!(
            Breakpoints::at_width(900.0),
            Breakpoints::XL | Breakpoints::LG | Breakpoints::MD
        );
    }

    #[test]
    fn narrower_viewports_activate_supersets() {
        let phone = Breakpoints::at_width(390.0);
        let tablet = Breakpoints::at_width(800.0);
        assert_eq!(phone, Breakpoints::all());
        assert!(phone.contains(tablet));
    }
}
