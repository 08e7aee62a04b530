// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Variation axis model
//!
//! An [`Axis`] describes one continuous design axis of a variable font in
//! integer design-space units, together with the increment applied per key
//! press. The increment is inferred from the coordinates of the font's named
//! instances: fonts declaring discrete weight stops (100, 200, …, 900) get a
//! step landing exactly on those stops, while a font with no informative
//! instances gets a fine step suited to a continuous axis.

use ttf_parser::Tag;

/// Minimum number of usable named-instance samples for GCD inference
///
/// Below this, or when the GCD degenerates to the full axis range, the axis
/// is assumed continuous and [`FINE_STEP_DIVISOR`] applies.
const MIN_STEP_SAMPLES: usize = 3;

/// Step divisor for a continuous axis: 1% of the range
const FINE_STEP_DIVISOR: i32 = 100;

/// Step divisor for an axis the font does not declare: 5% of the fallback range
const ABSENT_STEP_DIVISOR: i32 = 20;

/// Static description of an axis the viewer controls
///
/// Provides the tag to look up plus domain-standard fallbacks used when the
/// font does not declare the axis. `standard_default` is the design-space
/// value a freshly opened font should display at, where one exists.
pub struct AxisDomain {
    pub tag: [u8; 4],
    fallback_min: i32,
    fallback_max: i32,
    fallback_default: i32,
    standard_default: Option<i32>,
}

/// Weight: 100–900, opening at regular (400)
pub const WEIGHT: AxisDomain = AxisDomain {
    tag: *b"wght",
    fallback_min: 100,
    fallback_max: 900,
    fallback_default: 400,
    standard_default: Some(400),
};

/// Width: 50–100, opening at normal (100)
pub const WIDTH: AxisDomain = AxisDomain {
    tag: *b"wdth",
    fallback_min: 50,
    fallback_max: 100,
    fallback_default: 100,
    standard_default: Some(100),
};

/// Slant: -15–0, opening upright
pub const SLANT: AxisDomain = AxisDomain {
    tag: *b"slnt",
    fallback_min: -15,
    fallback_max: 0,
    fallback_default: 0,
    standard_default: None,
};

/// One continuous variation axis
///
/// Invariants (established by the constructors, never violated after):
/// `min ≤ default ≤ max` and `step ≥ 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    tag: [u8; 4],
    /// Whether the font's variation table declares this axis
    pub present: bool,
    /// Range and initial value, integer design-space units
    pub min: i32,
    pub max: i32,
    pub default: i32,
    /// Increment applied per key press
    pub step: i32,
}

impl Axis {
    /// Construct for a font which does not declare the axis
    ///
    /// Controls for such an axis are inert; the range is recorded only so
    /// that state initialization has something sensible to report.
    pub fn absent(domain: &AxisDomain) -> Self {
        let range = domain.fallback_max - domain.fallback_min;
        Axis {
            tag: domain.tag,
            present: false,
            min: domain.fallback_min,
            max: domain.fallback_max,
            default: domain.fallback_default,
            step: (range / ABSENT_STEP_DIVISOR).max(1),
        }
    }

    /// Construct from a declared axis record and named-instance samples
    ///
    /// `min`, `max` and `default` are the font's declared values; `samples`
    /// yields the coordinate of each named instance on this axis, in any
    /// order. Fixed-point values must already be truncated to integers.
    pub fn declared(
        domain: &AxisDomain,
        min: i32,
        max: i32,
        default: i32,
        samples: impl IntoIterator<Item = i32>,
    ) -> Self {
        let step = derive_step(min, max, default, samples);

        // Open at the standard default where the axis has one, so that an
        // oddly-defaulted font does not start in a degenerate visual state.
        let default = match domain.standard_default {
            Some(std) => std.clamp(min, max),
            None => default,
        };

        Axis {
            tag: domain.tag,
            present: true,
            min,
            max,
            default,
            step,
        }
    }

    /// The axis tag, e.g. `wght`
    #[inline]
    pub fn tag(&self) -> Tag {
        Tag::from_bytes(&self.tag)
    }

    #[inline]
    pub(crate) fn tag_bytes(&self) -> &[u8; 4] {
        &self.tag
    }

    /// Clamp a coordinate to the declared range
    #[inline]
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Infer the per-press increment from named-instance coordinates
///
/// Takes the GCD of each in-range sample's distance from the axis default;
/// the first sample's distance seeds the accumulator. Too few samples, or a
/// GCD equal to the whole range, imply the instances carry no discrete-stop
/// information and the axis is treated as continuous.
fn derive_step(min: i32, max: i32, default: i32, samples: impl IntoIterator<Item = i32>) -> i32 {
    let mut acc = 0;
    let mut count = 0;
    for coord in samples {
        if coord < min || coord > max {
            continue;
        }
        let dist = (coord - default).abs();
        acc = if count == 0 { dist } else { gcd(acc, dist) };
        count += 1;
    }

    let range = max - min;
    if count < MIN_STEP_SAMPLES || acc == range {
        acc = (range / FINE_STEP_DIVISOR).max(1);
    }

    // Unreachable under correct input; a zero step would freeze the axis.
    acc.max(1)
}

/// Greatest common divisor over non-negative inputs
fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(100, 300), 100);
        assert_eq!(gcd(300, 100), 100);
        assert_eq!(gcd(800, 800), 800);
    }

    #[test]
    fn step_from_discrete_stops() {
        // Three instances at 300/400/700 on a 100–900 axis defaulting to
        // 400: distances {100, 0, 300}, GCD 100.
        assert_eq!(derive_step(100, 900, 400, [300, 400, 700]), 100);
    }

    #[test]
    fn step_falls_back_on_few_samples() {
        // One sample is not enough to infer stops: 1% of a range of 50.
        assert_eq!(derive_step(50, 100, 100, [75]), 1);
    }

    #[test]
    fn step_falls_back_on_degenerate_gcd() {
        // GCD spans the whole range: treat as continuous, 1% of 800.
        assert_eq!(derive_step(100, 900, 100, [100, 900, 900]), 8);
    }

    #[test]
    fn step_ignores_out_of_range_samples() {
        // The out-of-range instance (1000) is not counted, leaving only two
        // usable samples, so the continuous fallback applies.
        assert_eq!(derive_step(100, 900, 400, [300, 700, 1000]), 8);
    }

    #[test]
    fn step_is_deterministic() {
        let a = derive_step(100, 900, 400, [100, 400, 700, 900]);
        let b = derive_step(100, 900, 400, [100, 400, 700, 900]);
        assert_eq!(a, b);
    }

    #[test]
    fn absent_axis_uses_fallbacks() {
        let ax = Axis::absent(&WIDTH);
        assert!(!ax.present);
        assert_eq!((ax.min, ax.max, ax.default), (50, 100, 100));
        assert_eq!(ax.step, 2); // (100 - 50) / 20
        assert!(ax.min <= ax.default && ax.default <= ax.max);
        assert!(ax.step >= 1);

        let slnt = Axis::absent(&SLANT);
        assert_eq!(slnt.step, 1); // 15 / 20 rounds to 0, floored to 1
    }

    #[test]
    fn declared_axis_opens_at_standard_default() {
        // A font defaulting to black weight still opens at 400.
        let ax = Axis::declared(&WEIGHT, 100, 900, 900, [100, 400, 900]);
        assert_eq!(ax.default, 400);

        // If 400 is out of range, the nearest bound wins.
        let ax = Axis::declared(&WEIGHT, 500, 900, 700, [500, 700, 900]);
        assert_eq!(ax.default, 500);

        // Slant has no standard default; the declared one is kept.
        let ax = Axis::declared(&SLANT, -15, 0, -5, []);
        assert_eq!(ax.default, -5);
    }

    #[test]
    fn invariants_hold() {
        for ax in [
            Axis::absent(&WEIGHT),
            Axis::absent(&SLANT),
            Axis::declared(&WEIGHT, 100, 900, 400, [300, 400, 700]),
            Axis::declared(&WIDTH, 50, 200, 50, []),
            Axis::declared(&SLANT, -15, 0, 0, [-15, -10, -5, 0]),
        ] {
            assert!(ax.min <= ax.default && ax.default <= ax.max);
            assert!(ax.step >= 1);
        }
    }
}
