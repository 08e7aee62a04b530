// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Variation state and input controller
//!
//! [`VarState`] is the single piece of mutable state driving rendering: the
//! current coordinate on each controlled axis plus a toggle per stylistic
//! set. It has one writer (the input controller, via [`VarState::apply`])
//! and one reader (the layout pipeline) per frame.

use crate::axis::Axis;
use crate::features::{SetInventory, MAX_SETS};

/// Index of the weight axis in [`VarState::coords`]
pub const WGHT: usize = 0;
/// Index of the width axis
pub const WDTH: usize = 1;
/// Index of the slant axis
pub const SLNT: usize = 2;

/// A discrete control event
///
/// Axis variants carry the coordinate index (`WGHT`/`WDTH`/`SLNT`);
/// `ToggleSet` carries a 0-based stylistic-set index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    /// Step an axis up by its increment, clamped to the axis maximum
    Increment(usize),
    /// Step an axis down by its increment, clamped to the axis minimum
    Decrement(usize),
    /// Flip a stylistic set on/off (ignored if the font lacks it)
    ToggleSet(usize),
}

/// Current variation coordinates and stylistic-set toggles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VarState {
    /// Design-space coordinate per controlled axis, indexed by `WGHT`/`WDTH`/`SLNT`
    pub coords: [i32; 3],
    /// Toggle per stylistic set; only meaningful where the inventory has the set
    pub enabled: [bool; MAX_SETS],
}

impl VarState {
    /// Initial state: each axis at its (clamped) default, all sets off
    pub fn new(axes: &[Axis; 3]) -> Self {
        VarState {
            coords: [axes[WGHT].default, axes[WDTH].default, axes[SLNT].default],
            enabled: [false; MAX_SETS],
        }
    }

    /// Apply one control event; returns true if rendering state changed
    ///
    /// Controls targeting an axis the font does not declare, or a stylistic
    /// set the font does not expose, are no-ops and return false (clean):
    /// they must not trigger a redraw.
    pub fn apply(&mut self, axes: &[Axis; 3], sets: &SetInventory, control: Control) -> bool {
        match control {
            Control::Increment(i) => {
                if !axes[i].present {
                    return false;
                }
                self.coords[i] = axes[i].clamp(self.coords[i] + axes[i].step);
                true
            }
            Control::Decrement(i) => {
                if !axes[i].present {
                    return false;
                }
                self.coords[i] = axes[i].clamp(self.coords[i] - axes[i].step);
                true
            }
            Control::ToggleSet(i) => {
                if !sets.present(i) {
                    return false;
                }
                self.enabled[i] = !self.enabled[i];
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis;

    fn test_axes() -> [Axis; 3] {
        [
            Axis::declared(&axis::WEIGHT, 100, 900, 400, [300, 400, 700]),
            Axis::declared(&axis::WIDTH, 50, 100, 100, [50, 75, 100]),
            Axis::absent(&axis::SLANT),
        ]
    }

    #[test]
    fn initial_coords_are_defaults() {
        let axes = test_axes();
        let state = VarState::new(&axes);
        assert_eq!(state.coords, [400, 100, 0]);
        assert!(state.enabled.iter().all(|e| !e));
    }

    #[test]
    fn increments_stay_in_bounds() {
        let axes = test_axes();
        let mut state = VarState::new(&axes);
        let sets = SetInventory::default();

        for _ in 0..100 {
            state.apply(&axes, &sets, Control::Increment(WGHT));
        }
        assert_eq!(state.coords[WGHT], 900);

        for _ in 0..100 {
            state.apply(&axes, &sets, Control::Decrement(WGHT));
        }
        assert_eq!(state.coords[WGHT], 100);
    }

    #[test]
    fn step_not_dividing_range_still_clamps() {
        // width step 25 from samples {50, 75, 100} (default 100): distances
        // {50, 25, 0}, GCD 25; 100 - 25·2 = 50, a third decrement clamps.
        let axes = test_axes();
        assert_eq!(axes[WDTH].step, 25);
        let mut state = VarState::new(&axes);
        let sets = SetInventory::default();

        for _ in 0..3 {
            assert!(state.apply(&axes, &sets, Control::Decrement(WDTH)));
        }
        assert_eq!(state.coords[WDTH], 50);
    }

    #[test]
    fn absent_axis_is_inert() {
        let axes = test_axes();
        let mut state = VarState::new(&axes);
        let sets = SetInventory::default();

        assert!(!state.apply(&axes, &sets, Control::Increment(SLNT)));
        assert!(!state.apply(&axes, &sets, Control::Decrement(SLNT)));
        assert_eq!(state.coords[SLNT], 0);
    }

    #[test]
    fn absent_set_toggle_is_clean() {
        let axes = test_axes();
        let mut state = VarState::new(&axes);
        let sets = SetInventory::default();

        let before = state.enabled;
        assert!(!state.apply(&axes, &sets, Control::ToggleSet(0)));
        assert_eq!(state.enabled, before);
    }
}
