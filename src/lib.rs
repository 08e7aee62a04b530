// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Interactive variable-font viewer
//!
//! Opens one font and one fixed text buffer, then lets the user walk the
//! font's weight, width and slant axes and toggle stylistic sets while the
//! shaped, rastered text updates live. See [`Session`] for the state tying
//! the pieces together and [`app::run`] for the interactive loop.

mod conv;

mod data;
pub use data::*;

pub mod app;
pub mod axis;
pub mod display;
pub mod face;
pub mod features;
pub mod state;

pub(crate) mod raster;
pub(crate) mod shaper;
pub use shaper::{Glyph, GlyphRun};

use face::FaceStore;
use features::SetInventory;
use state::{Control, VarState};

/// State of one interactive session
///
/// Owns the font face, the immutable startup queries (axis model, set
/// inventory) and the mutable variation state. The input controller writes
/// through [`Session::control`]; the pipeline reads everything in
/// [`display::compose`]. Accesses never overlap: the session is driven by
/// one event at a time.
pub struct Session {
    pub face: FaceStore,
    pub sets: SetInventory,
    pub state: VarState,
    pub text: String,
    pub tint: Rgb,
}

impl Session {
    /// Construct, performing the startup queries
    pub fn new(face: FaceStore, text: String, tint: Rgb) -> Self {
        let sets = SetInventory::scan(face.skrifa());
        let state = VarState::new(face.axes());

        let [wght, wdth, slnt] = face.axes();
        log::info!(
            "axis ranges  wght:{}-{}  wdth:{}-{}  slnt:{}-{}",
            wght.min,
            wght.max,
            wdth.min,
            wdth.max,
            slnt.min,
            slnt.max
        );
        let present: Vec<String> = sets
            .iter_present()
            .map(|i| format!("ss{:02}", i + 1))
            .collect();
        if present.is_empty() {
            log::info!("no stylistic sets present");
        } else {
            log::info!("stylistic sets present: {}", present.join(" "));
        }

        Session {
            face,
            sets,
            state,
            text,
            tint,
        }
    }

    /// Apply one control event; returns true if a redraw is needed
    pub fn control(&mut self, control: Control) -> bool {
        self.state.apply(self.face.axes(), &self.sets, control)
    }
}
