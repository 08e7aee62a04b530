// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text shaping
//!
//! This module provides the [`shape`] function, which translates one line of
//! text into a sequence of positioned glyphs using the font's current
//! variation coordinates and the given feature list. Cluster formation,
//! substitution and advance computation are rustybuzz's job; this module
//! only converts its font-unit output to pixel positions.
//!
//! This module *does not* perform line-breaking; shape one line at a time.

use crate::conv::DPU;
use crate::face::FaceStore;
use crate::{GlyphId, Vec2};
use easy_cast::Cast;
use rustybuzz::{Feature, UnicodeBuffer};

/// A positioned glyph
///
/// `position` is relative to the line's pen origin on the baseline: the
/// caret advance accumulated so far plus the glyph's shaped offset.
#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    /// Glyph identifier in font
    pub id: GlyphId,
    /// Position of glyph, pixels
    pub position: Vec2,
}

/// One line's shaped output
///
/// Produced fresh for every recomposite; variation state may change the
/// outcome on any frame, so runs are never cached.
#[derive(Clone, Debug)]
pub struct GlyphRun {
    /// Sequence of all glyphs in visual order
    pub glyphs: Vec<Glyph>,
    /// Position of the next glyph, were the run to continue
    pub caret: f32,
}

/// Shape one line of text
///
/// `features` is the active feature list (stylistic sets toggled on and
/// present in the font). `dpem` is the target size in pixels per Em; the
/// face's current variation coordinates apply.
pub(crate) fn shape(face: &FaceStore, text: &str, features: &[Feature], dpem: f32) -> GlyphRun {
    let dpu = DPU(dpem / f32::from(face.units_per_em()));

    let mut buffer = UnicodeBuffer::new();
    buffer.push_str(text);
    let output = rustybuzz::shape(face.rustybuzz(), features, buffer);

    let mut caret = 0.0;
    let mut glyphs = Vec::with_capacity(output.len());
    for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
        let position = Vec2(
            caret + dpu.i32_to_px(pos.x_offset),
            -dpu.i32_to_px(pos.y_offset),
        );
        glyphs.push(Glyph {
            id: GlyphId(info.glyph_id.cast()),
            position,
        });
        caret += dpu.i32_to_px(pos.x_advance);
    }

    GlyphRun { glyphs, caret }
}
