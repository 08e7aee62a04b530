// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Support for rastering glyphs
//!
//! Glyphs are rastered one at a time with `ab_glyph` at the face's current
//! variation coordinates. There is no sprite cache: variation state can
//! change the outline on every frame, so each [`Sprite`] lives only for the
//! duration of one compositing step.

use crate::{Glyph, Vec2};
use ab_glyph::Font;
use easy_cast::*;

/// A rastered sprite
#[derive(Debug, PartialEq, Eq)]
pub struct Sprite {
    /// Offset from the glyph's integer pen position to the bitmap origin
    pub offset: (i32, i32),
    /// Size of the sprite in pixels
    pub size: (u32, u32),
    /// Coverage image, row major order, length `size.0 * size.1`
    pub data: Vec<u8>,
}

/// Raster a glyph
///
/// `position` is the glyph's absolute pen position; its fractional part is
/// used for sub-pixel placement and the returned offset is relative to its
/// integer part. Returns `None` when there is nothing to draw (whitespace
/// and other empty glyphs): the caller advances the pen but draws nothing.
pub(crate) fn raster(font: &ab_glyph::FontRef, glyph: Glyph, dpem: f32, position: Vec2) -> Option<Sprite> {
    let upem = font.units_per_em()?;
    let scale = dpem * font.height_unscaled() / upem;
    let glyph = ab_glyph::Glyph {
        id: ab_glyph::GlyphId(glyph.id.0),
        scale: scale.into(),
        position: ab_glyph::point(position.0.fract(), position.1.fract()),
    };
    let outline = font.outline_glyph(glyph)?;

    let bounds = outline.px_bounds();
    let offset = (bounds.min.x.cast_trunc(), bounds.min.y.cast_trunc());
    let size = bounds.max - bounds.min;
    let size = (u32::conv_trunc(size.x), u32::conv_trunc(size.y));
    if size.0 == 0 || size.1 == 0 {
        return None; // nothing to draw
    }

    let mut data = vec![0; usize::conv(size.0 * size.1)];
    outline.draw(|x, y, c| {
        // Convert to u8 with saturating conversion, rounding down:
        data[usize::conv((y * size.0) + x)] = (c * 256.0) as u8;
    });

    Some(Sprite { offset, size, data })
}
