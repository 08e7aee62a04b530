// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout and compositing pipeline
//!
//! [`compose`] turns the session's text and current variation state into a
//! finished [`Frame`]: each line is shaped independently, then every glyph
//! is rastered and blended over the background with a flat tint. Nothing is
//! cached between frames; composing twice with unchanged state yields
//! pixel-identical output.

use crate::conv::to_usize;
use crate::features::set_tag_bytes;
use crate::raster::{raster, Sprite};
use crate::shaper::shape;
use crate::{Rgb, Session, Vec2};
use rustybuzz::Feature;
use smallvec::SmallVec;
use ttf_parser::Tag;

/// Nominal text size, points (1pt = 1px at scale factor 1)
pub const POINT_SIZE: f32 = 24.0;
/// Line height as a multiple of the point size
const LEADING: f32 = 1.3;
/// Pen origin of every line, logical pixels
const LEFT_MARGIN: f32 = 50.0;
/// Baseline of the first line, logical pixels
const TOP_MARGIN: f32 = 80.0;
/// Frame clear colour (white), XRGB
const BACKGROUND: u32 = 0x00FF_FFFF;

/// Split text into lines on hard break boundaries
///
/// A line ends at `\n` or at end-of-text; content after the final break is
/// still a line, as is the empty remainder after a trailing break. The
/// result is a lazy, finite sequence covering the whole input in order.
pub fn lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}

/// Baseline pen origin of line `index`, physical pixels
///
/// Every line starts at the same left margin; lines are separated
/// vertically by the fixed line height. `scale` is the display's pixel
/// density (physical pixels per logical pixel).
pub fn line_origin(index: usize, scale: f32) -> Vec2 {
    let line_height = POINT_SIZE * LEADING * scale;
    Vec2(
        LEFT_MARGIN * scale,
        TOP_MARGIN * scale + index as f32 * line_height,
    )
}

/// A CPU frame buffer, XRGB row-major
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Frame {
    /// Construct with all pixels cleared to the background
    pub fn new(width: u32, height: u32) -> Self {
        Frame {
            width,
            height,
            pixels: vec![BACKGROUND; to_usize(width) * to_usize(height)],
        }
    }

    /// Resize, discarding contents
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(to_usize(width) * to_usize(height), BACKGROUND);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, row major
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn clear(&mut self, colour: u32) {
        self.pixels.fill(colour);
    }

    /// Blend a coverage sprite over the frame with a flat tint
    ///
    /// Source-over with the sprite's coverage as premultiplied alpha:
    /// `out = tint·cov + dst·(1−cov)` per channel. Pixels outside the frame
    /// are clipped.
    fn blend(&mut self, x: i32, y: i32, sprite: &Sprite, tint: Rgb) {
        for row in 0..sprite.size.1 {
            let py = y + row as i32;
            if py < 0 || py >= self.height as i32 {
                continue;
            }
            for col in 0..sprite.size.0 {
                let px = x + col as i32;
                if px < 0 || px >= self.width as i32 {
                    continue;
                }
                let cov = u32::from(sprite.data[to_usize(row * sprite.size.0 + col)]);
                let index = to_usize(py as u32 * self.width + px as u32);
                let dst = self.pixels[index];
                let r = (u32::from(tint.r) * cov + ((dst >> 16) & 0xFF) * (255 - cov)) / 255;
                let g = (u32::from(tint.g) * cov + ((dst >> 8) & 0xFF) * (255 - cov)) / 255;
                let b = (u32::from(tint.b) * cov + (dst & 0xFF) * (255 - cov)) / 255;
                self.pixels[index] = (r << 16) | (g << 8) | b;
            }
        }
    }
}

/// Recomposite the whole frame from the current session state
///
/// Applies the current axis coordinates, builds the active feature list,
/// then shapes, rasters and blends each line. `scale` is the display's
/// pixel density; the frame is cleared first.
pub fn compose(session: &mut Session, frame: &mut Frame, scale: f32) {
    let Session {
        face,
        sets,
        state,
        text,
        tint,
    } = session;

    face.set_variations(state.coords);

    // Enabled and present sets, each applied over the whole run
    let mut features = SmallVec::<[Feature; crate::features::MAX_SETS]>::new();
    for index in sets.iter_present() {
        if state.enabled[index] {
            features.push(Feature::new(Tag::from_bytes(&set_tag_bytes(index)), 1, ..));
        }
    }

    let dpem = POINT_SIZE * scale;
    frame.clear(BACKGROUND);

    for (index, line) in lines(text).enumerate() {
        let origin = line_origin(index, scale);
        let run = shape(face, line, &features, dpem);
        for glyph in &run.glyphs {
            let position = origin + glyph.position;
            if let Some(sprite) = raster(face.ab_glyph(), *glyph, dpem, position) {
                let x = position.0.floor() as i32 + sprite.offset.0;
                let y = position.1.floor() as i32 + sprite.offset.1;
                frame.blend(x, y, &sprite, *tint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_splitting() {
        assert_eq!(lines("no break").collect::<Vec<_>>(), ["no break"]);
        assert_eq!(lines("a\nb").collect::<Vec<_>>(), ["a", "b"]);
        // A trailing break leaves an empty final line, which still occupies
        // vertical space.
        assert_eq!(lines("a\n").collect::<Vec<_>>(), ["a", ""]);
        assert_eq!(lines("a\n\nb").collect::<Vec<_>>(), ["a", "", "b"]);
    }

    #[test]
    fn line_origins() {
        let scale = 2.0;
        let first = line_origin(0, scale);
        let second = line_origin(1, scale);
        assert_eq!(first.0, second.0);
        assert_eq!(second.1 - first.1, POINT_SIZE * LEADING * scale);
    }

    #[test]
    fn blend_full_and_zero_coverage() {
        let mut frame = Frame::new(2, 1);
        let sprite = Sprite {
            offset: (0, 0),
            size: (2, 1),
            data: vec![255, 0],
        };
        let tint = Rgb { r: 0x10, g: 0x20, b: 0x30 };
        frame.blend(0, 0, &sprite, tint);
        assert_eq!(frame.pixels()[0], 0x0010_2030);
        assert_eq!(frame.pixels()[1], BACKGROUND);
    }

    #[test]
    fn blend_clips_to_frame() {
        let mut frame = Frame::new(1, 1);
        let sprite = Sprite {
            offset: (0, 0),
            size: (3, 3),
            data: vec![255; 9],
        };
        frame.blend(-1, -1, &sprite, Rgb::BLACK);
        assert_eq!(frame.pixels()[0], 0);
    }

    #[test]
    fn resize_clears() {
        let mut frame = Frame::new(1, 1);
        let sprite = Sprite {
            offset: (0, 0),
            size: (1, 1),
            data: vec![255],
        };
        frame.blend(0, 0, &sprite, Rgb::BLACK);
        frame.resize(2, 2);
        assert!(frame.pixels().iter().all(|px| *px == BACKGROUND));
    }
}
