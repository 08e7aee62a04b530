// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Font face store
//!
//! The session operates on a single font face, viewed through each of the
//! libraries this crate collaborates with: `ttf-parser`/`rustybuzz` for
//! shaping, `ab_glyph` for rasterization and `skrifa` for variable-font
//! metadata (axis records, named instances, GSUB features). All views share
//! one buffer loaded at startup and kept for the life of the process.

use crate::axis::{self, Axis};
use std::path::Path;
use thiserror::Error;
use ttf_parser::Face;

/// Font loading errors
///
/// Any of these is an unrecoverable startup condition; nothing is retried.
#[derive(Error, Debug)]
pub enum FaceError {
    #[error("cannot read font file")]
    Io(#[from] std::io::Error),
    #[error("font parse error")]
    TtfParser(#[from] ttf_parser::FaceParsingError),
    #[error("font parse error")]
    AbGlyph(#[from] ab_glyph::InvalidFont),
    #[error("font parse error")]
    Skrifa(#[from] skrifa::raw::ReadError),
}

/// A loaded font face, viewed through each collaborator library
pub struct FaceStore {
    face: Face<'static>,
    rustybuzz: rustybuzz::Face<'static>,
    ab_glyph: ab_glyph::FontRef<'static>,
    skrifa: skrifa::FontRef<'static>,
    axes: [Axis; 3],
}

impl FaceStore {
    /// Load a font from a file path
    pub fn open(path: &Path) -> Result<Self, FaceError> {
        // The single session font lives until process exit; leaking the
        // buffer gives every library view a 'static borrow.
        let data: &'static [u8] = Box::leak(std::fs::read(path)?.into_boxed_slice());
        Self::from_data(data)
    }

    /// Construct from font data with static lifetime
    pub fn from_data(data: &'static [u8]) -> Result<Self, FaceError> {
        let face = Face::parse(data, 0)?;
        let rustybuzz = rustybuzz::Face::from_face(face.clone());
        let ab_glyph = ab_glyph::FontRef::try_from_slice_and_index(data, 0)?;
        let skrifa = skrifa::FontRef::new(data)?;

        let axes = [
            read_axis(&skrifa, &axis::WEIGHT),
            read_axis(&skrifa, &axis::WIDTH),
            read_axis(&skrifa, &axis::SLANT),
        ];

        Ok(FaceStore {
            face,
            rustybuzz,
            ab_glyph,
            skrifa,
            axes,
        })
    }

    /// The three controlled axes, in `WGHT`/`WDTH`/`SLNT` order
    #[inline]
    pub fn axes(&self) -> &[Axis; 3] {
        &self.axes
    }

    /// Apply the current axis coordinates to the shaping and raster views
    ///
    /// Must be called before shaping or rasterizing whenever the variation
    /// state may have changed. Coordinates for axes the font lacks are
    /// silently dropped by both libraries.
    pub fn set_variations(&mut self, coords: [i32; 3]) {
        let mut vars = [rustybuzz::Variation {
            tag: ttf_parser::Tag(0),
            value: 0.0,
        }; 3];
        for (var, (axis, coord)) in vars.iter_mut().zip(self.axes.iter().zip(coords)) {
            var.tag = axis.tag();
            var.value = coord as f32;
        }
        self.rustybuzz.set_variations(&vars);

        for (axis, coord) in self.axes.iter().zip(coords) {
            ab_glyph::VariableFont::set_variation(
                &mut self.ab_glyph,
                axis.tag_bytes(),
                coord as f32,
            );
        }
    }

    /// Access the [`rustybuzz`] view
    #[inline]
    pub fn rustybuzz(&self) -> &rustybuzz::Face<'static> {
        &self.rustybuzz
    }

    /// Access the [`ab_glyph`] view
    #[inline]
    pub fn ab_glyph(&self) -> &ab_glyph::FontRef<'static> {
        &self.ab_glyph
    }

    /// Access the [`skrifa`] view
    #[inline]
    pub fn skrifa(&self) -> &skrifa::FontRef<'static> {
        &self.skrifa
    }

    /// Font units per Em
    #[inline]
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }
}

/// Build the [`Axis`] model for one axis domain
///
/// Reads the declared range and every named instance's coordinate on the
/// axis from the font's variation tables; values are truncated to integer
/// design units.
fn read_axis(font: &skrifa::FontRef, domain: &axis::AxisDomain) -> Axis {
    use skrifa::raw::types::Tag;
    use skrifa::MetadataProvider;

    let tag = Tag::new(&domain.tag);
    let Some(record) = font.axes().iter().find(|a| a.tag() == tag) else {
        log::debug!("font does not declare axis {tag}");
        return Axis::absent(domain);
    };

    let samples: Vec<i32> = font
        .named_instances()
        .iter()
        .filter_map(|instance| instance.user_coords().nth(record.index()))
        .map(|coord| coord as i32)
        .collect();

    Axis::declared(
        domain,
        record.min_value() as i32,
        record.max_value() as i32,
        record.default_value() as i32,
        samples,
    )
}
