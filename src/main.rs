// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use vf_viewer::face::FaceStore;
use vf_viewer::{app, Rgb, Session};

/// Demonstration text: mixed case, digits and punctuation so that weight,
/// width, slant and stylistic-set changes are all visible at once.
const DISPLAY_TEXT: &str = "I left to join a vigorous rowing crew in July 2023, logging 4,321\n\
    strokes — 0 excuses, 1 goal, 2 oars, 3 victories, and great Growth (01234).";

#[derive(Parser)]
#[command(version, about = "Interactive variable-font viewer.

Keys: Q/A step weight, W/S step width, E/D step slant,
1-9 toggle stylistic sets ss01-ss09, Esc quits.")]
struct Cli {
    /// Path to a font file (TTF/OTF)
    font: PathBuf,

    /// Text colour as RRGGBB hex
    #[arg(default_value = "000000")]
    colour: Rgb,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let face = FaceStore::open(&cli.font)?;
    let session = Session::new(face, DISPLAY_TEXT.to_string(), cli.colour);
    app::run(session)?;
    Ok(())
}
