// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Stylistic-set inventory
//!
//! Queries which of the numbered stylistic-set features (`ss01`–`ss09`) the
//! font's GSUB table exposes for Latin under the default language system.
//! This is a pure query performed once at startup: a missing table, script
//! or feature is not an error, merely an absent (inert) control.

use skrifa::raw::tables::layout::{LangSys, ScriptList};
use skrifa::raw::types::Tag;
use skrifa::raw::{FontRef, TableProvider};

/// Number of stylistic sets with a key binding (keys 1–9)
pub const MAX_SETS: usize = 9;

const LATIN: Tag = Tag::new(b"latn");

/// Tag bytes for stylistic set `index` (0-based): `ss01`…`ss09`
pub fn set_tag_bytes(index: usize) -> [u8; 4] {
    debug_assert!(index < MAX_SETS);
    let n = (index + 1) as u8;
    [b's', b's', b'0' + n / 10, b'0' + n % 10]
}

/// Tag for stylistic set `index` (0-based)
pub fn set_tag(index: usize) -> Tag {
    Tag::new(&set_tag_bytes(index))
}

/// Which stylistic sets the font exposes
///
/// Immutable after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetInventory {
    present: [bool; MAX_SETS],
}

impl SetInventory {
    /// Scan the font's GSUB table
    pub fn scan(font: &FontRef) -> Self {
        let mut present = [false; MAX_SETS];
        for (index, slot) in present.iter_mut().enumerate() {
            *slot = has_gsub_feature(font, set_tag(index));
        }
        SetInventory { present }
    }

    /// Whether stylistic set `index` (0-based) is available
    #[inline]
    pub fn present(&self, index: usize) -> bool {
        self.present.get(index).copied().unwrap_or(false)
    }

    /// Iterate over the indices of available sets
    pub fn iter_present(&self) -> impl Iterator<Item = usize> + '_ {
        (0..MAX_SETS).filter(|i| self.present[*i])
    }
}

/// Does GSUB expose `feature` for Latin under the default language system?
fn has_gsub_feature(font: &FontRef, feature: Tag) -> bool {
    let Ok(gsub) = font.gsub() else {
        return false;
    };
    let (Ok(script_list), Ok(feature_list)) = (gsub.script_list(), gsub.feature_list()) else {
        return false;
    };
    let Some(lang_sys) = default_latin_lang_sys(&script_list) else {
        return false;
    };

    let records = feature_list.feature_records();
    lang_sys.feature_indices().iter().any(|index| {
        records
            .get(usize::from(index.get()))
            .is_some_and(|rec| rec.feature_tag() == feature)
    })
}

/// The Latin script's default language system, if any
fn default_latin_lang_sys<'a>(script_list: &ScriptList<'a>) -> Option<LangSys<'a>> {
    let index = script_list.index_for_tag(LATIN)?;
    let record = script_list.script_records().get(usize::from(index))?;
    let script = record.script(script_list.offset_data()).ok()?;
    match script.default_lang_sys() {
        Some(Ok(lang_sys)) => Some(lang_sys),
        _ => None,
    }
}
