//! Letter → glyph lookup.
//!
//! Pure table lookup, no I/O. Every letter of the alphabet has an entry; a host
//! that ships without some assets marks those entries `exists = false` and both
//! renderers switch to their placeholder for that letter.

use serde::Serialize;

use crate::flags::letter::{Letter, ALPHABET};

/// Directory (relative to the asset root) holding one `<LETTER>.svg` per glyph.
pub const FLAG_ASSET_DIR: &str = "flags";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphMetadata {
    pub letter: Letter,
    /// Asset path for the glyph's vector file, e.g. `/flags/A.svg`.
    pub flag_path: String,
    pub exists: bool,
}

impl GlyphMetadata {
    /// The path to reference, or `None` when the glyph has no asset.
    pub fn available_path(&self) -> Option<&str> {
        self.exists.then_some(self.flag_path.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct GlyphRegistry {
    entries: Vec<GlyphMetadata>,
}

impl GlyphRegistry {
    /// All 26 glyphs present at `/flags/<LETTER>.svg`.
    pub fn standard() -> Self {
        let entries = ALPHABET
            .iter()
            .map(|&letter| GlyphMetadata {
                letter,
                flag_path: format!("/{FLAG_ASSET_DIR}/{letter}.svg"),
                exists: true,
            })
            .collect();
        Self { entries }
    }

    /// Marks the given letters as having no renderable asset.
    pub fn without(mut self, missing: &[Letter]) -> Self {
        for letter in missing {
            self.entries[letter.index()].exists = false;
        }
        self
    }

    pub fn letter_to_flag(&self, letter: Letter) -> &GlyphMetadata {
        &self.entries[letter.index()]
    }

    /// Character-level lookup for raw input. `None` for anything outside A–Z.
    pub fn lookup_char(&self, c: char) -> Option<&GlyphMetadata> {
        Letter::from_char(c).map(|letter| self.letter_to_flag(letter))
    }

    pub fn has_flag(&self, letter: Letter) -> bool {
        self.letter_to_flag(letter).exists
    }
}
