// Letter-level building blocks: input normalization, glyph lookup, word source, palette.
// Only `handlers` touches HTTP; I/O for glyph assets lives in `fragments`.

pub mod dictionary;
pub mod handlers;
pub mod letter;
pub mod palette;
pub mod registry;

