// Glyph fragment loading: where SVG assets come from and the per-letter cache over them.
// Fetch/parse failures never leave this module; callers only ever see a cache miss.

pub mod cache;
pub mod source;

pub use cache::FragmentCache;
pub use source::{DirFragmentSource, FragmentSource, HttpFragmentSource};
