// Two renderers over one layout: the interactive preview grid and the standalone SVG export.
// Both pick per-letter content through `resolve_cell`, so fallbacks always match.

pub mod export;
pub mod handlers;
pub mod preview;
pub mod sink;

use crate::flags::letter::Letter;
use crate::flags::registry::GlyphRegistry;
use crate::fragments::cache::{FragmentCache, VectorFragment};

/// What a grid cell shows for one letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Cached glyph markup, drawn inline.
    Fragment(&'a VectorFragment),
    /// Glyph asset exists but its markup is not cached; reference the file.
    Image(&'a str),
    /// No glyph asset at all; draw the letter itself.
    Placeholder,
}

pub fn resolve_cell<'a>(
    letter: Letter,
    registry: &'a GlyphRegistry,
    cache: &'a FragmentCache,
) -> CellContent<'a> {
    match registry.letter_to_flag(letter).available_path() {
        Some(path) => match cache.get(letter) {
            Some(fragment) => CellContent::Fragment(fragment),
            None => CellContent::Image(path),
        },
        None => CellContent::Placeholder,
    }
}

/// Link for an `Image` cell. With a base URL the asset path is joined onto it,
/// so the preview and the export point at the same file.
pub fn image_href(path: &str, base_url: Option<&str>) -> String {
    match base_url {
        Some(base) => format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        ),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::fragments::cache::testing::{glyph_svg, StaticSource};

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_cell_fallback_order() {
        let registry = Arc::new(GlyphRegistry::standard().without(&[letter('X')]));
        let source = StaticSource::default().with("/flags/A.svg", &glyph_svg("<g/>"));
        let cache = FragmentCache::new(registry.clone(), Arc::new(source));
        cache.resolve(letter('A')).await;
        cache.resolve(letter('B')).await;

        assert!(matches!(
            resolve_cell(letter('A'), &registry, &cache),
            CellContent::Fragment(f) if f.raw_content == "<g/>"
        ));
        assert_eq!(
            resolve_cell(letter('B'), &registry, &cache),
            CellContent::Image("/flags/B.svg")
        );
        assert_eq!(
            resolve_cell(letter('C'), &registry, &cache),
            CellContent::Image("/flags/C.svg")
        );
        assert_eq!(resolve_cell(letter('X'), &registry, &cache), CellContent::Placeholder);
    }

    #[test]
    fn test_image_href_joins_base_url() {
        assert_eq!(image_href("/flags/U.svg", None), "/flags/U.svg");
        assert_eq!(
            image_href("/flags/U.svg", Some("http://localhost:3000/")),
            "http://localhost:3000/flags/U.svg"
        );
        assert_eq!(
            image_href("/flags/U.svg", Some("https://cdn.example/assets")),
            "https://cdn.example/assets/flags/U.svg"
        );
    }
}
