//! Composite Exporter: serializes a word's flag grid into one standalone SVG.
//!
//! # Canvas
//! Fixed 1000×1000. Top-level children, in order:
//! 1. background rect
//! 2. one element per letter (glyph group, image reference, or placeholder group)
//! 3. the word label
//! 4. the watermark
//!
//! Output depends only on the word, the background and the cache contents, so
//! exporting twice with the same inputs yields identical bytes.
//!
//! Cell sizes come from `ItemSizing`, the same policy as the preview, so a lone
//! letter is drawn as a 300-unit cell at (350, 350) rather than a 100-unit one.

use html_escape::encode_double_quoted_attribute;
use serde::Serialize;

use crate::flags::letter::Word;
use crate::flags::palette::BackgroundColor;
use crate::flags::registry::GlyphRegistry;
use crate::fragments::cache::FragmentCache;
use crate::layout::grid::{layout_letters, CanvasPlacement, ItemSizing};
use crate::render::{image_href, resolve_cell, CellContent};

pub const CANVAS_SIZE: u32 = 1000;
pub const WATERMARK: &str = "FLAG SYSTEM V2";
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

const WATERMARK_FILL: &str = "#333333";
const PLACEHOLDER_FILL: &str = "#333333";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedDocument {
    pub filename: String,
    pub content: String,
}

impl ExportedDocument {
    pub fn filename_for(word: &Word) -> String {
        format!("flag-word-v2-{}.svg", word.to_lowercase())
    }
}

pub struct CompositeExporter<'a> {
    registry: &'a GlyphRegistry,
    cache: &'a FragmentCache,
    /// Prefix for `<image href>` fallbacks so the file resolves outside the app.
    image_base_url: Option<&'a str>,
}

impl<'a> CompositeExporter<'a> {
    pub fn new(registry: &'a GlyphRegistry, cache: &'a FragmentCache) -> Self {
        Self {
            registry,
            cache,
            image_base_url: None,
        }
    }

    pub fn with_image_base_url(mut self, base_url: &'a str) -> Self {
        self.image_base_url = Some(base_url);
        self
    }

    pub fn export_document(&self, word: &Word, background: BackgroundColor) -> ExportedDocument {
        let size = CANVAS_SIZE;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\">\n"
        );
        svg.push_str(&format!(
            "  <rect width=\"{size}\" height=\"{size}\" fill=\"{}\"/>\n",
            background.hex()
        ));

        let (spec, items) = layout_letters(word.letters());
        let sizing = ItemSizing::for_spec(&spec);
        let placement = CanvasPlacement::centered(f64::from(size), &sizing);
        let cell = sizing.item_size;

        for item in &items {
            let (x, y) = placement.origin_of(item);
            match resolve_cell(item.letter, self.registry, self.cache) {
                CellContent::Fragment(fragment) => {
                    svg.push_str(&format!(
                        "  <g transform=\"translate({x}, {y}) scale({})\">{}</g>\n",
                        sizing.glyph_scale(),
                        fragment.raw_content
                    ));
                }
                CellContent::Image(path) => {
                    svg.push_str(&format!(
                        "  <image x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" href=\"{}\"/>\n",
                        encode_double_quoted_attribute(&image_href(path, self.image_base_url))
                    ));
                }
                CellContent::Placeholder => {
                    let cx = x + f64::from(cell) / 2.0;
                    let cy = y + f64::from(cell) / 2.0;
                    svg.push_str(&format!(
                        "  <g class=\"placeholder-flag\"><rect x=\"{x}\" y=\"{y}\" width=\"{cell}\" height=\"{cell}\" fill=\"{PLACEHOLDER_FILL}\"/><text x=\"{cx}\" y=\"{cy}\" font-family=\"monospace\" font-size=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\" fill=\"#ffffff\">{}</text></g>\n",
                        cell / 3,
                        item.letter
                    ));
                }
            }
        }

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"48\" font-weight=\"bold\" text-anchor=\"middle\" fill=\"{}\" letter-spacing=\"0.1em\">{word}</text>\n",
            size / 2,
            size - 20,
            background.text_color()
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-size=\"12\" text-anchor=\"end\" fill=\"{WATERMARK_FILL}\">{WATERMARK}</text>\n",
            size - 20,
            size - 10
        ));
        svg.push_str("</svg>\n");

        ExportedDocument {
            filename: ExportedDocument::filename_for(word),
            content: svg,
        }
    }
}
