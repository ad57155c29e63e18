//! Interactive grid renderer.
//!
//! Produces a serializable cell model (for clients that draw the grid
//! themselves) and an HTML rendition of the same model. Sizes come straight
//! from `ItemSizing`, the same policy the exporter uses.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::flags::letter::Word;
use crate::flags::registry::GlyphRegistry;
use crate::fragments::cache::FragmentCache;
use crate::layout::grid::{layout_letters, GridItem, GridSpec, ItemSizing};
use crate::render::{image_href, resolve_cell, CellContent};

const PLACEHOLDER_BG: &str = "#333";

#[derive(Debug, Clone, Serialize)]
pub struct PreviewGrid {
    pub word: Word,
    pub spec: GridSpec,
    pub sizing: ItemSizing,
    pub cells: Vec<PreviewCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewCell {
    #[serde(flatten)]
    pub item: GridItem,
    pub content: PreviewContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewContent {
    InlineSvg { markup: String },
    Image { src: String, alt: String },
    Placeholder { text: String, font_size_rem: u8 },
}

/// `image_base_url` is joined onto fallback image paths exactly as the exporter does.
pub fn render_preview(
    word: &Word,
    registry: &GlyphRegistry,
    cache: &FragmentCache,
    image_base_url: Option<&str>,
) -> PreviewGrid {
    let (spec, items) = layout_letters(word.letters());
    let sizing = ItemSizing::for_spec(&spec);
    let size = sizing.item_size;

    let cells = items
        .into_iter()
        .map(|item| {
            let content = match resolve_cell(item.letter, registry, cache) {
                CellContent::Fragment(fragment) => PreviewContent::InlineSvg {
                    markup: format!(
                        "<svg width=\"{size}\" height=\"{size}\" viewBox=\"0 0 1080 1080\" xmlns=\"http://www.w3.org/2000/svg\">{}</svg>",
                        fragment.raw_content
                    ),
                },
                CellContent::Image(path) => PreviewContent::Image {
                    src: image_href(path, image_base_url),
                    alt: format!("Flag for {}", item.letter),
                },
                CellContent::Placeholder => PreviewContent::Placeholder {
                    text: item.letter.to_string(),
                    font_size_rem: if spec.single_letter { 4 } else { 2 },
                },
            };
            PreviewCell { item, content }
        })
        .collect();

    PreviewGrid {
        word: word.clone(),
        spec,
        sizing,
        cells,
    }
}

impl PreviewGrid {
    /// CSS-grid markup of the preview.
    pub fn to_html(&self) -> String {
        let size = self.sizing.item_size;
        let mut html = format!(
            "<div class=\"flags-container\">\n<div class=\"flags-grid\" style=\"display: grid; grid-template-columns: repeat({}, {size}px); width: {}px; gap: 0; margin: 0 auto\">\n",
            self.spec.columns, self.sizing.container_width
        );

        for cell in &self.cells {
            let style = if cell.item.is_trailing_odd {
                " style=\"grid-column: 1 / 2; justify-self: start\""
            } else {
                ""
            };
            html.push_str(&format!("<div class=\"flag-item\"{style}>"));
            match &cell.content {
                PreviewContent::InlineSvg { markup } => {
                    html.push_str(&format!(
                        "<div class=\"native-svg-container\" style=\"width: {size}px; height: {size}px; position: relative\">{markup}</div>"
                    ));
                }
                PreviewContent::Image { src, alt } => {
                    html.push_str(&format!(
                        "<img src=\"{}\" alt=\"{}\" width=\"{size}\" height=\"{size}\" style=\"display: block\">",
                        encode_double_quoted_attribute(src),
                        encode_double_quoted_attribute(alt)
                    ));
                }
                PreviewContent::Placeholder {
                    text,
                    font_size_rem,
                } => {
                    html.push_str(&format!(
                        "<div class=\"placeholder-flag\" style=\"width: {size}px; height: {size}px; font-size: {font_size_rem}rem; display: flex; align-items: center; justify-content: center; background-color: {PLACEHOLDER_BG}; color: white\">{}</div>",
                        encode_text(text)
                    ));
                }
            }
            html.push_str("</div>\n");
        }

        html.push_str("</div>\n</div>\n");
        html
    }
}
