use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    Json,
};
use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::flags::letter::{validate_max_length, Word};
use crate::flags::palette::BackgroundColor;
use crate::layout::grid::{layout_letters, GridItem, GridSpec, ItemSizing};
use crate::render::export::{CompositeExporter, SVG_MEDIA_TYPE};
use crate::render::preview::{render_preview, PreviewGrid};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WordQuery {
    pub word: String,
    pub background: Option<String>,
    pub max_length: Option<usize>,
}

#[derive(Serialize)]
pub struct GridResponse {
    pub spec: GridSpec,
    pub sizing: ItemSizing,
    pub items: Vec<GridItem>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub background: &'static str,
    pub text_color: &'static str,
    pub grid: PreviewGrid,
}

/// Normalizes the word and background of a request. Empty words are rejected here.
fn parse_request(state: &AppState, q: &WordQuery) -> Result<(Word, BackgroundColor), AppError> {
    let max_length = validate_max_length(q.max_length.unwrap_or(state.config.default_max_word_length))?;
    let word = Word::parse(&q.word, max_length)?;
    let background = match q.background.as_deref() {
        Some(raw) => raw.parse::<BackgroundColor>()?,
        None => BackgroundColor::default(),
    };
    Ok((word, background))
}

/// GET /api/v1/grid
pub async fn handle_grid(
    State(state): State<AppState>,
    Query(q): Query<WordQuery>,
) -> Result<Json<GridResponse>, AppError> {
    let (word, _) = parse_request(&state, &q)?;
    let (spec, items) = layout_letters(word.letters());
    Ok(Json(GridResponse {
        sizing: ItemSizing::for_spec(&spec),
        spec,
        items,
    }))
}

/// GET /api/v1/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Query(q): Query<WordQuery>,
) -> Result<Json<PreviewResponse>, AppError> {
    let (word, background) = parse_request(&state, &q)?;
    state.fragments.resolve_letters(word.letters()).await;
    Ok(Json(PreviewResponse {
        background: background.hex(),
        text_color: background.text_color(),
        grid: render_preview(&word, &state.registry, &state.fragments, state.image_base_url()),
    }))
}

/// GET /api/v1/preview.html
pub async fn handle_preview_html(
    State(state): State<AppState>,
    Query(q): Query<WordQuery>,
) -> Result<Html<String>, AppError> {
    let (word, background) = parse_request(&state, &q)?;
    state.fragments.resolve_letters(word.letters()).await;
    let grid = render_preview(&word, &state.registry, &state.fragments, state.image_base_url());

    Ok(Html(format!(
        "<div class=\"flag-canvas\" style=\"width: 1000px; height: 1000px; background: {}; position: relative; display: flex; flex-direction: column; justify-content: center; align-items: center\">\n{}<div style=\"position: absolute; bottom: 1rem; width: 100%; text-align: center\"><span style=\"color: {}; font-family: monospace; font-size: 2.25rem; font-weight: bold; letter-spacing: 0.1em\">{}</span></div>\n</div>\n",
        background.hex(),
        grid.to_html(),
        background.text_color(),
        encode_text(&word.to_string())
    )))
}

/// GET /api/v1/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(q): Query<WordQuery>,
) -> Result<Response, AppError> {
    let (word, background) = parse_request(&state, &q)?;
    state.fragments.resolve_letters(word.letters()).await;

    let mut exporter = CompositeExporter::new(&state.registry, &state.fragments);
    if let Some(base_url) = state.image_base_url() {
        exporter = exporter.with_image_base_url(base_url);
    }
    let doc = exporter.export_document(&word, background);

    if let Some(sink) = &state.export_sink {
        let location = sink.deliver(&doc).await?;
        info!("Export for {word} ({} letters) delivered to {location}", word.len());
    }

    Ok((
        [
            (header::CONTENT_TYPE, SVG_MEDIA_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", doc.filename),
            ),
        ],
        doc.content,
    )
        .into_response())
}
