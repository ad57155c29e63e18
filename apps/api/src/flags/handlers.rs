use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::flags::dictionary::get_random_word;
use crate::flags::letter::{validate_max_length, Word, WordError};
use crate::flags::palette::{pick_different, BackgroundColor};
use crate::flags::registry::GlyphMetadata;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RandomWordQuery {
    pub max_length: Option<usize>,
}

#[derive(Serialize)]
pub struct RandomWordResponse {
    pub word: Word,
    /// Reveal sequence for clients that type the word out letter by letter.
    pub prefixes: Vec<String>,
}

#[derive(Deserialize)]
pub struct NextColorQuery {
    pub current: Option<String>,
}

#[derive(Serialize)]
pub struct ColorResponse {
    pub background: BackgroundColor,
    pub hex: &'static str,
    pub text_color: &'static str,
}

impl From<BackgroundColor> for ColorResponse {
    fn from(c: BackgroundColor) -> Self {
        ColorResponse {
            background: c,
            hex: c.hex(),
            text_color: c.text_color(),
        }
    }
}

/// GET /api/v1/words/random
pub async fn handle_random_word(
    State(state): State<AppState>,
    Query(params): Query<RandomWordQuery>,
) -> Result<Json<RandomWordResponse>, AppError> {
    let max_length =
        validate_max_length(params.max_length.unwrap_or(state.config.default_max_word_length))?;
    let word = get_random_word(max_length, &mut fastrand::Rng::new()).ok_or(WordError::Empty)?;
    Ok(Json(RandomWordResponse {
        prefixes: word.prefixes(),
        word,
    }))
}

/// GET /api/v1/palette/next
pub async fn handle_next_color(
    Query(params): Query<NextColorQuery>,
) -> Result<Json<ColorResponse>, AppError> {
    let current = match params.current.as_deref() {
        Some(raw) => raw.parse::<BackgroundColor>()?,
        None => BackgroundColor::default(),
    };
    let next = pick_different(current, &BackgroundColor::ALL, &mut fastrand::Rng::new())
        .unwrap_or(current);
    Ok(Json(next.into()))
}

/// GET /api/v1/glyphs/:letter
pub async fn handle_glyph(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<GlyphMetadata>, AppError> {
    let mut chars = raw.chars();
    let glyph = match (chars.next(), chars.next()) {
        (Some(c), None) => state.registry.lookup_char(c).cloned(),
        _ => None,
    };
    glyph
        .map(Json)
        .ok_or_else(|| AppError::Validation(format!("not a single letter: {raw:?}")))
}
