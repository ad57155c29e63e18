pub mod health;

use axum::{routing::get, Router};

use crate::flags::handlers as flag_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Word source and palette
        .route("/api/v1/words/random", get(flag_handlers::handle_random_word))
        .route("/api/v1/palette/next", get(flag_handlers::handle_next_color))
        .route("/api/v1/glyphs/:letter", get(flag_handlers::handle_glyph))
        // Layout, preview, export
        .route("/api/v1/grid", get(render_handlers::handle_grid))
        .route("/api/v1/preview", get(render_handlers::handle_preview))
        .route("/api/v1/preview.html", get(render_handlers::handle_preview_html))
        .route("/api/v1/export", get(render_handlers::handle_export))
        .with_state(state)
}
