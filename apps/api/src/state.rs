use std::sync::Arc;

use crate::config::Config;
use crate::flags::registry::GlyphRegistry;
use crate::fragments::cache::FragmentCache;
use crate::render::sink::DocumentSink;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<GlyphRegistry>,
    /// Process-wide glyph cache; filled lazily as words reference letters.
    pub fragments: Arc<FragmentCache>,
    /// Extra delivery target for exports (configured via EXPORT_DIR).
    pub export_sink: Option<Arc<dyn DocumentSink>>,
}

impl AppState {
    /// Base joined onto image fallbacks. Assets read from disk keep their raw path.
    pub fn image_base_url(&self) -> Option<&str> {
        self.config
            .asset_dir
            .is_none()
            .then_some(self.config.asset_base_url.as_str())
    }
}
