mod config;
mod errors;
mod flags;
mod fragments;
mod layout;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::flags::letter::ALPHABET;
use crate::flags::registry::GlyphRegistry;
use crate::fragments::{DirFragmentSource, FragmentCache, FragmentSource, HttpFragmentSource};
use crate::render::sink::{DirectorySink, DocumentSink};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Flag System API v{}", env!("CARGO_PKG_VERSION"));

    // Glyph registry and fragment source
    let registry = Arc::new(GlyphRegistry::standard().without(&config.missing_glyphs));
    let available = ALPHABET.iter().filter(|&&l| registry.has_flag(l)).count();
    info!("Glyph registry ready: {available}/26 letters have assets");
    let source: Arc<dyn FragmentSource> = match &config.asset_dir {
        Some(dir) => {
            info!("Reading glyph assets from {dir}");
            Arc::new(DirFragmentSource::new(dir))
        }
        None => {
            info!("Fetching glyph assets from {}", config.asset_base_url);
            Arc::new(HttpFragmentSource::new(config.asset_base_url.clone())?)
        }
    };
    let fragments = Arc::new(FragmentCache::new(registry.clone(), source));

    if config.prefetch_glyphs {
        let warm = fragments.clone();
        tokio::spawn(async move { warm.prefetch_all().await });
        info!("Glyph prefetch started");
    }

    let export_sink: Option<Arc<dyn DocumentSink>> = config.export_dir.as_ref().map(|dir| {
        info!("Exports will also be written to {dir}");
        Arc::new(DirectorySink::new(dir)) as Arc<dyn DocumentSink>
    });

    // Build app state
    let state = AppState {
        config: config.clone(),
        registry,
        fragments,
        export_sink,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
