//! Vector Fragment Cache: lazy, memoized, write-once per letter.
//!
//! # Lifecycle
//! Each letter owns one `OnceCell`. The first `resolve` for a letter runs the
//! fetch and parks the outcome in the cell; concurrent callers for the same
//! letter wait on that single fetch. The outcome is either `Loaded` or `Failed`
//! and never changes afterwards: no retry, no invalidation.
//!
//! Failures are logged and swallowed. To every reader a failed letter looks
//! exactly like a letter that was never loaded.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Serialize;
use tokio::sync::OnceCell;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::flags::letter::{Letter, ALPHABET};
use crate::flags::registry::GlyphRegistry;
use crate::fragments::source::{FragmentError, FragmentSource};

/// Inner markup of one glyph, in the glyph's native 1080×1080 space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorFragment {
    pub letter: Letter,
    pub raw_content: String,
}

#[derive(Debug)]
enum FragmentState {
    Loaded(VectorFragment),
    Failed,
}

/// Observable state of one letter's cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FragmentStatus {
    /// Not requested yet, or the fetch is still in flight.
    Pending,
    Loaded,
    Failed,
}

pub struct FragmentCache {
    registry: Arc<GlyphRegistry>,
    source: Arc<dyn FragmentSource>,
    cells: [OnceCell<FragmentState>; 26],
}

impl FragmentCache {
    pub fn new(registry: Arc<GlyphRegistry>, source: Arc<dyn FragmentSource>) -> Self {
        Self {
            registry,
            source,
            cells: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    /// Synchronous peek used by the renderers. Pending and failed both read as a miss.
    pub fn get(&self, letter: Letter) -> Option<&VectorFragment> {
        match self.cells[letter.index()].get() {
            Some(FragmentState::Loaded(fragment)) => Some(fragment),
            _ => None,
        }
    }

    pub fn status(&self, letter: Letter) -> FragmentStatus {
        match self.cells[letter.index()].get() {
            None => FragmentStatus::Pending,
            Some(FragmentState::Loaded(_)) => FragmentStatus::Loaded,
            Some(FragmentState::Failed) => FragmentStatus::Failed,
        }
    }

    /// Loads `letter` on first use and returns its fragment, if it loaded.
    pub async fn resolve(&self, letter: Letter) -> Option<&VectorFragment> {
        let state = self.cells[letter.index()]
            .get_or_init(|| self.load(letter))
            .await;
        match state {
            FragmentState::Loaded(fragment) => Some(fragment),
            FragmentState::Failed => None,
        }
    }

    /// Resolves every distinct letter concurrently.
    pub async fn resolve_letters(self: &Arc<Self>, letters: &[Letter]) {
        let mut distinct = letters.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let mut tasks = JoinSet::new();
        for letter in distinct {
            let cache = Arc::clone(self);
            tasks.spawn(async move {
                cache.resolve(letter).await;
            });
        }
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                warn!("fragment task did not complete: {e}");
            }
        }
    }

    /// Eagerly resolves the whole alphabet.
    pub async fn prefetch_all(self: &Arc<Self>) {
        self.resolve_letters(&ALPHABET).await;
        let loaded = ALPHABET
            .iter()
            .filter(|&&l| self.status(l) == FragmentStatus::Loaded)
            .count();
        debug!("glyph prefetch finished: {loaded}/26 loaded");
    }

    async fn load(&self, letter: Letter) -> FragmentState {
        let meta = self.registry.letter_to_flag(letter);
        let Some(path) = meta.available_path() else {
            debug!("no glyph asset for {letter}, skipping fetch");
            return FragmentState::Failed;
        };

        let outcome = match self.source.fetch(path).await {
            Ok(text) => extract_inner_markup(&text)
                .map(str::to_string)
                .ok_or_else(|| FragmentError::Parse {
                    path: path.to_string(),
                }),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(raw_content) => {
                debug!("loaded glyph fragment for {letter} ({} bytes)", raw_content.len());
                FragmentState::Loaded(VectorFragment { letter, raw_content })
            }
            Err(e) => {
                warn!("Error loading SVG for {letter}: {e}");
                FragmentState::Failed
            }
        }
    }
}

/// Content strictly between the outer `<svg …>` and `</svg>` tags.
pub fn extract_inner_markup(svg_text: &str) -> Option<&str> {
    static SVG_BODY: OnceLock<Regex> = OnceLock::new();
    let re = SVG_BODY.get_or_init(|| {
        Regex::new(r"(?is)<svg[^>]*>(.*?)</svg>").expect("svg body pattern is valid")
    });
    re.captures(svg_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::fragments::source::{FragmentError, FragmentSource};

    /// In-memory source keyed by asset path. Unknown paths answer 404.
    #[derive(Default)]
    pub struct StaticSource {
        pub files: HashMap<String, String>,
        pub calls: AtomicUsize,
    }

    impl StaticSource {
        pub fn with(mut self, path: &str, body: &str) -> Self {
            self.files.insert(path.to_string(), body.to_string());
            self
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl FragmentSource for StaticSource {
        async fn fetch(&self, path: &str) -> Result<String, FragmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| FragmentError::Status {
                    path: path.to_string(),
                    status: 404,
                })
        }
    }

    pub fn glyph_svg(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 1080 1080\">{body}</svg>\n"
        )
    }
}
