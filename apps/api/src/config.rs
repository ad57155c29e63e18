use anyhow::{bail, Context, Result};

use crate::flags::letter::{validate_max_length, Letter};

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Static host serving `/flags/<LETTER>.svg`.
    pub asset_base_url: String,
    /// Local asset root. When set, glyphs are read from disk instead of `asset_base_url`.
    pub asset_dir: Option<String>,
    /// Letters the asset host has no glyph for; they render as placeholders.
    pub missing_glyphs: Vec<Letter>,
    pub default_max_word_length: usize,
    /// Fetch the whole alphabet at startup instead of on first use.
    pub prefetch_glyphs: bool,
    /// When set, every export is also written here.
    pub export_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            asset_base_url: env_or("FLAG_ASSET_BASE_URL", "http://localhost:3000"),
            asset_dir: optional_env("FLAG_ASSET_DIR"),
            missing_glyphs: parse_letters(&env_or("FLAG_MISSING_GLYPHS", "")),
            default_max_word_length: parse_max_length(&env_or("DEFAULT_MAX_WORD_LENGTH", "6"))?,
            prefetch_glyphs: parse_bool(&env_or("PREFETCH_GLYPHS", "false"))
                .context("PREFETCH_GLYPHS must be true or false")?,
            export_dir: optional_env("EXPORT_DIR"),
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            asset_base_url: "http://localhost:3000".to_string(),
            asset_dir: None,
            missing_glyphs: Vec::new(),
            default_max_word_length: 6,
            prefetch_glyphs: false,
            export_dir: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_max_length(raw: &str) -> Result<usize> {
    let n = raw
        .trim()
        .parse::<usize>()
        .context("DEFAULT_MAX_WORD_LENGTH must be a number")?;
    validate_max_length(n).context("DEFAULT_MAX_WORD_LENGTH out of range")
}

/// `"Q, X"` → `[Q, X]`. Separators and other non-letters are ignored.
fn parse_letters(raw: &str) -> Vec<Letter> {
    let mut letters: Vec<Letter> = raw.chars().filter_map(Letter::from_char).collect();
    letters.sort_unstable();
    letters.dedup();
    letters
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: {other}"),
    }
}
