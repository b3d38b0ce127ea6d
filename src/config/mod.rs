//! Application configuration.
//!
//! Priority (highest to lowest):
//!   1. CLI / env — passed as `Some(value)` from clap
//!   2. TOML file at `{data_dir}/config.toml`
//!   3. Built-in defaults
//!
//! Nothing user-entered is ever written back; the config file only carries
//! service endpoints and credentials.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-lite-latest";
const DEFAULT_PAYPAL_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
const DEFAULT_MIN_PROCESSING_MS: u64 = 3500;

/// Fixed checkout amount. The hosted checkout is parameterized, not the
/// product.
pub const PRICE: &str = "5.00";
pub const CURRENCY: &str = "USD";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub gemini_api_key: String,
    pub paypal_base_url: String,
    pub paypal_client_id: String,
    pub paypal_secret: String,
    /// Minimum time the processing screen stays visible.
    pub min_processing_ms: u64,
    pub log: String,
}

/// Raw shape of `config.toml`. Every field optional — the file is an
/// override layer, not a schema.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    gemini_base_url: Option<String>,
    gemini_model: Option<String>,
    gemini_api_key: Option<String>,
    paypal_base_url: Option<String>,
    paypal_client_id: Option<String>,
    paypal_secret: Option<String>,
    min_processing_ms: Option<u64>,
    log: Option<String>,
}

impl AppConfig {
    /// Build config from CLI/env args + optional TOML file.
    pub fn new(
        data_dir: Option<PathBuf>,
        gemini_api_key: Option<String>,
        paypal_client_id: Option<String>,
        paypal_secret: Option<String>,
        log: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);
        let toml = load_toml(&data_dir).unwrap_or_default();

        Self {
            gemini_base_url: toml
                .gemini_base_url
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            gemini_model: toml
                .gemini_model
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_key: gemini_api_key.or(toml.gemini_api_key).unwrap_or_default(),
            paypal_base_url: toml
                .paypal_base_url
                .unwrap_or_else(|| DEFAULT_PAYPAL_BASE_URL.to_string()),
            paypal_client_id: paypal_client_id
                .or(toml.paypal_client_id)
                .unwrap_or_default(),
            paypal_secret: paypal_secret.or(toml.paypal_secret).unwrap_or_default(),
            min_processing_ms: toml.min_processing_ms.unwrap_or(DEFAULT_MIN_PROCESSING_MS),
            log: log.or(toml.log).unwrap_or_else(|| "info".to_string()),
        }
    }
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(|h| PathBuf::from(h).join(".soulcode"))
        .unwrap_or_else(|| PathBuf::from(".soulcode"))
}

/// Read and parse `{data_dir}/config.toml`. Missing file is fine; a broken
/// file is reported and ignored.
fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let raw = std::fs::read_to_string(&path).ok()?;
    match toml::from_str(&raw) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            warn!(path = %path.display(), "ignoring malformed config.toml: {e}");
            None
        }
    }
}
