//! Run configuration for the localize and check pipelines.
//!
//! Resolution order: command-line flag, then `SITEKEEPER_*` environment
//! variable, then built-in default.

use std::path::PathBuf;

/// Remote image host the site's documents hot-link from.
pub const DEFAULT_REMOTE_PREFIX: &str = "https://raw.githubusercontent.com/";

/// Where localized images land, relative to the project root.
pub const DEFAULT_ASSETS_DIR: &str = "assets/images";

/// Bound on the single fetch attempt per asset.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Options for one `localize` run.
#[derive(Debug, Clone)]
pub struct LocalizeConfig {
    /// Project root holding the HTML document set.
    pub root: PathBuf,
    /// URL prefix identifying remote images to localize.
    pub remote_prefix: String,
    /// Assets directory, relative to the root, forward slashes.
    pub assets_dir: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Commit label surfaced back to the orchestration wrapper. The core
    /// accepts it and echoes it; it changes nothing else.
    pub commit_message: Option<String>,
}

impl LocalizeConfig {
    pub fn resolve(
        root: PathBuf,
        remote_prefix: Option<String>,
        assets_dir: Option<String>,
        timeout_ms: Option<u64>,
        commit_message: Option<String>,
    ) -> Self {
        Self {
            root,
            remote_prefix: remote_prefix
                .or_else(|| read_env_string("SITEKEEPER_REMOTE_PREFIX"))
                .unwrap_or_else(|| DEFAULT_REMOTE_PREFIX.to_string()),
            assets_dir: assets_dir
                .or_else(|| read_env_string("SITEKEEPER_ASSETS_DIR"))
                .unwrap_or_else(|| DEFAULT_ASSETS_DIR.to_string()),
            timeout_ms: timeout_ms
                .unwrap_or_else(|| read_env_u64("SITEKEEPER_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)),
            commit_message,
        }
    }
}

fn read_env_u64(name: &str, default_value: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default_value)
}

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
