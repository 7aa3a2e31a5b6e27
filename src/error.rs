//! Per-item fault taxonomy for the localize pipeline.
//!
//! Every variant is scoped to a single URL or file: it is logged and the
//! item skipped, never escalated to abort the batch.

use std::path::PathBuf;
use thiserror::Error;

/// A fault affecting one URL or one file.
#[derive(Debug, Error)]
pub enum ItemError {
    /// A discovered URL failed to parse as a URI.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The single fetch attempt for an asset failed (transport error or
    /// non-success status). Not retried.
    #[error("fetch failed for '{url}': {reason}")]
    Fetch { url: String, reason: String },

    /// A local disk write failed.
    #[error("write failed for '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
