// Copyright 2026 Sitekeeper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Asset localization: turn remote image references into local files.
//!
//! The URL → local-path mapping is built fully before any document is
//! rewritten and is read-only afterwards. Faults stay per-URL: an
//! unparseable URL or a failed fetch drops that one URL from the mapping
//! and the run continues. An asset already on disk is never re-fetched or
//! overwritten, which makes acquisition idempotent across runs.

pub mod http_client;

use crate::error::ItemError;
use fnv::FnvHasher;
use self::http_client::HttpClient;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::Hasher;
use std::path::Path;
use url::Url;

/// Counters for one localize run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct LocalizeStats {
    /// Distinct remote URLs discovered across the document set.
    pub distinct_urls: usize,
    /// Assets fetched this run.
    pub downloaded: usize,
    /// URLs whose local file already existed.
    pub already_local: usize,
    /// URLs skipped on a per-item fault (bad URL, failed fetch or write).
    pub skipped: usize,
}

enum Acquired {
    Downloaded,
    Existing,
}

/// Builds the URL → local relative path mapping.
pub struct Localizer {
    client: HttpClient,
    /// Repo-relative assets directory, forward slashes.
    assets_dir: String,
}

impl Localizer {
    pub fn new(client: HttpClient, assets_dir: &str) -> Self {
        Self {
            client,
            assets_dir: assets_dir.trim_end_matches('/').to_string(),
        }
    }

    /// Localize a set of distinct remote URLs under `root`.
    ///
    /// The input is a `BTreeSet` and the output a `BTreeMap`: both iterate
    /// in lexicographic URL order, so the result is a function of the URL
    /// set alone, not of the order the URLs were first discovered in.
    pub async fn localize(
        &self,
        root: &Path,
        urls: &BTreeSet<String>,
        stats: &mut LocalizeStats,
    ) -> anyhow::Result<BTreeMap<String, String>> {
        stats.distinct_urls = urls.len();

        let assets_root = root.join(&self.assets_dir);
        std::fs::create_dir_all(&assets_root).map_err(|e| {
            anyhow::anyhow!("cannot create assets directory {}: {e}", assets_root.display())
        })?;

        let mut mapping: BTreeMap<String, String> = BTreeMap::new();
        for raw in urls {
            let outcome = self.localize_one(root, raw).await;
            match outcome {
                Ok((local, Acquired::Downloaded)) => {
                    stats.downloaded += 1;
                    tracing::info!("downloaded {raw} -> {local}");
                    mapping.insert(raw.clone(), local);
                }
                Ok((local, Acquired::Existing)) => {
                    stats.already_local += 1;
                    // Either a previous run fetched it, or two URLs share a
                    // file name and the second aliases onto the first's copy.
                    if mapping.values().any(|v| v == &local) {
                        tracing::warn!("{local} already claimed by another URL; reusing it");
                    }
                    tracing::debug!("already local: {raw} -> {local}");
                    mapping.insert(raw.clone(), local);
                }
                Err(e) => {
                    stats.skipped += 1;
                    tracing::warn!("skipping {raw}: {e}");
                }
            }
        }
        Ok(mapping)
    }

    async fn localize_one(&self, root: &Path, raw: &str) -> Result<(String, Acquired), ItemError> {
        let parsed = Url::parse(raw).map_err(|source| ItemError::InvalidUrl {
            url: raw.to_string(),
            source,
        })?;

        let name = file_name_for(&parsed);
        let local = format!("{}/{}", self.assets_dir, name);
        let dest = root.join(&local);

        if dest.exists() {
            return Ok((local, Acquired::Existing));
        }

        let resp = self
            .client
            .fetch(raw)
            .await
            .map_err(|e| ItemError::Fetch {
                url: raw.to_string(),
                reason: format!("{e:#}"),
            })?;
        if !(200..300).contains(&resp.status) {
            return Err(ItemError::Fetch {
                url: raw.to_string(),
                reason: format!("HTTP {}", resp.status),
            });
        }

        write_asset(&dest, &resp.bytes).map_err(|source| ItemError::Write {
            path: dest.clone(),
            source,
        })?;
        Ok((local, Acquired::Downloaded))
    }
}

/// Derive the local file name from the URL's path component; deterministic
/// placeholder when the path has no final segment, so the mapping never
/// depends on anything but the URL itself.
fn file_name_for(url: &Url) -> String {
    let segment = url
        .path_segments()
        .and_then(|segments| segments.last())
        .unwrap_or("");
    if segment.is_empty() {
        let mut hasher = FnvHasher::default();
        hasher.write(url.as_str().as_bytes());
        format!("asset-{:016x}", hasher.finish())
    } else {
        segment.to_string()
    }
}

/// Write bytes through a tmp sibling then rename, so a failed write never
/// leaves a partial asset visible at the destination.
fn write_asset(dest: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp_name = dest
        .file_name()
        .map(|n| format!("{}.tmp", n.to_string_lossy()))
        .unwrap_or_else(|| "asset.tmp".to_string());
    let tmp = dest.with_file_name(tmp_name);
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_of(raw: &str) -> String {
        file_name_for(&Url::parse(raw).unwrap())
    }

    #[test]
    fn test_file_name_from_last_segment() {
        assert_eq!(name_of("https://img.example.com/a/b/logo.png"), "logo.png");
        assert_eq!(name_of("https://img.example.com/photo.jpg?v=2"), "photo.jpg");
    }

    #[test]
    fn test_placeholder_for_empty_path() {
        let name = name_of("https://img.example.com/");
        assert!(name.starts_with("asset-"));
        assert_eq!(name.len(), "asset-".len() + 16);
        // Deterministic: same URL, same placeholder
        assert_eq!(name, name_of("https://img.example.com/"));
        // Different URL, different placeholder
        assert_ne!(name, name_of("https://other.example.com/"));
    }

    #[test]
    fn test_write_asset_leaves_no_tmp() {
        let dir = tempfile::TempDir::new().unwrap();
        let dest = dir.path().join("logo.png");
        write_asset(&dest, b"png-bytes").unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"png-bytes");
        assert!(!dir.path().join("logo.png.tmp").exists());
    }
}
