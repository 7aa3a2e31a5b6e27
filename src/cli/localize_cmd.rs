//! `sitekeeper localize` — download remote images and rewrite documents to
//! reference the local copies.

use crate::cli::output::{self, Styled};
use crate::config::LocalizeConfig;
use crate::docset;
use crate::extract::{PatternScanner, Scanner};
use crate::localize::http_client::HttpClient;
use crate::localize::{LocalizeStats, Localizer};
use crate::rewrite;
use anyhow::Result;
use std::collections::BTreeSet;

/// Run the localize command.
pub async fn run(cfg: &LocalizeConfig) -> Result<()> {
    let s = Styled::new();

    let mut docs = docset::load_documents(&cfg.root)?;
    if docs.is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "documents": 0,
                "rewritten": 0,
                "message": "no HTML documents found",
            }));
        } else if !output::is_quiet() {
            eprintln!(
                "  No HTML documents under {}. Nothing to do.",
                cfg.root.display()
            );
        }
        return Ok(());
    }

    if let Some(msg) = &cfg.commit_message {
        tracing::debug!("commit label from wrapper: {msg}");
    }

    // Collect the distinct remote URL set across all documents.
    let scanner = PatternScanner::new(&cfg.remote_prefix);
    let mut urls: BTreeSet<String> = BTreeSet::new();
    for doc in &docs {
        for url in scanner.remote_urls(&doc.text) {
            urls.insert(url);
        }
    }

    if !output::is_quiet() && !output::is_json() {
        eprintln!(
            "  {} document(s), {} distinct remote image(s)",
            docs.len(),
            urls.len()
        );
    }

    let client = HttpClient::new(cfg.timeout_ms);
    let localizer = Localizer::new(client, &cfg.assets_dir);
    let mut stats = LocalizeStats::default();
    let mapping = localizer.localize(&cfg.root, &urls, &mut stats).await?;

    for doc in docs.iter_mut() {
        rewrite::apply_mapping(doc, &mapping);
    }
    let (written, write_failed) = rewrite::persist_modified(&mut docs);

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "documents": docs.len(),
            "distinct_urls": stats.distinct_urls,
            "downloaded": stats.downloaded,
            "already_local": stats.already_local,
            "skipped": stats.skipped,
            "rewritten": written,
            "write_failures": write_failed,
            "commit_message": cfg.commit_message,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
        return Ok(());
    }

    if !output::is_quiet() {
        eprintln!();
        eprintln!(
            "  {} {} downloaded, {} already local, {} skipped",
            s.ok_sym(),
            stats.downloaded,
            stats.already_local,
            stats.skipped
        );
        eprintln!("  {} {} document(s) rewritten", s.ok_sym(), written);
        if write_failed > 0 {
            eprintln!("  {} {} document write(s) failed", s.warn_sym(), write_failed);
        }
        if let Some(msg) = &cfg.commit_message {
            eprintln!("  Commit label for the wrapper: {msg}");
        }
    }

    Ok(())
}
