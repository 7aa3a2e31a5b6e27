//! `sitekeeper check` — verify local links and in-page fragment anchors.
//!
//! Exit status: 0 = no findings, 2 = findings present. Tool failures take
//! the generic error path (exit 1) so the wrapper can tell them apart.

use crate::cli::output::{self, Styled};
use crate::config;
use crate::docset;
use crate::extract::PatternScanner;
use crate::integrity;
use anyhow::Result;
use std::path::Path;

/// Run the check command.
pub async fn run(root: &Path) -> Result<()> {
    let s = Styled::new();

    let docs = docset::load_documents(root)?;
    if docs.is_empty() {
        if output::is_json() {
            output::print_json(&serde_json::json!({
                "documents": 0,
                "total": 0,
                "findings": [],
                "message": "no HTML documents found",
            }));
        } else if !output::is_quiet() {
            eprintln!(
                "  No HTML documents under {}. Nothing to check.",
                root.display()
            );
        }
        return Ok(());
    }

    let scanner = PatternScanner::new(config::DEFAULT_REMOTE_PREFIX);
    let findings = integrity::check_documents(root, &docs, &scanner);

    if output::is_json() {
        output::print_json(&serde_json::json!({
            "documents": docs.len(),
            "total": findings.len(),
            "findings": findings,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
    } else {
        for finding in &findings {
            println!("  {finding}");
        }
        if !output::is_quiet() {
            if findings.is_empty() {
                println!(
                    "  {} {} document(s) checked, no broken links",
                    s.ok_sym(),
                    docs.len()
                );
            } else {
                println!(
                    "  {} {} broken link(s) across {} document(s)",
                    s.fail_sym(),
                    findings.len(),
                    docs.len()
                );
            }
        }
    }

    if !findings.is_empty() {
        std::process::exit(2);
    }
    Ok(())
}
