// Copyright 2026 Sitekeeper Contributors
// SPDX-License-Identifier: Apache-2.0

//! Link integrity checking across the document set.
//!
//! Classifies every extracted `href`/`src` value and verifies that fragment
//! anchors exist in their document and that local targets exist on disk,
//! with a directory → `index.html` fallback. The checker mutates nothing;
//! findings accumulate in scan order.

use crate::docset::Document;
use crate::extract::Scanner;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A single detected link-integrity defect.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Finding {
    /// A `#fragment` reference with no matching `id`/`name` anchor in its
    /// own document.
    FragmentMissing { document: PathBuf, fragment: String },
    /// A reference resolving to a directory that holds no `index.html`.
    DirectoryWithoutIndex {
        document: PathBuf,
        reference: String,
        resolved: PathBuf,
    },
    /// A reference resolving to a file that does not exist.
    FileMissing {
        document: PathBuf,
        reference: String,
        resolved: PathBuf,
    },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FragmentMissing { document, fragment } => write!(
                f,
                "{}: missing anchor '#{}'",
                document.display(),
                fragment
            ),
            Self::DirectoryWithoutIndex {
                document,
                reference,
                resolved,
            } => write!(
                f,
                "{}: '{}' is a directory without index.html ({})",
                document.display(),
                reference,
                resolved.display()
            ),
            Self::FileMissing {
                document,
                reference,
                resolved,
            } => write!(
                f,
                "{}: '{}' does not exist ({})",
                document.display(),
                reference,
                resolved.display()
            ),
        }
    }
}

/// Prefixes marking a reference as external and not checkable locally.
const EXTERNAL_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "//",
    "mailto:",
    "tel:",
    "javascript:",
    "data:",
];

/// Check every reference in every document. Pass iff the result is empty.
pub fn check_documents(root: &Path, docs: &[Document], scanner: &dyn Scanner) -> Vec<Finding> {
    let mut findings = Vec::new();
    for doc in docs {
        let anchors = scanner.anchor_ids(&doc.text);
        for attr in scanner.attr_refs(&doc.text) {
            check_reference(root, doc, &attr.value, &anchors, &mut findings);
        }
    }
    findings
}

/// One-step classification of a single reference value.
fn check_reference(
    root: &Path,
    doc: &Document,
    value: &str,
    anchors: &HashSet<String>,
    findings: &mut Vec<Finding>,
) {
    // Same-document fragments first: a value starting with '#' can never
    // carry an external scheme.
    if let Some(fragment) = value.strip_prefix('#') {
        // Bare "#" points at the top of the document.
        if !fragment.is_empty() && !anchors.contains(fragment) {
            findings.push(Finding::FragmentMissing {
                document: doc.path.clone(),
                fragment: fragment.to_string(),
            });
        }
        return;
    }

    let lower = value.to_ascii_lowercase();
    if EXTERNAL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return;
    }

    // Strip query string and fragment to get the checkable path.
    let clean = value.split(['?', '#']).next().unwrap_or("");
    if clean.is_empty() {
        // e.g. "?page=2" — refers back to the current document.
        return;
    }

    let resolved = if let Some(rooted) = clean.strip_prefix('/') {
        root.join(rooted)
    } else {
        doc.path.parent().unwrap_or(root).join(clean)
    };

    if resolved.is_dir() {
        if !resolved.join("index.html").is_file() {
            findings.push(Finding::DirectoryWithoutIndex {
                document: doc.path.clone(),
                reference: value.to_string(),
                resolved,
            });
        }
    } else if !resolved.exists() {
        findings.push(Finding::FileMissing {
            document: doc.path.clone(),
            reference: value.to_string(),
            resolved,
        });
    }
}
