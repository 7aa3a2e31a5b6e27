//! Document set loading and persistence.
//!
//! The document set is the fixed collection of `*.html` files directly under
//! the project root. Enumeration is deliberately non-recursive; pages in
//! subdirectories are link *targets*, not members of the set.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// One HTML document, loaded once per run.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path of the file on disk.
    pub path: PathBuf,
    /// Text content as loaded at pipeline start.
    pub original: String,
    /// Current text content, mutated in place by the rewriter.
    pub text: String,
}

impl Document {
    /// True once the current text diverges from what was loaded.
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Write the current text back through a tmp sibling and rename, so a
    /// partial write is never visible at the document's path.
    pub fn persist(&self) -> std::io::Result<()> {
        let tmp = self.path.with_extension("html.tmp");
        std::fs::write(&tmp, &self.text)?;
        std::fs::rename(&tmp, &self.path)
    }

    /// File name for report lines.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Load every `*.html` directly under `root`, sorted by path so runs over
/// the same tree always see the same scan order.
pub fn load_documents(root: &Path) -> Result<Vec<Document>> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("cannot read project root {}", root.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_html = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("html"))
            .unwrap_or(false);
        if path.is_file() && is_html {
            paths.push(path);
        }
    }
    paths.sort();

    let mut docs = Vec::with_capacity(paths.len());
    for path in paths {
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        docs.push(Document {
            path,
            original: text.clone(),
            text,
        });
    }
    Ok(docs)
}
