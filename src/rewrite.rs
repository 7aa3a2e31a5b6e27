//! Apply the URL → local-path mapping to loaded documents.

use crate::docset::Document;
use std::collections::BTreeMap;

/// Replace every mapped remote URL with its local relative path.
///
/// Entries are applied in the map's own lexicographic order. The targets
/// are disjoint literal strings, so order cannot change the result, but a
/// fixed order keeps runs reproducible. Returns true when the document
/// text now differs from what was loaded.
pub fn apply_mapping(doc: &mut Document, mapping: &BTreeMap<String, String>) -> bool {
    for (remote, local) in mapping {
        if doc.text.contains(remote.as_str()) {
            doc.text = doc.text.replace(remote.as_str(), local);
        }
    }
    doc.is_modified()
}

/// Persist every modified document. A write failure is logged and the rest
/// of the batch still lands. Returns (written, failed).
pub fn persist_modified(docs: &mut [Document]) -> (usize, usize) {
    let mut written = 0usize;
    let mut failed = 0usize;
    for doc in docs.iter() {
        if !doc.is_modified() {
            continue;
        }
        match doc.persist() {
            Ok(()) => {
                written += 1;
                tracing::info!("updated {}", doc.path.display());
            }
            Err(e) => {
                failed += 1;
                tracing::warn!("write failed for {}: {e}", doc.path.display());
            }
        }
    }
    (written, failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn doc(text: &str) -> Document {
        Document {
            path: PathBuf::from("page.html"),
            original: text.to_string(),
            text: text.to_string(),
        }
    }

    fn mapping(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let mut d = doc(
            "<img src=\"https://img.example.com/a.png\">\
             <img src=\"https://img.example.com/a.png\">",
        );
        let m = mapping(&[("https://img.example.com/a.png", "assets/images/a.png")]);
        assert!(apply_mapping(&mut d, &m));
        assert_eq!(
            d.text,
            "<img src=\"assets/images/a.png\"><img src=\"assets/images/a.png\">"
        );
    }

    #[test]
    fn test_unmapped_urls_stay_untouched() {
        let original = "<img src=\"https://img.example.com/kept.png\">";
        let mut d = doc(original);
        let m = mapping(&[("https://img.example.com/other.png", "assets/images/other.png")]);
        assert!(!apply_mapping(&mut d, &m));
        assert_eq!(d.text, original);
    }

    #[test]
    fn test_second_application_is_a_noop() {
        let mut d = doc("<img src=\"https://img.example.com/a.png\">");
        let m = mapping(&[("https://img.example.com/a.png", "assets/images/a.png")]);
        apply_mapping(&mut d, &m);
        let after_first = d.text.clone();
        // Simulate a fresh run over the already-rewritten text
        d.original = d.text.clone();
        assert!(!apply_mapping(&mut d, &m));
        assert_eq!(d.text, after_first);
    }

    #[test]
    fn test_empty_mapping_changes_nothing() {
        let mut d = doc("<img src=\"https://img.example.com/a.png\">");
        assert!(!apply_mapping(&mut d, &BTreeMap::new()));
    }
}
