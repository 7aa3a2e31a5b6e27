//! Attribute and URL extraction from raw document text.
//!
//! Matching is purely textual — regex over the raw HTML, not a structural
//! parse. It accepts well-formed attribute syntax and is not required to
//! handle unquoted attributes or commented-out markup. The `Scanner` trait
//! is the seam where a structural HTML parser could be substituted without
//! touching the pipelines downstream.

use regex::Regex;
use std::collections::HashSet;

/// Which attribute a reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Href,
    Src,
}

/// A single reference extracted from a document's text. Duplicates are
/// preserved here; consumers deduplicate as needed.
#[derive(Debug, Clone)]
pub struct AttrRef {
    pub kind: RefKind,
    pub value: String,
}

/// Text scanning over one document.
pub trait Scanner {
    /// URLs beginning with the remote image prefix, in first-occurrence
    /// order, duplicates preserved.
    fn remote_urls(&self, text: &str) -> Vec<String>;

    /// Every `href=`/`src=` attribute value, single- or double-quoted,
    /// attribute name case-insensitive, in first-occurrence order.
    fn attr_refs(&self, text: &str) -> Vec<AttrRef>;

    /// Every `id=`/`name=` attribute value — the document's declared
    /// anchor identifiers.
    fn anchor_ids(&self, text: &str) -> HashSet<String>;
}

/// Regex-backed `Scanner`. Patterns are compiled once at construction.
pub struct PatternScanner {
    remote: Regex,
    attrs: Regex,
    anchors: Regex,
}

impl PatternScanner {
    /// Build a scanner recognizing remote images under `remote_prefix`.
    /// A remote URL runs from the prefix until whitespace, a quote, or an
    /// angle bracket.
    pub fn new(remote_prefix: &str) -> Self {
        let remote = Regex::new(&format!(r#"{}[^\s"'<>]+"#, regex::escape(remote_prefix)))
            .expect("escaped prefix pattern");
        let attrs = Regex::new(r#"(?i)\b(href|src)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("attribute pattern");
        let anchors = Regex::new(r#"(?i)\b(?:id|name)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("anchor pattern");
        Self {
            remote,
            attrs,
            anchors,
        }
    }
}

impl Scanner for PatternScanner {
    fn remote_urls(&self, text: &str) -> Vec<String> {
        self.remote
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn attr_refs(&self, text: &str) -> Vec<AttrRef> {
        self.attrs
            .captures_iter(text)
            .map(|cap| {
                let kind = if cap[1].eq_ignore_ascii_case("href") {
                    RefKind::Href
                } else {
                    RefKind::Src
                };
                let value = cap
                    .get(2)
                    .or_else(|| cap.get(3))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                AttrRef { kind, value }
            })
            .collect()
    }

    fn anchor_ids(&self, text: &str) -> HashSet<String> {
        self.anchors
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "https://img.example.com/";

    #[test]
    fn test_remote_urls_stop_at_terminators() {
        let scanner = PatternScanner::new(PREFIX);
        let text = r#"<img src="https://img.example.com/a/logo.png"> and
            <img src='https://img.example.com/b.jpg'> plus bare
            https://img.example.com/c.gif end"#;
        let urls = scanner.remote_urls(text);
        assert_eq!(
            urls,
            vec![
                "https://img.example.com/a/logo.png",
                "https://img.example.com/b.jpg",
                "https://img.example.com/c.gif",
            ]
        );
    }

    #[test]
    fn test_remote_urls_preserve_duplicates_and_order() {
        let scanner = PatternScanner::new(PREFIX);
        let text = "https://img.example.com/x.png https://img.example.com/x.png";
        assert_eq!(scanner.remote_urls(text).len(), 2);
    }

    #[test]
    fn test_attr_refs_both_quote_styles_and_cases() {
        let scanner = PatternScanner::new(PREFIX);
        let text = r#"<a HREF="docs/guide.html">g</a><img Src='pic.png'>"#;
        let refs = scanner.attr_refs(text);
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].kind, RefKind::Href);
        assert_eq!(refs[0].value, "docs/guide.html");
        assert_eq!(refs[1].kind, RefKind::Src);
        assert_eq!(refs[1].value, "pic.png");
    }

    #[test]
    fn test_attr_refs_keep_empty_values() {
        let scanner = PatternScanner::new(PREFIX);
        let refs = scanner.attr_refs(r#"<a href="">empty</a>"#);
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].value, "");
    }

    #[test]
    fn test_anchor_ids_from_id_and_name() {
        let scanner = PatternScanner::new(PREFIX);
        let text = r#"<h2 id="intro">i</h2><a name='legacy'></a><div ID="Upper">"#;
        let anchors = scanner.anchor_ids(text);
        assert!(anchors.contains("intro"));
        assert!(anchors.contains("legacy"));
        assert!(anchors.contains("Upper"));
        assert_eq!(anchors.len(), 3);
    }

    #[test]
    fn test_unquoted_attributes_are_out_of_scope() {
        let scanner = PatternScanner::new(PREFIX);
        assert!(scanner.attr_refs("<a href=bare.html>").is_empty());
    }
}
