//! DOM adapter over `dom_query`.
//!
//! Parsing is tolerant: malformed or unclosed markup never fails, it just
//! yields whatever tree the parser can recover. The helpers here expose the
//! few read-only views the signal computations need; nothing mutates the
//! tree.

// Re-export core types for external use
pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// Tags whose text content is never human-visible page text.
const HIDDEN_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "title"];

/// Parse a markup string into a document. Never fails.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Text of the first `title` element, trimmed. Empty when absent.
#[must_use]
pub fn title(doc: &Document) -> String {
    doc.select("title")
        .iter()
        .next()
        .map(|t| t.text().trim().to_string())
        .unwrap_or_default()
}

/// Whole-document visible text: every text node in document order with tag
/// markup removed, text under hidden tags excluded, and whitespace collapsed
/// to single spaces.
#[must_use]
pub fn visible_text(doc: &Document) -> String {
    let html_sel = doc.select("html");
    let Some(root) = html_sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if !node.is_text() || under_hidden_tag(&node) {
            continue;
        }
        let text = node.text();
        out.push_str(&text);
        out.push(' ');
    }
    collapse_whitespace(&out)
}

fn under_hidden_tag(node: &dom_query::NodeRef<'_>) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if parent.is_element() {
            if let Some(tag) = parent.node_name() {
                if HIDDEN_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
                    return true;
                }
            }
        }
        current = parent.parent();
    }
    false
}

/// Visible text of every element matching `tag`, one entry per element in
/// document order.
///
/// Returns `StrTendril` handles for zero-copy passing; convert only when
/// owned storage is needed.
#[must_use]
pub fn element_texts(doc: &Document, tag: &str) -> Vec<StrTendril> {
    doc.select(tag).iter().map(|el| el.text()).collect()
}

/// `href` attribute values of every anchor element, in document order.
/// Anchors without an `href` contribute nothing.
#[must_use]
pub fn anchor_hrefs(doc: &Document) -> Vec<String> {
    doc.select("a")
        .iter()
        .filter_map(|a| a.attr("href").map(|href| href.to_string()))
        .collect()
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
