//! Outbound-link hostname extraction.
//!
//! Every anchor's link target is parsed as a URI reference; targets that do
//! not parse, or that parse without a host (relative paths, fragments,
//! mailto:), are skipped without surfacing an error.

use std::collections::HashSet;

use url::Url;

use crate::dom::{self, Document};

/// Hostname of a single link target, if it has one.
#[must_use]
pub fn outlink_host(href: &str) -> Option<String> {
    let parsed = Url::parse(href.trim()).ok()?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(host.to_string()),
        _ => None,
    }
}

/// Distinct hostnames linked from the document's anchor elements.
#[must_use]
pub fn collect_outlinks(doc: &Document) -> HashSet<String> {
    dom::anchor_hrefs(doc)
        .iter()
        .filter_map(|href| outlink_host(href))
        .collect()
}
