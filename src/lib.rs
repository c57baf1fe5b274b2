//! # html-signals
//!
//! Lexical and structural quality signals from raw HTML documents.
//!
//! This library reduces a markup string to its visible text, tokenizes it,
//! and computes a small fixed set of statistical features (term counts,
//! frequency-distribution entropy, n-gram probability means, structural
//! text ratios) together with the set of distinct outbound link hostnames.
//! The resulting snapshot is designed to be attached to a search-index
//! record as stored metadata fields, with the visible text reused as the
//! record's indexable body.
//!
//! ## Quick start
//!
//! ```rust
//! use html_signals::extract;
//!
//! let html = r#"<html><head><title>My Page</title></head>
//! <body><p>some visible text</p><a href="http://example.com/a">a link</a></body></html>"#;
//!
//! let signals = extract(html);
//! assert_eq!(signals.features.num_title_terms, 2);
//! assert!(signals.outlinks.contains("example.com"));
//! ```
//!
//! Extraction is a pure function of the markup: each call returns a fresh,
//! internally consistent snapshot, so concurrent callers need no
//! synchronization. Malformed markup never fails: parsing degrades
//! gracefully, missing elements yield empty text and selections, and
//! degenerate documents get zero-valued features instead of errors.

mod features;

/// DOM adapter: tolerant parsing and the read-only views the signal
/// computations need.
pub mod dom;

/// Charset sniffing and transcoding for raw document bytes.
pub mod encoding;

/// Text normalization and tokenization.
pub mod normalize;

/// Outbound-link hostname extraction.
pub mod outlinks;

/// Output value types and stored-field names.
pub mod result;

/// Maximum-likelihood term statistics.
pub mod stats;

// Public API - re-exports
pub use result::{fields, DocumentSignals, LexicalFeatures};

/// Compute the full signal set for one HTML document.
///
/// Accepts arbitrary, possibly malformed markup and always produces a
/// snapshot; a document with no visible text yields zero-valued features and
/// an empty outlink set.
///
/// # Example
///
/// ```rust
/// use html_signals::extract;
///
/// let signals = extract("<html><body><p>the cat sat</p></body></html>");
/// assert_eq!(signals.features.num_visible_terms, 3);
/// assert_eq!(signals.text, "the cat sat");
/// ```
#[must_use]
pub fn extract(html: &str) -> DocumentSignals {
    features::extract_signals(html)
}

/// Compute the full signal set from raw document bytes.
///
/// Detects a charset declared in the document head and transcodes to UTF-8
/// (lossily) before extraction.
///
/// ```rust
/// use html_signals::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// let signals = extract_bytes(html);
/// assert!(signals.text.contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> DocumentSignals {
    let html = encoding::decode_html(html);
    features::extract_signals(&html)
}
