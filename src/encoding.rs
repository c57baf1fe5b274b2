//! Charset sniffing and transcoding for raw document bytes.
//!
//! Crawled documents declare their encoding, when they declare it at all, in
//! a meta tag near the top of the file. Only the first kilobyte is examined;
//! unknown or missing declarations fall back to UTF-8. Decoding is lossy:
//! undecodable bytes become U+FFFD instead of failing the document.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

const SNIFF_WINDOW: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static META_CONTENT_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("META_CONTENT_TYPE regex")
});

/// Charset declared in the document head, if the declaration names an
/// encoding the WHATWG registry knows.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    [&META_CHARSET, &META_CONTENT_TYPE].iter().find_map(|pattern| {
        pattern
            .captures(&head)
            .and_then(|caps| caps.get(1))
            .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
    })
}

/// Decode document bytes to UTF-8, honoring a declared charset and replacing
/// undecodable sequences.
///
/// # Examples
///
/// ```
/// use html_signals::encoding::decode_html;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(decode_html(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = declared_encoding(html).unwrap_or(UTF_8);

    if encoding == UTF_8 {
        // Fast path: lossy conversion in place
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
