//! Per-document signal computation.
//!
//! One pass per invocation: parse, reduce to visible text, tokenize, compute
//! the feature set, collect outlinks, and return a fresh snapshot. Nothing is
//! retained between invocations.

use tracing::debug;

use crate::dom::{self, Document};
use crate::normalize;
use crate::outlinks;
use crate::result::{DocumentSignals, LexicalFeatures};
use crate::stats;

pub(crate) fn extract_signals(html: &str) -> DocumentSignals {
    let doc = dom::parse(html);

    let text = dom::visible_text(&doc);
    let tokens = normalize::tokenize(&text);
    let term_count = tokens.len();

    let unigrams = stats::mle(&tokens);
    let bigram_pairs = stats::bigrams(&tokens);
    let bigrams = stats::mle(&bigram_pairs);

    let features = LexicalFeatures {
        num_visible_terms: term_count,
        frac_visible_text: frac_visible_text(term_count, html),
        num_title_terms: dom::title(&doc).split_whitespace().count(),
        avg_term_length: avg_term_length(&text),
        frac_anchor_text: frac_tag_text(&doc, "a", term_count),
        frac_table_text: frac_tag_text(&doc, "td", term_count),
        entropy: stats::entropy(&unigrams),
        avg_term_probability: stats::mean_probability(&unigrams),
        avg_bigram_probability: stats::mean_probability(&bigrams),
    };

    let outlinks = outlinks::collect_outlinks(&doc);

    debug!(
        terms = term_count,
        outlinks = outlinks.len(),
        "computed document signals"
    );

    DocumentSignals {
        text,
        features,
        outlinks,
    }
}

/// Visible-token density against the raw markup: token count over the
/// whitespace-split segment count of the unparsed markup string, tags and
/// attributes included. The raw-markup denominator is the defined meaning of
/// this feature, not a text-only baseline.
fn frac_visible_text(term_count: usize, raw_markup: &str) -> f64 {
    let raw_segments = raw_markup.split_whitespace().count();
    if raw_segments == 0 {
        return 0.0;
    }
    term_count as f64 / raw_segments as f64
}

/// Non-whitespace characters of the visible text over its total character
/// count. The denominator is the full text length, not the segment count.
fn avg_term_length(text: &str) -> f64 {
    let char_count = text.chars().count();
    if char_count == 0 {
        return 0.0;
    }
    let segment_chars: usize = text.split_whitespace().map(|w| w.chars().count()).sum();
    segment_chars as f64 / char_count as f64
}

/// Normalized token count across all elements matching `tag`, as a fraction
/// of the document's visible token count.
fn frac_tag_text(doc: &Document, tag: &str, term_count: usize) -> f64 {
    if term_count == 0 {
        return 0.0;
    }
    let mut joined = String::new();
    for text in dom::element_texts(doc, tag) {
        joined.push_str(&text);
        joined.push(' ');
    }
    normalize::tokenize(&joined).len() as f64 / term_count as f64
}
