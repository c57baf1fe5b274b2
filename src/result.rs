//! Output value types.
//!
//! One `DocumentSignals` snapshot is built per invocation; the feature set
//! and the outlink set always come from the same document and are never
//! observable in a partially-updated state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Stored-field names under which the collaborating record builder persists
/// each feature. The `_f_i` suffix marks integer-valued fields, `_f_f`
/// float-valued ones.
pub mod fields {
    pub const NUM_VISIBLE_TERMS: &str = "numVisibleTerms_f_i";
    pub const FRAC_VISIBLE_TEXT: &str = "fracVisText_f_f";
    pub const NUM_TITLE_TERMS: &str = "numTitleTerms_f_i";
    pub const AVG_TERM_LENGTH: &str = "avgTermLength_f_f";
    pub const FRAC_ANCHOR_TEXT: &str = "fracAnchorText_f_f";
    pub const FRAC_TABLE_TEXT: &str = "fracTabletext_f_f";
    pub const ENTROPY: &str = "entropy_f_f";
    pub const AVG_TERM_PROBABILITY: &str = "avgTermP_f_f";
    pub const AVG_BIGRAM_PROBABILITY: &str = "avgBigramP_f_f";

    /// Repeated field holding one hostname per outbound link.
    pub const OUTLINKS: &str = "outlinks";
}

/// Lexical and structural quality signals of one document.
///
/// All ratio features are defined as 0.0 when their denominator is empty, so
/// degenerate (near-empty) documents still produce a complete feature set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalFeatures {
    /// Token count of the visible text.
    pub num_visible_terms: usize,
    /// Visible tokens per whitespace-split segment of the raw markup string,
    /// tags and attributes included.
    pub frac_visible_text: f64,
    /// Whitespace-split segment count of the raw (unnormalized) title text.
    pub num_title_terms: usize,
    /// Non-whitespace characters per character of the raw visible text.
    pub avg_term_length: f64,
    /// Normalized anchor-text tokens per visible token.
    pub frac_anchor_text: f64,
    /// Normalized table-cell tokens per visible token.
    pub frac_table_text: f64,
    /// Shannon entropy of the unigram distribution, in nats.
    pub entropy: f64,
    /// Mean probability mass per distinct term.
    pub avg_term_probability: f64,
    /// Mean probability mass per distinct bigram.
    pub avg_bigram_probability: f64,
}

impl LexicalFeatures {
    /// The feature set as `(stored-field name, decimal string)` pairs, in
    /// fixed field order.
    #[must_use]
    pub fn stored_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (fields::NUM_VISIBLE_TERMS, self.num_visible_terms.to_string()),
            (fields::FRAC_VISIBLE_TEXT, self.frac_visible_text.to_string()),
            (fields::NUM_TITLE_TERMS, self.num_title_terms.to_string()),
            (fields::AVG_TERM_LENGTH, self.avg_term_length.to_string()),
            (fields::FRAC_ANCHOR_TEXT, self.frac_anchor_text.to_string()),
            (fields::FRAC_TABLE_TEXT, self.frac_table_text.to_string()),
            (fields::ENTROPY, self.entropy.to_string()),
            (
                fields::AVG_TERM_PROBABILITY,
                self.avg_term_probability.to_string(),
            ),
            (
                fields::AVG_BIGRAM_PROBABILITY,
                self.avg_bigram_probability.to_string(),
            ),
        ]
    }
}

/// Everything the engine derives from one raw document: the visible text
/// (reusable by the caller as the document's indexable body), the feature
/// set, and the outbound-link hostnames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSignals {
    /// Whole-document visible text.
    pub text: String,
    /// The fixed feature set.
    pub features: LexicalFeatures,
    /// Distinct outbound link hostnames. No ordering guarantee.
    pub outlinks: HashSet<String>,
}
