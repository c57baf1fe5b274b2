//! Maximum-likelihood term statistics.
//!
//! Small pure helpers over token collections: relative-frequency
//! distributions, adjacent-pair bigrams, Shannon entropy, and distinct-key
//! probability means.

use std::collections::{BTreeMap, HashMap};

/// Relative-frequency (maximum-likelihood) distribution of a token collection.
///
/// Each distinct token maps to its count divided by the collection length, so
/// the values sum to 1.0 for any non-empty collection. An empty collection
/// yields an empty map. The ordered map gives deterministic iteration, which
/// keeps the floating-point reductions downstream bit-identical across
/// repeated extractions of the same document.
#[must_use]
pub fn mle<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }
        *counts.entry(token).or_insert(0) += 1;
    }

    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / total))
        .collect()
}

/// Ordered adjacent-token pairs, each joined by a single space.
///
/// A sequence of N tokens yields max(N - 1, 0) bigrams.
#[must_use]
pub fn bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}

/// Shannon entropy of a probability distribution, in nats.
#[must_use]
pub fn entropy(distribution: &BTreeMap<String, f64>) -> f64 {
    let sum: f64 = distribution.values().map(|p| p * p.ln()).sum();
    // -sum is -0.0 when all mass sits on a single key; clamp so callers
    // never see "-0" at the string boundary. The trailing `+ 0.0`
    // normalizes -0.0 to +0.0 (f64::max preserves -0.0 in unoptimized builds).
    (-sum).max(0.0) + 0.0
}

/// Arithmetic mean of a distribution's values: probability mass per distinct
/// key, not per occurrence. Zero for an empty distribution.
#[must_use]
pub fn mean_probability(distribution: &BTreeMap<String, f64>) -> f64 {
    if distribution.is_empty() {
        return 0.0;
    }
    distribution.values().sum::<f64>() / distribution.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mle_is_relative_frequency() {
        let dist = mle(&["the", "cat", "the"]);
        assert_eq!(dist.len(), 2);
        assert!((dist["the"] - 2.0 / 3.0).abs() < 1e-12);
        assert!((dist["cat"] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn mle_values_sum_to_one() {
        let dist = mle(&["a", "b", "b", "c", "c", "c", "d"]);
        let sum: f64 = dist.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mle_of_empty_collection_is_empty() {
        let dist = mle::<&str>(&[]);
        assert!(dist.is_empty());
    }

    #[test]
    fn bigram_count_is_length_minus_one() {
        assert!(bigrams::<&str>(&[]).is_empty());
        assert!(bigrams(&["solo"]).is_empty());
        assert_eq!(bigrams(&["a", "b"]), vec!["a b"]);
        assert_eq!(bigrams(&["a", "b", "c", "d", "e"]).len(), 4);
    }

    #[test]
    fn bigrams_preserve_order() {
        assert_eq!(bigrams(&["the", "cat", "sat"]), vec!["the cat", "cat sat"]);
    }

    #[test]
    fn entropy_of_uniform_distribution_is_log_k() {
        let dist = mle(&["a", "b", "c", "d"]);
        assert!((entropy(&dist) - 4.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn entropy_is_zero_for_single_key_mass() {
        let dist = mle(&["word", "word", "word"]);
        let h = entropy(&dist);
        assert_eq!(h, 0.0);
        assert!(h.is_sign_positive());
    }

    #[test]
    fn entropy_of_empty_distribution_is_zero() {
        assert_eq!(entropy(&BTreeMap::new()), 0.0);
    }

    #[test]
    fn entropy_is_nonnegative() {
        let dist = mle(&["x", "y", "y", "y", "z"]);
        assert!(entropy(&dist) >= 0.0);
    }

    #[test]
    fn mean_probability_over_distinct_keys() {
        // Five distinct keys, mass sums to 1.0, so the mean is 0.2 regardless
        // of how the mass is spread.
        let dist = mle(&["a", "a", "a", "b", "c", "d", "e", "e"]);
        assert!((mean_probability(&dist) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn mean_probability_of_empty_distribution_is_zero() {
        assert_eq!(mean_probability(&BTreeMap::new()), 0.0);
    }
}
