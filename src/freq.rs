//! Word-frequency vectors over whitespace-delimited tokens.
//!
//! This module implements the bag-of-words stage of the scoring pipeline: raw
//! text is split on whitespace runs, lowercased and counted into a sparse
//! [`WordFrequencyVector`]. There is no stop-word removal and no stemming, so
//! the representation is a deterministic function of the input text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sparse bag-of-words representation of a text.
///
/// Keys are lowercased, whitespace-delimited, non-empty tokens; values are
/// occurrence counts. Map iteration order never affects downstream scores:
/// every consumer reduces over the keys with an order-independent sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequencyVector {
    counts: HashMap<String, u32>,
}

impl WordFrequencyVector {
    /// Tokenize `text` into a frequency vector.
    ///
    /// Splits on one-or-more whitespace characters, lowercases each token and
    /// counts occurrences. The same input always yields the same vector.
    pub fn from_text(text: &str) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for token in text.split_whitespace() {
            *counts.entry(token.to_lowercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `token`, zero when absent.
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True when the text contained no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(token, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(token, &count)| (token.as_str(), count))
    }

    /// Euclidean magnitude of the count vector.
    pub(crate) fn magnitude(&self) -> f32 {
        self.counts
            .values()
            .map(|&count| (count as f32) * (count as f32))
            .sum::<f32>()
            .sqrt()
    }
}
