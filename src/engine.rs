use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::edit::edit_similarity;
use crate::freq::WordFrequencyVector;
use crate::metrics::metrics_recorder;
use crate::types::{Document, MatchConfig, MatchError, MatchResult};
use crate::vector::cosine_similarity;

/// Trait for a similarity engine.
pub trait Matcher: Send + Sync {
    /// Score `candidates` against `query_text` and return ordered matches.
    fn find_matches(
        &self,
        query_text: &str,
        candidates: &[Document],
    ) -> Result<Vec<MatchResult>, MatchError>;
}

/// Production implementation of [`Matcher`].
///
/// The engine is stateless apart from its validated configuration: every call
/// is a pure projection over the supplied candidate slice, so a single engine
/// can be shared freely across threads. Corpus snapshots stay the caller's
/// responsibility; nothing is cached between calls.
#[derive(Debug)]
pub struct SimilarityEngine {
    config: MatchConfig,
}

impl SimilarityEngine {
    /// Construct an engine from an explicit configuration.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Construct an engine with the default weights and threshold.
    pub fn with_defaults() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Fuse the two similarity signals with the configured weights.
    fn combined_score(&self, edit: f32, vector: f32) -> f32 {
        self.config.edit_weight * edit + self.config.vector_weight * vector
    }

    /// Score one candidate against the query, or `None` when it falls at or
    /// below the reporting threshold.
    fn score_candidate(
        &self,
        query_text: &str,
        query_freq: &WordFrequencyVector,
        candidate: &Document,
    ) -> Option<MatchResult> {
        let edit = edit_similarity(query_text, &candidate.text);
        let vector = cosine_similarity(query_freq, &WordFrequencyVector::from_text(&candidate.text));
        let score = self.combined_score(edit, vector);
        if score <= self.config.min_score {
            return None;
        }

        Some(MatchResult {
            doc_id: candidate.id.clone(),
            owner: candidate.owner.clone(),
            created_at: candidate.created_at,
            preview: preview(&candidate.text, self.config.preview_len),
            score,
            edit_score: self.config.explain.then_some(edit),
            vector_score: self.config.explain.then_some(vector),
        })
    }
}

impl Matcher for SimilarityEngine {
    fn find_matches(
        &self,
        query_text: &str,
        candidates: &[Document],
    ) -> Result<Vec<MatchResult>, MatchError> {
        let query_len = query_text.chars().count();
        if query_len > self.config.max_text_len {
            return Err(MatchError::QueryTooLarge {
                len: query_len,
                limit: self.config.max_text_len,
            });
        }

        let start = Instant::now();
        let query_freq = WordFrequencyVector::from_text(query_text);

        // Oversized candidates are skipped rather than failing the call:
        // partial results over hard failure.
        let mut skipped = 0usize;
        let admitted: Vec<&Document> = candidates
            .iter()
            .filter(|candidate| {
                let len = candidate.text.chars().count();
                if len > self.config.max_text_len {
                    warn!(
                        doc_id = %candidate.id,
                        len,
                        limit = self.config.max_text_len,
                        "candidate_skipped"
                    );
                    skipped += 1;
                    return false;
                }
                true
            })
            .collect();

        // Per-candidate scoring is independent; order is restored by the sort
        // below, so the parallel branch needs no ordering guarantee.
        let mut hits: Vec<MatchResult> = if self.config.use_parallel {
            admitted
                .par_iter()
                .filter_map(|candidate| self.score_candidate(query_text, &query_freq, candidate))
                .collect()
        } else {
            admitted
                .iter()
                .filter_map(|candidate| self.score_candidate(query_text, &query_freq, candidate))
                .collect()
        };

        // Score descending, then candidate id ascending so equal scores never
        // depend on input order or sort stability.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });
        if let Some(cap) = self.config.max_results {
            hits.truncate(cap);
        }

        let latency = start.elapsed();
        debug!(
            candidates = candidates.len(),
            skipped,
            hits = hits.len(),
            elapsed_micros = latency.as_micros() as u64,
            "match_complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(candidates.len(), skipped, hits.len(), latency);
        }

        Ok(hits)
    }
}

/// First `limit` characters of `text`, with `...` appended when truncated.
/// Cuts on a character boundary, never mid code point.
fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => {
            let mut out = String::with_capacity(cut + 3);
            out.push_str(&text[..cut]);
            out.push_str("...");
            out
        }
        None => text.to_string(),
    }
}
