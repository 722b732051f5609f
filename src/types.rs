use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Weights are validated to sum to 1.0 within this tolerance.
const WEIGHT_SUM_TOLERANCE: f32 = 1e-6;

/// A previously submitted document from the corpus.
///
/// Documents are owned by the persistence collaborator; the engine only ever
/// borrows them and never mutates or retains one between calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Opaque, orderable identifier (primary identifier in the corpus store).
    pub id: String,
    /// Identifier of the submitting user.
    pub owner: String,
    /// Raw UTF-8 text as submitted.
    pub text: String,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

/// Configuration for the similarity engine.
///
/// `MatchConfig` is designed to be cheap to clone and serde-friendly so it can
/// be embedded in higher-level configs or passed across process boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Weight of the edit-distance signal in the combined score.
    #[serde(default = "MatchConfig::default_edit_weight")]
    pub edit_weight: f32,
    /// Weight of the vector-space signal in the combined score.
    #[serde(default = "MatchConfig::default_vector_weight")]
    pub vector_weight: f32,
    /// Reporting threshold: a candidate is included only when its combined
    /// score is strictly greater than this value.
    #[serde(default = "MatchConfig::default_min_score")]
    pub min_score: f32,
    /// Upper bound, in characters, on texts admitted to the quadratic
    /// edit-distance step. An over-limit query fails the whole call; an
    /// over-limit candidate is skipped.
    #[serde(default = "MatchConfig::default_max_text_len")]
    pub max_text_len: usize,
    /// Number of leading characters retained in each match preview.
    #[serde(default = "MatchConfig::default_preview_len")]
    pub preview_len: usize,
    /// Optional cap on the number of results returned to the caller.
    #[serde(default)]
    pub max_results: Option<usize>,
    /// Whether to populate per-signal scores in the match results.
    #[serde(default)]
    pub explain: bool,
    /// Score candidates on the rayon pool instead of sequentially.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_edit_weight() -> f32 {
        0.4
    }

    pub(crate) fn default_vector_weight() -> f32 {
        0.6
    }

    pub(crate) fn default_min_score() -> f32 {
        0.5
    }

    pub(crate) fn default_max_text_len() -> usize {
        20_000
    }

    pub(crate) fn default_preview_len() -> usize {
        100
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        for (name, weight) in [
            ("edit_weight", self.edit_weight),
            ("vector_weight", self.vector_weight),
        ] {
            if !(0.0..=1.0).contains(&weight) {
                return Err(MatchError::InvalidConfig(format!(
                    "{name} must be between 0.0 and 1.0"
                )));
            }
        }
        // The combined score is a convex combination; anything else breaks the
        // [0, 1] invariant on the final score.
        if (self.edit_weight + self.vector_weight - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(MatchError::InvalidConfig(
                "edit_weight and vector_weight must sum to 1.0".into(),
            ));
        }
        if self.min_score < 0.0 {
            return Err(MatchError::InvalidConfig("min_score must be >= 0.0".into()));
        }
        if self.max_text_len == 0 {
            return Err(MatchError::InvalidConfig(
                "max_text_len must be greater than zero".into(),
            ));
        }
        if self.preview_len == 0 {
            return Err(MatchError::InvalidConfig(
                "preview_len must be greater than zero".into(),
            ));
        }
        if self.max_results == Some(0) {
            return Err(MatchError::InvalidConfig(
                "max_results must be greater than zero when set".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            edit_weight: Self::default_edit_weight(),
            vector_weight: Self::default_vector_weight(),
            min_score: Self::default_min_score(),
            max_text_len: Self::default_max_text_len(),
            preview_len: Self::default_preview_len(),
            max_results: None,
            explain: false,
            use_parallel: false,
        }
    }
}


/// A single qualifying match returned by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Identifier of the matched document.
    pub doc_id: String,
    /// User who submitted the matched document.
    pub owner: String,
    /// Submission time of the matched document.
    pub created_at: DateTime<Utc>,
    /// Leading characters of the matched text, with `...` appended when the
    /// text was longer than the configured preview length.
    pub preview: String,
    /// Weighted combination of the two similarity signals.
    pub score: f32,
    /// Underlying edit similarity when `explain` was requested.
    pub edit_score: Option<f32>,
    /// Underlying vector similarity when `explain` was requested.
    pub vector_score: Option<f32>,
}

/// Errors produced by the similarity engine.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Invalid engine configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The query text exceeds the configured length ceiling for the
    /// quadratic edit-distance step.
    #[error("query of {len} chars exceeds the {limit} char ceiling")]
    QueryTooLarge { len: usize, limit: usize },
}
