//! # docmatch
//!
//! ## Purpose
//!
//! `docmatch` scores how similar a new text is to each document in a corpus of
//! previously submitted texts and returns a ranked list of matches above a
//! threshold. It combines two independent similarity signals:
//!
//! - **Edit similarity** — normalized Levenshtein distance over the raw
//!   character sequences ([`edit_similarity`]).
//! - **Vector similarity** — cosine similarity over word-frequency vectors
//!   ([`cosine_similarity`] over [`WordFrequencyVector`]).
//!
//! The two signals are fused with configurable weights (0.4 edit, 0.6 vector
//! by default) and candidates above the reporting threshold are returned in a
//! deterministic order: combined score descending, ties broken by candidate
//! id ascending.
//!
//! The engine owns no storage, no network surface and no corpus state. The
//! caller (an HTTP layer, in a typical deployment) retrieves a candidate
//! snapshot — already filtered by business rules such as "exclude the
//! submitter's own documents" — and transports the returned matches, e.g. as
//! JSON.
//!
//! ## Core Types
//!
//! - [`Document`]: id, owner, raw text and submission time of a corpus entry.
//! - [`MatchConfig`]: weights, reporting threshold, length ceiling, preview
//!   length and parallelism knobs.
//! - [`MatchResult`]: matched document id/owner/timestamp, a short text
//!   preview, the combined score, and per-signal scores when `explain` is set.
//! - [`SimilarityEngine`]: production implementation of the [`Matcher`] trait.
//!
//! ## Example Usage
//!
//! ```
//! use chrono::Utc;
//! use docmatch::{Document, MatchConfig, Matcher, SimilarityEngine};
//!
//! let corpus = vec![Document {
//!     id: "doc-1".into(),
//!     owner: "alice".into(),
//!     text: "Rust gives you memory safety without garbage collection.".into(),
//!     created_at: Utc::now(),
//! }];
//!
//! let engine = SimilarityEngine::new(MatchConfig {
//!     explain: true,
//!     ..MatchConfig::default()
//! })
//! .expect("valid config");
//!
//! let hits = engine
//!     .find_matches("Rust gives you memory safety without garbage collection", &corpus)
//!     .expect("match");
//! for hit in hits {
//!     println!("{} score={} preview={}", hit.doc_id, hit.score, hit.preview);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is a pure function of its arguments: a single engine can
//! serve concurrent callers without locking, provided each call receives an
//! immutable corpus snapshot. Per-candidate scoring optionally fans out over
//! the rayon pool (`MatchConfig::use_parallel`); the final sort restores the
//! deterministic order either way.
//!
//! ## Observability
//!
//! Install a [`MatchMetrics`] implementation via [`set_match_metrics`] to
//! record per-call latency, hit counts and skipped-candidate counts. This is
//! typically done once during service startup so all [`SimilarityEngine`]
//! instances share the same metrics backend. Structured `tracing` events are
//! emitted for skipped candidates and per-call summaries; no subscriber is
//! installed by the library.

pub mod edit;
pub mod engine;
pub mod freq;
pub mod metrics;
pub mod types;
pub mod vector;

pub use crate::edit::{edit_similarity, levenshtein};
pub use crate::engine::{Matcher, SimilarityEngine};
pub use crate::freq::WordFrequencyVector;
pub use crate::metrics::{MatchMetrics, set_match_metrics};
pub use crate::types::{Document, MatchConfig, MatchError, MatchResult};
pub use crate::vector::cosine_similarity;
