// Metrics hooks for the engine.
//
// Callers install a global `MatchMetrics` implementation via [`set_match_metrics`],
// then `SimilarityEngine` will report candidate, skip and hit counts plus
// wall-clock latency for each call to [`Matcher::find_matches`]. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for match operations.
pub trait MatchMetrics: Send + Sync {
    /// Record the outcome of a match call.
    ///
    /// `candidates` is the size of the candidate set supplied by the caller,
    /// `skipped` is how many of those were dropped by the length ceiling,
    /// `hits` is the number of results returned after thresholding, and
    /// `latency` is the wall-clock duration of the whole call.
    fn record_match(&self, candidates: usize, skipped: usize, hits: usize, latency: Duration);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn MatchMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn MatchMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn MatchMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global match metrics recorder.
///
/// This is typically called once during service startup so all
/// `SimilarityEngine` instances share the same metrics backend.
pub fn set_match_metrics(recorder: Option<Arc<dyn MatchMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("match metrics lock poisoned");
    *guard = recorder;
}
