//! Cosine similarity over word-frequency vectors.

use crate::freq::WordFrequencyVector;

/// Cosine similarity between two frequency vectors.
///
/// Each vector is treated as a sparse point in the vocabulary formed by the
/// union of both key sets: `dot / (mag_a · mag_b)`. Counts are non-negative,
/// so the result stays in `[0, 1]`. A zero-magnitude vector (empty text) has
/// no direction; that case is defined as `0.0`, never a division fault.
pub fn cosine_similarity(a: &WordFrequencyVector, b: &WordFrequencyVector) -> f32 {
    let mag_a = a.magnitude();
    let mag_b = b.magnitude();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    // Only shared tokens contribute to the dot product, so walk the smaller
    // map and probe the larger one.
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f32 = small
        .iter()
        .map(|(token, count)| (count as f32) * (large.count(token) as f32))
        .sum();

    dot / (mag_a * mag_b)
}
