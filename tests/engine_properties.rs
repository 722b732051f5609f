//! Scoring and ranking properties of the similarity engine.

use chrono::{TimeZone, Utc};
use docmatch::{
    Document, MatchConfig, Matcher, SimilarityEngine, WordFrequencyVector, cosine_similarity,
    edit_similarity, levenshtein,
};

fn doc(id: &str, owner: &str, text: &str) -> Document {
    Document {
        id: id.into(),
        owner: owner.into(),
        text: text.into(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
    }
}

#[test]
fn self_match_is_perfect() {
    let texts = [
        "a",
        "the cat sat on the mat",
        "Rust gives you memory safety without garbage collection.",
        "whitespace   heavy\n\ttext",
    ];
    for text in texts {
        let edit = edit_similarity(text, text);
        let freq = WordFrequencyVector::from_text(text);
        let vector = cosine_similarity(&freq, &freq);
        let combined = 0.4 * edit + 0.6 * vector;
        assert!(
            (combined - 1.0).abs() < 1e-6,
            "self-match for {text:?} scored {combined}"
        );
    }
}

#[test]
fn scores_are_bounded_and_symmetric() {
    let pairs = [
        ("kitten", "sitting"),
        ("", "nonempty candidate text"),
        ("one shared word here", "word"),
        ("completely disjoint vocabulary", "nothing in common at all"),
    ];
    for (a, b) in pairs {
        let edit_ab = edit_similarity(a, b);
        let edit_ba = edit_similarity(b, a);
        assert_eq!(edit_ab, edit_ba);
        assert!((0.0..=1.0).contains(&edit_ab));

        let fa = WordFrequencyVector::from_text(a);
        let fb = WordFrequencyVector::from_text(b);
        let vec_ab = cosine_similarity(&fa, &fb);
        let vec_ba = cosine_similarity(&fb, &fa);
        assert_eq!(vec_ab, vec_ba);
        assert!((0.0..=1.0 + f32::EPSILON).contains(&vec_ab));
    }
}

#[test]
fn kitten_sitting_concrete_values() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    let sim = edit_similarity("kitten", "sitting");
    assert!((sim - 0.571_428_5).abs() < 1e-5);
}

#[test]
fn tokenizer_concrete_case() {
    let freq = WordFrequencyVector::from_text("the cat sat");
    assert_eq!(freq.len(), 3);
    for token in ["the", "cat", "sat"] {
        assert_eq!(freq.count(token), 1);
    }
    assert!((cosine_similarity(&freq, &freq) - 1.0).abs() < 1e-6);
}

#[test]
fn no_reported_match_at_or_below_threshold() {
    let corpus = vec![
        doc("doc-1", "u1", "the quick brown fox jumps over the lazy dog"),
        doc("doc-2", "u2", "pack my box with five dozen liquor jugs"),
        doc("doc-3", "u3", "the quick brown fox naps beside the lazy dog"),
    ];
    let engine = SimilarityEngine::with_defaults();
    let hits = engine
        .find_matches("the quick brown fox jumps over the lazy dog", &corpus)
        .expect("match succeeds");

    for hit in &hits {
        assert!(hit.score > 0.5, "{} reported at {}", hit.doc_id, hit.score);
    }
}

#[test]
fn output_is_non_increasing_with_id_tiebreak() {
    let query = "shared words appear in every candidate text";
    let corpus = vec![
        doc("doc-d", "u", "shared words appear in every candidate text"),
        doc("doc-b", "u", "shared words appear in every candidate text here"),
        doc("doc-c", "u", "shared words appear in every candidate text"),
        doc("doc-a", "u", "shared words appear in some candidate text"),
    ];
    let engine = SimilarityEngine::with_defaults();
    let hits = engine.find_matches(query, &corpus).expect("match succeeds");

    for window in hits.windows(2) {
        assert!(window[0].score >= window[1].score);
        if window[0].score == window[1].score {
            assert!(window[0].doc_id < window[1].doc_id);
        }
    }
    // doc-c and doc-d are byte-identical to the query; id ascending decides.
    let ids: Vec<&str> = hits.iter().map(|h| h.doc_id.as_str()).collect();
    let pos_c = ids.iter().position(|&id| id == "doc-c").expect("doc-c hits");
    let pos_d = ids.iter().position(|&id| id == "doc-d").expect("doc-d hits");
    assert!(pos_c < pos_d);
}

#[test]
fn empty_query_scores_zero_and_is_excluded() {
    let corpus = vec![doc("doc-1", "u1", "a nonempty candidate document")];
    let engine = SimilarityEngine::with_defaults();
    let hits = engine.find_matches("", &corpus).expect("empty query is legal");
    assert!(hits.is_empty());

    // The underlying signals both collapse to zero.
    assert_eq!(edit_similarity("", "a nonempty candidate document"), 0.0);
    let empty = WordFrequencyVector::from_text("");
    let full = WordFrequencyVector::from_text("a nonempty candidate document");
    assert_eq!(cosine_similarity(&empty, &full), 0.0);
}

#[test]
fn three_candidates_two_qualify() {
    let query = "the history of the roman empire in the west";
    let corpus = vec![
        doc("doc-hi", "u1", "the history of the roman empire in the west"),
        doc("doc-lo", "u2", "a field guide to alpine wildflowers of chile"),
        doc("doc-mid", "u3", "the history of the roman empire in the east"),
    ];
    let engine = SimilarityEngine::with_defaults();
    let hits = engine.find_matches(query, &corpus).expect("match succeeds");

    let ids: Vec<&str> = hits.iter().map(|h| h.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["doc-hi", "doc-mid"]);
    assert!(hits[0].score >= hits[1].score);
}

#[test]
fn match_results_serialize_for_transport() {
    let corpus = vec![doc("doc-json", "ivy", "serialization belongs to the caller")];
    let engine = SimilarityEngine::with_defaults();
    let hits = engine
        .find_matches("serialization belongs to the caller", &corpus)
        .expect("match succeeds");
    assert_eq!(hits.len(), 1);

    let json = serde_json::to_string(&hits).expect("serialize");
    let back: Vec<docmatch::MatchResult> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(hits, back);
}
