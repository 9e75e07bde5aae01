//! Best-match selection over a dictionary snapshot.

use serde::{Deserialize, Serialize};

use crate::matching::{normalize, normalized_similarity, DEFAULT_MATCH_THRESHOLD};
use crate::types::{Dictionary, UNKNOWN_FIELD};

/// Outcome of a lookup against a dictionary snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    /// A headword scored above the acceptance threshold.
    Found(WordMatch),
    /// No headword qualified.
    NotFound,
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Display fields for a matched headword.
///
/// `display_word` is the original-cased headword as stored in the dictionary,
/// not its normalized form. Optional entry fields fall back to
/// [`UNKNOWN_FIELD`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub display_word: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub meaning: String,
}

/// Per-query scoring record for a single headword.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCandidate {
    /// Original-cased headword.
    pub key: String,
    /// Headword after normalization.
    pub normalized_key: String,
    /// Similarity of the normalized query to `normalized_key`, in `[0, 1]`.
    pub score: f64,
}

/// Score every headword against the query and return the best candidate.
///
/// Ties keep the first candidate encountered; [`Dictionary`] iterates in
/// lexical order, so a tie resolves to the lexicographically smallest
/// headword. `None` only for an empty dictionary.
pub fn best_match(query: &str, dictionary: &Dictionary) -> Option<MatchCandidate> {
    let q = normalize(query.trim());

    let mut best: Option<MatchCandidate> = None;
    for key in dictionary.keys() {
        let normalized_key = normalize(key);
        let score = normalized_similarity(&q, &normalized_key);
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(MatchCandidate {
                key: key.clone(),
                normalized_key,
                score,
            });
        }
    }
    best
}

/// Resolve a query with the default acceptance threshold.
pub fn resolve(query: &str, dictionary: &Dictionary) -> MatchResult {
    resolve_with_threshold(query, dictionary, DEFAULT_MATCH_THRESHOLD)
}

/// Resolve a query against a dictionary snapshot.
///
/// A best score equal to `threshold` is a miss; only strictly greater scores
/// match. Pure: the snapshot is read-only and nothing outlives the call
/// except the returned fields.
pub fn resolve_with_threshold(
    query: &str,
    dictionary: &Dictionary,
    threshold: f64,
) -> MatchResult {
    let Some(candidate) = best_match(query, dictionary) else {
        return MatchResult::NotFound;
    };

    tracing::debug!(
        query,
        best = %candidate.key,
        score = candidate.score,
        "scored dictionary snapshot"
    );

    if candidate.score <= threshold {
        return MatchResult::NotFound;
    }

    let Some(entry) = dictionary.get(&candidate.key) else {
        return MatchResult::NotFound;
    };

    MatchResult::Found(WordMatch {
        display_word: candidate.key,
        pronunciation: entry
            .pronunciation
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        part_of_speech: entry
            .part_of_speech
            .clone()
            .unwrap_or_else(|| UNKNOWN_FIELD.to_string()),
        meaning: entry.meaning.clone(),
    })
}
