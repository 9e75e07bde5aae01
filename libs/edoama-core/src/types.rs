//! Core types for the Edôâma dictionary.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder surfaced for entry fields the dictionary does not provide.
pub const UNKNOWN_FIELD: &str = "N/A";

/// A single dictionary entry, keyed by its headword in a [`Dictionary`].
///
/// Field names follow the payload embedded in the published dictionary page
/// (`pos`, `ipa`, `meaning`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Part-of-speech label, e.g. "noun".
    #[serde(rename = "pos", skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    /// IPA transcription.
    #[serde(rename = "ipa", skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Gloss/definition text.
    pub meaning: String,
}

impl Entry {
    /// Entry with only a meaning, the minimum the dictionary guarantees.
    pub fn with_meaning(meaning: impl Into<String>) -> Self {
        Self {
            part_of_speech: None,
            pronunciation: None,
            meaning: meaning.into(),
        }
    }
}

/// Dictionary snapshot: headword (original casing and diacritics) -> entry.
///
/// A `BTreeMap` iterates in lexical headword order, which makes best-match
/// tie-breaking deterministic. The resolver never mutates a snapshot.
pub type Dictionary = BTreeMap<String, Entry>;
