//! Core library for the Edôâma language-learning tools.
//!
//! Provides:
//! - Fuzzy dictionary lookup (diacritic normalization + Levenshtein scoring)
//! - Extraction of the dictionary payload embedded in the published site
//! - Course/unit progression with XP, levels, and daily streaks
//! - Exercise generation for lesson sessions

pub mod course;
pub mod error;
pub mod exercise;
pub mod matching;
pub mod progress;
pub mod resolver;
pub mod source;
pub mod types;

pub use course::{Course, Section, Story, StoryLine, Unit, UnitRef};
pub use error::{Result, SourceError};
pub use exercise::{ExerciseKind, MatchExercise, MultipleChoice};
pub use matching::{
    levenshtein_distance, normalize, normalized_similarity, DEFAULT_MATCH_THRESHOLD,
};
pub use progress::Progress;
pub use resolver::{best_match, resolve, resolve_with_threshold, MatchCandidate, MatchResult, WordMatch};
pub use source::{extract_embedded, fingerprint};
pub use types::{Dictionary, Entry};
