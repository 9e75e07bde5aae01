//! Exercise generation for lesson sessions.
//!
//! Kind selection is uniform over a fixed list, and the RNG is supplied by
//! the caller so a seeded generator reproduces a session exactly.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::types::Dictionary;

/// Exercise kinds a lesson session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Flashcard,
    MultipleChoice,
    FillBlank,
    Match,
}

/// All kinds, in draw order.
pub const EXERCISE_KINDS: [ExerciseKind; 4] = [
    ExerciseKind::Flashcard,
    ExerciseKind::MultipleChoice,
    ExerciseKind::FillBlank,
    ExerciseKind::Match,
];

/// Choices presented in a multiple-choice exercise.
pub const CHOICE_COUNT: usize = 4;
/// Maximum pairs in a match exercise.
pub const MATCH_PAIR_COUNT: usize = 4;

/// Draw the next exercise kind, uniformly.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> ExerciseKind {
    EXERCISE_KINDS[rng.gen_range(0..EXERCISE_KINDS.len())]
}

/// A multiple-choice question: pick the meaning of `headword`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultipleChoice {
    pub headword: String,
    pub choices: Vec<String>,
    pub correct_index: usize,
}

impl MultipleChoice {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}

/// Build a multiple-choice exercise for `headword`, drawing distinct
/// distractor meanings from the other entries in `words`.
///
/// `None` when `headword` is not in `words`. Fewer than [`CHOICE_COUNT`]
/// choices appear when the pool has too few distinct meanings.
pub fn multiple_choice<R: Rng + ?Sized>(
    headword: &str,
    words: &Dictionary,
    rng: &mut R,
) -> Option<MultipleChoice> {
    let entry = words.get(headword)?;

    let mut distractors: Vec<&str> = words
        .iter()
        .filter(|(key, _)| key.as_str() != headword)
        .map(|(_, e)| e.meaning.as_str())
        .filter(|meaning| *meaning != entry.meaning)
        .collect();
    distractors.sort_unstable();
    distractors.dedup();
    distractors.shuffle(rng);
    distractors.truncate(CHOICE_COUNT - 1);

    let mut choices: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    choices.push(entry.meaning.clone());
    choices.shuffle(rng);
    let correct_index = choices.iter().position(|c| *c == entry.meaning)?;

    Some(MultipleChoice {
        headword: headword.to_string(),
        choices,
        correct_index,
    })
}

/// Check a typed meaning for a fill-in exercise: the trimmed, lowercased
/// guess is accepted when it is a non-empty substring of the meaning.
pub fn check_fill_blank(guess: &str, meaning: &str) -> bool {
    let guess = guess.trim().to_lowercase();
    !guess.is_empty() && meaning.to_lowercase().contains(&guess)
}

/// A match-the-pairs exercise over up to [`MATCH_PAIR_COUNT`] words.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchExercise {
    /// Word/meaning pairs in word-column order.
    pub pairs: Vec<(String, String)>,
    /// The meaning column as presented, shuffled.
    pub meanings: Vec<String>,
}

impl MatchExercise {
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(word, _)| word.as_str())
    }

    /// Whether `meaning` is the meaning of `word`.
    pub fn is_pair(&self, word: &str, meaning: &str) -> bool {
        self.pairs
            .iter()
            .any(|(w, m)| w == word && m == meaning)
    }
}

/// Build a match exercise from the first words of a unit.
pub fn match_pairs<R: Rng + ?Sized>(words: &Dictionary, rng: &mut R) -> MatchExercise {
    let pairs: Vec<(String, String)> = words
        .iter()
        .take(MATCH_PAIR_COUNT)
        .map(|(word, entry)| (word.clone(), entry.meaning.clone()))
        .collect();

    let mut meanings: Vec<String> = pairs.iter().map(|(_, m)| m.clone()).collect();
    meanings.shuffle(rng);

    MatchExercise { pairs, meanings }
}
