//! Fuzzy matching primitives: headword normalization and similarity scoring.

use unicode_normalization::UnicodeNormalization;

/// Acceptance threshold for [`crate::resolver::resolve`]. A best score at or
/// below this value is reported as no match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Substitutions for letters of the Edôâma orthography whose decomposed form
/// users commonly type as the plain base letter. Fixed data calibrated to the
/// published dictionary; applied after decomposition, matching the site's own
/// lookup.
pub const SUBSTITUTIONS: &[(char, char)] = &[
    ('ķ', 'k'),
    ('ǩ', 'k'),
    ('ż', 'z'),
    ('ž', 'z'),
    ('ģ', 'g'),
    ('â', 'a'),
];

/// Combining diacritical marks block, stripped after decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Collapse a headword or query to its comparable base form: lowercase,
/// NFD-decompose, drop combining marks, then apply [`SUBSTITUTIONS`].
///
/// Idempotent. Does not trim whitespace; the resolver trims queries before
/// normalizing them.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .map(|c| {
            SUBSTITUTIONS
                .iter()
                .find(|(from, _)| *from == c)
                .map_or(c, |(_, to)| *to)
        })
        .collect()
}

/// Levenshtein edit distance over the character sequences of `a` and `b`.
/// Insert, delete, and substitute each cost one.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rolling rows instead of the full matrix.
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `[0, 1]` derived from edit distance: with `L` the longer
/// character length, `(L - distance) / L`; two empty strings score 1.0.
///
/// Symmetric in its arguments. Inputs are expected to be normalized already.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}
