//! End-to-end lookup flow: extract the dictionary embedded in page text,
//! then resolve user queries against the snapshot.

use edoama_core::{
    extract_embedded, fingerprint, resolve, Dictionary, MatchResult, SourceError,
};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"<!doctype html>
<html>
  <head><title>Edôâma Dictionary</title></head>
  <body>
    <script>
      const dictionaryData = {
        "eda": { "ipa": "ˈe.da", "pos": "noun", "meaning": "water" },
        "ekso": { "ipa": "ˈek.so", "pos": "noun", "meaning": "tree" },
        "iho": { "pos": "interjection", "meaning": "hello" },
        "ķano": { "meaning": "fire" },
        "sâmi": { "meaning": "to walk" }
      };
      renderDictionary(dictionaryData);
    </script>
  </body>
</html>"#;

/// Stand-in for the excluded fetch collaborator when the site is down.
fn fetch_failed() -> Result<Dictionary, SourceError> {
    Err(SourceError::Unavailable("connection refused".to_string()))
}

#[test]
fn page_snapshot_resolves_exact_and_fuzzy_queries() {
    let dictionary = extract_embedded(PAGE).expect("page carries a payload");
    assert_eq!(dictionary.len(), 5);

    // exact, modulo trim + case fold
    match resolve("Eda ", &dictionary) {
        MatchResult::Found(m) => {
            assert_eq!(m.display_word, "eda");
            assert_eq!(m.meaning, "water");
            assert_eq!(m.pronunciation, "ˈe.da");
            assert_eq!(m.part_of_speech, "noun");
        }
        MatchResult::NotFound => panic!("expected a match for 'Eda '"),
    }

    // one typo away
    match resolve("ecso", &dictionary) {
        MatchResult::Found(m) => assert_eq!(m.display_word, "ekso"),
        MatchResult::NotFound => panic!("expected a match for 'ecso'"),
    }

    // diacritic headword found from the plain spelling
    match resolve("kano", &dictionary) {
        MatchResult::Found(m) => {
            assert_eq!(m.display_word, "ķano");
            assert_eq!(m.meaning, "fire");
            assert_eq!(m.pronunciation, "N/A");
        }
        MatchResult::NotFound => panic!("expected a match for 'kano'"),
    }

    // circumflex headword from plain spelling
    match resolve("sami", &dictionary) {
        MatchResult::Found(m) => assert_eq!(m.display_word, "sâmi"),
        MatchResult::NotFound => panic!("expected a match for 'sami'"),
    }

    assert_eq!(resolve("banana", &dictionary), MatchResult::NotFound);
}

#[test]
fn unavailable_source_is_not_a_failed_lookup() {
    // A healthy dictionary missing the word answers NotFound...
    let dictionary = extract_embedded(PAGE).expect("page carries a payload");
    assert_eq!(resolve("zzzzzz", &dictionary), MatchResult::NotFound);

    // ...while a failed acquisition is an error before any lookup happens.
    match fetch_failed() {
        Err(SourceError::Unavailable(reason)) => assert_eq!(reason, "connection refused"),
        other => panic!("expected Unavailable, got {other:?}"),
    }
}

#[test]
fn snapshot_cache_key_follows_page_content() {
    let original = fingerprint(PAGE);
    assert_eq!(original, fingerprint(PAGE));

    let edited = PAGE.replace("water", "rain");
    assert_ne!(fingerprint(&edited), original);
}
