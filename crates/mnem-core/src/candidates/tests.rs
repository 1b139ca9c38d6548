use proptest::prelude::*;

use super::*;
use crate::dict::BridgeDictionary;
use crate::system::encode_words;
use crate::testutil::test_dict;

const MAJOR: MnemonicSystem = MnemonicSystem::Major;

fn phrasings(results: &[MatchCandidate]) -> Vec<Vec<&str>> {
    results
        .iter()
        .map(|c| c.words.iter().map(String::as_str).collect())
        .collect()
}

fn peg(digits: &str, words: &[&str]) -> Peg {
    Peg::new(digits, words.iter().map(|w| w.to_string()).collect(), MAJOR)
}

fn small_dict(entries: &[(&str, &str)]) -> BridgeDictionary {
    BridgeDictionary::from_entries(entries.iter().map(|&(code, words)| {
        (
            code.to_string(),
            words.split_whitespace().map(str::to_string).collect(),
        )
    }))
    .unwrap()
}

#[test]
fn test_match_full_ranked_and_diversified() {
    let dict = test_dict();
    let results = match_full(&dict, MAJOR, &[], "123");

    assert_eq!(
        phrasings(&results),
        vec![
            vec!["denim"],
            vec!["tin", "ma"],
            vec!["ton", "me"],
            vec!["tie", "name"],
            vec!["dew", "gnome"],
        ]
    );
    for c in &results {
        assert!(c.is_full_match);
        assert_eq!(encode_words(&c.words, MAJOR), "123");
    }
}

#[test]
fn test_peg_ranks_before_dictionary_word() {
    let dict = test_dict();
    let pegs = vec![peg("17", &["tuck"])];
    let results = match_full(&dict, MAJOR, &pegs, "17");

    assert_eq!(
        phrasings(&results),
        vec![vec!["tuck"], vec!["tack"], vec!["duck"], vec!["dog"]]
    );
    assert!(results[0].is_peg_sourced);
    assert!(results[1..].iter().all(|c| !c.is_peg_sourced));
}

#[test]
fn test_peg_survives_similarity_filter() {
    let dict = test_dict();
    let pegs = vec![peg("17", &["tack"]), peg("17", &["tacky"])];
    let results = match_full(&dict, MAJOR, &pegs, "17");

    assert_eq!(results[0].words, vec!["tack"]);
    assert_eq!(results[1].words, vec!["tacky"]);
    assert!(results[0].is_peg_sourced && results[1].is_peg_sourced);
    // The dictionary's "tack" duplicates the peg.
    assert_eq!(results.iter().filter(|c| c.words == ["tack"]).count(), 1);
}

#[test]
fn test_inconsistent_peg_still_honored() {
    let dict = test_dict();
    let pegs = vec![peg("17", &["tin"])];
    let results = match_full(&dict, MAJOR, &pegs, "17");
    assert_eq!(results[0].words, vec!["tin"]);
    assert!(results[0].is_peg_sourced);
}

#[test]
fn test_empty_input() {
    let dict = test_dict();
    let pegs = vec![peg("17", &["tuck"])];
    assert!(match_full(&dict, MAJOR, &pegs, "").is_empty());
    assert!(match_segment(&dict, MAJOR, &pegs, "").is_empty());
    assert!(match_segmented(&dict, MAJOR, &pegs, "").is_empty());
}

#[test]
fn test_no_coverage() {
    let dict = small_dict(&[("p", "pie")]);
    assert!(match_full(&dict, MAJOR, &[], "123").is_empty());

    let pegs = vec![peg("123", &["tin", "ma"])];
    let results = match_full(&dict, MAJOR, &pegs, "123");
    assert_eq!(phrasings(&results), vec![vec!["tin", "ma"]]);
    assert!(results[0].is_peg_sourced);
}

#[test]
fn test_partial_fallback() {
    let dict = small_dict(&[("tnm", "denim"), ("t", "tie")]);
    let results = match_full(&dict, MAJOR, &[], "1239");

    assert_eq!(phrasings(&results), vec![vec!["denim"], vec!["tie"]]);
    assert!(results.iter().all(|c| !c.is_full_match));
    assert_eq!(results[0].digits_covered, 0..3);
}

#[test]
fn test_full_matches_precede_partials() {
    // One full match is below the threshold, so partials are appended.
    let dict = small_dict(&[("tk", "tack"), ("t", "tie"), ("k", "key")]);
    let results = match_full(&dict, MAJOR, &[], "170");

    // Nothing covers the trailing 0.
    assert!(results.iter().all(|c| !c.is_full_match));

    let results = match_full(&dict, MAJOR, &[], "17");
    assert_eq!(phrasings(&results), vec![vec!["tack"], vec!["tie"]]);
    assert!(results[0].is_full_match);
    assert!(!results[1].is_full_match);
}

#[test]
fn test_match_segment_has_no_partials() {
    let dict = small_dict(&[("tnm", "denim"), ("t", "tie")]);
    assert!(match_segment(&dict, MAJOR, &[], "1239").is_empty());

    let dict = test_dict();
    let results = match_segment(&dict, MAJOR, &[], "123");
    assert!(!results.is_empty());
    assert!(results.len() <= settings().candidates.max_segment_results);
    assert!(results.iter().all(|c| c.is_full_match));
}

#[test]
fn test_match_segmented_skips_unmatched_parts() {
    let dict = small_dict(&[("tn", "tin"), ("t", "tie")]);
    let results = match_segmented(&dict, MAJOR, &[], "12");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].segmentation.pattern(), "12");
    assert_eq!(results[0].parts[0][0].words, vec!["tin"]);
}

#[test]
fn test_match_segmented_parts() {
    let dict = test_dict();
    let results = match_segmented(&dict, MAJOR, &[], "123");
    let patterns: Vec<String> = results.iter().map(|r| r.segmentation.pattern()).collect();

    assert_eq!(patterns, vec!["123", "1-23", "12-3", "1-2-3"]);
    for r in &results {
        assert_eq!(r.segmentation.joined(), "123");
        for (part, matches) in r.segmentation.parts.iter().zip(&r.parts) {
            assert!(!matches.is_empty());
            for c in matches {
                assert_eq!(&encode_words(&c.words, MAJOR), part);
            }
        }
    }
}

#[test]
fn test_rank_order() {
    let make = |peg: bool, full: bool, words: usize, weight: i64| MatchCandidate {
        words: vec!["w".to_string(); words],
        digits_covered: 0..3,
        is_full_match: full,
        weight,
        is_peg_sourced: peg,
    };
    let mut list = vec![
        make(false, false, 1, 10),
        make(false, true, 2, 50),
        make(false, true, 1, 90),
        make(true, false, 1, 10),
        make(false, true, 1, 10),
    ];
    list.sort_by(rank);
    let keys: Vec<(bool, bool, usize, i64)> = list
        .iter()
        .map(|c| (c.is_peg_sourced, c.is_full_match, c.words.len(), c.weight))
        .collect();
    assert_eq!(
        keys,
        vec![
            (false, true, 1, 10),
            (false, true, 1, 90),
            (false, true, 2, 50),
            (true, false, 1, 10),
            (false, false, 1, 10),
        ]
    );
}

#[test]
fn test_peg_partial_follows_full_match() {
    let dict = small_dict(&[("tk", "tack")]);
    let pegs = vec![peg("1", &["tea"])];
    let results = match_full(&dict, MAJOR, &pegs, "17");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].words, vec!["tack"]);
    assert!(results[0].is_full_match);
    assert!(!results[0].is_peg_sourced);
    assert_eq!(results[1].words, vec!["tea"]);
    assert!(!results[1].is_full_match);
    assert!(results[1].is_peg_sourced);
}

proptest! {
    #[test]
    fn results_are_ranked(digits in "[0-9]{1,6}") {
        let dict = test_dict();
        let pegs = vec![peg("17", &["tuck"]), peg("1", &["tea"])];
        let results = match_full(&dict, MAJOR, &pegs, &digits);
        prop_assert!(results.len() <= settings().candidates.max_results);
        for pair in results.windows(2) {
            prop_assert!(rank(&pair[0], &pair[1]) != Ordering::Greater);
            prop_assert!(pair[0].is_full_match || !pair[1].is_full_match);
        }
        for c in results.iter().filter(|c| c.is_full_match) {
            prop_assert_eq!(encode_words(&c.words, MAJOR), digits.clone());
        }
    }

    #[test]
    fn accepted_words_are_dissimilar(digits in "[0-9]{1,6}") {
        let dict = test_dict();
        let results = match_full(&dict, MAJOR, &[], &digits);
        for (i, later) in results.iter().enumerate() {
            for earlier in &results[..i] {
                for w in &later.words {
                    prop_assert!(!earlier.words.iter().any(|e| too_similar(w, e)));
                }
            }
        }
    }
}
