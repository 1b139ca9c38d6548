use crate::search::MatchCandidate;

/// Suffixes stripped to reach a base form, tried in order. The replacement
/// is appended after stripping.
const SUFFIXES: &[(&str, &str)] = &[
    ("tion", ""),
    ("ness", ""),
    ("ies", "y"),
    ("ing", ""),
    ("est", ""),
    ("es", ""),
    ("ed", ""),
    ("er", ""),
    ("ly", ""),
    ("s", ""),
];

/// Shortest stem left after stripping.
const MIN_STEM: usize = 3;

/// Lowercased word with at most one common suffix removed.
pub fn base_form(word: &str) -> String {
    let lower = word.to_lowercase();
    for &(suffix, replacement) in SUFFIXES {
        if let Some(stem) = lower.strip_suffix(suffix) {
            if stem.chars().count() >= MIN_STEM {
                return format!("{stem}{replacement}");
            }
        }
    }
    lower
}

/// Case-insensitive equality, prefix relation or shared base form.
pub fn too_similar(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.starts_with(&b) || b.starts_with(&a) || base_form(&a) == base_form(&b)
}

/// Walk ranked candidates, dropping any whose words are too similar to a
/// word already accepted. Peg-sourced candidates are always kept.
pub(super) fn diversify(candidates: Vec<MatchCandidate>, max_results: usize) -> Vec<MatchCandidate> {
    let mut accepted_words: Vec<String> = Vec::new();
    let mut results = Vec::new();

    for candidate in candidates {
        if results.len() >= max_results {
            break;
        }
        let clashes = candidate
            .words
            .iter()
            .any(|w| accepted_words.iter().any(|a| too_similar(w, a)));
        if clashes && !candidate.is_peg_sourced {
            continue;
        }
        accepted_words.extend(candidate.words.iter().map(|w| w.to_lowercase()));
        results.push(candidate);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(words: &[&str], from_peg: bool) -> MatchCandidate {
        MatchCandidate {
            words: words.iter().map(|w| w.to_string()).collect(),
            digits_covered: 0..3,
            is_full_match: true,
            weight: 10,
            is_peg_sourced: from_peg,
        }
    }

    #[test]
    fn test_base_form() {
        assert_eq!(base_form("Cats"), "cat");
        assert_eq!(base_form("boxes"), "box");
        assert_eq!(base_form("berries"), "berry");
        assert_eq!(base_form("walking"), "walk");
        assert_eq!(base_form("walked"), "walk");
        assert_eq!(base_form("quickly"), "quick");
        assert_eq!(base_form("darkness"), "dark");
        assert_eq!(base_form("station"), "sta");
        // Too short to strip.
        assert_eq!(base_form("bed"), "bed");
        assert_eq!(base_form("sing"), "sing");
    }

    #[test]
    fn test_too_similar() {
        assert!(too_similar("Tack", "tack"));
        assert!(too_similar("cat", "cats"));
        assert!(too_similar("den", "denim"));
        assert!(too_similar("walked", "walking"));
        assert!(too_similar("berry", "berries"));
        assert!(!too_similar("tin", "ton"));
        assert!(!too_similar("tie", "tin"));
    }

    #[test]
    fn test_diversify_drops_plural() {
        let ranked = vec![candidate(&["cats"], false), candidate(&["cat", "sea"], false)];
        let kept = diversify(ranked, 10);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].words, vec!["cats"]);
    }

    #[test]
    fn test_diversify_keeps_pegs() {
        let ranked = vec![
            candidate(&["tack"], true),
            candidate(&["tacks"], true),
            candidate(&["tack"], false),
        ];
        let kept = diversify(ranked, 10);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|c| c.is_peg_sourced));
    }

    #[test]
    fn test_diversify_cap() {
        let ranked = vec![
            candidate(&["tin"], false),
            candidate(&["ton"], false),
            candidate(&["tie"], false),
        ];
        assert_eq!(diversify(ranked, 2).len(), 2);
    }
}
