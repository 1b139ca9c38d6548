//! Result assembly for digit queries.
//!
//! Merges exact pegs, exact dictionary words, search paths and (when full
//! coverage is thin) partial matches into one ranked, diversified list.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::input::is_digit_string;
use crate::peg::{exact_pegs, Peg};
use crate::search::cost::{CostFunction, LengthCost};
use crate::search::{search, Edge, MatchCandidate};
use crate::segment::{segment, DigitSegmentation};
use crate::settings::settings;
use crate::system::{encode, MnemonicSystem};

mod diversify;

#[cfg(test)]
mod tests;

pub use diversify::{base_form, too_similar};

/// Per-part matches for one segmentation of the query.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentedMatch {
    pub segmentation: DigitSegmentation,
    /// parts[i] = ranked matches for `segmentation.parts[i]`
    pub parts: Vec<Vec<MatchCandidate>>,
}

/// Ranked matches for the whole digit string.
///
/// Empty or non-digit input yields an empty list.
pub fn match_full(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    digits: &str,
) -> Vec<MatchCandidate> {
    let _span = debug_span!("match_full", digits, %system).entered();
    let c = &settings().candidates;
    let results = assemble(dict, system, pegs, digits, true, c.max_results);
    debug!(result_count = results.len());
    results
}

/// Ranked matches for one segment of a larger query. Never includes
/// partial matches.
pub fn match_segment(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    span: &str,
) -> Vec<MatchCandidate> {
    let _span = debug_span!("match_segment", span, %system).entered();
    let c = &settings().candidates;
    let results = assemble(dict, system, pegs, span, false, c.max_segment_results);
    debug!(result_count = results.len());
    results
}

/// Segment-by-segment matches for the leading segmentations of `digits`.
///
/// Segmentations in which some part has no match are skipped.
pub fn match_segmented(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    digits: &str,
) -> Vec<SegmentedMatch> {
    let _span = debug_span!("match_segmented", digits, %system).entered();
    if digits.is_empty() || !is_digit_string(digits) {
        return Vec::new();
    }
    let s = &settings().segment;
    let mut by_part: HashMap<String, Vec<MatchCandidate>> = HashMap::new();
    let mut results = Vec::new();

    for segmentation in segment(digits, s.max_parts).take(s.display_limit) {
        let mut parts = Vec::with_capacity(segmentation.parts.len());
        for part in &segmentation.parts {
            let matches = by_part
                .entry(part.clone())
                .or_insert_with(|| match_segment(dict, system, pegs, part));
            if matches.is_empty() {
                break;
            }
            parts.push(matches.clone());
        }
        if parts.len() == segmentation.parts.len() {
            results.push(SegmentedMatch {
                segmentation,
                parts,
            });
        }
    }
    debug!(segmentation_count = results.len());
    results
}

fn assemble(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    digits: &str,
    with_partials: bool,
    max_results: usize,
) -> Vec<MatchCandidate> {
    if digits.is_empty() || !is_digit_string(digits) {
        return Vec::new();
    }
    let c = &settings().candidates;
    let cost_fn = LengthCost::from_settings(&settings().search);
    let len = digits.len();

    let mut merged: Vec<MatchCandidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut push = |candidate: MatchCandidate, merged: &mut Vec<MatchCandidate>| {
        if !candidate.words.is_empty() && seen.insert(candidate.key()) {
            merged.push(candidate);
        }
    };

    // 1. Pegs for the whole span.
    for peg in exact_pegs(pegs, system, digits) {
        let words: Vec<String> = peg
            .words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        let weight = whole_span_weight(&cost_fn, len, true);
        push(whole_span(words, len, weight, true), &mut merged);
    }

    // 2. Single dictionary words for the whole span, in corpus order.
    let weight = whole_span_weight(&cost_fn, len, false);
    for word in dict
        .lookup_exact(digits, system)
        .into_iter()
        .filter(|w| encode(w, system) == digits)
        .take(c.max_exact)
    {
        push(whole_span(vec![word], len, weight, false), &mut merged);
    }

    // 3. Search paths.
    let outcome = search(dict, system, pegs, digits);
    for candidate in outcome.full.into_iter().take(c.max_search) {
        push(candidate, &mut merged);
    }

    // 4. Partial matches when full coverage is thin.
    let full_count = merged.iter().filter(|m| m.is_full_match).count();
    if with_partials && full_count < c.min_full_matches {
        debug!(full_count, "adding partial matches");
        for candidate in outcome.partial {
            push(candidate, &mut merged);
        }
    }

    merged.sort_by(rank);
    diversify::diversify(merged, max_results)
}

fn whole_span(words: Vec<String>, len: usize, weight: i64, from_peg: bool) -> MatchCandidate {
    MatchCandidate {
        words,
        digits_covered: 0..len,
        is_full_match: true,
        weight,
        is_peg_sourced: from_peg,
    }
}

fn whole_span_weight(cost_fn: &dyn CostFunction, len: usize, from_peg: bool) -> i64 {
    cost_fn.edge_cost(&Edge {
        start: 0,
        end: len,
        words: Vec::new(),
        from_peg,
    })
}

/// Full before partial, then peg-sourced first, then fewer words, then
/// lower weight.
pub(crate) fn rank(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.is_full_match
        .cmp(&a.is_full_match)
        .then(b.is_peg_sourced.cmp(&a.is_peg_sourced))
        .then(a.words.len().cmp(&b.words.len()))
        .then(a.weight.cmp(&b.weight))
}
