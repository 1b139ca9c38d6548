//! Weighted coverage search.
//!
//! Digit positions `0..=N` are graph nodes; a word whose encoding equals
//! `digits[i..j]` is an edge `i → j`. A best-first expansion from 0 finds
//! the lightest word sequences that reach N, keeping near-optimal
//! alternatives within a slack of the best weight known per position.

pub(crate) mod cost;
mod best_first;
mod graph;
mod partial;


use std::ops::Range;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::input::is_digit_string;
use crate::peg::Peg;
use crate::settings::settings;
use crate::system::MnemonicSystem;

use best_first::{best_first, SearchLimits};
use cost::LengthCost;
use partial::partial_matches;

pub use graph::{build_graph, Edge, EdgeGraph};

/// One scored way to realize a digit span as words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub words: Vec<String>,
    /// Digit index range, relative to the queried string.
    pub digits_covered: Range<usize>,
    pub is_full_match: bool,
    /// Lower is better.
    pub weight: i64,
    pub is_peg_sourced: bool,
}

impl MatchCandidate {
    /// Case-insensitive word-sequence key used for deduplication.
    pub fn key(&self) -> String {
        word_key(&self.words)
    }

    pub fn covered_len(&self) -> usize {
        self.digits_covered.len()
    }
}

pub(crate) fn word_key<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full and partial coverages of one digit string.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Paths covering every digit, lightest first.
    pub full: Vec<MatchCandidate>,
    /// Prefix coverages, longest first.
    pub partial: Vec<MatchCandidate>,
}

/// Search `digits` with the configured weights and limits.
///
/// `digits` must be ASCII digits only; anything else yields an empty
/// outcome.
pub fn search(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    digits: &str,
) -> SearchOutcome {
    let _span = debug_span!("search", digits, %system).entered();
    if digits.is_empty() || !is_digit_string(digits) {
        return SearchOutcome::default();
    }
    let s = &settings().search;
    let graph = build_graph(dict, system, pegs, digits, s.max_words_per_edge);
    let cost_fn = LengthCost::from_settings(s);
    let limits = SearchLimits {
        max_paths: s.max_paths,
        max_expansions: s.max_expansions,
        prune_slack: s.prune_slack,
    };
    let paths = best_first(&graph, &cost_fn, &limits);
    let partial = partial_matches(
        &graph,
        &cost_fn,
        paths.furthest,
        s.max_partial_prefix,
        s.max_partials,
    );
    debug!(full = paths.full.len(), partial = partial.len());
    SearchOutcome {
        full: paths.full,
        partial,
    }
}
