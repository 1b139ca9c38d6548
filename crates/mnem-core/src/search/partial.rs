use std::collections::HashSet;

use super::cost::CostFunction;
use super::graph::EdgeGraph;
use super::MatchCandidate;

/// Prefix coverages for when full coverage is missing or thin.
///
/// Candidates are every single edge from position 0 that stops short of the
/// end, plus the lightest multi-word path to the furthest position the
/// search reached. Only prefixes up to `max_prefix` digits are kept. Ranked
/// by covered length (longest first), then weight, then peg edges first.
pub(crate) fn partial_matches(
    graph: &EdgeGraph,
    cost_fn: &dyn CostFunction,
    furthest: Option<MatchCandidate>,
    max_prefix: usize,
    max_partials: usize,
) -> Vec<MatchCandidate> {
    let mut partials: Vec<MatchCandidate> = graph
        .edges_by_start
        .first()
        .into_iter()
        .flatten()
        .map(|&i| &graph.edges[i])
        .filter(|e| e.end < graph.len && e.end <= max_prefix)
        .map(|e| MatchCandidate {
            words: e.words.clone(),
            digits_covered: 0..e.end,
            is_full_match: false,
            weight: cost_fn.edge_cost(e),
            is_peg_sourced: e.from_peg,
        })
        .collect();

    if let Some(path) = furthest {
        if !path.is_full_match && path.covered_len() <= max_prefix {
            partials.push(path);
        }
    }

    partials.sort_by(|a, b| {
        b.covered_len()
            .cmp(&a.covered_len())
            .then(a.weight.cmp(&b.weight))
            .then(b.is_peg_sourced.cmp(&a.is_peg_sourced))
    });

    let mut seen = HashSet::new();
    partials.retain(|c| seen.insert(c.key()));
    partials.truncate(max_partials);
    partials
}
