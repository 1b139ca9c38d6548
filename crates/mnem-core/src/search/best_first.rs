use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use tracing::{debug, debug_span};

use super::cost::CostFunction;
use super::graph::EdgeGraph;
use super::MatchCandidate;

pub(crate) struct SearchLimits {
    /// Completed paths to collect before stopping
    pub max_paths: usize,
    /// Popped states before giving up
    pub max_expansions: usize,
    pub prune_slack: i64,
}

/// Completed paths plus the lightest path to the furthest position reached
/// short of the end.
#[derive(Debug, Default)]
pub(crate) struct PathSearch {
    pub full: Vec<MatchCandidate>,
    pub furthest: Option<MatchCandidate>,
}

/// A partial path: the edge it ends with and a link to its predecessor.
struct PathState {
    edge: usize,
    prev: Option<usize>,
    weight: i64,
    has_peg: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    weight: i64,
    /// Ends with a peg edge
    peg: bool,
    seq: usize,
    state: usize,
}

impl Ord for OpenEntry {
    // BinaryHeap pops the greatest entry: lightest weight, then peg edges,
    // then discovery order.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| self.peg.cmp(&other.peg))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Search<'a> {
    graph: &'a EdgeGraph,
    weights: Vec<i64>,
    slack: i64,
    states: Vec<PathState>,
    open: BinaryHeap<OpenEntry>,
    /// best[i] = lightest weight known to reach position i
    best: Vec<Option<i64>>,
    /// States expanded from each position, at most `top_k`
    expanded: Vec<usize>,
    top_k: usize,
}

impl<'a> Search<'a> {
    fn new(graph: &'a EdgeGraph, cost_fn: &dyn CostFunction, limits: &SearchLimits) -> Self {
        let mut best = vec![None; graph.len + 1];
        best[0] = Some(0);
        Self {
            graph,
            weights: graph.edges.iter().map(|e| cost_fn.edge_cost(e)).collect(),
            slack: limits.prune_slack,
            states: Vec::new(),
            open: BinaryHeap::new(),
            best,
            expanded: vec![0; graph.len + 1],
            top_k: limits.max_paths,
        }
    }

    /// Positions before the end expand only their `top_k` lightest prefixes.
    /// Each of the `top_k` lightest full paths passes through one of them.
    fn saturated(&self, pos: usize) -> bool {
        pos < self.graph.len && self.expanded[pos] >= self.top_k
    }

    fn within_slack(&self, pos: usize, weight: i64) -> bool {
        self.best[pos].map_or(true, |b| weight <= b + self.slack)
    }

    /// Extend `prev` (or the empty path) along `edge`, unless the result is
    /// outside the slack of the best weight known at its end.
    fn discover(&mut self, prev: Option<usize>, edge: usize) {
        let (base, prev_peg) = prev.map_or((0, false), |p| {
            let s = &self.states[p];
            (s.weight, s.has_peg)
        });
        let (end, from_peg) = {
            let e = &self.graph.edges[edge];
            (e.end, e.from_peg)
        };
        let weight = base + self.weights[edge];
        if !self.within_slack(end, weight) || self.saturated(end) {
            return;
        }
        if self.best[end].map_or(true, |b| weight < b) {
            self.best[end] = Some(weight);
        }
        let state = self.states.len();
        self.states.push(PathState {
            edge,
            prev,
            weight,
            has_peg: prev_peg || from_peg,
        });
        self.open.push(OpenEntry {
            weight,
            peg: from_peg,
            seq: state,
            state,
        });
    }

    fn end_of(&self, state: usize) -> usize {
        self.graph.edges[self.states[state].edge].end
    }

    fn candidate(&self, state: usize) -> MatchCandidate {
        let mut chain = Vec::new();
        let mut cur = Some(state);
        while let Some(i) = cur {
            chain.push(self.states[i].edge);
            cur = self.states[i].prev;
        }
        chain.reverse();

        let words = chain
            .iter()
            .flat_map(|&e| self.graph.edges[e].words.iter().cloned())
            .collect();
        let end = self.end_of(state);
        let s = &self.states[state];
        MatchCandidate {
            words,
            digits_covered: 0..end,
            is_full_match: end == self.graph.len,
            weight: s.weight,
            is_peg_sourced: s.has_peg,
        }
    }
}

/// Best-first expansion from position 0.
///
/// States pop in nondecreasing weight order, so completed paths come out
/// lightest first. Paths with identical word sequences are reported once.
pub(crate) fn best_first(
    graph: &EdgeGraph,
    cost_fn: &dyn CostFunction,
    limits: &SearchLimits,
) -> PathSearch {
    let n = graph.len;
    let _span = debug_span!("best_first", n, max_paths = limits.max_paths).entered();
    let mut result = PathSearch::default();
    if n == 0 || limits.max_paths == 0 {
        return result;
    }

    let mut search = Search::new(graph, cost_fn, limits);
    for &edge in &graph.edges_by_start[0] {
        search.discover(None, edge);
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut furthest: Option<usize> = None;
    let mut expansions = 0;

    while let Some(entry) = search.open.pop() {
        let end = search.end_of(entry.state);
        // The best weight at `end` may have improved since this was queued.
        if !search.within_slack(end, entry.weight) || search.saturated(end) {
            continue;
        }
        if expansions >= limits.max_expansions {
            debug!(expansions, "expansion limit reached");
            break;
        }
        expansions += 1;
        search.expanded[end] += 1;
        if furthest.map_or(true, |f| end > search.end_of(f)) {
            furthest = Some(entry.state);
        }

        if end == n {
            let candidate = search.candidate(entry.state);
            if seen.insert(candidate.key()) {
                result.full.push(candidate);
                if result.full.len() >= limits.max_paths {
                    break;
                }
            }
            continue;
        }

        for &edge in &graph.edges_by_start[end] {
            search.discover(Some(entry.state), edge);
        }
    }

    result.furthest = furthest
        .filter(|&f| search.end_of(f) < n)
        .map(|f| search.candidate(f));
    debug!(
        expansions,
        full = result.full.len(),
        best_weight = result.full.first().map(|c| c.weight)
    );
    result
}
