use std::collections::{HashMap, HashSet};

use tracing::{debug, debug_span};

use crate::dict::Dictionary;
use crate::input::is_digit_string;
use crate::peg::{prefix_pegs, Peg};
use crate::system::{encode, MnemonicSystem};

use super::word_key;

/// A word (or a peg's word sequence) covering `digits[start..end]`.
#[derive(Debug, Clone)]
pub struct Edge {
    /// Start position (digit index, inclusive)
    pub start: usize,
    /// End position (digit index, exclusive)
    pub end: usize,
    /// One dictionary word, or every word of a peg
    pub words: Vec<String>,
    pub from_peg: bool,
}

impl Edge {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// All edges over one digit string.
pub struct EdgeGraph {
    pub digits: String,
    pub edges: Vec<Edge>,
    /// edges_by_start[i] = indices of edges that start at position i
    pub edges_by_start: Vec<Vec<usize>>,
    /// Number of digits
    pub len: usize,
}

/// Build the edge graph for `digits`.
///
/// At each start position, pegs whose digits prefix the remainder are added
/// first, then dictionary words from `lookup_prefixes`. Dictionary words
/// are kept only if they encode to exactly the span they cover, and at most
/// `max_words_per_edge` of them per (start, length) pair, in corpus order.
pub fn build_graph(
    dict: &dyn Dictionary,
    system: MnemonicSystem,
    pegs: &[Peg],
    digits: &str,
    max_words_per_edge: usize,
) -> EdgeGraph {
    let len = if is_digit_string(digits) { digits.len() } else { 0 };
    let _span = debug_span!("build_graph", len).entered();
    let mut edges = Vec::new();
    let mut edges_by_start: Vec<Vec<usize>> = vec![Vec::new(); len];

    for start in 0..len {
        let suffix = &digits[start..];
        // (span length, word key) pairs already present at this start
        let mut taken: HashSet<(usize, String)> = HashSet::new();

        for peg in prefix_pegs(pegs, system, suffix) {
            let words: Vec<String> = peg
                .words
                .iter()
                .map(|w| w.trim())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect();
            if !taken.insert((peg.digits.len(), word_key(&words))) {
                continue;
            }
            edges_by_start[start].push(edges.len());
            edges.push(Edge {
                start,
                end: start + peg.digits.len(),
                words,
                from_peg: true,
            });
        }

        let mut per_len: HashMap<usize, usize> = HashMap::new();
        for result in dict.lookup_prefixes(suffix, system) {
            let span = result.digits.len();
            let count = per_len.entry(span).or_insert(0);
            for word in &result.words {
                if *count >= max_words_per_edge {
                    break;
                }
                if encode(word, system) != result.digits {
                    continue;
                }
                if !taken.insert((span, word.to_lowercase())) {
                    continue;
                }
                *count += 1;
                edges_by_start[start].push(edges.len());
                edges.push(Edge {
                    start,
                    end: start + span,
                    words: vec![word.clone()],
                    from_peg: false,
                });
            }
        }
    }

    debug!(edge_count = edges.len());
    EdgeGraph {
        digits: digits[..len].to_string(),
        edges,
        edges_by_start,
        len,
    }
}
