use crate::settings::SearchSettings;

use super::graph::Edge;

/// Trait for weighting edges during coverage search.
///
/// Weights must be strictly positive so that best-first expansion reaches
/// every position in nondecreasing weight order.
pub(crate) trait CostFunction: Send + Sync {
    fn edge_cost(&self, edge: &Edge) -> i64;
}

/// Length-based edge weight.
/// - 1 digit: heavy penalty
/// - 2 digits: light penalty
/// - 3+ digits: base weight
///
/// Peg edges get a fixed bonus subtracted.
pub(crate) struct LengthCost {
    one_digit: i64,
    two_digit: i64,
    base: i64,
    peg_bonus: i64,
}

impl LengthCost {
    pub fn from_settings(s: &SearchSettings) -> Self {
        Self {
            one_digit: s.one_digit_penalty,
            two_digit: s.two_digit_penalty,
            base: s.base_weight,
            peg_bonus: s.peg_bonus,
        }
    }
}

impl CostFunction for LengthCost {
    fn edge_cost(&self, edge: &Edge) -> i64 {
        let weight = match edge.len() {
            0 | 1 => self.one_digit,
            2 => self.two_digit,
            _ => self.base,
        };
        if edge.from_peg {
            weight - self.peg_bonus
        } else {
            weight
        }
    }
}
