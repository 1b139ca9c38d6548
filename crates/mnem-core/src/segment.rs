//! Digit segmentation: ways to cut a digit string into contiguous parts.
//!
//! `segment` returns a lazy, restartable iterator. Partitions come out with
//! fewer parts first; among equal part counts, the most length-balanced
//! splits come first.

use std::collections::VecDeque;

use serde::Serialize;

use crate::settings::settings;

/// One partition of a digit string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitSegmentation {
    pub parts: Vec<String>,
}

impl DigitSegmentation {
    /// Human-readable form, e.g. `"12-345"`.
    pub fn pattern(&self) -> String {
        self.parts.join("-")
    }

    /// Concatenation of the parts; equals the segmented input.
    pub fn joined(&self) -> String {
        self.parts.concat()
    }
}

/// Segment `digits` into 1..=`max_parts` parts, using the configured
/// `segment.max_part_len`.
pub fn segment(digits: &str, max_parts: usize) -> Segmentations {
    segment_with(digits, max_parts, settings().segment.max_part_len)
}

/// Segment with an explicit part-length limit.
///
/// When no partition fits within `max_parts` parts of at most
/// `max_part_len` digits, the last part absorbs the remainder instead.
pub fn segment_with(digits: &str, max_parts: usize, max_part_len: usize) -> Segmentations {
    let len = digits.len();
    let max_part_len = max_part_len.max(1);
    let max_parts = max_parts.min(len);
    let fold = max_parts > 0 && len.div_ceil(max_part_len) > max_parts;
    Segmentations {
        digits: digits.to_string(),
        max_parts,
        max_part_len,
        fold,
        next_parts: 1,
        pending: VecDeque::new(),
    }
}

/// Iterator over segmentations. Cloning it yields an independent iterator
/// from the same point; calling `segment` again starts over.
#[derive(Debug, Clone)]
pub struct Segmentations {
    digits: String,
    max_parts: usize,
    max_part_len: usize,
    fold: bool,
    next_parts: usize,
    pending: VecDeque<Vec<usize>>,
}

impl Segmentations {
    /// Fill `pending` with the next part count that has any partition.
    fn refill(&mut self) {
        while self.pending.is_empty() && self.next_parts <= self.max_parts {
            let k = self.next_parts;
            self.next_parts += 1;
            if self.fold && k < self.max_parts {
                // Folding only applies at the largest part count.
                continue;
            }
            let mut found = Vec::new();
            let mut current = Vec::with_capacity(k);
            compositions(
                self.digits.len(),
                k,
                self.max_part_len,
                self.fold,
                &mut current,
                &mut found,
            );
            found.sort_by_key(|lengths| spread(lengths));
            self.pending.extend(found);
        }
    }

    fn split(&self, lengths: &[usize]) -> DigitSegmentation {
        let mut parts = Vec::with_capacity(lengths.len());
        let mut start = 0;
        for &len in lengths {
            parts.push(self.digits[start..start + len].to_string());
            start += len;
        }
        DigitSegmentation { parts }
    }
}

impl Iterator for Segmentations {
    type Item = DigitSegmentation;

    fn next(&mut self) -> Option<Self::Item> {
        self.refill();
        let lengths = self.pending.pop_front()?;
        Some(self.split(&lengths))
    }
}

fn spread(lengths: &[usize]) -> usize {
    let max = lengths.iter().copied().max().unwrap_or(0);
    let min = lengths.iter().copied().min().unwrap_or(0);
    max - min
}

/// All ordered part-length lists summing to `remaining` with exactly
/// `parts_left` parts. With `fold`, the final part may exceed `max_len`.
fn compositions(
    remaining: usize,
    parts_left: usize,
    max_len: usize,
    fold: bool,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if parts_left == 1 {
        if remaining >= 1 && (fold || remaining <= max_len) {
            current.push(remaining);
            out.push(current.clone());
            current.pop();
        }
        return;
    }
    // Each later part needs at least one digit.
    let upper = max_len.min(remaining.saturating_sub(parts_left - 1));
    for len in 1..=upper {
        current.push(len);
        compositions(remaining - len, parts_left - 1, max_len, fold, current, out);
        current.pop();
    }
}
