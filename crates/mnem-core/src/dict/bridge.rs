use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{DictError, Dictionary, SearchResult};
use crate::system::{is_bridge_code, MnemonicSystem};

/// Upper bound on ranked words kept per bridge code.
pub const MAX_WORDS_PER_CODE: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeEntry {
    pub code: String,
    /// Lowercase words, best mnemonic first.
    pub words: Vec<String>,
}

/// Digit string → entry indices for one system.
#[derive(Debug, Default)]
struct DigitIndex {
    by_digits: HashMap<String, Vec<usize>>,
    max_len: usize,
}

/// Immutable bridge-code dictionary.
///
/// Built once and shared read-only by every query. Entries are sorted by
/// code; each supported system gets a digit index computed at construction.
#[derive(Debug)]
pub struct BridgeDictionary {
    entries: Vec<BridgeEntry>,
    indexes: HashMap<MnemonicSystem, DigitIndex>,
    license: Option<String>,
}

impl BridgeDictionary {
    /// Build from (code, ranked words) pairs.
    ///
    /// Codes must be non-empty strings over the bridge alphabet. Words are
    /// lowercased; blank words are dropped; lists are capped at
    /// `MAX_WORDS_PER_CODE`. Repeated codes are merged in input order.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Result<Self, DictError> {
        let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (code, words) in entries {
            if !is_bridge_code(&code) {
                return Err(DictError::InvalidCode(code));
            }
            let list = merged.entry(code).or_default();
            for word in words {
                let word = word.trim().to_lowercase();
                if !word.is_empty() && !list.contains(&word) {
                    list.push(word);
                }
            }
        }

        let entries: Vec<BridgeEntry> = merged
            .into_iter()
            .map(|(code, mut words)| {
                if words.len() > MAX_WORDS_PER_CODE {
                    warn!(code = %code, count = words.len(), "truncating word list");
                    words.truncate(MAX_WORDS_PER_CODE);
                }
                BridgeEntry { code, words }
            })
            .collect();

        Ok(Self::from_sorted(entries))
    }

    /// Entries must already be sorted by code and validated.
    pub(super) fn from_sorted(entries: Vec<BridgeEntry>) -> Self {
        let mut indexes = HashMap::new();
        for system in MnemonicSystem::ALL {
            let table = system.table();
            let mut index = DigitIndex::default();
            for (i, entry) in entries.iter().enumerate() {
                let Some(digits) = table.code_to_digits(&entry.code) else {
                    continue;
                };
                index.max_len = index.max_len.max(digits.len());
                index.by_digits.entry(digits).or_default().push(i);
            }
            indexes.insert(system, index);
        }
        debug!(codes = entries.len(), "bridge dictionary indexed");
        Self {
            entries,
            indexes,
            license: None,
        }
    }

    pub(super) fn with_license(mut self, license: Option<String>) -> Self {
        self.license = license;
        self
    }

    /// Metadata text carried by the artifact, if any.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn entries(&self) -> &[BridgeEntry] {
        &self.entries
    }

    /// Words stored under an exact bridge code.
    pub fn words_for_code(&self, code: &str) -> Option<&[String]> {
        self.entries
            .binary_search_by(|e| e.code.as_str().cmp(code))
            .ok()
            .map(|i| self.entries[i].words.as_slice())
    }

    /// Returns (code_count, word_count).
    pub fn stats(&self) -> (usize, usize) {
        let words = self.entries.iter().map(|e| e.words.len()).sum();
        (self.entries.len(), words)
    }

    fn index(&self, system: MnemonicSystem) -> Option<&DigitIndex> {
        self.indexes.get(&system)
    }
}

/// Interleave ranked lists: every list's first word, then every second
/// word, and so on. Repeats keep their best rank.
pub(super) fn merge_by_rank(lists: &[&[String]]) -> Vec<String> {
    let depth = lists.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut merged: Vec<String> = Vec::new();
    for rank in 0..depth {
        for word in lists.iter().filter_map(|l| l.get(rank)) {
            if !merged.contains(word) {
                merged.push(word.clone());
            }
        }
    }
    merged
}

impl Dictionary for BridgeDictionary {
    fn lookup_exact(&self, digits: &str, system: MnemonicSystem) -> Vec<String> {
        if digits.is_empty() {
            return Vec::new();
        }
        let codes = system.table().digits_to_codes(digits);
        let lists: Vec<&[String]> = codes
            .iter()
            .filter_map(|code| self.words_for_code(code))
            .collect();
        merge_by_rank(&lists)
    }

    fn lookup_prefixes(&self, digits: &str, system: MnemonicSystem) -> Vec<SearchResult> {
        let Some(index) = self.index(system) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        for len in (1..=digits.len().min(index.max_len)).rev() {
            if !digits.is_char_boundary(len) {
                continue;
            }
            let prefix = &digits[..len];
            let Some(ids) = index.by_digits.get(prefix) else {
                continue;
            };
            let lists: Vec<&[String]> = ids
                .iter()
                .map(|&id| self.entries[id].words.as_slice())
                .collect();
            results.push(SearchResult {
                digits: prefix.to_string(),
                codes: ids.iter().map(|&id| self.entries[id].code.clone()).collect(),
                words: merge_by_rank(&lists),
            });
        }
        results
    }
}
