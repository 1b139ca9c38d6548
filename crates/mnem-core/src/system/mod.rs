//! Mnemonic systems: digit ↔ consonant-sound tables and word encoding.
//!
//! Each `MnemonicSystem` owns a `SystemTable` built once on first use. The
//! table maps letter patterns to digits (for `encode`) and bridge classes to
//! digits (for translating dictionary keys).

mod table;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub use table::SystemTable;

/// A decimal digit, `0..=9`.
pub type Digit = u8;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SystemError {
    #[error("digit {0} has no consonant pattern")]
    MissingDigit(Digit),

    #[error("invalid consonant pattern: {0:?}")]
    InvalidPattern(String),

    #[error("pattern {pattern:?} is claimed by digits {first} and {second}")]
    DuplicatePattern {
        pattern: String,
        first: Digit,
        second: Digit,
    },

    #[error("bridge class mapped to non-digit {0}")]
    InvalidDigit(Digit),

    #[error("unknown mnemonic system: {0}")]
    UnknownSystem(String),
}

/// The ten phonetic consonant classes a bridge code is spelled with.
///
/// Classes are independent of any digit assignment; each system decides
/// which digit a class stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BridgeClass {
    Sibilant,
    Dental,
    Nasal,
    Labial,
    Rhotic,
    Lateral,
    Palatal,
    Velar,
    Fricative,
    Plosive,
}

impl BridgeClass {
    pub const ALL: [BridgeClass; 10] = [
        Self::Sibilant,
        Self::Dental,
        Self::Nasal,
        Self::Labial,
        Self::Rhotic,
        Self::Lateral,
        Self::Palatal,
        Self::Velar,
        Self::Fricative,
        Self::Plosive,
    ];

    pub fn symbol(self) -> char {
        match self {
            Self::Sibilant => 's',
            Self::Dental => 't',
            Self::Nasal => 'n',
            Self::Labial => 'm',
            Self::Rhotic => 'r',
            Self::Lateral => 'l',
            Self::Palatal => 'j',
            Self::Velar => 'k',
            Self::Fricative => 'f',
            Self::Plosive => 'p',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.symbol() == c)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Returns true if `code` is a non-empty string over the bridge alphabet.
pub fn is_bridge_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| BridgeClass::from_symbol(c).is_some())
}

/// A supported digit-assignment system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MnemonicSystem {
    /// The classical Major System.
    Major,
    /// The German-tradition variant (w with f/v, sch and tsch as 6).
    German,
}

impl MnemonicSystem {
    pub const ALL: [MnemonicSystem; 2] = [Self::Major, Self::German];

    pub fn id(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::German => "german",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "Major System",
            Self::German => "Major System (German variant)",
        }
    }

    /// The validated table for this system, built on first use.
    pub fn table(self) -> &'static SystemTable {
        static MAJOR: OnceLock<SystemTable> = OnceLock::new();
        static GERMAN: OnceLock<SystemTable> = OnceLock::new();
        match self {
            Self::Major => MAJOR.get_or_init(|| {
                SystemTable::new(MAJOR_PATTERNS, STANDARD_BRIDGE_DIGITS)
                    .expect("major system table must be valid")
            }),
            Self::German => GERMAN.get_or_init(|| {
                SystemTable::new(GERMAN_PATTERNS, STANDARD_BRIDGE_DIGITS)
                    .expect("german system table must be valid")
            }),
        }
    }
}

impl fmt::Display for MnemonicSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MnemonicSystem {
    type Err = SystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sys| sys.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SystemError::UnknownSystem(s.to_string()))
    }
}

/// Digit for each bridge class, in `BridgeClass::ALL` order.
const STANDARD_BRIDGE_DIGITS: [Digit; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

const MAJOR_PATTERNS: [&[&str]; 10] = [
    &["s", "z", "ce", "ci", "cy"],
    &["t", "d", "th"],
    &["n", "kn", "gn"],
    &["m"],
    &["r", "wr"],
    &["l"],
    &["j", "sh", "ch", "tch", "dg", "ge", "gy"],
    &["k", "c", "g", "q", "ck", "qu"],
    &["f", "v", "ph"],
    &["p", "b"],
];

const GERMAN_PATTERNS: [&[&str]; 10] = [
    &["s", "z", "ce", "ci"],
    &["t", "d", "th", "dt"],
    &["n"],
    &["m"],
    &["r"],
    &["l"],
    &["j", "sch", "tsch", "sh", "ch"],
    &["k", "c", "g", "q", "ck", "qu"],
    &["f", "v", "w", "ph"],
    &["p", "b"],
];

/// Encode a word as the digit string of its consonant sounds.
///
/// Scans the lowercased word left to right. A run of identical mapped
/// letters counts once; multi-letter patterns are tried longest first;
/// letters the system does not map emit nothing. Never fails: a word with
/// no mapped consonants encodes to an empty string.
pub fn encode(word: &str, system: MnemonicSystem) -> String {
    let table = system.table();
    let chars: Vec<char> = word.to_lowercase().chars().collect();
    let mut digits = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Geminate simplification: "tt" in "butter" is one sound.
        if table.letter_digit(c).is_some() {
            while i + 1 < chars.len() && chars[i + 1] == c {
                i += 1;
            }
        }

        if let Some((len, d)) = table.longest_pattern_at(&chars[i..]) {
            digits.push(char::from(b'0' + d));
            i += len;
            continue;
        }

        if let Some(d) = table.letter_digit(c) {
            digits.push(char::from(b'0' + d));
        }
        i += 1;
    }

    digits
}

/// Digits of a whole word sequence, in order.
pub fn encode_words<S: AsRef<str>>(words: &[S], system: MnemonicSystem) -> String {
    words
        .iter()
        .map(|w| encode(w.as_ref(), system))
        .collect()
}
