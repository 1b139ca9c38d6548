//! User pegs: digit spans pinned to chosen words.
//!
//! Pegs are owned by the caller and passed into every query. The engine
//! trusts a peg's digit span; `check_peg` only reports an advisory warning
//! when the words do not encode to those digits.

mod store;
#[cfg(test)]
mod tests;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::system::{encode_words, MnemonicSystem};

pub use store::{PegRecord, PegStore, PegStoreError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peg {
    pub digits: String,
    pub words: Vec<String>,
    pub system: MnemonicSystem,
}

impl Peg {
    pub fn new(digits: impl Into<String>, words: Vec<String>, system: MnemonicSystem) -> Self {
        Self {
            digits: digits.into(),
            words,
            system,
        }
    }

    /// A peg can only take part in matching with digits and at least one word.
    pub fn is_usable(&self) -> bool {
        !self.digits.is_empty() && self.words.iter().any(|w| !w.trim().is_empty())
    }
}

/// Advisory: a peg's words encode to different digits than it claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegWarning {
    pub digits: String,
    pub encoded: String,
    pub words: Vec<String>,
    pub system: MnemonicSystem,
}

impl fmt::Display for PegWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "peg \"{}\" is stored for {} but encodes to {:?} under {}",
            self.words.join(" "),
            self.digits,
            self.encoded,
            self.system
        )
    }
}

/// Compare a peg's words against its digits.
pub fn check_peg(peg: &Peg) -> Option<PegWarning> {
    let encoded = encode_words(&peg.words, peg.system);
    if encoded == peg.digits {
        return None;
    }
    Some(PegWarning {
        digits: peg.digits.clone(),
        encoded,
        words: peg.words.clone(),
        system: peg.system,
    })
}

/// Usable pegs for `system` whose digits equal `digits`.
pub(crate) fn exact_pegs<'a>(
    pegs: &'a [Peg],
    system: MnemonicSystem,
    digits: &'a str,
) -> impl Iterator<Item = &'a Peg> + 'a {
    pegs.iter()
        .filter(move |p| p.system == system && p.is_usable() && p.digits == digits)
}

/// Usable pegs for `system` whose digits are a prefix of `digits`.
pub(crate) fn prefix_pegs<'a>(
    pegs: &'a [Peg],
    system: MnemonicSystem,
    digits: &'a str,
) -> impl Iterator<Item = &'a Peg> + 'a {
    pegs.iter().filter(move |p| {
        p.system == system && p.is_usable() && digits.starts_with(p.digits.as_str())
    })
}
