use std::collections::HashMap;

use super::{BridgeClass, Digit, SystemError};

const MAX_PATTERN_LEN: usize = 4;

/// Validated digit tables for one mnemonic system.
///
/// Immutable after construction.
#[derive(Debug)]
pub struct SystemTable {
    pattern_digit: HashMap<String, Digit>,
    /// Lengths of multi-letter patterns, longest first.
    multi_lengths: Vec<usize>,
    bridge_digits: [Digit; 10],
}

impl SystemTable {
    /// Build a table from per-digit pattern lists and per-class digits.
    ///
    /// Every digit needs at least one pattern, every pattern must be 1–4
    /// lowercase ASCII letters, and no pattern may belong to two digits.
    pub fn new(
        patterns: [&[&str]; 10],
        bridge_digits: [Digit; 10],
    ) -> Result<Self, SystemError> {
        let mut pattern_digit: HashMap<String, Digit> = HashMap::new();

        for (d, list) in patterns.iter().enumerate() {
            let digit = d as Digit;
            if list.is_empty() {
                return Err(SystemError::MissingDigit(digit));
            }
            for &pattern in list.iter() {
                let valid = (1..=MAX_PATTERN_LEN).contains(&pattern.len())
                    && pattern.bytes().all(|b| b.is_ascii_lowercase());
                if !valid {
                    return Err(SystemError::InvalidPattern(pattern.to_string()));
                }
                if let Some(&first) = pattern_digit.get(pattern) {
                    return Err(SystemError::DuplicatePattern {
                        pattern: pattern.to_string(),
                        first,
                        second: digit,
                    });
                }
                pattern_digit.insert(pattern.to_string(), digit);
            }
        }

        if let Some(&bad) = bridge_digits.iter().find(|&&d| d > 9) {
            return Err(SystemError::InvalidDigit(bad));
        }

        let mut multi_lengths: Vec<usize> = pattern_digit
            .keys()
            .map(|p| p.len())
            .filter(|&len| len > 1)
            .collect();
        multi_lengths.sort_unstable_by(|a, b| b.cmp(a));
        multi_lengths.dedup();

        Ok(Self {
            pattern_digit,
            multi_lengths,
            bridge_digits,
        })
    }

    pub fn digit_for(&self, pattern: &str) -> Option<Digit> {
        self.pattern_digit.get(pattern).copied()
    }

    /// Digit of a single-letter pattern.
    pub fn letter_digit(&self, c: char) -> Option<Digit> {
        if !c.is_ascii_lowercase() {
            return None;
        }
        let mut buf = [0u8; 4];
        self.digit_for(c.encode_utf8(&mut buf))
    }

    /// Longest multi-letter pattern at the start of `chars`, as (length, digit).
    pub(crate) fn longest_pattern_at(&self, chars: &[char]) -> Option<(usize, Digit)> {
        for &len in &self.multi_lengths {
            if len > chars.len() {
                continue;
            }
            let candidate: String = chars[..len].iter().collect();
            if let Some(d) = self.digit_for(&candidate) {
                return Some((len, d));
            }
        }
        None
    }

    pub fn bridge_digit(&self, class: BridgeClass) -> Digit {
        self.bridge_digits[class.index()]
    }

    /// Bridge classes this system writes as `digit`.
    pub fn classes_for(&self, digit: Digit) -> Vec<BridgeClass> {
        BridgeClass::ALL
            .into_iter()
            .filter(|&class| self.bridge_digit(class) == digit)
            .collect()
    }

    /// Translate a bridge code to digits. `None` if the code contains a
    /// symbol outside the bridge alphabet.
    pub fn code_to_digits(&self, code: &str) -> Option<String> {
        code.chars()
            .map(|c| {
                BridgeClass::from_symbol(c).map(|class| char::from(b'0' + self.bridge_digit(class)))
            })
            .collect()
    }

    /// All bridge codes this system translates to `digits`.
    ///
    /// One code per digit string when the class→digit map is one-to-one.
    /// Returns an empty list for input containing non-digits.
    pub fn digits_to_codes(&self, digits: &str) -> Vec<String> {
        let mut codes = vec![String::new()];
        for c in digits.chars() {
            let Some(d) = c.to_digit(10) else {
                return Vec::new();
            };
            let classes = self.classes_for(d as Digit);
            if classes.is_empty() {
                return Vec::new();
            }
            codes = codes
                .iter()
                .flat_map(|prefix| {
                    classes.iter().map(move |class| {
                        let mut code = prefix.clone();
                        code.push(class.symbol());
                        code
                    })
                })
                .collect();
        }
        codes
    }
}
