//! Digit-input handling for boundary callers.
//!
//! The matching engine assumes its input is ASCII digits only. Callers
//! pass raw user text through `sanitize_digits` first.

/// Strip everything except ASCII digits.
///
/// Full-width and other non-ASCII digits are dropped, not converted.
pub fn sanitize_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn is_digit_string(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
