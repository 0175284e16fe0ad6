//! Elbonian numeral grammar recognition.
//!
//! A numeral is a sequence of symbol groups in table order, each group
//! repeated between zero and its per-symbol maximum. Equivalent to the
//! regex `^M{0,3}D?e?C{0,3}L?m?X{0,3}V?w?I{0,3}$`, but implemented as a
//! single forward walk over the table with no backtracking (each group
//! has a distinct literal character, so greedy consumption is safe).

use crate::symbols::SYMBOLS;

/// Whether `input` conforms to the numeral grammar.
///
/// The caller must already have trimmed leading/trailing whitespace;
/// interior whitespace (or any other foreign character) rejects. The
/// empty string is a valid numeral with value 0.
pub fn is_valid_numeral(input: &str) -> bool {
    // All table symbols are ASCII, so walk bytes.
    let mut rest = input.as_bytes();
    for s in SYMBOLS {
        let mut seen = 0u8;
        while seen < s.max_repeat && rest.first() == Some(&(s.ch as u8)) {
            rest = &rest[1..];
            seen += 1;
        }
    }
    rest.is_empty()
}
