//! Numeral decoding and encoding.
//!
//! Decoding is a plain weight sum (the grammar carries all positional
//! meaning, so no subtractive-pair handling exists). Encoding is a greedy
//! descent over the symbol table: always take the largest-weight symbol
//! that keeps the running value at or below the target.

use tracing::debug;

use crate::symbols::{weight, SYMBOLS};

/// Sum the symbol weights of a grammar-valid numeral.
///
/// Returns `None` if any character is outside the symbol table. Callers
/// validate with [`crate::grammar::is_valid_numeral`] first; the `None`
/// branch only defends against misuse.
pub fn decode(numeral: &str) -> Option<i32> {
    let mut sum = 0;
    for ch in numeral.chars() {
        sum += weight(ch)?;
    }
    Some(sum)
}

/// Greedily build the canonical numeral for `target`.
///
/// Walks the table in order, consuming each symbol up to its repetition
/// maximum while the running value stays at or below the target, and
/// returns as soon as the target is matched exactly. Returns `None` when
/// the table is exhausted without an exact match, i.e. the value is
/// negative or above [`crate::symbols::MAX_VALUE`].
pub fn encode(target: i32) -> Option<String> {
    let mut confirmed = String::new();
    let mut confirmed_value = 0;
    for s in SYMBOLS {
        for _ in 0..s.max_repeat {
            let tentative = confirmed_value + s.weight;
            if tentative > target {
                break;
            }
            confirmed.push(s.ch);
            confirmed_value = tentative;
            if confirmed_value == target {
                return Some(confirmed);
            }
        }
    }
    // target == 0 lands here with nothing consumed, which is the empty
    // numeral; any other leftover means the value is unrepresentable.
    if confirmed_value == target {
        Some(confirmed)
    } else {
        debug!(value = target, confirmed_value, "encode exhausted symbol table");
        None
    }
}
