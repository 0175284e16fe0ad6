//! The Elbonian symbol table.
//!
//! Ten (symbol, weight) pairs in strictly decreasing weight order. This
//! order is both the grammar's group order and the encoder's greedy
//! search order.

/// One entry of the symbol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// The numeral character. Case is significant (`M` ≠ `m`).
    pub ch: char,
    /// Arabic value contributed by one occurrence.
    pub weight: i32,
    /// Maximum consecutive repetitions the grammar allows.
    pub max_repeat: u8,
}

const fn sym(ch: char, weight: i32, max_repeat: u8) -> Symbol {
    Symbol {
        ch,
        weight,
        max_repeat,
    }
}

/// The full table, in grammar/greedy order.
pub const SYMBOLS: &[Symbol] = &[
    sym('M', 1000, 3),
    sym('D', 500, 1),
    sym('e', 400, 1),
    sym('C', 100, 3),
    sym('L', 50, 1),
    sym('m', 40, 1),
    sym('X', 10, 3),
    sym('V', 5, 1),
    sym('w', 4, 1),
    sym('I', 1, 3),
];

/// Largest representable Arabic value: every symbol at its maximum
/// repetition (MMMDeCCCLmXXXVwIII).
pub const MAX_VALUE: i32 = 4332;

/// Weight of a single numeral character, or `None` if it is not part of
/// the Elbonian alphabet.
pub fn weight(ch: char) -> Option<i32> {
    SYMBOLS.iter().find(|s| s.ch == ch).map(|s| s.weight)
}
