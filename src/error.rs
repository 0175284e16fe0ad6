use thiserror::Error;

/// Errors raised while constructing a [`crate::ConvertedNumber`].
///
/// Both variants carry the original input exactly as supplied, untrimmed,
/// for diagnostics. Construction is all-or-nothing; there is no partial
/// result to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Input is neither a grammar-valid Elbonian numeral nor a parseable
    /// base-10 integer.
    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    /// Input parses as an integer but cannot be represented in the
    /// Elbonian system (negative or above the table maximum).
    #[error("value out of bounds: {0:?}")]
    ValueOutOfBounds(String),
}

impl ConvertError {
    /// The original input string the failed construction was given.
    pub fn input(&self) -> &str {
        match self {
            ConvertError::MalformedNumber(s) | ConvertError::ValueOutOfBounds(s) => s,
        }
    }
}
