//! The dual-representation converted number.
//!
//! Input sniffing happens once, at construction: a trimmed string that
//! matches the numeral grammar is decoded, anything else is tried as a
//! base-10 integer and encoded. Both forms are held immutably, so the
//! accessors never fail.

use serde::Serialize;
use tracing::debug;

use crate::codec::{decode, encode};
use crate::error::ConvertError;
use crate::grammar::is_valid_numeral;

/// An immutable (Arabic, Elbonian) pair established at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedNumber {
    arabic: i32,
    elbonian: String,
}

impl ConvertedNumber {
    /// Sniff `raw` and build both representations.
    ///
    /// Leading/trailing whitespace is ignored; interior whitespace is
    /// not (`" 99 "` converts, `"9 9"` is malformed). The numeral path
    /// keeps the trimmed input verbatim, so a valid non-greedy spelling
    /// such as `MDeCLmXVwI` is preserved rather than re-encoded.
    pub fn new(raw: &str) -> Result<Self, ConvertError> {
        let trimmed = raw.trim();
        if is_valid_numeral(trimmed) {
            debug!(input = trimmed, "input sniffed as Elbonian numeral");
            let arabic =
                decode(trimmed).ok_or_else(|| ConvertError::MalformedNumber(raw.to_string()))?;
            return Ok(Self {
                arabic,
                elbonian: trimmed.to_string(),
            });
        }
        let arabic: i32 = trimmed
            .parse()
            .map_err(|_| ConvertError::MalformedNumber(raw.to_string()))?;
        debug!(input = trimmed, arabic, "input sniffed as Arabic integer");
        let elbonian =
            encode(arabic).ok_or_else(|| ConvertError::ValueOutOfBounds(raw.to_string()))?;
        Ok(Self { arabic, elbonian })
    }

    /// The Arabic (base-10 integer) form.
    pub fn to_integer(&self) -> i32 {
        self.arabic
    }

    /// The Elbonian numeral form; empty for value 0.
    pub fn to_numeral(&self) -> &str {
        &self.elbonian
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(raw: &str) -> ConvertedNumber {
        ConvertedNumber::new(raw).unwrap()
    }

    #[test]
    fn numeral_input() {
        let n = convert("MMCX");
        assert_eq!(n.to_integer(), 2110);
        assert_eq!(n.to_numeral(), "MMCX");
    }

    #[test]
    fn arabic_input() {
        let n = convert("2000");
        assert_eq!(n.to_integer(), 2000);
        assert_eq!(n.to_numeral(), "MM");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let n = convert(" 99 ");
        assert_eq!(n.to_integer(), 99);
        assert_eq!(n.to_numeral(), "LmVw");

        let n = convert("\tMMCX\n");
        assert_eq!(n.to_integer(), 2110);
        assert_eq!(n.to_numeral(), "MMCX");
    }

    #[test]
    fn interior_whitespace_is_malformed() {
        assert_eq!(
            ConvertedNumber::new("9 9"),
            Err(ConvertError::MalformedNumber("9 9".into()))
        );
        assert_eq!(
            ConvertedNumber::new("M M"),
            Err(ConvertError::MalformedNumber("M M".into()))
        );
    }

    #[test]
    fn empty_input_is_numeral_zero() {
        let n = convert("");
        assert_eq!(n.to_integer(), 0);
        assert_eq!(n.to_numeral(), "");

        let n = convert("   ");
        assert_eq!(n.to_integer(), 0);
        assert_eq!(n.to_numeral(), "");
    }

    #[test]
    fn noncanonical_numeral_is_kept_verbatim() {
        let n = convert("MDeCLmXVwI");
        assert_eq!(n.to_integer(), 2110);
        assert_eq!(n.to_numeral(), "MDeCLmXVwI");
    }

    #[test]
    fn maximum_value_roundtrips() {
        let n = convert("4332");
        assert_eq!(n.to_numeral(), "MMMDeCCCLmXXXVwIII");
        let n = convert("MMMDeCCCLmXXXVwIII");
        assert_eq!(n.to_integer(), 4332);
    }

    #[test]
    fn above_maximum_is_out_of_bounds() {
        assert_eq!(
            ConvertedNumber::new("4333"),
            Err(ConvertError::ValueOutOfBounds("4333".into()))
        );
    }

    #[test]
    fn negative_is_out_of_bounds() {
        assert_eq!(
            ConvertedNumber::new("-1"),
            Err(ConvertError::ValueOutOfBounds("-1".into()))
        );
    }

    #[test]
    fn garbage_is_malformed() {
        assert_eq!(
            ConvertedNumber::new("abc"),
            Err(ConvertError::MalformedNumber("abc".into()))
        );
        assert_eq!(
            ConvertedNumber::new("12.5"),
            Err(ConvertError::MalformedNumber("12.5".into()))
        );
    }

    #[test]
    fn error_carries_untrimmed_input() {
        let err = ConvertedNumber::new(" abc ").unwrap_err();
        assert_eq!(err.input(), " abc ");
        let err = ConvertedNumber::new(" 4333 ").unwrap_err();
        assert_eq!(err.input(), " 4333 ");
    }

    #[test]
    fn plus_sign_parses_as_arabic() {
        // i32 parsing accepts a leading plus; it is not a numeral symbol.
        let n = convert("+7");
        assert_eq!(n.to_integer(), 7);
        assert_eq!(n.to_numeral(), "VII");
    }
}
