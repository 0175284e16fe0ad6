//! Elbonian-Arabic numeral conversion.
//!
//! The Elbonian system writes a value as ordered groups of ten
//! fixed-weight symbols (M D e C L m X V w I), each group bounded in how
//! often it may repeat. [`ConvertedNumber`] accepts either form of a
//! number as a string and eagerly holds both representations.

pub mod codec;
pub mod error;
pub mod grammar;
pub mod symbols;

mod number;

pub use error::ConvertError;
pub use number::ConvertedNumber;
