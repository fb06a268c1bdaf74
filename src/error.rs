//! Error kinds returned by fallible `BigInt` operations.
//!
//! There are exactly two: a malformed decimal string, and division by zero.
//! Every other operation on `BigInt` is total.

use thiserror::Error;

/// Returned by [`FromStr`](std::str::FromStr) when a string is not a valid
/// decimal integer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntError {
    /// The string was empty, or contained only a `-` sign.
    #[error("cannot parse integer from empty string")]
    Empty,
    /// A byte outside `b'0'..=b'9'` appeared where a digit was expected.
    #[error("invalid digit found in string")]
    InvalidDigit,
}

/// Returned by the checked division/remainder methods, and the cause of the
/// panic raised by the `/` and `%` operators, when the divisor is zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("attempt to divide by zero")]
pub struct DivisionByZeroError;
