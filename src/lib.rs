//! Arbitrary-precision signed integer arithmetic.
//!
//! [`BigInt`] is a sign-magnitude value: a sign flag plus a little-endian
//! `Vec<u32>` magnitude. Every operator is built from a small set of
//! unsigned primitives ([`unsigned`]) plus sign-dispatch rules, the same
//! layering the fixed-width integers in this crate's lineage use, just
//! generalised from a handful of hardware-width limbs to however many a
//! value actually needs.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(1i64);
//! assert_eq!((a + b).to_string(), "123456789012345678901234567891");
//! ```

mod arithmetic;
mod bigint;
mod bitwise;
mod cmp;
mod decimal;
mod div;
mod error;
mod magnitude;
mod unsigned;


pub use bigint::BigInt;
pub use error::{DivisionByZeroError, ParseIntError};
