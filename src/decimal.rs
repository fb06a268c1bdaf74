//! Decimal text I/O: `Display` (`to_string`) and `FromStr` (`from_string`).
//! The only external format this crate defines.

use crate::bigint::BigInt;
use crate::error::ParseIntError;
use crate::unsigned::{abs_add_int, abs_divide_by_limb, abs_mul_int};
use std::fmt;
use std::str::FromStr;

/// 10^9, the largest power of ten that still fits in a single `u32` limb.
const DECIMAL_CHUNK_BASE: u32 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        // Repeatedly divide by 10^9, collecting 9-digit remainders
        // least-significant chunk first.
        let mut chunks = Vec::new();
        let mut working = self.magnitude.clone();
        while !working.is_empty() {
            let (q, r) = abs_divide_by_limb(&working, DECIMAL_CHUNK_BASE);
            chunks.push(r);
            working = q;
        }

        if self.negative {
            write!(f, "-")?;
        }

        let mut chunks = chunks.into_iter().rev();
        // The highest chunk is written without zero padding.
        write!(f, "{}", chunks.next().expect("non-zero value has at least one chunk"))?;
        for chunk in chunks {
            write!(f, "{chunk:0width$}", width = DECIMAL_CHUNK_DIGITS)?;
        }
        Ok(())
    }
}

impl FromStr for BigInt {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let (negative, digits) = match bytes.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, bytes),
        };
        if digits.is_empty() {
            return Err(ParseIntError::Empty);
        }
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(ParseIntError::InvalidDigit);
        }

        let total = digits.len();
        let first_chunk_len = match total % DECIMAL_CHUNK_DIGITS {
            0 => DECIMAL_CHUNK_DIGITS,
            n => n,
        };

        let mut magnitude = Vec::new();
        let mut pos = 0;
        let mut chunk_len = first_chunk_len;
        while pos < total {
            let chunk = &digits[pos..pos + chunk_len];
            // `chunk` is all-ASCII-digit and at most 9 bytes long, so this
            // always parses into a `u32` without overflow.
            let value: u32 = std::str::from_utf8(chunk)
                .expect("validated ASCII digits")
                .parse()
                .expect("at most 9 digits fits in u32");
            let scale = 10u32.pow(chunk_len as u32);
            magnitude = abs_mul_int(&magnitude, scale);
            magnitude = abs_add_int(&magnitude, value);

            pos += chunk_len;
            chunk_len = DECIMAL_CHUNK_DIGITS;
        }

        Ok(BigInt::from_parts(magnitude, negative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_formats_as_single_digit() {
        assert_eq!(BigInt::ZERO.to_string(), "0");
    }

    #[test]
    fn negative_zero_parses_to_canonical_zero() {
        let v: BigInt = "-0".parse().unwrap();
        assert_eq!(v.to_string(), "0");
        assert!(!v.is_negative());
    }

    #[test]
    fn empty_string_is_a_parse_error() {
        assert_eq!("".parse::<BigInt>(), Err(ParseIntError::Empty));
        assert_eq!("-".parse::<BigInt>(), Err(ParseIntError::Empty));
    }

    #[test]
    fn non_digit_byte_is_a_parse_error() {
        assert_eq!("12a34".parse::<BigInt>(), Err(ParseIntError::InvalidDigit));
    }

    #[test]
    fn round_trips_through_i64_range() {
        for v in [0i64, 1, -1, i64::MAX, i64::MIN, 123_456_789, -987_654_321] {
            let big = BigInt::from(v);
            let text = big.to_string();
            let parsed: BigInt = text.parse().unwrap();
            assert_eq!(parsed, big);
        }
    }

    #[test]
    fn formats_multi_chunk_values_without_internal_leading_zero_loss() {
        // Exercises a chunk boundary where an internal 9-digit group starts
        // with zeros and must still be padded out to width 9.
        let v: BigInt = "1000000000000000001".parse().unwrap();
        assert_eq!(v.to_string(), "1000000000000000001");
    }

    #[test]
    fn concrete_scenario_addition() {
        let a: BigInt = "123456789012345678901234567890".parse().unwrap();
        let b: BigInt = "1".parse().unwrap();
        assert_eq!((a + b).to_string(), "123456789012345678901234567891");
    }

    #[test]
    fn concrete_scenario_multiplication() {
        let a: BigInt = "100000000000000000000".parse().unwrap();
        let b: BigInt = "100000000000000000000".parse().unwrap();
        assert_eq!((a * b).to_string(), "10000000000000000000000000000000000000000");
    }
}
