//! Equality and total ordering. Zero is neither positive nor negative, so
//! both impls compare through `is_negative()`/`is_zero()` rather than the
//! raw `negative` field.

use crate::bigint::BigInt;
use crate::magnitude::cmp_magnitude;
use std::cmp::Ordering;

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_negative() == other.is_negative() && self.magnitude == other.magnitude
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.magnitude, &other.magnitude),
            (true, true) => cmp_magnitude(&other.magnitude, &self.magnitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_and_negative_zero_are_equal() {
        let a = BigInt::from_parts(Vec::new(), false);
        let b = BigInt::from_parts(Vec::new(), true);
        assert_eq!(a, b);
    }

    #[test]
    fn non_negative_outranks_negative() {
        assert!(BigInt::from(0i64) > BigInt::from(-1i64));
        assert!(BigInt::from(1i64) > BigInt::from(-1000i64));
    }

    #[test]
    fn same_sign_compares_by_magnitude() {
        assert!(BigInt::from(100i64) > BigInt::from(99i64));
        assert!(BigInt::from(-100i64) < BigInt::from(-99i64));
    }

    #[test]
    fn ordering_is_total_and_consistent_with_subtraction() {
        let a = BigInt::from(7i64);
        let b = BigInt::from(3i64);
        assert_eq!(a.cmp(&b), Ordering::Greater);
        assert!((&b - &a).is_negative());
    }
}
