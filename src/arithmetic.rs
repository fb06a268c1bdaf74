//! Signed arithmetic: `+ - * / %`, unary `-`, and increment/decrement.
//!
//! Each operator is implemented once for `&BigInt op &BigInt -> BigInt`
//! (the sign-dispatch logic lives there) and the owned-value `BigInt op
//! BigInt` forms simply forward to the by-reference ones, so cloning only
//! happens where the caller actually gives up an owned value.

use crate::bigint::BigInt;
use crate::div::div_rem_magnitude;
use crate::error::DivisionByZeroError;
use crate::magnitude::cmp_magnitude;
use crate::unsigned::{abs_add, abs_add_int, abs_mul, abs_sub_int, abs_subtract};
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

impl Add for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative == rhs.negative {
            BigInt::from_parts(abs_add(&self.magnitude, &rhs.magnitude), self.negative)
        } else {
            match cmp_magnitude(&self.magnitude, &rhs.magnitude) {
                Ordering::Equal => BigInt::ZERO,
                Ordering::Greater => {
                    BigInt::from_parts(abs_subtract(&self.magnitude, &rhs.magnitude), self.negative)
                }
                Ordering::Less => {
                    BigInt::from_parts(abs_subtract(&rhs.magnitude, &self.magnitude), rhs.negative)
                }
            }
        }
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.magnitude.clone(), !self.negative)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::from_parts(self.magnitude, !self.negative)
    }
}

impl Sub for &BigInt {
    type Output = BigInt;

    /// `a - b` is implemented as `a + (-b)`, reusing the addition
    /// sign-dispatch rather than re-deriving it.
    fn sub(self, rhs: &BigInt) -> BigInt {
        self + &(-rhs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Mul for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let negative = self.negative != rhs.negative;
        BigInt::from_parts(abs_mul(&self.magnitude, &rhs.magnitude), negative)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl BigInt {
    /// Fallible division and remainder, computed together since Knuth's
    /// algorithm produces both from a single pass. `q*b + r == a`, `|r| <
    /// |b|`, and `sign(r)` matches `sign(a)` (truncation toward zero).
    pub fn checked_div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), DivisionByZeroError> {
        if rhs.is_zero() {
            return Err(DivisionByZeroError);
        }
        let (q, r) = div_rem_magnitude(&self.magnitude, &rhs.magnitude);
        let quotient = BigInt::from_parts(q, self.negative != rhs.negative);
        let remainder = BigInt::from_parts(r, self.negative);
        Ok((quotient, remainder))
    }

    /// Fallible division. See [`BigInt::checked_div_rem`].
    pub fn checked_div(&self, rhs: &BigInt) -> Result<BigInt, DivisionByZeroError> {
        self.checked_div_rem(rhs).map(|(q, _)| q)
    }

    /// Fallible remainder. See [`BigInt::checked_div_rem`].
    pub fn checked_rem(&self, rhs: &BigInt) -> Result<BigInt, DivisionByZeroError> {
        self.checked_div_rem(rhs).map(|(_, r)| r)
    }

    /// `self += 1` / `self -= 1`-flavoured increment. Rust has no `++`
    /// operator; callers who need the pre/post-increment value simply read
    /// `self` before or after calling this.
    pub fn increment(&mut self) {
        if self.negative {
            let mag = abs_sub_int(&self.magnitude, 1);
            *self = BigInt::from_parts(mag, true);
        } else {
            let mag = abs_add_int(&self.magnitude, 1);
            *self = BigInt::from_parts(mag, false);
        }
    }

    /// See [`BigInt::increment`].
    pub fn decrement(&mut self) {
        if self.is_zero() {
            *self = BigInt::from_parts(vec![1], true);
        } else if self.negative {
            let mag = abs_add_int(&self.magnitude, 1);
            *self = BigInt::from_parts(mag, true);
        } else {
            let mag = abs_sub_int(&self.magnitude, 1);
            *self = BigInt::from_parts(mag, false);
        }
    }
}

impl Div for &BigInt {
    type Output = BigInt;

    /// Panics on division by zero, matching the built-in integer types'
    /// `Div` impls. Use [`BigInt::checked_div`] for a recoverable error.
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

impl Rem for &BigInt {
    type Output = BigInt;

    /// Panics on division by zero, matching the built-in integer types'
    /// `Rem` impls. Use [`BigInt::checked_rem`] for a recoverable error.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) + rhs;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) - rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) * rhs;
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) / rhs;
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) % rhs;
    }
}
