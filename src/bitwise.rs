//! Bitwise operators over the *virtual* infinite-width two's-complement
//! view a negative `BigInt` presents, without ever materialising that
//! infinite bit string — see §4.E of the design notes.

use crate::bigint::BigInt;
use crate::unsigned::{shl_bits, shr_bits};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

/// Converts a magnitude to (or, applied twice, back from) its two's
/// complement bit pattern: `~limb + carry`, carry seeded at 1, threaded
/// low-to-high. For a non-negative operand this is the identity.
///
/// Applying this to a result that is itself already a two's-complement
/// pattern recovers the original magnitude, since `~(~m + 1) + 1 == m` —
/// that identity is what lets the bitwise ops below reuse one routine for
/// both directions instead of writing an inverse transform.
fn twos_complement_limbs(magnitude: &[u32], negative: bool) -> Vec<u32> {
    if !negative {
        return magnitude.to_vec();
    }
    let mut carry: u64 = 1;
    magnitude
        .iter()
        .map(|&limb| {
            let sum = (!limb) as u64 + carry;
            carry = sum >> 32;
            sum as u32
        })
        .collect()
}

/// Zero-extends a magnitude to `len` limbs. Combined with
/// [`twos_complement_limbs`], this is what makes the padded high limbs of a
/// negative operand read back as the expected all-ones sign extension: once
/// the running carry settles to 0 past the original high limb, every
/// further `~0 + 0` limb is `0xFFFF_FFFF`.
fn pad(magnitude: &[u32], len: usize) -> Vec<u32> {
    let mut v = magnitude.to_vec();
    v.resize(len, 0);
    v
}

/// Applies `op` bit-for-bit (equivalently, word-for-word — AND/OR/XOR
/// commute with reassembling bits into 32-bit words) to the infinite-width
/// two's-complement views of `a` and `b`.
fn bitwise_op(a: &BigInt, b: &BigInt, op: impl Fn(u32, u32) -> u32) -> BigInt {
    let len = a.magnitude.len().max(b.magnitude.len());
    let ta = twos_complement_limbs(&pad(&a.magnitude, len), a.negative);
    let tb = twos_complement_limbs(&pad(&b.magnitude, len), b.negative);

    // The result's sign is the same op applied to the operands' sign bits.
    let result_negative = op(a.negative as u32, b.negative as u32) != 0;

    let combined: Vec<u32> = ta.iter().zip(tb.iter()).map(|(&x, &y)| op(x, y)).collect();

    let magnitude = if result_negative {
        twos_complement_limbs(&combined, true)
    } else {
        combined
    };
    BigInt::from_parts(magnitude, result_negative)
}

impl BitAnd for &BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: &BigInt) -> BigInt {
        bitwise_op(self, rhs, |x, y| x & y)
    }
}

impl BitAnd for BigInt {
    type Output = BigInt;

    fn bitand(self, rhs: BigInt) -> BigInt {
        &self & &rhs
    }
}

impl BitOr for &BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: &BigInt) -> BigInt {
        bitwise_op(self, rhs, |x, y| x | y)
    }
}

impl BitOr for BigInt {
    type Output = BigInt;

    fn bitor(self, rhs: BigInt) -> BigInt {
        &self | &rhs
    }
}

impl BitXor for &BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: &BigInt) -> BigInt {
        bitwise_op(self, rhs, |x, y| x ^ y)
    }
}

impl BitXor for BigInt {
    type Output = BigInt;

    fn bitxor(self, rhs: BigInt) -> BigInt {
        &self ^ &rhs
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    /// `~x` is defined as `-(x + 1)`; this never needs the streaming
    /// two's-complement conversion above.
    fn not(self) -> BigInt {
        let mut incremented = self.clone();
        incremented.increment();
        -incremented
    }
}

impl Not for BigInt {
    type Output = BigInt;

    fn not(self) -> BigInt {
        !&self
    }
}

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    /// `a << n == a * 2^n` for `n >= 0`; magnitude shift with sign preserved.
    /// Shift counts are an unsigned type, so a negative shift amount is
    /// inexpressible rather than implementation-defined.
    fn shl(self, n: u32) -> BigInt {
        BigInt::from_parts(shl_bits(&self.magnitude, n), self.negative)
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, n: u32) -> BigInt {
        &self << n
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    /// Arithmetic (floor) right shift: magnitude right-shift, plus 1 added
    /// back to the magnitude when the operand was negative *and* the shift
    /// discarded at least one set bit — see §4.E.
    fn shr(self, n: u32) -> BigInt {
        let (shifted, dropped_a_set_bit) = shr_bits(&self.magnitude, n);
        let magnitude = if self.negative && dropped_a_set_bit {
            crate::unsigned::abs_add_int(&shifted, 1)
        } else {
            shifted
        };
        BigInt::from_parts(magnitude, self.negative)
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, n: u32) -> BigInt {
        &self >> n
    }
}

impl BitAndAssign for BigInt {
    fn bitand_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) & rhs;
    }
}

impl BitOrAssign for BigInt {
    fn bitor_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) | rhs;
    }
}

impl BitXorAssign for BigInt {
    fn bitxor_assign(&mut self, rhs: BigInt) {
        *self = std::mem::take(self) ^ rhs;
    }
}

impl ShlAssign<u32> for BigInt {
    fn shl_assign(&mut self, n: u32) {
        *self = std::mem::take(self) << n;
    }
}

impl ShrAssign<u32> for BigInt {
    fn shr_assign(&mut self, n: u32) {
        *self = std::mem::take(self) >> n;
    }
}
