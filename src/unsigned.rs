//! Unsigned primitives: every signed operator in [`crate::arithmetic`] and
//! [`crate::bitwise`] bottoms out in one of these. They know nothing about
//! sign — they only ever see magnitudes — which keeps the carry/borrow
//! arithmetic here free of sign-dispatch noise.

use crate::magnitude::{cmp_magnitude, trim, LIMB_BASE};
use std::cmp::Ordering;

/// `a + b`, both unsigned magnitudes.
///
/// Standard ripple-carry add: each limb pair plus the running carry is
/// summed in a 64-bit accumulator, split back into limb + carry. A final
/// carry, if any, is appended as a new high limb.
pub fn abs_add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let len = a.len().max(b.len());
    let mut out = Vec::with_capacity(len + 1);
    let mut carry: u64 = 0;
    for i in 0..len {
        let x = *a.get(i).unwrap_or(&0) as u64;
        let y = *b.get(i).unwrap_or(&0) as u64;
        let sum = x + y + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// `a - b`, both unsigned magnitudes. Precondition: `a >= b`.
///
/// Borrow-propagating subtraction with a 64-bit scratch: a negative partial
/// difference is detected via wraparound and turned into a borrow for the
/// next limb.
pub fn abs_subtract(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert_ne!(cmp_magnitude(a, b), Ordering::Less, "abs_subtract requires a >= b");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i64 = 0;
    for i in 0..a.len() {
        let x = a[i] as i64;
        let y = *b.get(i).unwrap_or(&0) as i64;
        let mut diff = x - y - borrow;
        if diff < 0 {
            diff += LIMB_BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    trim(&mut out);
    out
}

/// Schoolbook `a * b`. O(|a|·|b|): for each limb of `a`, sweep every limb of
/// `b`, accumulating `a[i]*b[j] + c[i+j] + carry` in a 64-bit scratch.
pub fn abs_mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let acc = ai as u64 * bj as u64 + out[i + j] as u64 + carry;
            out[i + j] = acc as u32;
            carry = acc >> 32;
        }
        out[i + b.len()] = (out[i + b.len()] as u64 + carry) as u32;
    }
    trim(&mut out);
    out
}

/// `a * k` for a single-limb scalar `k`.
pub fn abs_mul_int(a: &[u32], k: u32) -> Vec<u32> {
    if k == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: u64 = 0;
    for &limb in a {
        let acc = limb as u64 * k as u64 + carry;
        out.push(acc as u32);
        carry = acc >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// `a + k` for a single-limb scalar `k`.
pub fn abs_add_int(a: &[u32], k: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry: u64 = k as u64;
    for &limb in a {
        let sum = limb as u64 + carry;
        out.push(sum as u32);
        carry = sum >> 32;
    }
    if carry != 0 {
        out.push(carry as u32);
    }
    trim(&mut out);
    out
}

/// `a - k` for a single-limb scalar `k`. Precondition: `a >= k`.
pub fn abs_sub_int(a: &[u32], k: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow: i64 = k as i64;
    for &limb in a {
        let mut diff = limb as i64 - borrow;
        if diff < 0 {
            diff += LIMB_BASE as i64;
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    debug_assert_eq!(borrow, 0, "abs_sub_int requires a >= k");
    trim(&mut out);
    out
}

/// Divides `a` by the single-limb `k`, returning `(quotient, remainder)`.
///
/// Walks limbs high-to-low carrying a 64-bit running remainder:
/// `rem = rem*BASE + limb`, writing back `rem / k` and keeping `rem % k`.
pub fn abs_divide_by_limb(a: &[u32], k: u32) -> (Vec<u32>, u32) {
    debug_assert_ne!(k, 0, "abs_divide_by_limb requires a non-zero divisor");
    let mut out = vec![0u32; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << 32) | a[i] as u64;
        out[i] = (cur / k as u64) as u32;
        rem = cur % k as u64;
    }
    trim(&mut out);
    (out, rem as u32)
}

/// Left shift by `s` bits: split `s = q*32 + r`, prepend `q` zero limbs, then
/// scale by `1 << r`.
pub fn shl_bits(a: &[u32], s: u32) -> Vec<u32> {
    if a.is_empty() || s == 0 {
        return a.to_vec();
    }
    let q = (s / 32) as usize;
    let r = s % 32;
    let mut out = vec![0u32; q];
    out.extend_from_slice(a);
    if r != 0 {
        out = abs_mul_int(&out, 1u32 << r);
    }
    trim(&mut out);
    out
}

/// Right shift by `s` bits: erase `q` low limbs, then divide by `1 << r`.
/// Returns `(result, any_bit_dropped)` — the second element tells the caller
/// whether any `1` bit was shifted out, which the signed arithmetic shift in
/// [`crate::bitwise`] needs to reproduce floor semantics.
pub fn shr_bits(a: &[u32], s: u32) -> (Vec<u32>, bool) {
    if a.is_empty() {
        return (Vec::new(), false);
    }
    if s == 0 {
        return (a.to_vec(), false);
    }
    let q = (s / 32) as usize;
    let r = s % 32;
    if q >= a.len() {
        return (Vec::new(), a.iter().any(|&limb| limb != 0));
    }
    let dropped_limbs = a[..q].iter().any(|&limb| limb != 0);
    let mut out = a[q..].to_vec();
    let dropped_bits = if r != 0 {
        let (shifted, rem) = abs_divide_by_limb(&out, 1u32 << r);
        out = shifted;
        rem != 0
    } else {
        false
    };
    trim(&mut out);
    (out, dropped_limbs || dropped_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_carries_into_new_limb() {
        let a = vec![u32::MAX];
        let b = vec![1];
        assert_eq!(abs_add(&a, &b), vec![0, 1]);
    }

    #[test]
    fn subtract_equal_values_is_empty() {
        let a = vec![1, 2, 3];
        assert_eq!(abs_subtract(&a, &a), Vec::<u32>::new());
    }

    #[test]
    fn mul_matches_schoolbook_small_case() {
        // 0xFFFFFFFF * 0xFFFFFFFF = 0xFFFFFFFE00000001
        let a = vec![u32::MAX];
        let b = vec![u32::MAX];
        assert_eq!(abs_mul(&a, &b), vec![1, 0xFFFF_FFFE]);
    }

    #[test]
    fn divide_by_limb_round_trips() {
        let a = vec![0, 0, 1]; // 2^64
        let (q, r) = abs_divide_by_limb(&a, 3);
        assert_eq!(r, 1); // 2^64 mod 3 == 1
        let back = abs_add_int(&abs_mul_int(&q, 3), r);
        assert_eq!(back, a);
    }

    #[test]
    fn shift_left_then_right_round_trips_when_no_bits_drop() {
        let a = vec![0x1234_5678, 0x9ABC];
        let shifted = shl_bits(&a, 5);
        let (back, dropped) = shr_bits(&shifted, 5);
        assert!(!dropped);
        assert_eq!(back, a);
    }

    #[test]
    fn shift_right_reports_dropped_bits() {
        let a = vec![1]; // 1
        let (out, dropped) = shr_bits(&a, 1);
        assert!(out.is_empty());
        assert!(dropped);
    }

    #[test]
    fn shift_right_no_drop_on_exact_division() {
        let a = vec![8];
        let (out, dropped) = shr_bits(&a, 2);
        assert_eq!(out, vec![2]);
        assert!(!dropped);
    }
}
