//! The magnitude buffer: a little-endian base-2³² representation of an
//! unsigned integer, stored as `Vec<u32>`.
//!
//! `Vec<u32>` already gives amortised-O(1) push, random access, and value
//! equality, so no bespoke container wraps it — the handful of free
//! functions here are the entire "component A" surface the rest of the
//! crate relies on.

use std::cmp::Ordering;

/// Number of bits in one limb.
pub const LIMB_BITS: u32 = 32;
/// `2^LIMB_BITS`, the base limbs are expressed in.
pub const LIMB_BASE: u64 = 1 << LIMB_BITS;

/// Pops trailing (high-order) zero limbs so the last limb, if any, is
/// non-zero. The empty vector is the canonical representation of zero.
pub fn trim(v: &mut Vec<u32>) {
    while let Some(&0) = v.last() {
        v.pop();
    }
}

/// A magnitude is zero exactly when it has no limbs.
pub fn is_zero(v: &[u32]) -> bool {
    v.is_empty()
}

/// Compares two trimmed magnitudes: by length first, then lexicographically
/// from the highest limb down.
pub fn cmp_magnitude(a: &[u32], b: &[u32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {
            for (x, y) in a.iter().rev().zip(b.iter().rev()) {
                match x.cmp(y) {
                    Ordering::Equal => continue,
                    non_eq => return non_eq,
                }
            }
            Ordering::Equal
        }
        non_eq => non_eq,
    }
}
