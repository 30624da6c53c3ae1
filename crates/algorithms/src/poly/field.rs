//! field.rs - Scalar arithmetic on 16-bit signed field elements mod q
//!
//! Standard-domain values are plain `i16`. Values in the Montgomery domain
//! (scaled by R = 2^16) are wrapped in [`Montgomery`], so the only way to mix
//! the two is through [`montgomery_multiply`], whose result stays in the domain
//! of its first argument.

use super::params::{BARRETT_MULTIPLIER, COMPRESS_MULTIPLIER, HALF_Q, MONT_SQUARED, Q, QINV};
use zeroize::Zeroize;

/// A field element in the Montgomery domain, i.e. `a * 2^16 mod q`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Montgomery(i16);

impl Montgomery {
    /// Wraps a value that is already in Montgomery form.
    pub const fn from_raw(value: i16) -> Self {
        Self(value)
    }

    /// Converts a standard-domain value into Montgomery form.
    pub fn from_standard(a: i16) -> Self {
        Self(montgomery_reduce(a as i32 * MONT_SQUARED as i32))
    }

    /// Converts back to the standard domain.
    pub fn to_standard(self) -> i16 {
        montgomery_reduce(self.0 as i32)
    }

    /// The raw Montgomery-form representative.
    pub const fn raw(self) -> i16 {
        self.0
    }
}

/// Montgomery reduction.
///
/// For `|a| < q * 2^15` returns `r ≡ a * 2^-16 (mod q)` with `|r| < q`.
#[inline(always)]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a as i16).wrapping_mul(QINV);
    ((a - (t as i32) * (Q as i32)) >> 16) as i16
}

/// Multiplies a field element by a Montgomery-domain constant.
///
/// Returns `a * b * 2^-16 ≡ a * b_std (mod q)`, so the result is in the same
/// domain as `a`.
#[inline(always)]
pub fn montgomery_multiply(a: i16, b: Montgomery) -> i16 {
    montgomery_reduce(a as i32 * b.0 as i32)
}

/// Barrett reduction.
///
/// Exact for every `i16` input: returns `r ≡ a (mod q)` with `|r| <= q/2`.
#[inline(always)]
pub fn barrett_reduce(a: i16) -> i16 {
    let t = ((BARRETT_MULTIPLIER * a as i32 + (1 << 25)) >> 26) as i16;
    a.wrapping_sub(t.wrapping_mul(Q))
}

/// Maps a representative in `(-q, q)` to `[0, q)` without branching.
#[inline(always)]
pub fn to_unsigned(a: i16) -> u16 {
    (a + ((a >> 15) & Q)) as u16
}

/// Compress_d: `round(x * 2^d / q) mod 2^d` for `d <= 11`.
///
/// `x` must lie in `(-q, q)`. The division by q is replaced by a multiply and
/// shift that is exact on the whole input range, so the running time does not
/// depend on `x`.
#[inline(always)]
pub fn compress(x: i16, d: u32) -> u16 {
    let u = to_unsigned(x) as u64;
    let t = (((u << d) + HALF_Q as u64) * COMPRESS_MULTIPLIER) >> 32;
    (t as u16) & ((1u16 << d) - 1)
}

/// Decompress_d: `round(y * q / 2^d)`.
#[inline(always)]
pub fn decompress(y: u16, d: u32) -> i16 {
    (((y as u32) * (Q as u32) + (1 << (d - 1))) >> d) as i16
}
