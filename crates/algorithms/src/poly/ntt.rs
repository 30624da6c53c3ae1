//! ntt.rs - Number Theoretic Transform over Z_q[X]/(X^256 + 1)
//!
//! q - 1 is divisible by 256 but not 512, so the transform stops one layer
//! short of a full split: the NTT domain is a product of 128 quadratic rings
//! Z_q[X]/(X^2 - ζ^(2·br7(i)+1)), and multiplication there is done pairwise by
//! [`basemul`].
//!
//! Twiddles are kept in Montgomery form and applied with
//! [`montgomery_multiply`], which leaves every other operand in its own domain.
//!
//! ## Normalization
//! The inverse butterflies leave a factor of 128. It is removed together with
//! whatever Montgomery factor the input carries:
//! - [`NttPoly::inverse_ntt`] multiplies by 128^-1.
//! - [`NttProduct::inverse_ntt`] multiplies by 2^16 / 128, cancelling the 2^-16
//!   introduced by [`basemul`].

use super::field::{barrett_reduce, montgomery_multiply, montgomery_reduce, Montgomery};
use super::params::N;
use super::polynomial::{NttPoly, NttProduct, Poly};

/// Powers of ζ = 17 in Montgomery form, in bit-reversed order:
/// `ZETAS[k] = 2^16 · 17^br7(k) mod q`, centered.
const ZETAS: [Montgomery; 128] = {
    const RAW: [i16; 128] = [
        -1044, -758, -359, -1517, 1493, 1422, 287, 202, -171, 622, 1577, 182, 962, -1202, -1474,
        1468, 573, -1325, 264, 383, -829, 1458, -1602, -130, -681, 1017, 732, 608, -1542, 411,
        -205, -1571, 1223, 652, -552, 1015, -1293, 1491, -282, -1544, 516, -8, -320, -666, -1618,
        -1162, 126, 1469, -853, -90, -271, 830, 107, -1421, -247, -951, -398, 961, -1508, -725,
        448, -1065, 677, -1275, -1103, 430, 555, 843, -1251, 871, 1550, 105, 422, 587, 177, -235,
        -291, -460, 1574, 1653, -246, 778, 1159, -147, -777, 1483, -602, 1119, -1590, 644, -872,
        349, 418, 329, -156, -75, 817, 1097, 603, 610, 1322, -1285, -1465, 384, -1215, -136, 1218,
        -1335, -874, 220, -1187, -1659, -1185, -1530, -1278, 794, -1510, -854, -870, 478, -108,
        -308, 996, 991, 958, -1460, 1522, 1628,
    ];
    let mut out = [Montgomery::from_raw(0); 128];
    let mut i = 0;
    while i < 128 {
        out[i] = Montgomery::from_raw(RAW[i]);
        i += 1;
    }
    out
};

/// 2^16 / 128 mod q in Montgomery form: multiplying by it divides by 128.
const INV_128: Montgomery = Montgomery::from_raw(512);

/// 2^32 / 128 mod q in Montgomery form: divides by 128 and cancels one 2^-16.
const INV_128_MONT: Montgomery = Montgomery::from_raw(1441);

/// Forward Cooley-Tukey butterflies, in place.
///
/// Input coefficients must satisfy `|x| < q`; outputs are bounded by `8q`.
fn forward(r: &mut [i16; N]) {
    let mut k = 1;
    let mut len = 128;
    while len >= 2 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = montgomery_multiply(r[j + len], zeta);
                r[j + len] = r[j] - t;
                r[j] += t;
            }
            start += 2 * len;
        }
        len >>= 1;
    }
}

/// Gentleman-Sande butterflies, in place. Leaves the result scaled by 128.
///
/// Input coefficients must satisfy `|x| <= 2q`.
fn inverse_layers(r: &mut [i16; N]) {
    let mut k = 127;
    let mut len = 2;
    while len <= 128 {
        let mut start = 0;
        while start < N {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = r[j];
                r[j] = barrett_reduce(t + r[j + len]);
                r[j + len] = montgomery_multiply(r[j + len] - t, zeta);
            }
            start += 2 * len;
        }
        len <<= 1;
    }
}

fn scale(r: &mut [i16; N], factor: Montgomery) {
    for c in r.iter_mut() {
        *c = montgomery_multiply(*c, factor);
    }
}

/// Product of two degree-1 residues modulo `X^2 - zeta`, times 2^-16.
#[inline(always)]
fn basemul_pair(a: &[i16], b: &[i16], zeta: i16) -> (i16, i16) {
    let hi = montgomery_reduce(a[1] as i32 * b[1] as i32);
    let r0 = montgomery_reduce(hi as i32 * zeta as i32)
        + montgomery_reduce(a[0] as i32 * b[0] as i32);
    let r1 = montgomery_reduce(a[0] as i32 * b[1] as i32)
        + montgomery_reduce(a[1] as i32 * b[0] as i32);
    (r0, r1)
}

/// Pointwise product in the NTT domain, times 2^-16.
///
/// Each group of four coefficients holds two quadratic residues whose moduli
/// use `+zeta` and `-zeta` respectively.
fn basemul(a: &[i16; N], b: &[i16; N]) -> [i16; N] {
    let mut r = [0i16; N];
    for i in 0..N / 4 {
        let zeta = ZETAS[64 + i].raw();
        let o = 4 * i;
        let (r0, r1) = basemul_pair(&a[o..o + 2], &b[o..o + 2], zeta);
        let (r2, r3) = basemul_pair(&a[o + 2..o + 4], &b[o + 2..o + 4], -zeta);
        r[o] = r0;
        r[o + 1] = r1;
        r[o + 2] = r2;
        r[o + 3] = r3;
    }
    r
}

impl Poly {
    /// Forward transform. Coefficients must satisfy `|x| < q`.
    ///
    /// The output is Barrett-reduced.
    pub fn ntt(&self) -> NttPoly {
        let mut r = self.coeffs;
        forward(&mut r);
        let mut out = NttPoly::from_coeffs(r);
        out.reduce();
        out
    }
}

impl NttPoly {
    /// Base multiplication with another NTT-domain element.
    pub fn basemul(&self, other: &NttPoly) -> NttProduct {
        NttProduct::from_coeffs(basemul(&self.coeffs, &other.coeffs))
    }

    /// Inverse transform back to the coefficient domain.
    pub fn inverse_ntt(&self) -> Poly {
        let mut r = self.coeffs;
        inverse_layers(&mut r);
        scale(&mut r, INV_128);
        Poly::from_coeffs(r)
    }
}

impl NttProduct {
    /// Adds `a ∘ b` into the accumulator, without reduction.
    ///
    /// Up to four products fit before the accumulator must be reduced.
    pub fn multiply_accumulate(&mut self, a: &NttPoly, b: &NttPoly) {
        let p = basemul(&a.coeffs, &b.coeffs);
        for (acc, x) in self.coeffs.iter_mut().zip(p.iter()) {
            *acc += *x;
        }
    }

    /// Inverse transform, cancelling the accumulated 2^-16 factor.
    pub fn inverse_ntt(&self) -> Poly {
        let mut r = self.coeffs;
        for c in r.iter_mut() {
            *c = barrett_reduce(*c);
        }
        inverse_layers(&mut r);
        scale(&mut r, INV_128_MONT);
        Poly::from_coeffs(r)
    }
}
