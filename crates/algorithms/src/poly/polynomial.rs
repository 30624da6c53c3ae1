//! polynomial.rs - Ring elements of Z_q[X]/(X^256 + 1), tagged by domain
//!
//! Three wrapper types share the same `[i16; 256]` storage but are never
//! interchangeable:
//!
//! - [`Poly`]: coefficient domain.
//! - [`NttPoly`]: NTT domain, standard scaling.
//! - [`NttProduct`]: NTT domain, accumulated base multiplications. Each base
//!   multiplication introduces a factor of 2^-16; it is removed either by
//!   [`NttProduct::to_standard`] or by the inverse transform.
//!
//! Addition and subtraction are coefficient-wise with no reduction. Callers
//! reduce before a sum could leave the `i16` range.

use super::field::{barrett_reduce, montgomery_reduce, to_unsigned};
use super::params::{HALF_Q, MONT_SQUARED, N};
use mlkem_internal::ct_select;
use subtle::Choice;
use zeroize::Zeroize;

macro_rules! ring_element {
    ($(#[$doc:meta])* $name:ident, $wrap_vis:vis) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Zeroize)]
        pub struct $name {
            pub(crate) coeffs: [i16; N],
        }

        impl $name {
            /// The all-zero element.
            pub const fn zero() -> Self {
                Self { coeffs: [0; N] }
            }

            /// Wraps raw coefficients that are known to be in this domain.
            $wrap_vis const fn from_coeffs(coeffs: [i16; N]) -> Self {
                Self { coeffs }
            }

            /// Borrows the coefficients.
            pub fn coeffs(&self) -> &[i16; N] {
                &self.coeffs
            }

            /// Coefficient-wise sum, without reduction.
            pub fn add(&self, other: &Self) -> Self {
                let mut out = self.clone();
                out.add_assign(other);
                out
            }

            /// Coefficient-wise difference, without reduction.
            pub fn sub(&self, other: &Self) -> Self {
                let mut out = self.clone();
                for (a, b) in out.coeffs.iter_mut().zip(other.coeffs.iter()) {
                    *a -= *b;
                }
                out
            }

            /// In-place coefficient-wise sum, without reduction.
            pub fn add_assign(&mut self, other: &Self) {
                for (a, b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
                    *a += *b;
                }
            }

            /// Barrett-reduces every coefficient into `[-(q-1)/2, (q-1)/2]`.
            pub fn reduce(&mut self) {
                for c in self.coeffs.iter_mut() {
                    *c = barrett_reduce(*c);
                }
            }

            /// Canonical representatives in `[0, q)`. Coefficients must lie in `(-q, q)`.
            pub fn to_unsigned(&self) -> [u16; N] {
                let mut out = [0u16; N];
                for (o, &c) in out.iter_mut().zip(self.coeffs.iter()) {
                    *o = to_unsigned(c);
                }
                out
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("coeffs[..4]", &&self.coeffs[..4])
                    .finish_non_exhaustive()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }
    };
}

ring_element!(
    /// A ring element in the coefficient domain.
    Poly,
    pub
);

ring_element!(
    /// A ring element in the NTT domain with standard (non-Montgomery) scaling.
    ///
    /// Only the forward transform, the samplers and the 12-bit decoder build
    /// one. Coefficient-domain data cannot be relabelled:
    ///
    /// ```compile_fail
    /// use mlkem_algorithms::poly::prelude::*;
    ///
    /// let p = Poly::from_coeffs([1; N]);
    /// let _ = NttPoly::from_coeffs(*p.coeffs());
    /// ```
    ///
    /// ```
    /// use mlkem_algorithms::poly::prelude::*;
    ///
    /// let p = Poly::from_coeffs([1; N]);
    /// let back = p.ntt().inverse_ntt();
    /// assert_eq!(back.to_unsigned(), [1u16; N]);
    /// ```
    NttPoly,
    pub(crate)
);

ring_element!(
    /// A sum of NTT-domain base multiplications, carrying a 2^-16 factor.
    NttProduct,
    pub(crate)
);

impl Poly {
    /// Decompress_1 of a 32-byte message: bit i becomes `0` or `round(q/2)`.
    ///
    /// Branch-free in the message bits.
    pub fn from_message(msg: &[u8; N / 8]) -> Self {
        let half = (HALF_Q + 1) as i16;
        let mut r = Self::zero();
        for (i, byte) in msg.iter().enumerate() {
            for j in 0..8 {
                let bit = Choice::from((byte >> j) & 1);
                r.coeffs[8 * i + j] = ct_select(&0i16, &half, bit);
            }
        }
        r
    }

    /// Compress_1 into a 32-byte message. Coefficients must lie in `(-q, q)`.
    pub fn to_message(&self) -> [u8; N / 8] {
        let mut msg = [0u8; N / 8];
        for (i, chunk) in self.coeffs.chunks_exact(8).enumerate() {
            for (j, &c) in chunk.iter().enumerate() {
                msg[i] |= (super::field::compress(c, 1) as u8) << j;
            }
        }
        msg
    }
}

impl NttProduct {
    /// Removes the accumulated 2^-16 factor, yielding a standard NTT element.
    pub fn to_standard(&self) -> NttPoly {
        let mut out = NttPoly::zero();
        for (o, &c) in out.coeffs.iter_mut().zip(self.coeffs.iter()) {
            *o = montgomery_reduce(c as i32 * MONT_SQUARED as i32);
        }
        out
    }
}
