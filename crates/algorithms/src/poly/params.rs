//! params.rs - Ring constants for Z_q[X]/(X^256 + 1), q = 3329

use mlkem_params::pqc::mlkem::{MLKEM_N, MLKEM_Q};

/// Number of coefficients in a ring element
pub const N: usize = MLKEM_N;

/// Coefficient modulus
pub const Q: i16 = MLKEM_Q as i16;

/// q^-1 mod 2^16, as a signed 16-bit value
pub const QINV: i16 = -3327;

/// R mod q for R = 2^16, centered
pub const MONT: i16 = -1044;

/// R^2 mod q. Montgomery-reducing `x * MONT_SQUARED` yields `x * R`.
pub const MONT_SQUARED: i16 = 1353;

/// Barrett multiplier, round(2^26 / q)
pub const BARRETT_MULTIPLIER: i32 = ((1 << 26) + Q as i32 / 2) / Q as i32;

/// Floor of q/2, the rounding offset used by Compress
pub const HALF_Q: u32 = (Q as u32) / 2;

/// Division-free multiplier for Compress: ceil(2^32 / q)
pub const COMPRESS_MULTIPLIER: u64 = 1_290_168;

/// Bytes of a 12-bit packed ring element
pub const POLY_BYTES: usize = N * 12 / 8;
