//! sampling.rs - Deterministic sampling of ring elements from seeds
//!
//! Two samplers, both driven entirely by SHAKE output:
//!
//! - Uniform NTT-domain elements by rejection sampling 12-bit candidates from a
//!   SHAKE128 stream (matrix expansion).
//! - Small coefficient-domain elements from the centered binomial distribution
//!   CBD_η over PRF output (secrets and errors).

use super::params::{N, Q};
use super::polynomial::{NttPoly, Poly};
use crate::error::{validate, Result};
use crate::xof::{prf, ShakeXof128};
use zeroize::Zeroize;

/// Largest supported η; PRF output is `64 * η` bytes.
const MAX_ETA: usize = 3;

/// Trait for sampling NTT-domain elements uniformly from an XOF stream
pub trait UniformSampler {
    /// SampleNTT: consumes rate-blocks from `xof` until 256 coefficients are accepted
    fn sample_ntt(xof: &mut ShakeXof128) -> Result<NttPoly>;
}

/// Trait for sampling from a Centered Binomial Distribution (CBD)
pub trait CbdSampler {
    /// SamplePolyCBD_η over PRF_η(`seed`, `nonce`)
    fn sample_cbd(seed: &[u8; 32], nonce: u8, eta: u8) -> Result<Poly>;
}

/// Default implementation of the samplers
pub struct DefaultSamplers;

impl UniformSampler for DefaultSamplers {
    fn sample_ntt(xof: &mut ShakeXof128) -> Result<NttPoly> {
        let mut coeffs = [0i16; N];
        let mut filled = 0;
        while filled < N {
            let block = xof.squeeze_block()?;
            filled = rej_uniform(&mut coeffs, filled, &block);
        }
        Ok(NttPoly::from_coeffs(coeffs))
    }
}

impl CbdSampler for DefaultSamplers {
    fn sample_cbd(seed: &[u8; 32], nonce: u8, eta: u8) -> Result<Poly> {
        validate::parameter(eta == 2 || eta == 3, "eta", "must be 2 or 3")?;

        let len = 64 * eta as usize;
        let mut buf = [0u8; 64 * MAX_ETA];
        prf(seed, nonce, &mut buf[..len])?;

        let poly = if eta == 2 { cbd2(&buf[..len]) } else { cbd3(&buf[..len]) };
        buf.zeroize();
        Ok(poly)
    }
}

/// Parses 12-bit candidates from `buf`, appending those below q to `out`
/// starting at `filled`. Returns the new fill level.
pub fn rej_uniform(out: &mut [i16; N], mut filled: usize, buf: &[u8]) -> usize {
    for chunk in buf.chunks_exact(3) {
        if filled >= N {
            break;
        }
        let b0 = chunk[0] as u16;
        let b1 = chunk[1] as u16;
        let b2 = chunk[2] as u16;
        let d1 = (b0 | (b1 << 8)) & 0xFFF;
        let d2 = (b1 >> 4) | (b2 << 4);

        if d1 < Q as u16 {
            out[filled] = d1 as i16;
            filled += 1;
        }
        if d2 < Q as u16 && filled < N {
            out[filled] = d2 as i16;
            filled += 1;
        }
    }
    filled
}

/// CBD_2 over 128 bytes: each coefficient is the difference of two 2-bit popcounts.
pub fn cbd2(buf: &[u8]) -> Poly {
    let mut r = Poly::zero();
    for (i, chunk) in buf.chunks_exact(4).take(N / 8).enumerate() {
        let t = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);
        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            r.coeffs[8 * i + j] = a - b;
        }
    }
    r
}

/// CBD_3 over 192 bytes: each coefficient is the difference of two 3-bit popcounts.
pub fn cbd3(buf: &[u8]) -> Poly {
    let mut r = Poly::zero();
    for (i, chunk) in buf.chunks_exact(3).take(N / 4).enumerate() {
        let t = chunk[0] as u32 | (chunk[1] as u32) << 8 | (chunk[2] as u32) << 16;
        let d = (t & 0x0024_9249) + ((t >> 1) & 0x0024_9249) + ((t >> 2) & 0x0024_9249);
        for j in 0..4 {
            let a = ((d >> (6 * j)) & 0x7) as i16;
            let b = ((d >> (6 * j + 3)) & 0x7) as i16;
            r.coeffs[4 * i + j] = a - b;
        }
    }
    r
}
