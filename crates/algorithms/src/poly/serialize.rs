//! serialize.rs - Polynomial coefficient packing and unpacking
//!
//! ByteEncode_d / ByteDecode_d pack 256 coefficients of `d` bits each,
//! little-endian bit order, into `32 * d` bytes. Compression for ciphertext
//! components is layered on top.

use super::field::{compress, decompress};
use super::params::{N, POLY_BYTES, Q};
use super::polynomial::{NttPoly, Poly};
use crate::error::{validate, Error, Result};

/// Trait for packing coefficients into a byte buffer
pub trait CoefficientPacker {
    /// ByteEncode_d: packs `coeffs` at `bits_per_coeff` bits each into `out`
    fn pack_coeffs(coeffs: &[u16; N], bits_per_coeff: u32, out: &mut [u8]) -> Result<()>;
}

/// Trait for unpacking coefficients from a byte buffer
pub trait CoefficientUnpacker {
    /// ByteDecode_d: unpacks 256 coefficients of `bits_per_coeff` bits each
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: u32) -> Result<[u16; N]>;
}

/// Default implementation for coefficient serialization
pub struct DefaultCoefficientSerde;

fn check_width(bits_per_coeff: u32) -> Result<()> {
    validate::parameter(
        (1..=12).contains(&bits_per_coeff),
        "bits_per_coeff",
        "must be in range [1, 12]",
    )
}

/// Encoded size of one ring element at `bits_per_coeff` bits
pub const fn packed_len(bits_per_coeff: u32) -> usize {
    N * bits_per_coeff as usize / 8
}

impl CoefficientPacker for DefaultCoefficientSerde {
    fn pack_coeffs(coeffs: &[u16; N], bits_per_coeff: u32, out: &mut [u8]) -> Result<()> {
        check_width(bits_per_coeff)?;
        validate::length("packed polynomial", out.len(), packed_len(bits_per_coeff))?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut acc = 0u32;
        let mut acc_bits = 0;
        let mut pos = 0;
        for &c in coeffs.iter() {
            acc |= (c as u32 & mask) << acc_bits;
            acc_bits += bits_per_coeff;
            while acc_bits >= 8 {
                out[pos] = acc as u8;
                pos += 1;
                acc >>= 8;
                acc_bits -= 8;
            }
        }
        Ok(())
    }
}

impl CoefficientUnpacker for DefaultCoefficientSerde {
    fn unpack_coeffs(bytes: &[u8], bits_per_coeff: u32) -> Result<[u16; N]> {
        check_width(bits_per_coeff)?;
        validate::length("packed polynomial", bytes.len(), packed_len(bits_per_coeff))?;

        let mask = (1u32 << bits_per_coeff) - 1;
        let mut coeffs = [0u16; N];
        let mut acc = 0u32;
        let mut acc_bits = 0;
        let mut bytes = bytes.iter();
        for c in coeffs.iter_mut() {
            while acc_bits < bits_per_coeff {
                // length was validated above
                let b = bytes.next().copied().unwrap_or(0);
                acc |= (b as u32) << acc_bits;
                acc_bits += 8;
            }
            *c = (acc & mask) as u16;
            acc >>= bits_per_coeff;
            acc_bits -= bits_per_coeff;
        }
        Ok(coeffs)
    }
}

impl Poly {
    /// Compress_d then ByteEncode_d. Coefficients must lie in `(-q, q)`.
    pub fn compress_into(&self, d: u32, out: &mut [u8]) -> Result<()> {
        check_width(d)?;
        validate::parameter(d <= 11, "d", "compression width must be at most 11")?;
        let mut packed = [0u16; N];
        for (p, &c) in packed.iter_mut().zip(self.coeffs.iter()) {
            *p = compress(c, d);
        }
        DefaultCoefficientSerde::pack_coeffs(&packed, d, out)
    }

    /// ByteDecode_d then Decompress_d.
    pub fn decompress_from(bytes: &[u8], d: u32) -> Result<Poly> {
        validate::parameter(d <= 11, "d", "compression width must be at most 11")?;
        let packed = DefaultCoefficientSerde::unpack_coeffs(bytes, d)?;
        let mut r = Poly::zero();
        for (c, &p) in r.coeffs.iter_mut().zip(packed.iter()) {
            *c = decompress(p, d);
        }
        Ok(r)
    }
}

impl NttPoly {
    /// ByteEncode_12 of the canonical representatives. Coefficients must lie in `(-q, q)`.
    pub fn to_bytes(&self, out: &mut [u8]) -> Result<()> {
        DefaultCoefficientSerde::pack_coeffs(&self.to_unsigned(), 12, out)
    }

    /// ByteDecode_12 without range checking; coefficients may be up to 4095.
    pub fn from_bytes(bytes: &[u8]) -> Result<NttPoly> {
        validate::length("encoded polynomial", bytes.len(), POLY_BYTES)?;
        let raw = DefaultCoefficientSerde::unpack_coeffs(bytes, 12)?;
        Ok(NttPoly::from_coeffs(raw.map(|c| c as i16)))
    }

    /// ByteDecode_12, rejecting any coefficient that is not below q.
    pub fn from_bytes_checked(bytes: &[u8]) -> Result<NttPoly> {
        let p = Self::from_bytes(bytes)?;
        if p.coeffs.iter().any(|&c| c >= Q) {
            return Err(Error::param("coefficient", "not reduced modulo q"));
        }
        Ok(p)
    }
}
