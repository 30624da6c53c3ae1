//! Byte layouts of K-PKE keys and ciphertexts.
//!
//! - public key: `ByteEncode12(t̂) || ρ`
//! - secret key: `ByteEncode12(ŝ)`
//! - ciphertext: `ByteEncode_du(Compress_du(u)) || ByteEncode_dv(Compress_dv(v))`
//!
//! Callers pass buffers of the exact parameter-set size.

use mlkem_algorithms::error::Result as AlgoResult;
use mlkem_algorithms::poly::prelude::*;

use super::params::{MlKemParams, SYM_BYTES};
use super::polyvec::PolyVec;

/// Writes `ByteEncode12` of every element of `v` into `out`.
pub(crate) fn pack_polyvec<P: MlKemParams>(
    v: &PolyVec<P, NttPoly>,
    out: &mut [u8],
) -> AlgoResult<()> {
    for (p, chunk) in v.iter().zip(out.chunks_exact_mut(POLY_BYTES)) {
        p.to_bytes(chunk)?;
    }
    Ok(())
}

/// Decodes `P::K` 12-bit packed elements, optionally rejecting values ≥ q.
pub(crate) fn unpack_polyvec<P: MlKemParams>(
    bytes: &[u8],
    checked: bool,
) -> AlgoResult<PolyVec<P, NttPoly>> {
    PolyVec::try_from_fn(|i| {
        let chunk = &bytes[i * POLY_BYTES..(i + 1) * POLY_BYTES];
        if checked {
            NttPoly::from_bytes_checked(chunk)
        } else {
            NttPoly::from_bytes(chunk)
        }
    })
}

/// Serializes a K-PKE public key.
pub(crate) fn pack_pk<P: MlKemParams>(
    t_hat: &PolyVec<P, NttPoly>,
    rho: &[u8; SYM_BYTES],
    out: &mut [u8],
) -> AlgoResult<()> {
    let (t_bytes, rho_bytes) = out.split_at_mut(P::POLYVEC_BYTES);
    pack_polyvec(t_hat, t_bytes)?;
    rho_bytes.copy_from_slice(rho);
    Ok(())
}

/// Parses a K-PKE public key into `(t̂, ρ)`.
pub(crate) fn unpack_pk<P: MlKemParams>(
    bytes: &[u8],
) -> AlgoResult<(PolyVec<P, NttPoly>, [u8; SYM_BYTES])> {
    let (t_bytes, rho_bytes) = bytes.split_at(P::POLYVEC_BYTES);
    let t_hat = unpack_polyvec(t_bytes, false)?;
    let mut rho = [0u8; SYM_BYTES];
    rho.copy_from_slice(&rho_bytes[..SYM_BYTES]);
    Ok((t_hat, rho))
}

/// Serializes `(u, v)` with compression.
pub(crate) fn pack_ciphertext<P: MlKemParams>(
    u: &PolyVec<P, Poly>,
    v: &Poly,
    out: &mut [u8],
) -> AlgoResult<()> {
    let (u_bytes, v_bytes) = out.split_at_mut(P::POLYVEC_COMPRESSED_BYTES);
    let stride = packed_len(P::DU);
    for (p, chunk) in u.iter().zip(u_bytes.chunks_exact_mut(stride)) {
        p.compress_into(P::DU, chunk)?;
    }
    v.compress_into(P::DV, v_bytes)
}

/// Parses and decompresses a ciphertext into `(u, v)`.
pub(crate) fn unpack_ciphertext<P: MlKemParams>(
    bytes: &[u8],
) -> AlgoResult<(PolyVec<P, Poly>, Poly)> {
    let (u_bytes, v_bytes) = bytes.split_at(P::POLYVEC_COMPRESSED_BYTES);
    let stride = packed_len(P::DU);
    let u = PolyVec::try_from_fn(|i| {
        Poly::decompress_from(&u_bytes[i * stride..(i + 1) * stride], P::DU)
    })?;
    let v = Poly::decompress_from(v_bytes, P::DV)?;
    Ok((u, v))
}
