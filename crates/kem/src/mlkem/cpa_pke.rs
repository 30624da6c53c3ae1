//! K-PKE, the IND-CPA public key encryption scheme underneath ML-KEM.
//!
//! All three operations are deterministic: key generation is driven by the
//! seed `d` and encryption by the 32-byte `coins`.

use mlkem_algorithms::error::Result as AlgoResult;
use mlkem_algorithms::hash_g;
use mlkem_algorithms::poly::prelude::*;
use zeroize::{Zeroize, Zeroizing};

use super::params::{MlKemParams, SYM_BYTES};
use super::polyvec::{Matrix, PolyVec};
use super::serialize::{
    pack_ciphertext, pack_pk, pack_polyvec, unpack_ciphertext, unpack_pk, unpack_polyvec,
};

/// K-PKE.KeyGen: writes the public key to `pk_out` and the secret key to `sk_out`.
pub(crate) fn keypair_cpa<P: MlKemParams>(
    d: &[u8; SYM_BYTES],
    pk_out: &mut [u8],
    sk_out: &mut [u8],
) -> AlgoResult<()> {
    // (ρ, σ) = G(d || k)
    let (rho, sigma) = hash_g(&[d.as_slice(), &[P::K as u8]]);
    let sigma = Zeroizing::new(sigma);

    let a_hat = Matrix::<P>::expand(&rho, false)?;

    let mut s = PolyVec::<P, Poly>::sample_cbd(&sigma, 0, P::ETA1)?;
    let mut e = PolyVec::<P, Poly>::sample_cbd(&sigma, P::K as u8, P::ETA1)?;
    let mut s_hat = s.ntt();
    let mut e_hat = e.ntt();
    s.zeroize();
    e.zeroize();

    // t̂ = Â ∘ ŝ + ê
    let mut t_hat = PolyVec::<P, NttPoly>::zero();
    for ((t, row), e_i) in t_hat.polys.iter_mut().zip(a_hat.mul_vec(&s_hat)).zip(e_hat.iter()) {
        *t = row.to_standard();
        t.add_assign(e_i);
        t.reduce();
    }

    pack_pk(&t_hat, &rho, pk_out)?;
    pack_polyvec(&s_hat, sk_out)?;

    s_hat.zeroize();
    e_hat.zeroize();
    Ok(())
}

/// K-PKE.Encrypt: writes the ciphertext of `msg` under `pk` to `ct_out`.
pub(crate) fn encrypt_cpa<P: MlKemParams>(
    pk: &[u8],
    msg: &[u8; SYM_BYTES],
    coins: &[u8; SYM_BYTES],
    ct_out: &mut [u8],
) -> AlgoResult<()> {
    let (t_hat, rho) = unpack_pk::<P>(pk)?;
    let a_hat_t = Matrix::<P>::expand(&rho, true)?;

    let mut r = PolyVec::<P, Poly>::sample_cbd(coins, 0, P::ETA1)?;
    let mut e1 = PolyVec::<P, Poly>::sample_cbd(coins, P::K as u8, P::ETA2)?;
    let mut e2 = DefaultSamplers::sample_cbd(coins, 2 * P::K as u8, P::ETA2)?;
    let mut r_hat = r.ntt();
    r.zeroize();

    // u = NTT⁻¹(Âᵀ ∘ r̂) + e1
    let rows = a_hat_t.mul_vec(&r_hat);
    let mut u = PolyVec::<P, Poly>::try_from_fn(|i| Ok(rows[i].inverse_ntt()))?;
    u.add_reduce(&e1);

    // v = NTT⁻¹(t̂ᵀ ∘ r̂) + e2 + Decompress_1(m)
    let mut mu = Poly::from_message(msg);
    let mut v = t_hat.basemul_acc(&r_hat).inverse_ntt();
    v.add_assign(&e2);
    v.add_assign(&mu);
    v.reduce();

    pack_ciphertext(&u, &v, ct_out)?;

    r_hat.zeroize();
    e1.zeroize();
    e2.zeroize();
    mu.zeroize();
    v.zeroize();
    Ok(())
}

/// K-PKE.Decrypt: recovers the 32-byte message from `ct`.
pub(crate) fn decrypt_cpa<P: MlKemParams>(
    sk: &[u8],
    ct: &[u8],
) -> AlgoResult<Zeroizing<[u8; SYM_BYTES]>> {
    let mut s_hat = unpack_polyvec::<P>(sk, false)?;
    let (u, v) = unpack_ciphertext::<P>(ct)?;

    // w = v - NTT⁻¹(ŝᵀ ∘ NTT(u))
    let mut su_hat = s_hat.basemul_acc(&u.ntt());
    let mut su = su_hat.inverse_ntt();
    let mut w = v.sub(&su);
    w.reduce();
    let msg = Zeroizing::new(w.to_message());

    s_hat.zeroize();
    su_hat.zeroize();
    su.zeroize();
    w.zeroize();
    Ok(msg)
}
