//! ML-KEM IND-CCA2 construction using the Fujisaki-Okamoto transform with
//! implicit rejection.
//!
//! Secret key layout: `dk_pke || ek || H(ek) || z`.

use mlkem_algorithms::error::Result as AlgoResult;
use mlkem_algorithms::{hash_g, hash_h, rkprf};
use mlkem_internal::{ct_eq, ct_eq_choice, ct_select_bytes};
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::{ByteArray, MlKemParams, SS_BYTES, SYM_BYTES};
use super::serialize::unpack_polyvec;

pub(crate) type SharedSecretBytes = Zeroizing<[u8; SS_BYTES]>;

/// Splits a decapsulation key into `(dk_pke, ek, H(ek), z)`.
fn split_sk<P: MlKemParams>(sk: &[u8]) -> (&[u8], &[u8], &[u8], &[u8]) {
    let (dk_pke, rest) = sk.split_at(P::POLYVEC_BYTES);
    let (ek, rest) = rest.split_at(<P::PublicKeyBytes as ByteArray>::LEN);
    let (h_ek, z) = rest.split_at(SYM_BYTES);
    (dk_pke, ek, h_ek, z)
}

/// ML-KEM.KeyGen_internal
pub(crate) fn kem_keygen<P: MlKemParams>(
    d: &[u8; SYM_BYTES],
    z: &[u8; SYM_BYTES],
) -> AlgoResult<(P::PublicKeyBytes, P::SecretKeyBytes)> {
    let mut pk = P::PublicKeyBytes::zeroed();
    let mut sk = P::SecretKeyBytes::zeroed();

    let (dk_pke, rest) = sk.as_mut().split_at_mut(P::POLYVEC_BYTES);
    keypair_cpa::<P>(d, pk.as_mut(), dk_pke)?;

    let (ek, rest) = rest.split_at_mut(<P::PublicKeyBytes as ByteArray>::LEN);
    ek.copy_from_slice(pk.as_ref());
    let (h_ek, z_out) = rest.split_at_mut(SYM_BYTES);
    h_ek.copy_from_slice(&hash_h(pk.as_ref()));
    z_out.copy_from_slice(z);

    Ok((pk, sk))
}

/// ML-KEM.Encaps_internal
pub(crate) fn kem_encaps<P: MlKemParams>(
    pk: &P::PublicKeyBytes,
    m: &[u8; SYM_BYTES],
) -> AlgoResult<(P::CiphertextBytes, SharedSecretBytes)> {
    // (K, r) = G(m || H(ek))
    let h_ek = hash_h(pk.as_ref());
    let (k, r) = hash_g(&[m.as_slice(), &h_ek]);
    let k = Zeroizing::new(k);
    let r = Zeroizing::new(r);

    let mut ct = P::CiphertextBytes::zeroed();
    encrypt_cpa::<P>(pk.as_ref(), m, &r, ct.as_mut())?;
    Ok((ct, k))
}

/// ML-KEM.Decaps_internal
///
/// Both candidate secrets are computed for every ciphertext and the result is
/// chosen with a constant-time select on the re-encryption comparison.
pub(crate) fn kem_decaps<P: MlKemParams>(
    sk: &P::SecretKeyBytes,
    ct: &P::CiphertextBytes,
) -> AlgoResult<SharedSecretBytes> {
    let (dk_pke, ek, h_ek, z) = split_sk::<P>(sk.as_ref());
    let mut z_arr = Zeroizing::new([0u8; SYM_BYTES]);
    z_arr.copy_from_slice(z);

    let m_prime = decrypt_cpa::<P>(dk_pke, ct.as_ref())?;

    // (K', r') = G(m' || h)
    let (k_prime, r_prime) = hash_g(&[m_prime.as_slice(), h_ek]);
    let k_prime = Zeroizing::new(k_prime);
    let r_prime = Zeroizing::new(r_prime);

    // K̄ = J(z || c)
    let k_reject = Zeroizing::new(rkprf(&z_arr, ct.as_ref())?);

    let mut ct_prime = P::CiphertextBytes::zeroed();
    encrypt_cpa::<P>(ek, &m_prime, &r_prime, ct_prime.as_mut())?;

    let matches = ct_eq_choice(ct.as_ref(), ct_prime.as_ref());
    Ok(Zeroizing::new(ct_select_bytes(&*k_reject, &*k_prime, matches)))
}

/// Encapsulation key check: every 12-bit coefficient of t̂ must be below q.
pub(crate) fn validate_public_key<P: MlKemParams>(pk: &P::PublicKeyBytes) -> bool {
    unpack_polyvec::<P>(&pk.as_ref()[..P::POLYVEC_BYTES], true).is_ok()
}

/// Decapsulation key check: the stored `H(ek)` must match the embedded `ek`.
pub(crate) fn validate_private_key<P: MlKemParams>(sk: &P::SecretKeyBytes) -> bool {
    let (_, ek, h_ek, _) = split_sk::<P>(sk.as_ref());
    ct_eq(hash_h(ek), h_ek)
}
