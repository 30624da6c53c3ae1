//! Typed ML-KEM keys and the [`MlKem`] struct implementing `api::Kem`.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use mlkem_algorithms::error::to_core_result;
use mlkem_api::error::validate as api_validate;
use mlkem_api::{Error, Kem, Result, Serialize, SerializeSecret};
use mlkem_internal::ct_eq;
use rand::{CryptoRng, RngCore};
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca;
use super::params::{ByteArray, MlKemParams, SS_BYTES, SYM_BYTES};
use crate::error::validate;

/// ML-KEM encapsulation key.
pub struct PublicKey<P: MlKemParams> {
    bytes: P::PublicKeyBytes,
}

impl<P: MlKemParams> PublicKey<P> {
    /// Wraps an encoded encapsulation key of exactly the parameter-set size.
    ///
    /// Only the length is checked; see [`PublicKey::from_bytes_checked`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        api_validate::length(
            "ML-KEM public key",
            bytes.len(),
            <P::PublicKeyBytes as ByteArray>::LEN,
        )?;
        let mut out = P::PublicKeyBytes::zeroed();
        out.as_mut().copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Like [`PublicKey::from_bytes`], but also rejects coefficients that are not
    /// reduced modulo q.
    pub fn from_bytes_checked(bytes: &[u8]) -> Result<Self> {
        let pk = Self::from_bytes(bytes)?;
        validate::key(
            MlKem::<P>::validate_public_key(&pk),
            "ML-KEM public key",
            "coefficient not reduced modulo q",
        )?;
        Ok(pk)
    }

    /// The encoded key.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<P: MlKemParams> Clone for PublicKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<P: MlKemParams> PartialEq for PublicKey<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_ref() == other.bytes.as_ref()
    }
}

impl<P: MlKemParams> Eq for PublicKey<P> {}

impl<P: MlKemParams> fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.as_ref().len())
            .finish()
    }
}

impl<P: MlKemParams> AsRef<[u8]> for PublicKey<P> {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<P: MlKemParams> Serialize for PublicKey<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.as_ref().to_vec()
    }
}

/// ML-KEM decapsulation key. Zeroized on drop.
pub struct SecretKey<P: MlKemParams> {
    bytes: P::SecretKeyBytes,
}

impl<P: MlKemParams> SecretKey<P> {
    /// Wraps an encoded decapsulation key of exactly the parameter-set size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        api_validate::length(
            "ML-KEM secret key",
            bytes.len(),
            <P::SecretKeyBytes as ByteArray>::LEN,
        )?;
        let mut out = P::SecretKeyBytes::zeroed();
        out.as_mut().copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// Like [`SecretKey::from_bytes`], but also checks the embedded `H(ek)`.
    pub fn from_bytes_checked(bytes: &[u8]) -> Result<Self> {
        let sk = Self::from_bytes(bytes)?;
        validate::key(
            MlKem::<P>::validate_private_key(&sk),
            "ML-KEM secret key",
            "embedded public key hash mismatch",
        )?;
        Ok(sk)
    }

    /// The encoded key. Handle with care.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// Extracts the encapsulation key embedded in the decapsulation key.
    pub fn public_key(&self) -> PublicKey<P> {
        let start = P::POLYVEC_BYTES;
        let end = start + <P::PublicKeyBytes as ByteArray>::LEN;
        let mut bytes = P::PublicKeyBytes::zeroed();
        bytes.as_mut().copy_from_slice(&self.bytes.as_ref()[start..end]);
        PublicKey { bytes }
    }
}

impl<P: MlKemParams> Clone for SecretKey<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<P: MlKemParams> Zeroize for SecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: MlKemParams> Drop for SecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: MlKemParams> ZeroizeOnDrop for SecretKey<P> {}

impl<P: MlKemParams> fmt::Debug for SecretKey<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &P::NAME)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl<P: MlKemParams> SerializeSecret for SecretKey<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bytes.as_ref().to_vec())
    }
}

/// ML-KEM ciphertext.
pub struct Ciphertext<P: MlKemParams> {
    bytes: P::CiphertextBytes,
}

impl<P: MlKemParams> Ciphertext<P> {
    /// Wraps an encoded ciphertext of exactly the parameter-set size.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        api_validate::length(
            "ML-KEM ciphertext",
            bytes.len(),
            <P::CiphertextBytes as ByteArray>::LEN,
        )?;
        let mut out = P::CiphertextBytes::zeroed();
        out.as_mut().copy_from_slice(bytes);
        Ok(Self { bytes: out })
    }

    /// The encoded ciphertext.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<P: MlKemParams> Clone for Ciphertext<P> {
    fn clone(&self) -> Self {
        Self {
            bytes: self.bytes.clone(),
        }
    }
}

impl<P: MlKemParams> PartialEq for Ciphertext<P> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_ref() == other.bytes.as_ref()
    }
}

impl<P: MlKemParams> Eq for Ciphertext<P> {}

impl<P: MlKemParams> fmt::Debug for Ciphertext<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext")
            .field("algorithm", &P::NAME)
            .field("len", &self.bytes.as_ref().len())
            .finish()
    }
}

impl<P: MlKemParams> AsRef<[u8]> for Ciphertext<P> {
    fn as_ref(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}

impl<P: MlKemParams> AsMut<[u8]> for Ciphertext<P> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.bytes.as_mut()
    }
}

impl<P: MlKemParams> Serialize for Ciphertext<P> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.as_ref().to_vec()
    }
}

/// The 32-byte shared secret. Zeroized on drop; equality is constant-time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret([u8; SS_BYTES]);

impl SharedSecret {
    /// Wraps raw shared secret bytes.
    pub fn new(bytes: [u8; SS_BYTES]) -> Self {
        Self(bytes)
    }

    /// The secret bytes.
    pub fn as_bytes(&self) -> &[u8; SS_BYTES] {
        &self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        api_validate::length("ML-KEM shared secret", bytes.len(), SS_BYTES)?;
        let mut out = [0u8; SS_BYTES];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.to_vec())
    }
}

fn rng_error(context: &'static str, err: rand::Error) -> Error {
    #[cfg(not(feature = "std"))]
    let _ = err;
    Error::RandomGenerationError {
        context,
        #[cfg(feature = "std")]
        message: err.to_string(),
    }
}

/// ML-KEM over the parameter set `P`.
///
/// The `api::Kem` implementation draws its seeds from the caller's RNG; the
/// `*_derand` functions take them explicitly and are fully deterministic.
pub struct MlKem<P: MlKemParams> {
    _params: PhantomData<P>,
}

impl<P: MlKemParams> MlKem<P> {
    /// ML-KEM.KeyGen_internal from the seeds `d` and `z`.
    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    pub fn keypair_derand(
        d: &[u8; SYM_BYTES],
        z: &[u8; SYM_BYTES],
    ) -> Result<(PublicKey<P>, SecretKey<P>)> {
        let (pk, sk) = to_core_result(ind_cca::kem_keygen::<P>(d, z), "ML-KEM key generation")?;
        Ok((PublicKey { bytes: pk }, SecretKey { bytes: sk }))
    }

    /// ML-KEM.Encaps_internal with the 32-byte message `coins`.
    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    pub fn encapsulate_derand(
        public_key: &PublicKey<P>,
        coins: &[u8; SYM_BYTES],
    ) -> Result<(Ciphertext<P>, SharedSecret)> {
        let (ct, ss) = to_core_result(
            ind_cca::kem_encaps::<P>(&public_key.bytes, coins),
            "ML-KEM encapsulation",
        )?;
        Ok((Ciphertext { bytes: ct }, SharedSecret(*ss)))
    }

    /// Checks that every coefficient of the encapsulation key is reduced modulo q.
    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    pub fn validate_public_key(public_key: &PublicKey<P>) -> bool {
        let valid = ind_cca::validate_public_key::<P>(&public_key.bytes);
        if !valid {
            tracing::debug!("public key coefficient not reduced modulo q");
        }
        valid
    }

    /// Checks the `H(ek)` stored in the decapsulation key.
    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    pub fn validate_private_key(secret_key: &SecretKey<P>) -> bool {
        let valid = ind_cca::validate_private_key::<P>(&secret_key.bytes);
        if !valid {
            tracing::debug!("secret key public key hash mismatch");
        }
        valid
    }
}

impl<P: MlKemParams> Kem for MlKem<P> {
    type PublicKey = PublicKey<P>;
    type SecretKey = SecretKey<P>;
    type SharedSecret = SharedSecret;
    type Ciphertext = Ciphertext<P>;
    type KeyPair = (PublicKey<P>, SecretKey<P>);

    fn name() -> &'static str {
        P::NAME
    }

    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut d = Zeroizing::new([0u8; SYM_BYTES]);
        let mut z = Zeroizing::new([0u8; SYM_BYTES]);
        rng.try_fill_bytes(&mut d[..])
            .map_err(|e| rng_error("ML-KEM keypair seed", e))?;
        rng.try_fill_bytes(&mut z[..])
            .map_err(|e| rng_error("ML-KEM keypair seed", e))?;
        Self::keypair_derand(&d, &z)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        let mut m = Zeroizing::new([0u8; SYM_BYTES]);
        rng.try_fill_bytes(&mut m[..])
            .map_err(|e| rng_error("ML-KEM encapsulation coins", e))?;
        Self::encapsulate_derand(public_key, &m)
    }

    #[instrument(level = "debug", skip_all, fields(algorithm = P::NAME))]
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret> {
        let ss = to_core_result(
            ind_cca::kem_decaps::<P>(&secret_key.bytes, &ciphertext.bytes),
            "ML-KEM decapsulation",
        )?;
        Ok(SharedSecret(*ss))
    }
}
