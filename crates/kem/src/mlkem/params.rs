//! ML-KEM parameter definitions.

use mlkem_params::pqc::mlkem::{
    MlKemParamSet, MLKEM_POLY_BYTES, MLKEM_SS_BYTES, MLKEM_SYM_BYTES, ML_KEM_1024, ML_KEM_512,
    ML_KEM_768,
};
use zeroize::Zeroize;

/// Size of seeds, messages and hashes.
pub const SYM_BYTES: usize = MLKEM_SYM_BYTES;
/// Shared secret size for all ML-KEM variants.
pub const SS_BYTES: usize = MLKEM_SS_BYTES;

/// A fixed-size byte buffer whose length is a parameter-set constant.
pub trait ByteArray: Clone + AsRef<[u8]> + AsMut<[u8]> + Zeroize + Send + Sync + 'static {
    /// Length in bytes
    const LEN: usize;

    /// An all-zero buffer.
    fn zeroed() -> Self;
}

impl<const L: usize> ByteArray for [u8; L] {
    const LEN: usize = L;

    fn zeroed() -> Self {
        [0u8; L]
    }
}

/// Trait defining parameters for a specific ML-KEM variant.
///
/// Everything except the parameter set itself and the byte-array types has a
/// default derived from [`MlKemParams::PARAM_SET`].
pub trait MlKemParams: Send + Sync + 'static {
    /// The underlying constant parameter set.
    const PARAM_SET: MlKemParamSet;

    /// Module rank k.
    const K: usize = Self::PARAM_SET.k;
    /// Noise parameter for s, e and r.
    const ETA1: u8 = Self::PARAM_SET.eta1;
    /// Noise parameter for e1 and e2.
    const ETA2: u8 = Self::PARAM_SET.eta2;
    /// Compression width of u.
    const DU: u32 = Self::PARAM_SET.du as u32;
    /// Compression width of v.
    const DV: u32 = Self::PARAM_SET.dv as u32;

    /// Algorithm name string.
    const NAME: &'static str = Self::PARAM_SET.name;

    /// Size of a 12-bit packed vector (also the K-PKE secret key).
    const POLYVEC_BYTES: usize = Self::PARAM_SET.k * MLKEM_POLY_BYTES;
    /// Size of the compressed `u` component.
    const POLYVEC_COMPRESSED_BYTES: usize = Self::PARAM_SET.polyvec_compressed_bytes();
    /// Size of the compressed `v` component.
    const POLY_COMPRESSED_BYTES: usize = Self::PARAM_SET.poly_compressed_bytes();

    /// Encapsulation key buffer.
    type PublicKeyBytes: ByteArray;
    /// Decapsulation key buffer.
    type SecretKeyBytes: ByteArray;
    /// Ciphertext buffer.
    type CiphertextBytes: ByteArray;
}

/// ML-KEM-512 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKem512Params;
impl MlKemParams for MlKem512Params {
    const PARAM_SET: MlKemParamSet = ML_KEM_512;
    type PublicKeyBytes = [u8; ML_KEM_512.public_key_size];
    type SecretKeyBytes = [u8; ML_KEM_512.secret_key_size];
    type CiphertextBytes = [u8; ML_KEM_512.ciphertext_size];
}

/// ML-KEM-768 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKem768Params;
impl MlKemParams for MlKem768Params {
    const PARAM_SET: MlKemParamSet = ML_KEM_768;
    type PublicKeyBytes = [u8; ML_KEM_768.public_key_size];
    type SecretKeyBytes = [u8; ML_KEM_768.secret_key_size];
    type CiphertextBytes = [u8; ML_KEM_768.ciphertext_size];
}

/// ML-KEM-1024 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlKem1024Params;
impl MlKemParams for MlKem1024Params {
    const PARAM_SET: MlKemParamSet = ML_KEM_1024;
    type PublicKeyBytes = [u8; ML_KEM_1024.public_key_size];
    type SecretKeyBytes = [u8; ML_KEM_1024.secret_key_size];
    type CiphertextBytes = [u8; ML_KEM_1024.ciphertext_size];
}
