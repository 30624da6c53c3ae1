//! Constants for the ML-KEM key encapsulation mechanism (FIPS 203)

#[cfg(feature = "serde")]
use serde::Serialize;

/// Polynomial degree
pub const MLKEM_N: usize = 256;

/// Coefficient modulus
pub const MLKEM_Q: u16 = 3329;

/// Size of seeds, messages and hashes (d, z, rho, sigma, m, H(pk))
pub const MLKEM_SYM_BYTES: usize = 32;

/// Size of the shared secret
pub const MLKEM_SS_BYTES: usize = 32;

/// Size of one ring element packed with 12 bits per coefficient
pub const MLKEM_POLY_BYTES: usize = 384;

/// Noise parameter for e1 and e2, shared by every parameter set
pub const MLKEM_ETA2: u8 = 2;

/// Rate of SHAKE128 in bytes, the block size of the matrix sampler
pub const SHAKE128_RATE: usize = 168;

/// A complete ML-KEM parameter set.
///
/// Only `k`, `eta1`, `du` and `dv` are chosen; every byte size is derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MlKemParamSet {
    /// Human-readable name
    pub name: &'static str,

    /// Module rank (number of ring elements per vector)
    pub k: usize,

    /// Noise parameter for s, e and r
    pub eta1: u8,

    /// Noise parameter for e1 and e2
    pub eta2: u8,

    /// Compression width of u
    pub du: usize,

    /// Compression width of v
    pub dv: usize,

    /// Size of the encapsulation key in bytes
    pub public_key_size: usize,

    /// Size of the decapsulation key in bytes
    pub secret_key_size: usize,

    /// Size of the ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of the shared secret in bytes
    pub shared_secret_size: usize,
}

impl MlKemParamSet {
    /// Derives a parameter set from its free parameters.
    pub const fn new(name: &'static str, k: usize, eta1: u8, du: usize, dv: usize) -> Self {
        let polyvec_bytes = k * MLKEM_POLY_BYTES;
        let public_key_size = polyvec_bytes + MLKEM_SYM_BYTES;
        Self {
            name,
            k,
            eta1,
            eta2: MLKEM_ETA2,
            du,
            dv,
            public_key_size,
            // sk_cpa || pk || H(pk) || z
            secret_key_size: polyvec_bytes + public_key_size + 2 * MLKEM_SYM_BYTES,
            ciphertext_size: (k * du + dv) * MLKEM_N / 8,
            shared_secret_size: MLKEM_SS_BYTES,
        }
    }

    /// Size of a vector of `k` ring elements packed at 12 bits
    pub const fn polyvec_bytes(&self) -> usize {
        self.k * MLKEM_POLY_BYTES
    }

    /// Size of the compressed `u` component of a ciphertext
    pub const fn polyvec_compressed_bytes(&self) -> usize {
        self.k * self.du * MLKEM_N / 8
    }

    /// Size of the compressed `v` component of a ciphertext
    pub const fn poly_compressed_bytes(&self) -> usize {
        self.dv * MLKEM_N / 8
    }
}

/// ML-KEM-512 parameters (NIST security category 1)
pub const ML_KEM_512: MlKemParamSet = MlKemParamSet::new("ML-KEM-512", 2, 3, 10, 4);

/// ML-KEM-768 parameters (NIST security category 3)
pub const ML_KEM_768: MlKemParamSet = MlKemParamSet::new("ML-KEM-768", 3, 2, 10, 4);

/// ML-KEM-1024 parameters (NIST security category 5)
pub const ML_KEM_1024: MlKemParamSet = MlKemParamSet::new("ML-KEM-1024", 4, 2, 11, 5);
