//! Fixed-output hash functions
//!
//! Thin wrappers around the `sha3` crate exposing the two SHA-3 instances the
//! scheme needs, plus the named roles they play:
//!
//! - `H` = SHA3-256, used to hash public keys.
//! - `G` = SHA3-512, used to derive seed pairs.

use sha3::Digest;

/// Trait for cryptographic hash functions with a fixed output
pub trait HashFunction {
    /// The digest type
    type Output: AsRef<[u8]>;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]);

    /// Finalizes the hash computation and returns the digest
    fn finalize(self) -> Self::Output;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size (sponge rate) of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}

macro_rules! sha3_hash {
    ($name:ident, $inner:ty, $out:expr, $rate:expr, $label:expr) => {
        #[doc = concat!($label, " hash function")]
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $inner,
        }

        impl HashFunction for $name {
            type Output = [u8; $out];

            fn new() -> Self {
                Self {
                    inner: <$inner>::new(),
                }
            }

            fn update(&mut self, data: &[u8]) {
                Digest::update(&mut self.inner, data);
            }

            fn finalize(self) -> Self::Output {
                self.inner.finalize().into()
            }

            fn output_size() -> usize {
                $out
            }

            fn block_size() -> usize {
                $rate
            }

            fn name() -> &'static str {
                $label
            }
        }
    };
}

sha3_hash!(Sha3_256, sha3::Sha3_256, 32, 136, "SHA3-256");
sha3_hash!(Sha3_512, sha3::Sha3_512, 64, 72, "SHA3-512");

/// H: SHA3-256 of the input.
pub fn hash_h(data: &[u8]) -> [u8; 32] {
    Sha3_256::digest(data)
}

/// G: SHA3-512 over the concatenation of `parts`, split into two 32-byte halves.
pub fn hash_g(parts: &[&[u8]]) -> ([u8; 32], [u8; 32]) {
    let mut hasher = Sha3_512::new();
    for part in parts {
        hasher.update(part);
    }
    let out = hasher.finalize();

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    a.copy_from_slice(&out[..32]);
    b.copy_from_slice(&out[32..]);
    (a, b)
}
