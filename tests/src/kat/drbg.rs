// src/kat/drbg.rs

//! The AES-256 CTR_DRBG (no derivation function, no reseeding) used by the
//! NIST PQC `PQCgenKAT` tooling to derive every random input of a KAT entry.

use aes::cipher::{BlockEncrypt, KeyInit};
use aes::Aes256;
use zeroize::Zeroize;

const KEY_LEN: usize = 32;
const BLOCK_LEN: usize = 16;
/// Entropy input and seed length (key || V).
pub const SEED_LEN: usize = KEY_LEN + BLOCK_LEN;

/// Deterministic generator matching `randombytes_init` / `randombytes`.
pub struct KatDrbg {
    key: [u8; KEY_LEN],
    v: [u8; BLOCK_LEN],
}

impl KatDrbg {
    /// `randombytes_init(entropy_input, NULL)`
    pub fn new(entropy: &[u8; SEED_LEN]) -> Self {
        let mut drbg = Self {
            key: [0u8; KEY_LEN],
            v: [0u8; BLOCK_LEN],
        };
        drbg.update(Some(entropy));
        drbg
    }

    fn next_block(&mut self) -> [u8; BLOCK_LEN] {
        // V = V + 1 (big-endian)
        for byte in self.v.iter_mut().rev() {
            let (next, carry) = byte.overflowing_add(1);
            *byte = next;
            if !carry {
                break;
            }
        }
        let cipher = Aes256::new((&self.key).into());
        let mut block = self.v;
        cipher.encrypt_block((&mut block).into());
        block
    }

    fn update(&mut self, provided: Option<&[u8; SEED_LEN]>) {
        let mut temp = [0u8; SEED_LEN];
        for chunk in temp.chunks_exact_mut(BLOCK_LEN) {
            chunk.copy_from_slice(&self.next_block());
        }
        if let Some(data) = provided {
            for (t, d) in temp.iter_mut().zip(data.iter()) {
                *t ^= d;
            }
        }
        self.key.copy_from_slice(&temp[..KEY_LEN]);
        self.v.copy_from_slice(&temp[KEY_LEN..]);
        temp.zeroize();
    }

    /// `randombytes(out, out.len())`
    pub fn fill(&mut self, out: &mut [u8]) {
        for chunk in out.chunks_mut(BLOCK_LEN) {
            let block = self.next_block();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
        self.update(None);
    }

    /// Draws `N` bytes as one `randombytes` call.
    pub fn array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.fill(&mut out);
        out
    }
}

impl Drop for KatDrbg {
    fn drop(&mut self) {
        self.key.zeroize();
        self.v.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entropy() -> [u8; SEED_LEN] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn test_first_seed_matches_pqcgenkat() {
        let mut drbg = KatDrbg::new(&entropy());
        let seed: [u8; SEED_LEN] = drbg.array();
        assert_eq!(
            hex::encode_upper(seed),
            "061550234D158C5EC95595FE04EF7A25767F2E24CC2BC479D09D86DC9ABCFDE7056A8C266F9EF97ED08541DBD2E1FFA1"
        );
    }

    #[test]
    fn test_split_draws_differ_from_single_draw() {
        let mut a = KatDrbg::new(&entropy());
        let mut b = KatDrbg::new(&entropy());
        let whole: [u8; 32] = a.array();
        let first: [u8; 16] = b.array();
        assert_eq!(&whole[..16], &first[..]);
        let second: [u8; 16] = b.array();
        assert_ne!(&whole[16..], &second[..]);
    }
}
