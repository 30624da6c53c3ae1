// src/kat/mod.rs

//! Reproduction of the reference `PQCgenKAT_kem` response files.
//!
//! A master DRBG seeded with bytes `0..48` yields one 48-byte seed per entry;
//! each entry reseeds a fresh DRBG and draws `d || z` (64 bytes) for key
//! generation, then 32 bytes of encapsulation coins.

pub mod drbg;

pub use drbg::{KatDrbg, SEED_LEN};

use mlkem_api::Kem;
use mlkem_kem::{MlKem, MlKemParams, SharedSecret};
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// One `count = N` record of a KAT response file.
pub struct KatEntry {
    pub count: usize,
    pub seed: [u8; SEED_LEN],
    pub pk: Vec<u8>,
    pub sk: Vec<u8>,
    pub ct: Vec<u8>,
    pub ss: SharedSecret,
    /// The secret recovered by decapsulating `ct` with `sk`.
    pub ss_decapsulated: SharedSecret,
}

impl KatEntry {
    /// Runs key generation, encapsulation and decapsulation from `seed`.
    pub fn generate<P: MlKemParams>(count: usize, seed: [u8; SEED_LEN]) -> mlkem_api::Result<Self> {
        let mut drbg = KatDrbg::new(&seed);
        let coins: [u8; 64] = drbg.array();
        let mut d = [0u8; 32];
        let mut z = [0u8; 32];
        d.copy_from_slice(&coins[..32]);
        z.copy_from_slice(&coins[32..]);
        let m: [u8; 32] = drbg.array();

        let (pk, sk) = MlKem::<P>::keypair_derand(&d, &z)?;
        let (ct, ss) = MlKem::<P>::encapsulate_derand(&pk, &m)?;
        let ss_decapsulated = MlKem::<P>::decapsulate(&sk, &ct)?;

        Ok(Self {
            count,
            seed,
            pk: pk.as_bytes().to_vec(),
            sk: sk.as_bytes().to_vec(),
            ct: ct.as_bytes().to_vec(),
            ss,
            ss_decapsulated,
        })
    }

    /// The record in `.rsp` format, upper-case hex, one field per line.
    pub fn to_rsp(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = writeln!(out, "count = {}", self.count);
        let _ = writeln!(out, "seed = {}", hex::encode_upper(self.seed));
        let _ = writeln!(out, "pk = {}", hex::encode_upper(&self.pk));
        let _ = writeln!(out, "sk = {}", hex::encode_upper(&self.sk));
        let _ = writeln!(out, "ct = {}", hex::encode_upper(&self.ct));
        let _ = writeln!(out, "ss = {}", hex::encode_upper(self.ss.as_bytes()));
        out
    }
}

/// Generates the first `entries` records for parameter set `P`.
pub fn generate_entries<P: MlKemParams>(entries: usize) -> mlkem_api::Result<Vec<KatEntry>> {
    let entropy: [u8; SEED_LEN] = core::array::from_fn(|i| i as u8);
    let mut master = KatDrbg::new(&entropy);
    (0..entries)
        .map(|count| KatEntry::generate::<P>(count, master.array()))
        .collect()
}

/// The response-file body: records separated by a blank line.
pub fn transcript<P: MlKemParams>(entries: usize) -> mlkem_api::Result<String> {
    let records = generate_entries::<P>(entries)?;
    Ok(records.iter().map(KatEntry::to_rsp).collect::<Vec<_>>().join("\n"))
}

/// Lower-case hex SHA-256 of [`transcript`].
pub fn transcript_digest<P: MlKemParams>(entries: usize) -> mlkem_api::Result<String> {
    let body = transcript::<P>(entries)?;
    Ok(hex::encode(Sha256::digest(body.as_bytes())))
}
