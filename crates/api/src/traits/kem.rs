// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! This module provides a type-safe interface for key encapsulation mechanisms
//! driven by a caller-supplied CSPRNG. Deterministic variants that take the
//! randomness as explicit byte seeds live on the concrete implementations.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public (encapsulation) key type.
    type PublicKey: Clone + Serialize;

    /// Secret (decapsulation) key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret` to guarantee zeroizing byte export.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Should be converted to application keys immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for efficient storage of related keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// # Security Requirements
    /// - Must be constant-time with respect to ciphertext validity.
    /// - Must use implicit rejection: an invalid ciphertext yields a
    ///   pseudorandom secret, never an error.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
