//! # mlkem
//!
//! A portable, pure Rust implementation of ML-KEM (FIPS 203).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! mlkem = "0.3"
//! ```
//!
//! ```
//! use mlkem::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = MlKem768::keypair(&mut OsRng)?;
//! let (ct, ss) = MlKem768::encapsulate(&mut OsRng, &pk)?;
//! assert_eq!(MlKem768::decapsulate(&sk, &ct)?, ss);
//! # Ok::<(), mlkem::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `kem` (default): the ML-KEM parameter sets and typed keys
//! - `algorithms`: ring arithmetic, NTT, samplers and SHA-3 adapters
//! - `serde`: `Serialize` for the parameter-set constants
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`mlkem-api`]: Error type, `Kem` and serialization traits
//! - [`mlkem-params`]: Parameter-set constants
//! - [`mlkem-internal`]: Constant-time helpers
//! - [`mlkem-algorithms`]: Field, ring and sponge primitives
//! - [`mlkem-kem`]: ML-KEM-512, ML-KEM-768 and ML-KEM-1024

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use mlkem_api as api;
pub use mlkem_internal as internal;
pub use mlkem_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use mlkem_algorithms as algorithms;

#[cfg(feature = "kem")]
pub use mlkem_kem as kem;

/// Common imports for mlkem users
pub mod prelude {
    pub use crate::api::{Error, Kem, Result, Serialize, SerializeSecret};

    #[cfg(feature = "kem")]
    pub use crate::kem::{
        Ciphertext, MlKem, MlKem1024, MlKem512, MlKem768, PublicKey, SecretKey, SharedSecret,
    };
}
