//! ML-KEM key encapsulation for the mlkem library
//!
//! This crate implements the module-lattice key encapsulation mechanism of
//! FIPS 203 for the ML-KEM-512, ML-KEM-768 and ML-KEM-1024 parameter sets.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod mlkem;

// Re-exports
pub use error::{Error, Result};
pub use mlkem::{
    Ciphertext, MlKem, MlKem1024, MlKem1024Params, MlKem512, MlKem512Params, MlKem768,
    MlKem768Params, MlKemParams, PublicKey, SecretKey, SharedSecret,
};
