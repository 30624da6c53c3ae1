//! Lattice building blocks for ML-KEM
//!
//! This crate provides the arithmetic core shared by every ML-KEM parameter
//! set: modular reduction on 16-bit coefficients, the number theoretic
//! transform, deterministic samplers, coefficient codecs, and the SHA-3
//! based hash, XOF and PRF adapters they are driven by.
//!
//! # Security Features
//!
//! - No secret-dependent branches or table lookups in field arithmetic,
//!   compression or message encoding
//! - Intermediate sampling buffers are zeroized
//! - Ring element types zeroize on request via [`zeroize::Zeroize`]
//!
//! The crate is usable in both `std` and `no_std` environments.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function adapters
pub mod hash;
pub use hash::{hash_g, hash_h, HashFunction, Sha3_256, Sha3_512};

// Extendable output function adapters
pub mod xof;
pub use xof::{prf, rkprf, ExtendableOutputFunction, ShakeXof128, ShakeXof256};

// Polynomial engine
pub mod poly;
pub use poly::prelude::*;
