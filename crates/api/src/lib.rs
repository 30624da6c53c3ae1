//! Public API traits and types for the mlkem library
//!
//! This crate provides the public API surface shared by every mlkem crate: the
//! key encapsulation trait, serialization contracts for key material, and the
//! common error type.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Kem, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, serialize};
