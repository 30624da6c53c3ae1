//! Trait definitions for the mlkem public API

pub mod kem;
pub mod serialize;

pub use kem::Kem;
pub use serialize::{Serialize, SerializeSecret};
