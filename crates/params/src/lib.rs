//! Constant values for the mlkem library
//!
//! This crate holds every compile-time constant the ML-KEM implementation depends on,
//! grouped by algorithm family. It has no dependencies beyond an optional `serde` derive
//! and is always `no_std`.

#![no_std]
#![forbid(unsafe_code)]

pub mod pqc;

pub use pqc::mlkem::{MlKemParamSet, ML_KEM_1024, ML_KEM_512, ML_KEM_768};
