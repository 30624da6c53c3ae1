//! Internal utilities for the mlkem library
//!
//! Nothing in this crate is part of the public API contract; it exists so the
//! algorithm and KEM crates share one audited set of constant-time helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_eq_choice, ct_select, ct_select_bytes};
