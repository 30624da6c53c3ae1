//! Known-answer, statistical and timing test harness for the mlkem library
//!
//! The integration tests under `tests/` share these helpers: a NIST
//! AES-256-CTR DRBG reproducing the reference KAT transcripts, a Welch
//! t-test timing harness, bit-balance statistics and a tracing setup.

pub mod kat;
pub mod stats;
