//! ML-KEM key encapsulation mechanism (FIPS 203).
//!
//! A single implementation generic over [`MlKemParams`] provides the three
//! standardized parameter sets.

mod cpa_pke; // K-PKE, the IND-CPA scheme
mod ind_cca; // Fujisaki-Okamoto transform with implicit rejection
mod kem; // Typed keys and the api::Kem implementation
mod params;
mod polyvec;
mod serialize;

mod mlkem1024;
mod mlkem512;
mod mlkem768;

pub use self::mlkem1024::MlKem1024;
pub use self::mlkem512::MlKem512;
pub use self::mlkem768::MlKem768;

pub use self::kem::{Ciphertext, MlKem, PublicKey, SecretKey, SharedSecret};
pub use self::params::{
    ByteArray, MlKem1024Params, MlKem512Params, MlKem768Params, MlKemParams, SS_BYTES, SYM_BYTES,
};
pub use self::polyvec::{Matrix, PolyVec};
