//! ML-KEM-512 (NIST PQC Security Level 1).

use super::kem::MlKem;
use super::params::MlKem512Params;

/// ML-KEM-512, implementing `api::Kem`.
pub type MlKem512 = MlKem<MlKem512Params>;
