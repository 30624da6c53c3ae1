//! ML-KEM-768 (NIST PQC Security Level 3).

use super::kem::MlKem;
use super::params::MlKem768Params;

/// ML-KEM-768, implementing `api::Kem`.
pub type MlKem768 = MlKem<MlKem768Params>;
