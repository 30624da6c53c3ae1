//! Polynomial engine for Z_q[X]/(X^256 + 1), q = 3329
//!
//! Field arithmetic, the domain-tagged ring element types, the NTT, seeded
//! samplers and the bit-packing codecs.

pub mod field;
pub mod ntt;
pub mod params;
pub mod polynomial;
pub mod sampling;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and traits.
pub mod prelude {
    pub use super::field::{barrett_reduce, compress, decompress, montgomery_reduce, Montgomery};
    pub use super::params::{N, POLY_BYTES, Q};
    pub use super::polynomial::{NttPoly, NttProduct, Poly};
    pub use super::sampling::{CbdSampler, DefaultSamplers, UniformSampler};
    pub use super::serialize::{
        packed_len, CoefficientPacker, CoefficientUnpacker, DefaultCoefficientSerde,
    };
}
