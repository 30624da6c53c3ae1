//! Polynomial vectors and the public matrix.

use alloc::vec::Vec;
use core::marker::PhantomData;

use mlkem_algorithms::error::Result as AlgoResult;
use mlkem_algorithms::poly::prelude::*;
use mlkem_algorithms::ShakeXof128;
use zeroize::Zeroize;

use super::params::MlKemParams;

/// A vector of exactly `P::K` ring elements, all in the domain `T`.
pub struct PolyVec<P: MlKemParams, T> {
    pub(crate) polys: Vec<T>,
    _params: PhantomData<P>,
}

impl<P: MlKemParams, T: Zeroize> Zeroize for PolyVec<P, T> {
    fn zeroize(&mut self) {
        self.polys.zeroize();
    }
}

impl<P: MlKemParams, T: Clone> Clone for PolyVec<P, T> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams, T: PartialEq> PartialEq for PolyVec<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<P: MlKemParams, T: core::fmt::Debug> core::fmt::Debug for PolyVec<P, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolyVec")
            .field("k", &P::K)
            .field("polys", &self.polys)
            .finish()
    }
}

impl<P: MlKemParams, T: Clone + Default> PolyVec<P, T> {
    /// Creates a new zero vector of dimension K.
    pub fn zero() -> Self {
        Self {
            polys: alloc::vec![T::default(); P::K],
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams, T> PolyVec<P, T> {
    /// Builds a vector from `P::K` elements produced by `f(i)`.
    pub fn try_from_fn<F>(mut f: F) -> AlgoResult<Self>
    where
        F: FnMut(usize) -> AlgoResult<T>,
    {
        let polys = (0..P::K).map(&mut f).collect::<AlgoResult<Vec<T>>>()?;
        Ok(Self {
            polys,
            _params: PhantomData,
        })
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.polys.iter()
    }
}

impl<P: MlKemParams> PolyVec<P, Poly> {
    /// Samples each element from CBD_η with consecutive nonces starting at `nonce`.
    pub fn sample_cbd(seed: &[u8; 32], nonce: u8, eta: u8) -> AlgoResult<Self> {
        Self::try_from_fn(|i| DefaultSamplers::sample_cbd(seed, nonce + i as u8, eta))
    }

    /// Applies the forward NTT to each element.
    pub fn ntt(&self) -> PolyVec<P, NttPoly> {
        PolyVec {
            polys: self.polys.iter().map(Poly::ntt).collect(),
            _params: PhantomData,
        }
    }

    /// Adds another vector coefficient-wise, then Barrett-reduces.
    pub fn add_reduce(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
            a.reduce();
        }
    }
}

impl<P: MlKemParams> PolyVec<P, NttPoly> {
    /// Inner product in the NTT domain: `Σ self[i] ∘ other[i]`.
    pub fn basemul_acc(&self, other: &Self) -> NttProduct {
        let mut acc = NttProduct::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc.multiply_accumulate(a, b);
        }
        acc
    }
}

/// The K×K matrix Â, regenerated from ρ on every use.
pub struct Matrix<P: MlKemParams> {
    rows: Vec<PolyVec<P, NttPoly>>,
}

impl<P: MlKemParams> Matrix<P> {
    /// Expands ρ into Â, or into Âᵀ when `transposed` is set.
    ///
    /// Entry (i, j) of Â is sampled from XOF(ρ, j, i).
    pub fn expand(rho: &[u8; 32], transposed: bool) -> AlgoResult<Self> {
        let mut rows = Vec::with_capacity(P::K);
        for i in 0..P::K {
            let row = PolyVec::try_from_fn(|j| {
                let (a, b) = if transposed { (i, j) } else { (j, i) };
                let mut xof = ShakeXof128::for_matrix_entry(rho, a as u8, b as u8)?;
                DefaultSamplers::sample_ntt(&mut xof)
            })?;
            rows.push(row);
        }
        Ok(Self { rows })
    }

    /// Matrix-vector product, one [`NttProduct`] per row.
    pub fn mul_vec(&self, v: &PolyVec<P, NttPoly>) -> Vec<NttProduct> {
        self.rows.iter().map(|row| row.basemul_acc(v)).collect()
    }
}
