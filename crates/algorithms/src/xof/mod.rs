//! Extendable Output Functions (XOF)
//!
//! SHAKE128 and SHAKE256 behind a small absorb-then-squeeze interface, plus the
//! scheme-level functions built on them:
//!
//! - XOF: SHAKE128 used for matrix expansion, squeezed one rate-block at a time.
//! - PRF: SHAKE256 of `seed || nonce`, used by noise sampling.
//! - J: SHAKE256 of `z || ciphertext`, the implicit-rejection key.

use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::error::{Error, Result};
use mlkem_params::pqc::mlkem::SHAKE128_RATE;

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Absorbs more input. Fails once squeezing has started.
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    ///
    /// The first call finalizes absorption; subsequent calls continue the
    /// same output stream.
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Resets the XOF to an empty absorbing state
    fn reset(&mut self);

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to absorb `data` and fill `output` in a single call
    fn generate(data: &[u8], output: &mut [u8]) -> Result<()>
    where
        Self: Sized,
    {
        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze(output)
    }
}

enum Sponge<S, R> {
    Absorbing(S),
    Squeezing(R),
}

macro_rules! shake_xof {
    ($name:ident, $inner:ty, $reader:ty, $bits:expr, $label:expr) => {
        #[doc = concat!($label, " extendable output function")]
        pub struct $name {
            sponge: Sponge<$inner, $reader>,
        }

        impl ExtendableOutputFunction for $name {
            fn new() -> Self {
                Self {
                    sponge: Sponge::Absorbing(<$inner>::default()),
                }
            }

            fn update(&mut self, data: &[u8]) -> Result<()> {
                match &mut self.sponge {
                    Sponge::Absorbing(state) => {
                        state.update(data);
                        Ok(())
                    }
                    Sponge::Squeezing(_) => Err(Error::Processing {
                        operation: concat!($label, " update"),
                        details: "cannot absorb after squeezing",
                    }),
                }
            }

            fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
                if let Sponge::Absorbing(state) = &self.sponge {
                    let reader = state.clone().finalize_xof();
                    self.sponge = Sponge::Squeezing(reader);
                }
                match &mut self.sponge {
                    Sponge::Squeezing(reader) => {
                        reader.read(output);
                        Ok(())
                    }
                    Sponge::Absorbing(_) => Err(Error::Other("sponge failed to finalize")),
                }
            }

            fn reset(&mut self) {
                self.sponge = Sponge::Absorbing(<$inner>::default());
            }

            fn security_level() -> usize {
                $bits
            }
        }
    };
}

shake_xof!(ShakeXof128, sha3::Shake128, sha3::Shake128Reader, 128, "SHAKE128");
shake_xof!(ShakeXof256, sha3::Shake256, sha3::Shake256Reader, 256, "SHAKE256");

impl ShakeXof128 {
    /// XOF(ρ, a, b): a SHAKE128 stream seeded with `rho || a || b`.
    pub fn for_matrix_entry(rho: &[u8; 32], a: u8, b: u8) -> Result<Self> {
        let mut xof = Self::new();
        xof.update(rho)?;
        xof.update(&[a, b])?;
        Ok(xof)
    }

    /// Squeezes one full rate-block (168 bytes).
    pub fn squeeze_block(&mut self) -> Result<[u8; SHAKE128_RATE]> {
        let mut block = [0u8; SHAKE128_RATE];
        self.squeeze(&mut block)?;
        Ok(block)
    }
}

/// PRF_η(s, b): fills `output` with SHAKE256(`seed || nonce`).
pub fn prf(seed: &[u8; 32], nonce: u8, output: &mut [u8]) -> Result<()> {
    let mut xof = ShakeXof256::new();
    xof.update(seed)?;
    xof.update(&[nonce])?;
    xof.squeeze(output)
}

/// J(z, c): the 32-byte implicit-rejection key SHAKE256(`z || ciphertext`).
pub fn rkprf(z: &[u8; 32], ciphertext: &[u8]) -> Result<[u8; 32]> {
    let mut out = [0u8; 32];
    let mut xof = ShakeXof256::new();
    xof.update(z)?;
    xof.update(ciphertext)?;
    xof.squeeze(&mut out)?;
    Ok(out)
}
