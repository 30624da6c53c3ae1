//! Error handling for ML-KEM operations

#[cfg(feature = "std")]
use alloc::string::ToString;

use core::fmt;
use mlkem_algorithms::error::Error as PrimitiveError;
use mlkem_api::error::Error as CoreError;

/// Error type for ML-KEM key handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Failure inside ring arithmetic, sampling or a codec
    Primitive(PrimitiveError),

    /// Encoded key failed a structural check
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },
}

/// Result type for ML-KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {}: {}", key_type, reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidKey { key_type, reason } => {
                #[cfg(not(feature = "std"))]
                let _ = reason;
                CoreError::InvalidKey {
                    context: key_type,
                    #[cfg(feature = "std")]
                    message: reason.to_string(),
                }
            }
        }
    }
}

pub mod validate;
