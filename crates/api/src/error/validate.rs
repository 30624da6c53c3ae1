//! Validation helpers returning the API error type

use super::{Error, Result};

/// Validate that a buffer has exactly the expected length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        #[cfg(not(feature = "std"))]
        let _ = reason;
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: reason.into(),
        });
    }
    Ok(())
}
