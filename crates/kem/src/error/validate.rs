//! Validation helpers for ML-KEM encodings

use super::{Error, Result};

/// Fails with [`Error::InvalidKey`] unless `condition` holds
pub fn key(condition: bool, key_type: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidKey { key_type, reason });
    }
    Ok(())
}
