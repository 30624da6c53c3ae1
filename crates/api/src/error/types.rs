//! Error type definitions for key encapsulation operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for mlkem operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for mlkem operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(mut self, context: &'static str) -> Self {
        match &mut self {
            Self::InvalidKey { context: c, .. }
            | Self::InvalidLength { context: c, .. }
            | Self::InvalidParameter { context: c, .. }
            | Self::RandomGenerationError { context: c, .. }
            | Self::Other { context: c, .. } => *c = context,
        }
        self
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})", context, expected, actual)
            }
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message } => {
                write_with_message(f, "Invalid key", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidKey { context } => write!(f, "Invalid key: {}", context),
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write_with_message(f, "Invalid parameter", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => write!(f, "Invalid parameter: {}", context),
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } => {
                write_with_message(f, "Random generation error", context, message)
            }
            #[cfg(not(feature = "std"))]
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } => write_with_message(f, "Error", context, message),
            #[cfg(not(feature = "std"))]
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}

#[cfg(feature = "std")]
fn write_with_message(
    f: &mut core::fmt::Formatter<'_>,
    kind: &str,
    context: &str,
    message: &str,
) -> core::fmt::Result {
    if message.is_empty() {
        write!(f, "{}: {}", kind, context)
    } else {
        write!(f, "{}: {}: {}", kind, context, message)
    }
}
