//! Error handling for the CCA2 conversions.

use cwcrypt_algorithms::Error as PrimitiveError;
use cwcrypt_api::Error as CoreError;
use thiserror::Error;

/// Error type for the CCA2 conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Codec, oracle or primitive error raised while encrypting
    #[error("primitive error: {0}")]
    Primitive(#[from] PrimitiveError),

    /// API-level error raised while encrypting
    #[error("API error: {0}")]
    Api(#[from] CoreError),

    /// The only outcome of a failed decryption
    #[error("ciphertext rejected")]
    Rejected,

    /// Inputs of the wrong size for the key or the codec
    #[error("shape mismatch for {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// What was measured
        context: &'static str,
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },

    /// Operation that this conversion does not provide
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Result type for the CCA2 conversions.
pub type Result<T> = core::result::Result<T, Error>;

/// Validate that a size matches what the key or the codec expects
pub(crate) fn shape(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::ShapeMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::Rejected => CoreError::DecryptionFailed {
                context: "CCA2 decryption",
            },
            Error::ShapeMismatch {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnsupportedOperation(feature) => CoreError::NotImplemented { feature },
        }
    }
}
