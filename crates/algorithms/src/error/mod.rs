//! Error handling for codecs, oracles and the reference primitive

use std::fmt;

use cwcrypt_api::Error as CoreError;

/// The error type for cwcrypt primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameters admit no valid instance
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Input of the wrong length, weight or span
    Shape {
        /// Context where the shape error occurred
        context: &'static str,
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },

    /// A received word could not be decoded
    Decoding {
        /// Algorithm that failed to decode
        algorithm: &'static str,
    },

    /// Feature not implemented
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// Processing error during a cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cwcrypt primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Shape {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Shape mismatch for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Decoding { algorithm } => write!(f, "Decoding failed for {}", algorithm),
            Error::NotImplemented { feature } => write!(f, "Feature not implemented: {}", feature),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason,
            },
            Error::Shape {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Decoding { algorithm } => CoreError::DecryptionFailed { context: algorithm },
            Error::NotImplemented { feature } => CoreError::NotImplemented { feature },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details,
            },
        }
    }
}

// Bit string and gap list helpers report api errors
impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidLength {
                context,
                expected,
                actual,
            } => Error::Shape {
                context,
                expected,
                actual,
            },
            CoreError::InvalidParameter { context, message } => Error::Parameter {
                name: context,
                reason: message,
            },
            CoreError::DecryptionFailed { context } => Error::Decoding { algorithm: context },
            CoreError::NotImplemented { feature } => Error::NotImplemented { feature },
            CoreError::InvalidKey { context, message } | CoreError::Other { context, message } => {
                Error::Processing {
                    operation: context,
                    details: message,
                }
            }
        }
    }
}

pub mod validate;
