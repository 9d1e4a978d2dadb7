//! Error type definitions for codec, oracle and transform operations

/// Primary error type for cwcrypt operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A length or weight precondition was violated
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scheme parameters are infeasible
    InvalidParameter {
        context: &'static str,
        message: &'static str,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: &'static str,
    },

    /// Decryption or decoding error
    DecryptionFailed {
        context: &'static str,
    },

    /// Not implemented error
    NotImplemented {
        feature: &'static str,
    },

    /// Other error
    Other {
        context: &'static str,
        message: &'static str,
    },
}

/// Result type for cwcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::DecryptionFailed { .. } => Self::DecryptionFailed { context },
            Self::NotImplemented { feature } => Self::NotImplemented { feature },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}: {}", context, message)
            },
            Self::DecryptionFailed { context } => {
                write!(f, "Decryption failed: {}", context)
            },
            Self::NotImplemented { feature } => {
                write!(f, "{} is not implemented", feature)
            },
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
