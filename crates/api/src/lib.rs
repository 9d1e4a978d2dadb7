//! Public API traits and types for the cwcrypt library
//!
//! This crate provides the public API surface shared by the codec, oracle and
//! transform crates: the error type, the bit string and gap list types, and the
//! traits that let the CCA2 transforms stay generic over the constant-weight
//! codec and the code-based primitive.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{BitString, GapList, InputDomain};

// Re-export all traits from the traits module
pub use traits::{CcaTransform, CodeBasedPkc, ConstantWeightCodec};
