//! Constant-weight codecs and hash oracles for code-based encryption
//!
//! This crate provides the building blocks the CCA2 conversions in
//! `cwcrypt-pke` are assembled from:
//!
//! - [`cw`]: Sendrier's combinatorial codec and the Barenghi-Pelosi
//!   constant-time codec between bit strings and constant-weight words
//! - [`xof`]: SHAKE256 random oracles `H`, `H1` and `R`
//! - [`code`]: GF(2) matrices and a reference McEliece-shaped primitive

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Constant-weight codecs
pub mod cw;
pub use cw::{
    best_d, combination_count, fix_l_d, index_bit_length, ConstantTimeCodec, SendrierCodec,
};

// Hash oracles
pub mod xof;
pub use xof::{HashOracle, Shake256Oracle};

// Code-based primitives
pub mod code;
pub use code::{BinaryMatrix, RepetitionMcEliece, RepetitionPublicKey, RepetitionSecretKey};
