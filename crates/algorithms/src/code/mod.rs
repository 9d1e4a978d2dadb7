//! Code-based primitives
//!
//! GF(2) linear algebra and a reference McEliece-shaped primitive that
//! implements [`CodeBasedPkc`](cwcrypt_api::CodeBasedPkc).

pub mod binary_matrix;
pub mod repetition;

pub use binary_matrix::BinaryMatrix;
pub use repetition::{RepetitionMcEliece, RepetitionPublicKey, RepetitionSecretKey};
