//! Cross-crate scenarios and timing diagnostics for the cwcrypt library
pub mod fixtures;
pub mod timing;
