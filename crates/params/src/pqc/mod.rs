//! Constants for code-based public-key encryption

pub mod mceliece;
