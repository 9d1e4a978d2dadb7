//! Constant values for the cwcrypt library
//!
//! Parameter presets for the code-based primitive and the fixed lengths and
//! domain tags used by the CCA2 transforms.

#![no_std]

pub mod pqc;
pub mod utils;
