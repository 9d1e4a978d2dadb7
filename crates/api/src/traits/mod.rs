//! Trait definitions for the cwcrypt ecosystem

pub mod codec;
pub mod pkc;
pub mod pke;

pub use codec::ConstantWeightCodec;
pub use pkc::CodeBasedPkc;
pub use pke::CcaTransform;
