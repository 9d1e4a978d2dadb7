//! CCA2 conversions for code-based public-key encryption.
//!
//! A McEliece-shaped primitive ([`cwcrypt_api::CodeBasedPkc`]) is only one-way
//! secure. The conversions here hash the message and the randomness into the
//! primitive's inputs and reject every ciphertext that does not re-encrypt to
//! itself:
//!
//! - [`FujisakiOkamoto`] over either constant-weight codec
//! - [`ConversionFreeFo`], which samples the error vector directly
//! - [`KobaraImaiAlpha`] over the constant-time codec
//!
//! Decryption failures of any kind surface as [`Error::Rejected`].

pub mod ciphertext;
mod common;
pub mod error;
pub mod fujisaki_okamoto;
pub mod kobara_imai;

pub use ciphertext::Ciphertext;
pub use error::{Error, Result};
pub use fujisaki_okamoto::{ConversionFreeFo, FoConstantTime, FoSendrier, FujisakiOkamoto};
pub use kobara_imai::{KobaraImaiAlpha, KobaraImaiGamma};
