//! # cwcrypt
//!
//! Constant-weight word codecs and the CCA2 conversions built on them.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cwcrypt = "0.3"
//! ```
//!
//! ```
//! use cwcrypt::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//!
//! let mut rng = ChaChaRng::seed_from_u64(7);
//! let (pk, sk) = RepetitionMcEliece::keypair(192, 5, 16, &mut rng)?;
//! let fo = FoConstantTime::<RepetitionMcEliece>::constant_time(192, 5, Shake256Oracle)?;
//!
//! let message: BitString = (0..16u8).map(|i| i % 3).collect();
//! let ciphertext = fo.encrypt(&pk, &message, &mut rng)?;
//! assert_eq!(fo.decrypt(&sk, &pk, &ciphertext)?, message);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`cwcrypt-api`]: Bit strings, gap lists, errors and the codec, primitive and conversion traits
//! - [`cwcrypt-internal`]: Constant-time helpers
//! - [`cwcrypt-params`]: Parameter presets and hash domain tags
//! - [`cwcrypt-algorithms`]: Codecs, the SHAKE256 oracle and the reference primitive
//! - [`cwcrypt-pke`]: Fujisaki-Okamoto and Kobara-Imai conversions

#![cfg_attr(not(feature = "std"), no_std)]

pub use cwcrypt_algorithms as algorithms;
pub use cwcrypt_api as api;
pub use cwcrypt_internal as internal;
pub use cwcrypt_params as params;
pub use cwcrypt_pke as pke;

/// Common imports for cwcrypt users
pub mod prelude {
    // Bit-level types and the API error
    pub use crate::api::{BitString, Error, GapList, InputDomain, Result};

    // Core traits
    pub use crate::api::{CcaTransform, CodeBasedPkc, ConstantWeightCodec};

    // Codecs, oracle and primitive
    pub use crate::algorithms::{
        ConstantTimeCodec, HashOracle, RepetitionMcEliece, SendrierCodec, Shake256Oracle,
    };

    // Conversions
    pub use crate::pke::{
        Ciphertext, ConversionFreeFo, FoConstantTime, FoSendrier, FujisakiOkamoto,
        KobaraImaiAlpha, KobaraImaiGamma,
    };

    // Parameter presets
    pub use crate::params::pqc::mceliece::{CodeParams, CODE_192_5};
}
