//! Kobara-Imai gamma conversion.
//!
//! Only the alpha variant is provided. The type exists so callers selecting
//! a conversion by name get a typed refusal instead of a missing item.

use core::marker::PhantomData;

use cwcrypt_api::{BitString, CcaTransform, CodeBasedPkc, Result as CoreResult};
use rand::{CryptoRng, RngCore};

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};

const FEATURE: &str = "Kobara-Imai gamma";

/// Placeholder for the Kobara-Imai gamma conversion of `P`
#[derive(Clone, Copy, Debug, Default)]
pub struct KobaraImaiGamma<P> {
    _pkc: PhantomData<fn() -> P>,
}

impl<P: CodeBasedPkc> KobaraImaiGamma<P> {
    /// Create the placeholder
    pub fn new() -> Self {
        Self { _pkc: PhantomData }
    }

    /// Always [`Error::UnsupportedOperation`]
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        _public_key: &P::PublicKey,
        _message: &BitString,
        _rng: &mut R,
    ) -> Result<Ciphertext> {
        Err(Error::UnsupportedOperation(FEATURE))
    }

    /// Always [`Error::UnsupportedOperation`]
    pub fn decrypt(
        &self,
        _secret_key: &P::SecretKey,
        _public_key: &P::PublicKey,
        _ciphertext: &Ciphertext,
    ) -> Result<BitString> {
        Err(Error::UnsupportedOperation(FEATURE))
    }
}

impl<P: CodeBasedPkc> CcaTransform for KobaraImaiGamma<P> {
    type PublicKey = P::PublicKey;
    type SecretKey = P::SecretKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        FEATURE
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &Self::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> CoreResult<Ciphertext> {
        Ok(KobaraImaiGamma::encrypt(self, public_key, message, rng)?)
    }

    fn decrypt(
        &self,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Ciphertext,
    ) -> CoreResult<BitString> {
        Ok(KobaraImaiGamma::decrypt(self, secret_key, public_key, ciphertext)?)
    }
}
