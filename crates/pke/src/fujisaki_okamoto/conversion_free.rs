//! Fujisaki-Okamoto without a constant-weight conversion
//!
//! The error vector `e` is sampled directly and hashed into the primitive's
//! message argument instead: `c1 = PKC(H1(e || m), e)`, `c2 = R(e) xor m`.
//! Decryption checks both the re-encryption and the recovered `H1` value.

use core::marker::PhantomData;

use cwcrypt_algorithms::{xof::frame, HashOracle, Shake256Oracle};
use cwcrypt_api::{BitString, CcaTransform, CodeBasedPkc, Result as CoreResult};
use cwcrypt_internal::constant_time::ct_eq_choice;
use cwcrypt_params::utils::hash::{TAG_PLAIN_FO_MASK, TAG_PLAIN_FO_MESSAGE};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::ciphertext::Ciphertext;
use crate::common::{accept, decode_or_placeholder};
use crate::error::{shape, Error, Result};

/// Conversion-free Fujisaki-Okamoto over the primitive `P`
#[derive(Clone, Debug, Default)]
pub struct ConversionFreeFo<P, H = Shake256Oracle> {
    oracle: H,
    _pkc: PhantomData<fn() -> P>,
}

impl<P: CodeBasedPkc, H: HashOracle> ConversionFreeFo<P, H> {
    /// Conversion with an explicit oracle
    pub fn with_oracle(oracle: H) -> Self {
        tracing::debug!(
            oracle = oracle.name(),
            pkc = P::name(),
            "configured conversion-free Fujisaki-Okamoto"
        );
        Self {
            oracle,
            _pkc: PhantomData,
        }
    }

    fn derived_message(
        &self,
        error: &BitString,
        message: &BitString,
        k: usize,
    ) -> Result<BitString> {
        Ok(self
            .oracle
            .hash_to_bits(&frame(TAG_PLAIN_FO_MESSAGE, &[error, message]), k)?)
    }

    fn mask(&self, error: &BitString, len: usize) -> Result<BitString> {
        Ok(self.oracle.mask(&frame(TAG_PLAIN_FO_MASK, &[error]), len)?)
    }

    /// Encrypt a `k`-bit message
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &P::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let k = P::dimension(public_key);
        shape("Fujisaki-Okamoto message", message.len(), k)?;

        // 1. Random weight-t error vector
        let mut error = Zeroizing::new(BitString::zeros(P::code_length(public_key)));
        P::select_error(&mut error, P::error_weight(public_key), rng)?;

        // 2. c1 = PKC(H1(e || m), e), c2 = R(e) xor m
        let z = Zeroizing::new(self.derived_message(&error, message, k)?);
        let c1 = P::encrypt(&z, &error, public_key)?;
        let c2 = self.mask(&error, k)?.xor(message)?;
        Ok(Ciphertext::new(c1, c2))
    }

    fn try_decrypt(
        &self,
        secret_key: &P::SecretKey,
        public_key: &P::PublicKey,
        ciphertext: &Ciphertext,
    ) -> Result<BitString> {
        let k = P::dimension(public_key);
        shape("Fujisaki-Okamoto c2", ciphertext.c2().len(), k)?;

        // a failed decode goes on with z = 0 and a fixed weight-t error
        let (z, error, decoded) =
            decode_or_placeholder::<P>(ciphertext.c1(), secret_key, public_key)?;
        let (z, error) = (Zeroizing::new(z), Zeroizing::new(error));
        let message = self.mask(&error, k)?.xor(ciphertext.c2())?;

        let expected_z = Zeroizing::new(self.derived_message(&error, &message, k)?);
        let expected_c1 = P::encrypt(&expected_z, &error, public_key)?;
        let checks = decoded
            & ct_eq_choice(&expected_c1, ciphertext.c1())
            & ct_eq_choice(&*z, &*expected_z);
        accept(checks, message)
    }

    /// Decrypt, returning [`Error::Rejected`] for every invalid ciphertext
    pub fn decrypt(
        &self,
        secret_key: &P::SecretKey,
        public_key: &P::PublicKey,
        ciphertext: &Ciphertext,
    ) -> Result<BitString> {
        self.try_decrypt(secret_key, public_key, ciphertext)
            .map_err(|_| Error::Rejected)
    }
}

impl<P: CodeBasedPkc, H: HashOracle> CcaTransform for ConversionFreeFo<P, H> {
    type PublicKey = P::PublicKey;
    type SecretKey = P::SecretKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        "Fujisaki-Okamoto (conversion-free)"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &Self::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> CoreResult<Ciphertext> {
        Ok(ConversionFreeFo::encrypt(self, public_key, message, rng)?)
    }

    fn decrypt(
        &self,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Ciphertext,
    ) -> CoreResult<BitString> {
        Ok(ConversionFreeFo::decrypt(self, secret_key, public_key, ciphertext)?)
    }
}
