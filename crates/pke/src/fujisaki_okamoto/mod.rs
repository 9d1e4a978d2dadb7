//! Fujisaki-Okamoto conversion over a constant-weight codec
//!
//! Encryption hashes fresh randomness `r` and the message into the codec's
//! input domain, turns the digest into the weight-`t` error vector `z` and
//! computes `c1 = PKC(r, z)`, `c2 = R(r) xor m`. Decryption recovers
//! `(r, z)`, unmasks `m` and accepts only if the same derivation reproduces
//! `c1` bit for bit.

use core::marker::PhantomData;

use cwcrypt_algorithms::{
    xof::frame, ConstantTimeCodec, HashOracle, SendrierCodec, Shake256Oracle,
};
use cwcrypt_api::{
    BitString, CcaTransform, CodeBasedPkc, ConstantWeightCodec, Result as CoreResult,
};
use cwcrypt_internal::constant_time::ct_eq_choice;
use cwcrypt_params::utils::hash::{TAG_FO_MASK, TAG_FO_WORD};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::ciphertext::Ciphertext;
use crate::common::{accept, check_codec, decode_or_placeholder, padding_rng, random_bits};
use crate::error::{shape, Error, Result};

pub mod conversion_free;

pub use conversion_free::ConversionFreeFo;

/// Fujisaki-Okamoto over Sendrier's combinatorial codec
pub type FoSendrier<P, H = Shake256Oracle> = FujisakiOkamoto<P, SendrierCodec, H>;

/// Fujisaki-Okamoto over the Barenghi-Pelosi constant-time codec
pub type FoConstantTime<P, H = Shake256Oracle> = FujisakiOkamoto<P, ConstantTimeCodec, H>;

/// Fujisaki-Okamoto conversion of the primitive `P` using codec `C` and oracle `H`
#[derive(Clone, Debug)]
pub struct FujisakiOkamoto<P, C, H = Shake256Oracle> {
    codec: C,
    oracle: H,
    _pkc: PhantomData<fn() -> P>,
}

impl<P, C, H> FujisakiOkamoto<P, C, H>
where
    P: CodeBasedPkc,
    C: ConstantWeightCodec,
    H: HashOracle,
{
    /// Conversion with an explicit codec and oracle
    pub fn with_oracle(codec: C, oracle: H) -> Self {
        tracing::debug!(
            codec = codec.name(),
            oracle = oracle.name(),
            pkc = P::name(),
            n = codec.length(),
            t = codec.weight(),
            "configured Fujisaki-Okamoto conversion"
        );
        Self {
            codec,
            oracle,
            _pkc: PhantomData,
        }
    }

    /// The codec that maps digests to error vectors
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Error vector for randomness `r` and message `m`
    fn error_vector(&self, r: &BitString, message: &BitString) -> Result<BitString> {
        let digest = Zeroizing::new(
            self.oracle
                .hash_to_domain(&frame(TAG_FO_WORD, &[r, message]), self.codec.input_domain())?,
        );
        let mut padding = padding_rng(&self.oracle, &digest)?;
        let word = Zeroizing::new(self.codec.to_word(&digest, &mut padding)?);
        Ok(word.to_vector(self.codec.length())?)
    }

    fn mask(&self, r: &BitString, len: usize) -> Result<BitString> {
        Ok(self.oracle.mask(&frame(TAG_FO_MASK, &[r]), len)?)
    }

    /// Encrypt a `k`-bit message
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &P::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let k = P::dimension(public_key);
        check_codec(
            &self.codec,
            P::code_length(public_key),
            P::error_weight(public_key),
        )?;
        shape("Fujisaki-Okamoto message", message.len(), k)?;

        // 1. Fresh randomness for the primitive's message argument
        let r = Zeroizing::new(random_bits(k, rng));

        // 2. Derandomized error vector z
        let z = Zeroizing::new(self.error_vector(&r, message)?);

        // 3. c1 = PKC(r, z), c2 = R(r) xor m
        let c1 = P::encrypt(&r, &z, public_key)?;
        let c2 = self.mask(&r, k)?.xor(message)?;
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

        // 1. Recover (r, z) with the primitive; a failed decode goes on with r = 0
        let (r, z, decoded) =
            decode_or_placeholder::<P>(ciphertext.c1(), secret_key, public_key)?;
        let (r, _z) = (Zeroizing::new(r), Zeroizing::new(z));

        // 2. Unmask the candidate message
        let message = self.mask(&r, k)?.xor(ciphertext.c2())?;

        // 3. Re-derive z' and compare PKC(r, z') with c1
        let expected_z = Zeroizing::new(self.error_vector(&r, &message)?);
        let expected_c1 = P::encrypt(&r, &expected_z, public_key)?;
        accept(decoded & ct_eq_choice(&expected_c1, ciphertext.c1()), message)
    }

    /// Decrypt, returning [`Error::Rejected`] for every invalid ciphertext.
    ///
    /// A codec that does not fit the key is a caller error and surfaces as
    /// [`Error::ShapeMismatch`].
    pub fn decrypt(
        &self,
        secret_key: &P::SecretKey,
        public_key: &P::PublicKey,
        ciphertext: &Ciphertext,
    ) -> Result<BitString> {
        check_codec(
            &self.codec,
            P::code_length(public_key),
            P::error_weight(public_key),
        )?;
        self.try_decrypt(secret_key, public_key, ciphertext)
            .map_err(|_| Error::Rejected)
    }
}

impl<P: CodeBasedPkc, H: HashOracle> FujisakiOkamoto<P, SendrierCodec, H> {
    /// Conversion over Sendrier's codec for length `n` and weight `t`
    pub fn sendrier(n: usize, t: usize, oracle: H) -> Result<Self> {
        Ok(Self::with_oracle(SendrierCodec::new(n, t)?, oracle))
    }
}

impl<P: CodeBasedPkc, H: HashOracle> FujisakiOkamoto<P, ConstantTimeCodec, H> {
    /// Conversion over the constant-time codec for length `n` and weight `t`
    pub fn constant_time(n: usize, t: usize, oracle: H) -> Result<Self> {
        Ok(Self::with_oracle(ConstantTimeCodec::new(n, t)?, oracle))
    }
}

impl<P, C, H> CcaTransform for FujisakiOkamoto<P, C, H>
where
    P: CodeBasedPkc,
    C: ConstantWeightCodec,
    H: HashOracle,
{
    type PublicKey = P::PublicKey;
    type SecretKey = P::SecretKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        "Fujisaki-Okamoto"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &Self::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> CoreResult<Ciphertext> {
        Ok(FujisakiOkamoto::encrypt(self, public_key, message, rng)?)
    }

    fn decrypt(
        &self,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Ciphertext,
    ) -> CoreResult<BitString> {
        Ok(FujisakiOkamoto::decrypt(self, secret_key, public_key, ciphertext)?)
    }
}
