//! Kobara-Imai alpha conversion over the constant-time codec
//!
//! With fresh randomness `r` of 160 bits:
//!
//! ```text
//! z̄      = H1(r || m)                l bits
//! y1||y2 = R(z̄) xor (r || m)         y1 is the leading k bits
//! c1     = PKC(y1, StC(z̄))
//! c2     = y2
//! ```
//!
//! Decryption reads `z̄` back from the decoded error vector with `CtS`,
//! unmasks `r || m`, and accepts only if `H1(r || m)` reproduces `z̄` and
//! re-encryption reproduces `c1`.

use core::marker::PhantomData;

use cwcrypt_algorithms::{xof::frame, ConstantTimeCodec, HashOracle, Shake256Oracle};
use cwcrypt_api::{BitString, CcaTransform, CodeBasedPkc, Result as CoreResult};
use cwcrypt_internal::constant_time::ct_eq_choice;
use cwcrypt_params::utils::hash::{KOBARA_IMAI_RANDOMNESS_BITS, TAG_KI_MASK, TAG_KI_WORD};
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::Zeroizing;

use crate::ciphertext::Ciphertext;
use crate::common::{accept, check_codec, decode_or_placeholder, padding_rng, random_bits};
use crate::error::{Error, Result};

pub mod gamma;

pub use gamma::KobaraImaiGamma;

/// Kobara-Imai alpha conversion of the primitive `P`
#[derive(Clone, Debug)]
pub struct KobaraImaiAlpha<P, H = Shake256Oracle> {
    codec: ConstantTimeCodec,
    oracle: H,
    _pkc: PhantomData<fn() -> P>,
}

impl<P: CodeBasedPkc, H: HashOracle> KobaraImaiAlpha<P, H> {
    /// Conversion for length `n` and weight `t` with codec parameters from `fix_l_d`
    pub fn new(n: usize, t: usize, oracle: H) -> Result<Self> {
        Ok(Self::with_codec(ConstantTimeCodec::new(n, t)?, oracle))
    }

    /// Conversion with an explicit codec
    pub fn with_codec(codec: ConstantTimeCodec, oracle: H) -> Self {
        tracing::debug!(
            oracle = oracle.name(),
            pkc = P::name(),
            l = codec.input_bits(),
            d = codec.divisor(),
            "configured Kobara-Imai alpha conversion"
        );
        Self {
            codec,
            oracle,
            _pkc: PhantomData,
        }
    }

    /// The codec that carries `z̄`
    pub fn codec(&self) -> &ConstantTimeCodec {
        &self.codec
    }

    fn hash_word(&self, r: &BitString, message: &BitString) -> Result<BitString> {
        Ok(self
            .oracle
            .hash_to_bits(&frame(TAG_KI_WORD, &[r, message]), self.codec.input_bits())?)
    }

    fn mask(&self, zbar: &BitString, len: usize) -> Result<BitString> {
        Ok(self.oracle.mask(&frame(TAG_KI_MASK, &[zbar]), len)?)
    }

    fn error_vector(&self, zbar: &BitString, n: usize) -> Result<BitString> {
        let mut padding = padding_rng(&self.oracle, zbar)?;
        let word = Zeroizing::new(self.codec.stc(zbar, &mut padding)?);
        Ok(word.to_vector(n)?)
    }

    /// Encrypt a message of any length with `160 + |m| >= k`
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &P::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> Result<Ciphertext> {
        let n = P::code_length(public_key);
        let k = P::dimension(public_key);
        check_codec(&self.codec, n, P::error_weight(public_key))?;

        let total = KOBARA_IMAI_RANDOMNESS_BITS + message.len();
        if total < k {
            return Err(Error::ShapeMismatch {
                context: "Kobara-Imai r || m",
                expected: k,
                actual: total,
            });
        }

        // 1. Fresh randomness r
        let r = Zeroizing::new(random_bits(KOBARA_IMAI_RANDOMNESS_BITS, rng));

        // 2. z̄ = H1(r || m)
        let zbar = Zeroizing::new(self.hash_word(&r, message)?);

        // 3. y1 || y2 = R(z̄) xor (r || m)
        let plain = Zeroizing::new(r.concat(message));
        let y = Zeroizing::new(self.mask(&zbar, total)?.xor(&plain)?);
        let y1 = Zeroizing::new(y.msb(k)?);
        let y2 = y.lsb(total - k)?;

        // 4. c1 = PKC(y1, StC(z̄))
        let z = Zeroizing::new(self.error_vector(&zbar, n)?);
        let c1 = P::encrypt(&y1, &z, public_key)?;
        Ok(Ciphertext::new(c1, y2))
    }

    fn try_decrypt(
        &self,
        secret_key: &P::SecretKey,
        public_key: &P::PublicKey,
        ciphertext: &Ciphertext,
    ) -> Result<BitString> {
        let n = P::code_length(public_key);
        let total = P::dimension(public_key) + ciphertext.c2().len();
        if total < KOBARA_IMAI_RANDOMNESS_BITS {
            return Err(Error::Rejected);
        }

        // 1. Recover y1 and z, then z̄ = CtS(z); failures go on with zero values
        let (y1, z, decoded) =
            decode_or_placeholder::<P>(ciphertext.c1(), secret_key, public_key)?;
        let (y1, z) = (Zeroizing::new(y1), Zeroizing::new(z));
        let (zbar, shaped) = match self.codec.cts(&z.to_gaps()) {
            Ok(zbar) => (zbar, Choice::from(1)),
            Err(_) => (BitString::zeros(self.codec.input_bits()), Choice::from(0)),
        };
        let zbar = Zeroizing::new(zbar);

        // 2. r || m = R(z̄) xor (y1 || y2)
        let y = Zeroizing::new(y1.concat(ciphertext.c2()));
        let plain = Zeroizing::new(self.mask(&zbar, total)?.xor(&y)?);
        let r = Zeroizing::new(plain.msb(KOBARA_IMAI_RANDOMNESS_BITS)?);
        let message = plain.lsb(total - KOBARA_IMAI_RANDOMNESS_BITS)?;

        // 3. H1(r || m) must reproduce z̄ and re-encryption must reproduce c1
        let expected_zbar = Zeroizing::new(self.hash_word(&r, &message)?);
        let expected_z = Zeroizing::new(self.error_vector(&expected_zbar, n)?);
        let expected_c1 = P::encrypt(&y1, &expected_z, public_key)?;
        let checks = decoded
            & shaped
            & ct_eq_choice(&*zbar, &*expected_zbar)
            & ct_eq_choice(&expected_c1, ciphertext.c1());
        accept(checks, message)
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

impl<P: CodeBasedPkc, H: HashOracle> CcaTransform for KobaraImaiAlpha<P, H> {
    type PublicKey = P::PublicKey;
    type SecretKey = P::SecretKey;
    type Ciphertext = Ciphertext;

    fn name(&self) -> &'static str {
        "Kobara-Imai alpha"
    }

    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &Self::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> CoreResult<Ciphertext> {
        Ok(KobaraImaiAlpha::encrypt(self, public_key, message, rng)?)
    }

    fn decrypt(
        &self,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Ciphertext,
    ) -> CoreResult<BitString> {
        Ok(KobaraImaiAlpha::decrypt(self, secret_key, public_key, ciphertext)?)
    }
}
