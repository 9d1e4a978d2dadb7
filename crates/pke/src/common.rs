//! Helpers shared by the conversions.

use cwcrypt_algorithms::xof::{frame, HashOracle};
use cwcrypt_api::{BitString, CodeBasedPkc, ConstantWeightCodec, GapList};
use cwcrypt_params::utils::hash::TAG_PADDING_SEED;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use subtle::Choice;

use crate::error::{shape, Error, Result};

/// `len` fresh random bits
pub(crate) fn random_bits<R: RngCore + CryptoRng>(len: usize, rng: &mut R) -> BitString {
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Padding stream for a one-to-many codec, derived from the codec input.
///
/// Encryption and the re-encryption check both derive it from the same
/// bits, so they draw the same error vector.
pub(crate) fn padding_rng<H: HashOracle>(oracle: &H, codec_input: &BitString) -> Result<ChaCha20Rng> {
    let seed = oracle.derive_seed(&frame(TAG_PADDING_SEED, &[codec_input]))?;
    Ok(ChaCha20Rng::from_seed(seed))
}

/// Check that a codec produces words for a key of length `n` and weight `t`
pub(crate) fn check_codec<C: ConstantWeightCodec>(codec: &C, n: usize, t: usize) -> Result<()> {
    shape("codec word length", codec.length(), n)?;
    shape("codec word weight", codec.weight(), t)
}

/// Primitive decode that always hands back correctly shaped values.
///
/// A failed decode yields a zero `k`-bit message, the weight-`t` word with
/// its one-bits packed at the front and an unset flag. Callers run the same
/// unmasking, derivation and re-encryption either way and fold the flag into
/// the final decision.
pub(crate) fn decode_or_placeholder<P: CodeBasedPkc>(
    ciphertext: &BitString,
    secret_key: &P::SecretKey,
    public_key: &P::PublicKey,
) -> Result<(BitString, BitString, Choice)> {
    let placeholder_message = BitString::zeros(P::dimension(public_key));
    let placeholder_error =
        GapList::zeros(P::error_weight(public_key)).to_vector(P::code_length(public_key))?;

    Ok(match P::decrypt(ciphertext, secret_key, public_key) {
        Ok((message, error)) => (message, error, Choice::from(1)),
        Err(_) => (placeholder_message, placeholder_error, Choice::from(0)),
    })
}

/// Release `message` only when every check passed
pub(crate) fn accept(checks: Choice, message: BitString) -> Result<BitString> {
    if bool::from(checks) {
        Ok(message)
    } else {
        Err(Error::Rejected)
    }
}
