//! Trait definition for constant-weight word codecs.

use crate::error::CodecResult;
use crate::types::{BitString, GapList, InputDomain};
use rand::{CryptoRng, RngCore};

/// A map between bit strings and constant-weight words of length `n` and weight `t`.
///
/// The forward direction ([`to_word`](Self::to_word)) turns hash output into
/// the error vector of a code-based ciphertext, the reverse direction
/// ([`to_bits`](Self::to_bits)) recovers the bits carried by a decoded error
/// vector. A codec may be one-to-many in the forward direction; in that case
/// the `rng` argument supplies the padding and only the reverse direction is
/// guaranteed to be a left inverse.
pub trait ConstantWeightCodec {
    /// Returns the codec name.
    fn name(&self) -> &'static str;

    /// Word length `n`.
    fn length(&self) -> usize;

    /// Word weight `t`.
    fn weight(&self) -> usize;

    /// The domain the forward direction accepts.
    fn input_domain(&self) -> InputDomain;

    /// Map a bit string from [`input_domain`](Self::input_domain) to a weight-`t` gap list.
    fn to_word<R: RngCore + CryptoRng>(&self, bits: &BitString, rng: &mut R) -> CodecResult<GapList>;

    /// Map a weight-`t` gap list back to the bits it carries.
    fn to_bits(&self, word: &GapList) -> CodecResult<BitString>;
}
