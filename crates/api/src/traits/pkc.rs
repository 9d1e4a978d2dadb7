//! Trait definition for code-based public-key primitives.

use crate::error::{KeyResult, Result};
use crate::types::BitString;
use rand::{CryptoRng, Rng, RngCore};
use zeroize::Zeroize;

/// A McEliece-shaped public-key primitive: `c = m * G + e`.
///
/// This is the black-box oracle the CCA2 transforms are built on. It is only
/// one-way secure on its own; the transforms supply the hashing and the
/// re-encryption check.
pub trait CodeBasedPkc {
    /// Public key type (generator data and the error weight).
    type PublicKey: Clone;

    /// Secret key type (scrambling, permutation and decoding data).
    type SecretKey: Zeroize + Clone;

    /// Returns the primitive name.
    fn name() -> &'static str;

    /// Generate a key pair for a length-`n`, dimension-`k` code correcting `t` errors.
    fn keypair<R: RngCore + CryptoRng>(
        n: usize,
        t: usize,
        k: usize,
        rng: &mut R,
    ) -> KeyResult<(Self::PublicKey, Self::SecretKey)>;

    /// Code length `n` of the key.
    fn code_length(public_key: &Self::PublicKey) -> usize;

    /// Code dimension `k`, the length of the message argument.
    fn dimension(public_key: &Self::PublicKey) -> usize;

    /// Error weight `t` the key is built for.
    fn error_weight(public_key: &Self::PublicKey) -> usize;

    /// Encrypt `message` (length `k`) with the error vector `error` (length `n`).
    fn encrypt(
        message: &BitString,
        error: &BitString,
        public_key: &Self::PublicKey,
    ) -> Result<BitString>;

    /// Decode a ciphertext into its `(message, error)` pair.
    fn decrypt(
        ciphertext: &BitString,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
    ) -> Result<(BitString, BitString)>;

    /// Flip random positions of `vector` until it has exactly `weight` one-bits.
    fn select_error<R: RngCore + CryptoRng>(
        vector: &mut BitString,
        weight: usize,
        rng: &mut R,
    ) -> Result<()> {
        let len = vector.len();
        crate::error::validate::max_length("select_error weight", weight, len)?;

        let mut current = vector.weight();
        while current != weight {
            let position = rng.gen_range(0..len);
            let bit = vector.bit_or_zero(position);
            if current < weight && bit == 0 {
                vector.set(position, 1)?;
                current += 1;
            } else if current > weight && bit == 1 {
                vector.set(position, 0)?;
                current -= 1;
            }
        }
        Ok(())
    }
}
