//! Trait definition for CCA2-secure public key encryption built on a code-based primitive.

use crate::error::Result;
use crate::types::BitString;
use rand::{CryptoRng, RngCore};

/// A conversion that turns a one-way code-based primitive into an
/// IND-CCA2 secure encryption scheme.
///
/// Implementations are stateless: the scheme object only carries public
/// configuration (codec parameters, hash oracle), so one value can serve any
/// number of concurrent requests.
pub trait CcaTransform {
    /// Public key type of the underlying primitive.
    type PublicKey;

    /// Secret key type of the underlying primitive.
    type SecretKey;

    /// Ciphertext type produced by the conversion.
    type Ciphertext: Clone;

    /// Returns the conversion name.
    fn name(&self) -> &'static str;

    /// Encrypts `message` for the holder of `public_key`.
    fn encrypt<R: RngCore + CryptoRng>(
        &self,
        public_key: &Self::PublicKey,
        message: &BitString,
        rng: &mut R,
    ) -> Result<Self::Ciphertext>;

    /// Decrypts `ciphertext`.
    ///
    /// Every malformed or tampered ciphertext yields the same error value;
    /// no partial plaintext is ever returned.
    fn decrypt(
        &self,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<BitString>;
}
