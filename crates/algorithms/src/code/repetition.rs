//! McEliece-shaped primitive over a scrambled, permuted repetition code
//!
//! The public generator is `G = S * G1 * P`: `G1` repeats message bit `i`
//! over block `i` of `b = floor(n / k)` columns (leftover columns stay
//! zero), `S` is a random invertible `k x k` matrix and `P` a random column
//! permutation. A block of `b >= 2t + 1` copies survives any `t` flips by
//! majority vote, so decryption always recovers weight-`t` errors.
//!
//! This code has no security of its own. It exists to exercise the CCA2
//! transforms end to end with a real decoder behind the PKC interface.

use cwcrypt_api::{
    error::{validate as api_validate, KeyResult},
    BitString, CodeBasedPkc, Error as CoreError, Result as CoreResult,
};
use cwcrypt_params::pqc::mceliece::MAX_SCRAMBLER_ATTEMPTS;
use rand::{seq::SliceRandom, CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BinaryMatrix;
use crate::error::{validate, Error, Result};

const ALGORITHM: &str = "RepetitionMcEliece";

/// Public key: the scrambled generator and the error weight
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepetitionPublicKey {
    generator: BinaryMatrix,
    t: usize,
}

impl RepetitionPublicKey {
    /// The `k x n` public generator matrix
    pub fn generator(&self) -> &BinaryMatrix {
        &self.generator
    }
}

/// Secret key: the unscrambler `S^-1`, the column permutation and the block size
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RepetitionSecretKey {
    unscrambler: BinaryMatrix,
    permutation: Vec<usize>,
    block: usize,
}

/// Reference code-based primitive
#[derive(Clone, Copy, Debug, Default)]
pub struct RepetitionMcEliece;

/// Draw `S` until it is invertible, returning `(S, S^-1)`
fn random_invertible<R: RngCore + CryptoRng>(
    size: usize,
    rng: &mut R,
) -> Result<(BinaryMatrix, BinaryMatrix)> {
    for attempt in 1..=MAX_SCRAMBLER_ATTEMPTS {
        let candidate = BinaryMatrix::random(size, size, rng);
        if let Some(inverse) = candidate.inverse() {
            tracing::trace!(attempt, size, "found invertible scrambler");
            return Ok((candidate, inverse));
        }
    }
    Err(Error::Processing {
        operation: "scrambler generation",
        details: "no invertible matrix found",
    })
}

impl RepetitionMcEliece {
    fn decode(ciphertext: &BitString, sk: &RepetitionSecretKey, k: usize) -> Result<BitString> {
        let block = sk.block;
        let unpermuted: BitString = sk
            .permutation
            .iter()
            .map(|&column| ciphertext.bit_or_zero(column))
            .collect();

        let votes = unpermuted.as_slice();
        let scrambled: BitString = (0..k)
            .map(|i| {
                let ones: usize = votes[i * block..(i + 1) * block]
                    .iter()
                    .map(|&b| b as usize)
                    .sum();
                (2 * ones > block) as u8
            })
            .collect();

        sk.unscrambler.vec_mul(&scrambled)
    }
}

impl CodeBasedPkc for RepetitionMcEliece {
    type PublicKey = RepetitionPublicKey;
    type SecretKey = RepetitionSecretKey;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn keypair<R: RngCore + CryptoRng>(
        n: usize,
        t: usize,
        k: usize,
        rng: &mut R,
    ) -> KeyResult<(Self::PublicKey, Self::SecretKey)> {
        validate::parameter(k >= 1, "k", "dimension must be positive")?;
        validate::parameter(
            n / k > 2 * t,
            "n",
            "blocks of n / k columns cannot correct t errors",
        )?;

        let block = n / k;
        let mut base = BinaryMatrix::zeros(k, n);
        for i in 0..k {
            for j in i * block..(i + 1) * block {
                base.set(i, j, 1)?;
            }
        }

        let (scrambler, unscrambler) = random_invertible(k, rng)?;

        let mut permutation: Vec<usize> = (0..n).collect();
        permutation.shuffle(rng);

        let generator = scrambler.mul(&base)?.permute_columns(&permutation)?;
        base.zeroize();

        tracing::debug!(n, t, k, block, "generated repetition-code key pair");
        Ok((
            RepetitionPublicKey { generator, t },
            RepetitionSecretKey {
                unscrambler,
                permutation,
                block,
            },
        ))
    }

    fn code_length(public_key: &Self::PublicKey) -> usize {
        public_key.generator.cols()
    }

    fn dimension(public_key: &Self::PublicKey) -> usize {
        public_key.generator.rows()
    }

    fn error_weight(public_key: &Self::PublicKey) -> usize {
        public_key.t
    }

    fn encrypt(
        message: &BitString,
        error: &BitString,
        public_key: &Self::PublicKey,
    ) -> CoreResult<BitString> {
        api_validate::length("PKC error vector", error.len(), Self::code_length(public_key))?;
        let mut ciphertext = public_key.generator.vec_mul(message)?;
        ciphertext.xor_assign(error)?;
        Ok(ciphertext)
    }

    fn decrypt(
        ciphertext: &BitString,
        secret_key: &Self::SecretKey,
        public_key: &Self::PublicKey,
    ) -> CoreResult<(BitString, BitString)> {
        let n = Self::code_length(public_key);
        api_validate::length("PKC ciphertext", ciphertext.len(), n)?;
        if secret_key.permutation.len() != n {
            return Err(CoreError::InvalidKey {
                context: ALGORITHM,
                message: "secret key does not match public key",
            });
        }

        let message = Self::decode(ciphertext, secret_key, Self::dimension(public_key))?;
        let mut error = public_key.generator.vec_mul(&message)?;
        error.xor_assign(ciphertext)?;

        validate::decoding(error.weight() <= public_key.t, ALGORITHM)?;
        Ok((message, error))
    }
}
