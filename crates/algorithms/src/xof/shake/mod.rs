//! SHAKE256 hash oracle
//!
//! Every oracle call absorbs the framed input once and squeezes as many
//! bytes as the requested output needs.

use cwcrypt_api::BitString;
use cwcrypt_params::utils::hash::PADDING_SEED_BYTES;
use num_bigint::BigUint;
use num_traits::Zero;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};

use super::HashOracle;
use crate::cw::{combination_count, index_bit_length};
use crate::error::{validate, Result};

/// SHAKE256 as `H`, `H1` and `R`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shake256Oracle;

impl Shake256Oracle {
    fn squeeze(data: &[u8], output: &mut [u8]) {
        let mut hasher = Shake256::default();
        hasher.update(data);
        hasher.finalize_xof().read(output);
    }

    fn squeeze_bits(data: &[u8], bits: usize) -> Vec<u8> {
        let mut out = vec![0u8; bits.div_ceil(8)];
        Self::squeeze(data, &mut out);
        out
    }
}

impl HashOracle for Shake256Oracle {
    fn name(&self) -> &'static str {
        "SHAKE256"
    }

    /// `ceil(log2 C(n, t))` bits of output reduced modulo `C(n, t)`
    fn hash_to_index(&self, data: &[u8], n: usize, t: usize) -> Result<BigUint> {
        let count = combination_count(n, t);
        validate::parameter(!count.is_zero(), "t", "weight exceeds length")?;

        let bytes = Self::squeeze_bits(data, index_bit_length(n, t));
        Ok(BigUint::from_bytes_be(&bytes) % count)
    }

    /// Output reduced modulo `2^k`, i.e. the last `k` bits of `ceil(k / 8)` bytes
    fn hash_to_bits(&self, data: &[u8], k: usize) -> Result<BitString> {
        let bytes = Self::squeeze_bits(data, k);
        Ok(BitString::from_bytes(&bytes, bytes.len() * 8)?.lsb(k)?)
    }

    /// The first `k` bits of the output stream
    fn mask(&self, data: &[u8], k: usize) -> Result<BitString> {
        let bytes = Self::squeeze_bits(data, k);
        Ok(BitString::from_bytes(&bytes, k)?)
    }

    fn derive_seed(&self, data: &[u8]) -> Result<[u8; PADDING_SEED_BYTES]> {
        let mut seed = [0u8; PADDING_SEED_BYTES];
        Self::squeeze(data, &mut seed);
        Ok(seed)
    }
}
