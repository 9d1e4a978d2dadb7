//! Hash oracles built on extendable output functions
//!
//! The CCA2 transforms need three random-oracle shapes: `H` into a
//! combination index, `H1` into a fixed number of bits, and a mask generator
//! `R`. All of them hash a framed input: one domain tag byte followed by the
//! bit strings packed most significant bit first.

use cwcrypt_api::{BitString, InputDomain};
use cwcrypt_params::utils::hash::PADDING_SEED_BYTES;
use num_bigint::BigUint;

use crate::cw::{index_bit_length, index_to_bits};
use crate::error::Result;

pub mod shake;

pub use shake::Shake256Oracle;

/// Random-oracle interface used by the transforms
pub trait HashOracle {
    /// Returns the oracle name
    fn name(&self) -> &'static str;

    /// `H`: an index below `C(n, t)`
    fn hash_to_index(&self, data: &[u8], n: usize, t: usize) -> Result<BigUint>;

    /// `H1`: exactly `k` bits
    fn hash_to_bits(&self, data: &[u8], k: usize) -> Result<BitString>;

    /// `R`: a `k`-bit mask
    fn mask(&self, data: &[u8], k: usize) -> Result<BitString>;

    /// Seed for a deterministic generator
    fn derive_seed(&self, data: &[u8]) -> Result<[u8; PADDING_SEED_BYTES]>;

    /// Hash into the forward domain of a constant-weight codec.
    ///
    /// Combination indices come back as fixed-width big-endian bit strings.
    fn hash_to_domain(&self, data: &[u8], domain: InputDomain) -> Result<BitString> {
        match domain {
            InputDomain::CombinationIndex { n, t } => {
                let index = self.hash_to_index(data, n, t)?;
                index_to_bits(&index, index_bit_length(n, t))
            }
            InputDomain::Bits(len) => self.hash_to_bits(data, len),
        }
    }
}

/// Domain tag followed by `parts` packed into bytes
pub fn frame(tag: u8, parts: &[&BitString]) -> Vec<u8> {
    let mut joined = BitString::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        joined.extend_from(part);
    }

    let packed = joined.to_bytes();
    let mut out = Vec::with_capacity(1 + packed.len());
    out.push(tag);
    out.extend_from_slice(&packed);
    out
}
