//! Constant-weight word codecs
//!
//! Two codecs map bit strings onto weight-`t` words of length `n`, both
//! working on the run-length ([`GapList`](cwcrypt_api::GapList)) form:
//!
//! - [`SendrierCodec`]: a near-bijection between combination indices and
//!   words. Fast, but its running time depends on the data.
//! - [`ConstantTimeCodec`]: the Barenghi-Pelosi codec, whose forward
//!   direction runs a data-independent trace and pads with randomness.

use cwcrypt_api::BitString;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::error::{validate, Result};

pub mod constant_time;
pub mod sendrier;

pub use constant_time::{fix_l_d, ConstantTimeCodec};
pub use sendrier::{best_d, decode_fd, encode_fd, SendrierCodec, SubCode};

/// `C(n, t)`, zero when `t > n`
pub fn combination_count(n: usize, t: usize) -> BigUint {
    if t > n {
        return BigUint::zero();
    }
    let t = t.min(n - t);
    let mut count = BigUint::one();
    for i in 0..t {
        // exact: the running product is C(n, i + 1) * (i + 1)
        count = count * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    count
}

/// Width of a combination index, `ceil(log2 C(n, t))`
pub fn index_bit_length(n: usize, t: usize) -> usize {
    let count = combination_count(n, t);
    if count <= BigUint::one() {
        return 0;
    }
    (count - BigUint::one()).bits() as usize
}

/// Big-endian bit string of `index`, left-padded to `width` bits
pub fn index_to_bits(index: &BigUint, width: usize) -> Result<BitString> {
    validate::max_length("combination index", index.bits() as usize, width)?;
    Ok((0..width)
        .rev()
        .map(|i| index.bit(i as u64) as u8)
        .collect())
}
