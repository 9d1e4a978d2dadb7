//! Sendrier's combinatorial constant-weight codec
//!
//! The codec walks the gaps of a weight-`t` word and, at every step, splits
//! the current gap by a divisor `d` chosen from the remaining length and
//! weight: each full `d` emits a `1`, the leftover is written as a `0`
//! followed by a truncated binary subcode. Decoding replays the same walk.
//!
//! Running time and memory access depend on the data, so this codec must not
//! handle secrets where timing is observable. Use
//! [`ConstantTimeCodec`](super::ConstantTimeCodec) in that setting.

use cwcrypt_api::{
    error::CodecResult, BitString, ConstantWeightCodec, GapList, InputDomain,
};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use super::{combination_count, index_bit_length, index_to_bits};
use crate::error::{validate, Result};

/// Subcode for one gap remainder, as produced by [`encode_fd`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubCode {
    /// `d == 1`: the only possible remainder takes no bits
    Empty,
    /// The low `width` bits of `value`, written most significant first
    Bits {
        /// Encoded value
        value: u64,
        /// Number of bits
        width: u32,
    },
}

impl SubCode {
    /// Number of bits the subcode occupies
    pub fn width(&self) -> u32 {
        match self {
            SubCode::Empty => 0,
            SubCode::Bits { width, .. } => *width,
        }
    }

    /// Append the subcode to `out`
    pub fn write_to(&self, out: &mut BitString) {
        if let SubCode::Bits { value, width } = *self {
            out.push_uint(value, width);
        }
    }
}

#[inline]
fn ceil_log2(d: u64) -> u32 {
    if d <= 1 {
        0
    } else {
        u64::BITS - (d - 1).leading_zeros()
    }
}

/// Divisor for a word of length `n` and weight `t`:
/// `ceil((n - (t - 1) / 2) * (1 - 2^(-1/t)))`.
///
/// Fails unless `1 <= d <= n - t`.
pub fn best_d(n: usize, t: usize) -> Result<u64> {
    validate::parameter(t >= 1 && n > t, "best_d", "requires n > t >= 1")?;

    let nf = n as f64;
    let tf = t as f64;
    let d = ((nf - (tf - 1.0) / 2.0) * (1.0 - 1.0 / 2f64.powf(1.0 / tf))).ceil();

    validate::parameter(
        d >= 1.0 && d <= (n - t) as f64,
        "best_d",
        "d outside [1, n - t]",
    )?;
    Ok(d as u64)
}

/// Truncated binary code of `delta` in `[0, d)`.
///
/// With `u = ceil(log2 d)` and `limit = 2^u - d`, values below `limit` take
/// `u - 1` bits and the rest are written as `delta + limit` in `u` bits.
pub fn encode_fd(delta: u64, d: u64) -> Result<SubCode> {
    validate::parameter(d >= 1, "d", "must be at least 1")?;
    validate::parameter(delta < d, "delta", "must be below d")?;

    if d == 1 {
        return Ok(SubCode::Empty);
    }

    let u = ceil_log2(d);
    let limit = (1u64 << u) - d;
    if delta < limit {
        Ok(SubCode::Bits {
            value: delta,
            width: u - 1,
        })
    } else {
        Ok(SubCode::Bits {
            value: delta + limit,
            width: u,
        })
    }
}

/// Read a truncated binary code for divisor `d` starting at `start`.
///
/// Returns the value and the position after the subcode. Bits past the end
/// of `bits` read as zero.
pub fn decode_fd(d: u64, bits: &BitString, start: usize) -> (u64, usize) {
    if d <= 1 {
        return (0, start);
    }

    let u = ceil_log2(d);
    let limit = (1u64 << u) - d;
    let mut delta = bits.read_uint(start, u - 1);
    let mut next = start + (u - 1) as usize;
    if delta >= limit {
        delta = 2 * delta + bits.bit_or_zero(next) as u64 - limit;
        next += 1;
    }
    (delta, next)
}

/// Sendrier codec for words of length `n` and weight `t`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SendrierCodec {
    n: usize,
    t: usize,
}

impl SendrierCodec {
    /// Create a codec for length `n` and weight `t <= n`
    pub fn new(n: usize, t: usize) -> Result<Self> {
        validate::parameter(t <= n, "t", "weight exceeds length")?;
        Ok(Self { n, t })
    }

    /// Width of the combination indices this codec consumes
    pub fn index_bits(&self) -> usize {
        index_bit_length(self.n, self.t)
    }

    /// Encode a gap list into the bit string that decodes back to it
    pub fn encode(&self, gaps: &GapList) -> Result<BitString> {
        gaps.check_shape(self.n, self.t)?;

        let gaps = gaps.as_slice();
        let mut out = BitString::new();
        let (mut n, mut t) = (self.n, self.t);
        let mut cursor = 0usize;
        let mut current = gaps.first().copied().unwrap_or(0);

        // once n <= t every remaining gap is zero and costs nothing
        while t > 0 && n > t {
            let d = best_d(n, t)?;
            if current >= d {
                out.push(1);
                current -= d;
                n -= d as usize;
            } else {
                out.push(0);
                encode_fd(current, d)?.write_to(&mut out);
                n -= current as usize + 1;
                t -= 1;
                cursor += 1;
                current = gaps.get(cursor).copied().unwrap_or(0);
            }
        }
        Ok(out)
    }

    /// Decode a bit string into a gap list of length `t` and span at most `n`.
    ///
    /// Bits past the end of `bits` read as zero and trailing bits are ignored.
    pub fn decode(&self, bits: &BitString) -> Result<GapList> {
        let mut gaps = Vec::with_capacity(self.t);
        let (mut n, mut t) = (self.n, self.t);
        let mut cursor = 0usize;
        let mut delta = 0u64;

        while t > 0 {
            if n <= t {
                gaps.push(delta);
                delta = 0;
                n -= 1;
                t -= 1;
                continue;
            }

            let d = best_d(n, t)?;
            let bit = bits.bit_or_zero(cursor);
            cursor += 1;
            if bit == 1 {
                n -= d as usize;
                delta += d;
            } else {
                let (rest, next) = decode_fd(d, bits, cursor);
                cursor = next;
                gaps.push(delta + rest);
                delta = 0;
                n -= rest as usize + 1;
                t -= 1;
            }
        }
        Ok(GapList::new(gaps))
    }

    /// Word for a combination index below `C(n, t)`
    pub fn word_for_index(&self, index: &BigUint) -> Result<GapList> {
        validate::parameter(
            *index < combination_count(self.n, self.t),
            "index",
            "must be below C(n, t)",
        )?;
        self.decode(&index_to_bits(index, self.index_bits())?)
    }
}

impl ConstantWeightCodec for SendrierCodec {
    fn name(&self) -> &'static str {
        "Sendrier"
    }

    fn length(&self) -> usize {
        self.n
    }

    fn weight(&self) -> usize {
        self.t
    }

    fn input_domain(&self) -> InputDomain {
        InputDomain::CombinationIndex {
            n: self.n,
            t: self.t,
        }
    }

    fn to_word<R: RngCore + CryptoRng>(
        &self,
        bits: &BitString,
        _rng: &mut R,
    ) -> CodecResult<GapList> {
        Ok(self.decode(bits)?)
    }

    fn to_bits(&self, word: &GapList) -> CodecResult<BitString> {
        Ok(self.encode(word)?)
    }
}
