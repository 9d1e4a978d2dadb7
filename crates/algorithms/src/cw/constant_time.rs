//! Barenghi-Pelosi constant-time constant-weight codec
//!
//! Every gap `lambda` is written as a unary quotient `floor(lambda / d)`
//! (that many ones, then a zero) followed by the remainder in `log2 d` bits,
//! with `d` a power of two. The forward direction (`stc`) reads an `l`-bit
//! string with one branch-free iteration per bit, resolves the symbol that
//! was cut off at the end of the input with random completion, and fills the
//! remaining gaps by sequential uniform draws over the remaining capacity.
//!
//! The forward direction is one-to-many; only `cts(stc(s))` truncated to
//! `l` bits is guaranteed to return `s`.

use cwcrypt_api::{
    error::CodecResult, BitString, ConstantWeightCodec, GapList, InputDomain,
};
use cwcrypt_internal::constant_time::{
    choice_from_bit, ct_eq_u64, ct_gt_u64, ct_load, ct_min_u64, ct_store, select,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Result};

/// Uniform draw from `[0, bound]` by multiply-shift.
///
/// Consumes exactly one `u64` from `rng` whatever the bound.
#[inline]
fn uniform_at_most<R: RngCore + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    let x = u128::from(rng.next_u64());
    ((x * (u128::from(bound) + 1)) >> 64) as u64
}

/// Input length `l` and divisor `d` for words of length `n` and weight `t`.
///
/// `d = 2^u` with `u = floor((log2(n - t) - 1) / 2)`, and `l` is the largest
/// multiple of eight below `min(t * (1 + u), (n - t) / d)`.
pub fn fix_l_d(n: usize, t: usize) -> Result<(usize, u64)> {
    validate::parameter(t >= 1 && n > t, "fix_l_d", "requires n > t >= 1")?;

    let span = n - t;
    let u = ((span as f64).log2() - 1.0) / 2.0;
    let u = if u > 0.0 { u.floor() as u32 } else { 0 };
    validate::parameter(u < 63, "fix_l_d", "divisor does not fit a machine word")?;
    let d = 1u64 << u;

    let by_weight = t.saturating_mul(1 + u as usize);
    let by_span = span / d as usize;
    let l = (by_weight.min(by_span).saturating_sub(1) / 8) * 8;

    validate::parameter(l > 0, "fix_l_d", "no usable input bits")?;
    validate::parameter(
        (l as u64).saturating_mul(d) <= span as u64,
        "fix_l_d",
        "l * d exceeds n - t",
    )?;

    tracing::debug!(n, t, l, d, "derived constant-time codec parameters");
    Ok((l, d))
}

/// Barenghi-Pelosi codec with fixed `(n, t, l, d)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantTimeCodec {
    n: usize,
    t: usize,
    l: usize,
    d: u64,
    log2_d: u32,
}

impl ConstantTimeCodec {
    /// Codec with `l` and `d` derived by [`fix_l_d`]
    pub fn new(n: usize, t: usize) -> Result<Self> {
        let (l, d) = fix_l_d(n, t)?;
        Self::with_params(n, t, l, d)
    }

    /// Codec with explicit `l` and `d`
    pub fn with_params(n: usize, t: usize, l: usize, d: u64) -> Result<Self> {
        validate::parameter(t >= 1 && n > t, "t", "requires n > t >= 1")?;
        validate::parameter(d.is_power_of_two(), "d", "must be a power of two")?;
        let log2_d = d.trailing_zeros();
        validate::parameter(l > 0, "l", "must be positive")?;
        validate::parameter(
            (l as u64).saturating_mul(d) <= (n - t) as u64,
            "l",
            "l * d exceeds n - t",
        )?;
        validate::parameter(
            l < t.saturating_mul(1 + log2_d as usize),
            "l",
            "input would not fit in t symbols",
        )?;

        Ok(Self {
            n,
            t,
            l,
            d,
            log2_d,
        })
    }

    /// Maximum input length in bits
    pub fn input_bits(&self) -> usize {
        self.l
    }

    /// Quotient divisor
    pub fn divisor(&self) -> u64 {
        self.d
    }

    /// Map at most `l` bits to a weight-`t` gap list with span at most `n`.
    ///
    /// The loop count and the memory access pattern depend only on the input
    /// length and the public parameters, and `rng` is always asked for
    /// exactly `t + 3` words.
    pub fn stc<R: RngCore + CryptoRng + ?Sized>(
        &self,
        bits: &BitString,
        rng: &mut R,
    ) -> Result<GapList> {
        validate::max_length("constant-time codec input", bits.len(), self.l)?;

        let d = self.d;
        let width = u64::from(self.log2_d);
        let mut slots = vec![0u64; self.t];

        let mut qdone = 0u64;
        let mut rdone = 0u64;
        let mut q = 0u64;
        let mut r = 0u64;
        let mut rbits = 0u64;
        let mut idx = 0u64;
        let mut remaining = (self.n - self.t) as u64;

        for b in bits.iter() {
            let b = u64::from(b);
            qdone |= 1 ^ b;
            q += b & (1 ^ qdone);
            rbits += qdone;
            rdone = ct_eq_u64(rbits, width + 1).unwrap_u8() as u64;
            r = 2 * r + (b & qdone);

            let lam = q * d + r;
            ct_store(&mut slots, idx, lam);

            let finished = choice_from_bit(qdone & rdone);
            idx += select(finished, 1, 0);
            remaining = remaining.wrapping_sub(select(finished, lam, 0));

            q = select(finished, 0, q);
            qdone = select(finished, 0, qdone);
            r = select(finished, 0, r);
            rbits = select(finished, 0, rbits);
            rdone = select(finished, 0, rdone);
        }

        // Slot `idx` holds the symbol cut off by the end of the input; a symbol
        // that completed on the last bit leaves a fresh one with q = r = 0.
        let mut lam = q * d + r;

        let quotient_open = choice_from_bit(1 ^ qdone);
        let draw = uniform_at_most(rng, remaining.wrapping_sub(lam));
        lam += select(quotient_open, draw, 0);

        let quotient_closed = choice_from_bit(qdone) & ct_eq_u64(rbits, 1);
        let draw = uniform_at_most(rng, ct_min_u64(d - 1, remaining.wrapping_sub(q * d)));
        lam += select(quotient_closed, draw, 0);

        let remainder_open =
            choice_from_bit(qdone) & !choice_from_bit(rdone) & ct_gt_u64(rbits, 1);
        let missing = 1u64.wrapping_shl((width + 1).wrapping_sub(rbits) as u32);
        let completed = (q * d)
            .wrapping_add(r.wrapping_mul(missing))
            .wrapping_add(uniform_at_most(rng, missing.wrapping_sub(1)));
        lam = select(remainder_open, completed, lam);

        ct_store(&mut slots, idx, lam);
        remaining = remaining.wrapping_sub(lam);

        for i in 0..self.t {
            let draw = uniform_at_most(rng, remaining);
            let pad = ct_gt_u64(i as u64, idx);
            let value = select(pad, draw, ct_load(&slots, i as u64));
            ct_store(&mut slots, i as u64, value);
            remaining = remaining.wrapping_sub(select(pad, value, 0));
        }

        let word = GapList::new(slots.clone());
        slots.zeroize();
        Ok(word)
    }

    /// Exactly `l` bits carried by a weight-`t` gap list.
    ///
    /// Each gap becomes `floor(gap / d)` ones, a zero and `gap mod d` in
    /// `log2 d` bits; the concatenation is truncated or zero-padded to `l`.
    pub fn cts(&self, gaps: &GapList) -> Result<BitString> {
        gaps.check_shape(self.n, self.t)?;

        let mut out = BitString::with_capacity(self.n);
        for &gap in gaps.as_slice() {
            for _ in 0..gap >> self.log2_d {
                out.push(1);
            }
            out.push(0);
            out.push_uint(gap & (self.d - 1), self.log2_d);
        }

        let bits = out.resized(self.l);
        out.zeroize();
        Ok(bits)
    }
}

impl ConstantWeightCodec for ConstantTimeCodec {
    fn name(&self) -> &'static str {
        "Barenghi-Pelosi"
    }

    fn length(&self) -> usize {
        self.n
    }

    fn weight(&self) -> usize {
        self.t
    }

    fn input_domain(&self) -> InputDomain {
        InputDomain::Bits(self.l)
    }

    fn to_word<R: RngCore + CryptoRng>(
        &self,
        bits: &BitString,
        rng: &mut R,
    ) -> CodecResult<GapList> {
        Ok(self.stc(bits, rng)?)
    }

    fn to_bits(&self, word: &GapList) -> CodecResult<BitString> {
        Ok(self.cts(word)?)
    }
}
