//! Bit strings, gap lists and codec input domains
//!
//! These are the in-memory shapes every layer agrees on. A [`BitString`] keeps
//! one bit per byte so that constant-time code can turn any position into a
//! `subtle::Choice` without shifting, and a [`GapList`] is the run-length form
//! of a constant-weight vector.

use alloc::vec::Vec;
use core::fmt;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// An ordered sequence of bits.
///
/// Bits are stored most significant first whenever a bit string is converted
/// to or from an integer or a byte buffer.
#[derive(Clone, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct BitString {
    bits: Vec<u8>,
}

impl BitString {
    /// Create an empty bit string
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Create an empty bit string with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Create an all-zero bit string of the given length
    pub fn zeros(len: usize) -> Self {
        Self { bits: alloc::vec![0u8; len] }
    }

    /// Create a bit string from a slice of 0/1 values.
    ///
    /// Only the least significant bit of every element is kept.
    pub fn from_bits(bits: &[u8]) -> Self {
        bits.iter().copied().collect()
    }

    /// Read the first `bit_len` bits of a byte buffer, most significant bit first
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> Result<Self> {
        validate::max_length("BitString::from_bytes", bit_len, bytes.len() * 8)?;
        Ok((0..bit_len)
            .map(|i| (bytes[i / 8] >> (7 - (i % 8))) & 1)
            .collect())
    }

    /// Pack the bits into bytes, most significant bit first, zero-padding the last byte
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = alloc::vec![0u8; self.bits.len().div_ceil(8)];
        for (i, bit) in self.bits.iter().enumerate() {
            out[i / 8] |= bit << (7 - (i % 8));
        }
        out
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bit string is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the bits as 0/1 bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Iterate over the bits
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().copied()
    }

    /// Get the bit at `index`
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bits.get(index).copied()
    }

    /// Get the bit at `index`, reading zero past the end
    pub fn bit_or_zero(&self, index: usize) -> u8 {
        self.get(index).unwrap_or(0)
    }

    /// Set the bit at `index`
    pub fn set(&mut self, index: usize, bit: u8) -> Result<()> {
        let len = self.bits.len();
        match self.bits.get_mut(index) {
            Some(slot) => {
                *slot = bit & 1;
                Ok(())
            }
            None => Err(Error::InvalidLength {
                context: "BitString::set",
                expected: len,
                actual: index,
            }),
        }
    }

    /// Append one bit
    pub fn push(&mut self, bit: u8) {
        self.bits.push(bit & 1);
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn push_uint(&mut self, value: u64, width: u32) {
        for shift in (0..width).rev() {
            self.push(((value >> shift) & 1) as u8);
        }
    }

    /// Read `width` bits starting at `start` as an unsigned integer.
    ///
    /// Positions past the end read as zero.
    pub fn read_uint(&self, start: usize, width: u32) -> u64 {
        (0..width as usize).fold(0u64, |acc, i| {
            (acc << 1) | u64::from(self.bit_or_zero(start + i))
        })
    }

    /// Append all bits of `other`
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Concatenation `self || other`
    pub fn concat(&self, other: &BitString) -> BitString {
        let mut out = BitString::with_capacity(self.len() + other.len());
        out.extend_from(self);
        out.extend_from(other);
        out
    }

    /// The `count` most significant (leading) bits
    pub fn msb(&self, count: usize) -> Result<BitString> {
        validate::max_length("BitString::msb", count, self.len())?;
        Ok(Self {
            bits: self.bits[..count].to_vec(),
        })
    }

    /// The `count` least significant (trailing) bits
    pub fn lsb(&self, count: usize) -> Result<BitString> {
        validate::max_length("BitString::lsb", count, self.len())?;
        Ok(Self {
            bits: self.bits[self.len() - count..].to_vec(),
        })
    }

    /// Fixed-width copy: truncated, or zero-padded at the end, to exactly `len` bits
    pub fn resized(&self, len: usize) -> BitString {
        let mut bits = self.bits.clone();
        bits.resize(len, 0);
        Self { bits }
    }

    /// Bitwise xor of two equally long bit strings
    pub fn xor(&self, other: &BitString) -> Result<BitString> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    /// In-place bitwise xor with an equally long bit string
    pub fn xor_assign(&mut self, other: &BitString) -> Result<()> {
        validate::length("BitString::xor", other.len(), self.len())?;
        for (a, b) in self.bits.iter_mut().zip(other.bits.iter()) {
            *a ^= b;
        }
        Ok(())
    }

    /// Hamming weight
    pub fn weight(&self) -> usize {
        self.bits.iter().map(|&b| b as usize).sum()
    }

    /// Run-length form: the number of zeros preceding each one-bit.
    ///
    /// Trailing zeros after the last one-bit are not represented.
    pub fn to_gaps(&self) -> GapList {
        let mut gaps = Vec::with_capacity(self.weight());
        let mut run = 0u64;
        for &bit in &self.bits {
            if bit == 1 {
                gaps.push(run);
                run = 0;
            } else {
                run += 1;
            }
        }
        GapList::new(gaps)
    }
}

impl FromIterator<u8> for BitString {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().map(|b| b & 1).collect(),
        }
    }
}

impl AsRef<[u8]> for BitString {
    fn as_ref(&self) -> &[u8] {
        &self.bits
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString(")?;
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        write!(f, ")")
    }
}

/// Run-length form of a constant-weight vector.
///
/// Entry `i` counts the zeros between the `(i-1)`-th and the `i`-th one-bit.
/// A gap list of a length-`n`, weight-`t` vector has `t` entries and
/// `sum + t <= n`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct GapList {
    gaps: Vec<u64>,
}

impl GapList {
    /// Wrap a vector of gaps
    pub fn new(gaps: Vec<u64>) -> Self {
        Self { gaps }
    }

    /// `t` zero gaps, the word with all one-bits packed at the front
    pub fn zeros(t: usize) -> Self {
        Self { gaps: alloc::vec![0u64; t] }
    }

    /// Number of gaps, i.e. the weight of the vector
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Check if the gap list is empty
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Borrow the gaps
    pub fn as_slice(&self) -> &[u64] {
        &self.gaps
    }

    /// Sum of all gaps
    pub fn total(&self) -> u64 {
        self.gaps.iter().fold(0u64, |acc, &g| acc.saturating_add(g))
    }

    /// Check that this is the gap list of a length-`n`, weight-`t` vector
    pub fn check_shape(&self, n: usize, t: usize) -> Result<()> {
        validate::length("gap list weight", self.len(), t)?;
        let used = self.total().saturating_add(t as u64);
        if used > n as u64 {
            return Err(Error::InvalidLength {
                context: "gap list span",
                expected: n,
                actual: usize::try_from(used).unwrap_or(usize::MAX),
            });
        }
        Ok(())
    }

    /// Expand into the length-`n` binary vector
    pub fn to_vector(&self, n: usize) -> Result<BitString> {
        self.check_shape(n, self.len())?;
        let mut vector = BitString::zeros(n);
        let mut position = 0usize;
        for &gap in &self.gaps {
            // check_shape bounds every position by n
            position += gap as usize;
            vector.set(position, 1)?;
            position += 1;
        }
        Ok(vector)
    }
}

impl From<Vec<u64>> for GapList {
    fn from(gaps: Vec<u64>) -> Self {
        Self::new(gaps)
    }
}

impl AsRef<[u64]> for GapList {
    fn as_ref(&self) -> &[u64] {
        &self.gaps
    }
}

/// What a constant-weight codec expects as forward input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputDomain {
    /// An index below `C(n, t)`, written as a fixed-width big-endian bit string
    CombinationIndex { n: usize, t: usize },
    /// A bit string of at most this many bits
    Bits(usize),
}
