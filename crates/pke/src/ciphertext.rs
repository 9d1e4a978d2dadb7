//! Two-part ciphertext shared by the conversions.

use cwcrypt_api::BitString;
use zeroize::Zeroize;

/// `(c1, c2)`: the primitive ciphertext and the masked remainder.
///
/// For Fujisaki-Okamoto `c2` is the masked message; for Kobara-Imai alpha it
/// is the part of the masked `r || m` that does not fit the primitive's
/// message argument.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Ciphertext {
    c1: BitString,
    c2: BitString,
}

impl Ciphertext {
    /// Assemble a ciphertext from its two parts
    pub fn new(c1: BitString, c2: BitString) -> Self {
        Self { c1, c2 }
    }

    /// The primitive ciphertext
    pub fn c1(&self) -> &BitString {
        &self.c1
    }

    /// The masked remainder
    pub fn c2(&self) -> &BitString {
        &self.c2
    }

    /// Mutable access to the primitive ciphertext
    pub fn c1_mut(&mut self) -> &mut BitString {
        &mut self.c1
    }

    /// Mutable access to the masked remainder
    pub fn c2_mut(&mut self) -> &mut BitString {
        &mut self.c2
    }

    /// Split into `(c1, c2)`
    pub fn into_parts(self) -> (BitString, BitString) {
        (self.c1, self.c2)
    }

    /// Total length in bits
    pub fn len(&self) -> usize {
        self.c1.len() + self.c2.len()
    }

    /// Check if both parts are empty
    pub fn is_empty(&self) -> bool {
        self.c1.is_empty() && self.c2.is_empty()
    }
}
