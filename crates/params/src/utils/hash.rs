//! Constants for the hash oracle and the transforms built on it

/// Bits of fresh randomness `r` in the Kobara-Imai alpha conversion
pub const KOBARA_IMAI_RANDOMNESS_BITS: usize = 160;

/// Bytes of the seed that drives constant-time codec padding
pub const PADDING_SEED_BYTES: usize = 32;

/// Domain tag: Fujisaki-Okamoto hash of `r || m` into the codec domain
pub const TAG_FO_WORD: u8 = 0x01;

/// Domain tag: Fujisaki-Okamoto mask `R(r)`
pub const TAG_FO_MASK: u8 = 0x02;

/// Domain tag: seed for the padding stream of a constant-time codec
pub const TAG_PADDING_SEED: u8 = 0x03;

/// Domain tag: Kobara-Imai hash of `r || m` into `z̄`
pub const TAG_KI_WORD: u8 = 0x11;

/// Domain tag: Kobara-Imai mask `R(z̄)`
pub const TAG_KI_MASK: u8 = 0x12;

/// Domain tag: conversion-free Fujisaki-Okamoto hash of `e || m`
pub const TAG_PLAIN_FO_MESSAGE: u8 = 0x21;

/// Domain tag: conversion-free Fujisaki-Okamoto mask `R(e)`
pub const TAG_PLAIN_FO_MASK: u8 = 0x22;
