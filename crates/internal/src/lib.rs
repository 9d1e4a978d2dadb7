//! Internal utilities for the cwcrypt library
//!
//! Nothing in here is part of the public API contract; the codecs and the
//! transforms route every secret-dependent decision through these helpers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
