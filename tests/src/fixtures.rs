//! Shared keys, messages and instrumented randomness for the scenarios.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cwcrypt_algorithms::{
    HashOracle, RepetitionMcEliece, RepetitionPublicKey, RepetitionSecretKey,
    Result as AlgorithmResult, Shake256Oracle,
};
use cwcrypt_api::{BitString, CodeBasedPkc};
use cwcrypt_params::pqc::mceliece::CodeParams;
use cwcrypt_params::utils::hash::PADDING_SEED_BYTES;
use num_bigint::BigUint;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;

/// Deterministic generator for a scenario
pub fn rng(seed: u64) -> ChaChaRng {
    ChaChaRng::seed_from_u64(seed)
}

/// Repetition-code key pair for a preset
pub fn keypair(params: CodeParams, seed: u64) -> (RepetitionPublicKey, RepetitionSecretKey) {
    let mut rng = rng(seed);
    RepetitionMcEliece::keypair(params.n, params.t, params.k, &mut rng)
        .expect("preset parameters generate a key pair")
}

/// `len` random bits
pub fn random_message<R: RngCore>(len: usize, rng: &mut R) -> BitString {
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

/// Flip bit `index` of `bits`
pub fn flip(bits: &mut BitString, index: usize) {
    let bit = bits.bit_or_zero(index);
    bits.set(index, bit ^ 1).expect("index in range");
}

/// Wraps a generator and counts the words drawn from it.
///
/// Every `next_u32` and `next_u64` counts as one draw; `fill_bytes` counts one
/// draw per started 8-byte block.
pub struct CountingRng<R> {
    inner: R,
    draws: usize,
}

impl<R: RngCore> CountingRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn reset(&mut self) {
        self.draws = 0;
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += dest.len().div_ceil(8);
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += dest.len().div_ceil(8);
        self.inner.try_fill_bytes(dest)
    }
}

impl<R: RngCore + CryptoRng> CryptoRng for CountingRng<R> {}

/// SHAKE256 oracle that counts every query.
///
/// Clones share the counter, so a handle kept outside a transform sees the
/// queries the transform makes.
#[derive(Clone, Debug, Default)]
pub struct CountingOracle {
    inner: Shake256Oracle,
    queries: Arc<AtomicUsize>,
}

impl CountingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.queries.store(0, Ordering::Relaxed);
    }

    fn count(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }
}

impl HashOracle for CountingOracle {
    fn name(&self) -> &'static str {
        "counting SHAKE256"
    }

    fn hash_to_index(&self, data: &[u8], n: usize, t: usize) -> AlgorithmResult<BigUint> {
        self.count();
        self.inner.hash_to_index(data, n, t)
    }

    fn hash_to_bits(&self, data: &[u8], k: usize) -> AlgorithmResult<BitString> {
        self.count();
        self.inner.hash_to_bits(data, k)
    }

    fn mask(&self, data: &[u8], k: usize) -> AlgorithmResult<BitString> {
        self.count();
        self.inner.mask(data, k)
    }

    fn derive_seed(&self, data: &[u8]) -> AlgorithmResult<[u8; PADDING_SEED_BYTES]> {
        self.count();
        self.inner.derive_seed(data)
    }
}
