//! Seed sources for callers that do not supply a seed.
//!
//! This is the only place randomness enters the pipeline. Once a seed string
//! exists, everything downstream is a pure function of its digest.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// Number of random bytes behind a synthesized seed (hex-encoded to 32 chars).
pub const RANDOM_SEED_BYTES: usize = 16;

/// Produces seed strings when the caller supplied none.
pub trait SeedSource {
    /// Return a fresh seed string.
    fn next_seed(&mut self) -> String;
}

/// Seed source backed by the thread-local OS-seeded RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSeedSource;

impl SeedSource for ThreadSeedSource {
    fn next_seed(&mut self) -> String {
        let mut bytes = [0u8; RANDOM_SEED_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        encode_seed(&bytes)
    }
}

/// Reproducible seed source using PCG32.
///
/// Useful in tests and batch jobs that need "random" avatars which can be
/// regenerated later.
#[derive(Clone)]
pub struct DeterministicSeedSource {
    inner: Pcg32,
}

impl DeterministicSeedSource {
    /// Create a new source from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }
}

impl SeedSource for DeterministicSeedSource {
    fn next_seed(&mut self) -> String {
        let mut bytes = [0u8; RANDOM_SEED_BYTES];
        self.inner.fill_bytes(&mut bytes);
        encode_seed(&bytes)
    }
}

fn encode_seed(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
