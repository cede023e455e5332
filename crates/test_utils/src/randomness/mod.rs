//! Deterministic randomness for reproducible tests

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Deterministic random number generator for tests
pub struct TestRng {
    /// Internal RNG with fixed seed
    rng: StdRng,
}

impl TestRng {
    /// Create a new test RNG with the specified seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a test RNG with the default seed 12345
    pub fn with_default_seed() -> Self {
        Self::new(12345)
    }

    /// Fill a buffer with random bytes
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }

    /// Random 32 bytes rendered as `0x` + 64 hex chars, with each letter's case
    /// chosen at random so callers exercise case-insensitive parsing.
    pub fn mixed_case_hex32(&mut self) -> String {
        let mut bytes = [0u8; 32];
        self.fill_bytes(&mut bytes);
        let digits: String = hex::encode(bytes)
            .chars()
            .map(|c| {
                if self.rng.gen_bool(0.5) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        format!("0x{digits}")
    }

    /// A random decimal literal that fits in 64 bits.
    pub fn decimal_u64(&mut self) -> String {
        self.rng.next_u64().to_string()
    }
}

impl Default for TestRng {
    fn default() -> Self {
        Self::with_default_seed()
    }
}
