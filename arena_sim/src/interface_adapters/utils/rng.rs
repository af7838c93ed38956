use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{SystemTime, UNIX_EPOCH};

fn now_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

/// Deterministic RNG for arena setup.
///
/// A configured seed reproduces the same enemy placement every run; without one the seed is
/// taken from the current time and returned so it can be logged.
pub fn arena_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(now_nanos);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
