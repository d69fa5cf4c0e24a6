//! Random number generation for scene synthesis.
//!
//! Thread-safe helpers over a thread-local ChaCha20 PRNG, used by the random
//! demo-scene generator.

use rand::{rng, Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;

thread_local! {
    /// Thread-local ChaCha20 PRNG for quality random numbers.
    static RNG: RefCell<ChaCha20Rng> = RefCell::new(ChaCha20Rng::from_rng(&mut rng()));
}

/// Generate a random f32 in [0.0, 1.0)
pub fn random_f32() -> f32 {
    RNG.with(|rng| rng.borrow_mut().random())
}

/// Generate a random f32 in [min, max)
pub fn random_f32_range(min: f32, max: f32) -> f32 {
    min + (max - min) * random_f32()
}

/// Generate a random 8-bit RGB color with channels in [min, max]
pub fn random_color(min: u8, max: u8) -> [u8; 3] {
    RNG.with(|rng| {
        let mut rng = rng.borrow_mut();
        [
            rng.random_range(min..=max),
            rng.random_range(min..=max),
            rng.random_range(min..=max),
        ]
    })
}
