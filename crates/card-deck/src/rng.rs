//! Shared random source for draws.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Thread-safe wrapper over a ChaCha8 generator.
///
/// The lock is only held for the duration of the closure passed to
/// [`DeckRng::with`], so it is never held across an `.await`.
#[derive(Debug)]
pub struct DeckRng {
    inner: Mutex<ChaCha8Rng>,
}

impl DeckRng {
    /// Reproducible generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::from_entropy()),
        }
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Run `f` with exclusive access to the generator.
    pub fn with<T>(&self, f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let mut rng = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *rng)
    }
}
