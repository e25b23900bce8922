use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a generation call seeds its random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Reseed from the wall clock, at whole-second granularity, on every call.
    #[default]
    WallClock,
    /// Always seed with the given value.
    Fixed(u64),
}

impl Seed {
    /// Maps a point in time to the seed a wall-clock generator would use.
    ///
    /// Instants within the same whole second map to the same seed. Times
    /// before the Unix epoch map to 0.
    #[must_use]
    pub fn from_time(time: SystemTime) -> u64 {
        time.duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }

    /// Returns the concrete seed for a call made now.
    #[must_use]
    pub fn resolve(self) -> u64 {
        match self {
            Self::WallClock => Self::from_time(SystemTime::now()),
            Self::Fixed(seed) => seed,
        }
    }
}

/// Uniform pseudo-random source used for abscissas, branch choice and noise.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    /// Creates a source with an explicit seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Draws from `[low, high)`.
    ///
    /// Bounds may be equal or inverted; the draw then lies between `high`
    /// and `low`, or is exactly `low`.
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.unit() * (high - low) + low
    }

    /// Draws additive noise from `[-tolerance/2, tolerance/2)`.
    pub fn noise(&mut self, tolerance: f64) -> f64 {
        let high = tolerance * 0.5;
        self.uniform(-high, high)
    }
}
