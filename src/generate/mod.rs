//! Point generation: sampling, noise injection and transforms.
//!
//! [`PointGenerator`] turns a [`Shape`] into a lazy stream of [`Points`]. Both
//! renderings, the text listing ([`PointGenerator::write_text`]) and the flat
//! numeric buffer ([`PointGenerator::to_buffer`]), consume that same stream.

mod noise;
mod output;

pub use noise::{NoiseSource, Seed};
pub use output::{format_point, write_points};

use std::io::Write;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::Result;
use crate::math::Point2;
use crate::shape::Shape;

/// Generates noisy samples from shapes.
///
/// The random source is reseeded at the start of every call. With
/// [`Seed::WallClock`] two calls in the same clock second start from the same
/// state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointGenerator {
    seed: Seed,
}

impl PointGenerator {
    /// Creates a generator seeded from the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that always uses `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Seed::Fixed(seed),
        }
    }

    /// Creates a generator with the given seeding policy.
    #[must_use]
    pub fn with_seed(seed: Seed) -> Self {
        Self { seed }
    }

    /// Returns the seeding policy.
    #[must_use]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Returns a lazy stream of `count` samples of `shape`.
    #[must_use]
    pub fn points<'a>(&self, shape: &'a Shape, count: usize) -> Points<'a> {
        let seed = self.seed.resolve();
        debug!(
            seed,
            count,
            shape = ?shape.kind().shape_type(),
            "generating points"
        );
        Points {
            shape,
            noise: NoiseSource::seeded(seed),
            remaining: count,
        }
    }

    /// Writes `count` followed by one `x,y` line per sample with `precision`
    /// decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_text<W: Write>(
        &self,
        shape: &Shape,
        count: usize,
        precision: usize,
        out: &mut W,
    ) -> Result<()> {
        write_points(self.points(shape, count), count, precision, out)
    }

    /// Returns `2 * count` values: x then y for each sample, in generation
    /// order.
    #[must_use]
    pub fn to_buffer(&self, shape: &Shape, count: usize) -> Vec<f64> {
        let mut buffer = Vec::with_capacity(count.saturating_mul(2));
        for p in self.points(shape, count) {
            buffer.push(p.x);
            buffer.push(p.y);
        }
        buffer
    }
}

/// Finite, non-restartable sample stream produced by [`PointGenerator`].
#[derive(Debug)]
pub struct Points<'a> {
    shape: &'a Shape,
    noise: NoiseSource,
    remaining: usize,
}

impl Iterator for Points<'_> {
    type Item = Point2;

    fn next(&mut self) -> Option<Point2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.shape.sample(&mut self.noise))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Points<'_> {}

impl FusedIterator for Points<'_> {}
