use crate::generate::NoiseSource;

use super::ShapeCurve;

/// An infinite line `y = slope * x + intercept`.
///
/// The line has no natural domain restriction and no local frame: it samples
/// over whatever range the shape holds and is never rotated or translated.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Creates a new line.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Returns the slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the y-intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the inclination `atan(slope)` in radians.
    #[must_use]
    pub fn inclination(&self) -> f64 {
        self.slope.atan()
    }
}

impl ShapeCurve for Line {
    fn equation(&self, x: f64, _noise: &mut NoiseSource, _tolerance: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
