use crate::generate::NoiseSource;
use crate::math::Point2;

use super::{branch_sign, SampleRange, ShapeCurve};

/// An axis-aligned 2D bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner (left, bottom).
    pub min: Point2,
    /// Maximum corner (right, top).
    pub max: Point2,
}

/// A full circle in the plane.
///
/// Samples are generated in a frame centered on the origin,
/// `y = ±sqrt(r² - x²)`, and then shifted by the center.
///
/// No validation is performed: a negative radius inverts the natural range
/// and points sampled outside `[-r, r]` evaluate to `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
    radius_sq: f64,
}

impl Circle {
    /// Creates a new circle.
    #[must_use]
    pub fn new(center: Point2, radius: f64) -> Self {
        Self {
            center,
            radius,
            radius_sq: radius * radius,
        }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the bounding box `center ± radius` on each axis.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2 {
            min: Point2::new(self.center.x - self.radius, self.center.y - self.radius),
            max: Point2::new(self.center.x + self.radius, self.center.y + self.radius),
        }
    }
}

impl ShapeCurve for Circle {
    fn equation(&self, x: f64, noise: &mut NoiseSource, tolerance: f64) -> f64 {
        branch_sign(noise, tolerance) * (self.radius_sq - x * x).sqrt()
    }

    fn natural_range(&self) -> SampleRange {
        SampleRange::symmetric(self.radius)
    }

    fn clamp_range(&self, range: SampleRange) -> SampleRange {
        SampleRange::new(range.low.max(-self.radius), range.high.min(self.radius))
    }

    fn translate(&self, point: Point2) -> Point2 {
        point + self.center.coords
    }
}
