use crate::generate::NoiseSource;
use crate::math::{normalize_angle, Point2, Rotation2};

use super::{branch_sign, SampleRange, ShapeCurve};

/// An ellipse in the plane.
///
/// Defined by a center, semi-major axis `a`, semi-minor axis `b` and a
/// rotation of the major axis against +X. In the ellipse's own axis-aligned
/// frame the curve is `y = ±sqrt(b² (1 - x²/a²))`; a local point is rotated
/// about the origin first and then translated to the center.
///
/// The rotation is normalized to `[0, 2*pi)` on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point2,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
    semi_major_sq: f64,
    semi_minor_sq: f64,
    orientation: Rotation2,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the ellipse
    /// * `semi_major` - Semi-major axis length, measured along local X
    /// * `semi_minor` - Semi-minor axis length, measured along local Y
    /// * `rotation` - Major axis angle in radians (any value)
    ///
    /// Axis lengths are not validated; non-positive values produce `NaN`
    /// samples rather than an error.
    #[must_use]
    pub fn new(center: Point2, semi_major: f64, semi_minor: f64, rotation: f64) -> Self {
        let rotation = normalize_angle(rotation);
        Self {
            center,
            semi_major,
            semi_minor,
            rotation,
            semi_major_sq: semi_major * semi_major,
            semi_minor_sq: semi_minor * semi_minor,
            orientation: Rotation2::new(rotation),
        }
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Returns the normalized rotation in radians.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}

impl ShapeCurve for Ellipse {
    fn equation(&self, x: f64, noise: &mut NoiseSource, tolerance: f64) -> f64 {
        branch_sign(noise, tolerance)
            * (self.semi_minor_sq * (1.0 - (x * x) / self.semi_major_sq)).sqrt()
    }

    fn natural_range(&self) -> SampleRange {
        SampleRange::symmetric(self.semi_major)
    }

    fn clamp_range(&self, range: SampleRange) -> SampleRange {
        SampleRange::new(
            range.low.max(-self.semi_major),
            range.high.min(self.semi_major),
        )
    }

    fn rotate(&self, point: Point2) -> Point2 {
        self.orientation * point
    }

    fn translate(&self, point: Point2) -> Point2 {
        point + self.center.coords
    }
}
