//! Planar shapes that can be sampled into noisy point clouds.
//!
//! A [`Shape`] couples one of three closed curve variants ([`ShapeKind`]) with
//! the sampling state the generator reads: an x-domain ([`SampleRange`]) and a
//! noise tolerance. The tolerance is also the coordinate slack used by
//! [`Shape::approx_eq`].

mod circle;
pub mod compare;
mod ellipse;
pub mod factory;
mod line;

pub use circle::{Aabb2, Circle};
pub use ellipse::Ellipse;
pub use factory::{ParamReader, ShapeFactory, ShapeType};
pub use line::Line;

use tracing::debug;

use crate::generate::NoiseSource;
use crate::math::Point2;

/// Default noise tolerance of a freshly constructed shape.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Lower bound of the default sampling domain.
pub const DEFAULT_RANGE_LOW: f64 = -50.0;

/// Upper bound of the default sampling domain.
pub const DEFAULT_RANGE_HIGH: f64 = 50.0;

/// Closed x-interval from which sample abscissas are drawn.
///
/// `low <= high` is expected but not enforced; an inverted range still
/// samples, between `high` and `low`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    /// Start of the x-domain.
    pub low: f64,
    /// End of the x-domain.
    pub high: f64,
}

impl SampleRange {
    /// Creates a new sampling range.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Creates the symmetric range `[-half_width, half_width]`.
    #[must_use]
    pub fn symmetric(half_width: f64) -> Self {
        Self::new(-half_width, half_width)
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::new(DEFAULT_RANGE_LOW, DEFAULT_RANGE_HIGH)
    }
}

/// Per-variant behavior driven by the generator.
///
/// Only [`ShapeCurve::equation`] is mandatory; the remaining hooks default to
/// the identity so that a line needs nothing else.
pub trait ShapeCurve {
    /// Evaluates the noiseless curve at `x` in the shape's local frame.
    ///
    /// Two-branch curves pick the upper or lower arc from a draw of `noise`
    /// with the shape's `tolerance`, so repeated calls at the same `x` may
    /// return values of opposite sign.
    fn equation(&self, x: f64, noise: &mut NoiseSource, tolerance: f64) -> f64;

    /// Range a newly constructed shape samples from.
    fn natural_range(&self) -> SampleRange {
        SampleRange::default()
    }

    /// Narrows a requested range to the curve's support.
    fn clamp_range(&self, range: SampleRange) -> SampleRange {
        range
    }

    /// Rotates a local-frame point about the origin.
    fn rotate(&self, point: Point2) -> Point2 {
        point
    }

    /// Moves a point from the local frame into the global frame.
    fn translate(&self, point: Point2) -> Point2 {
        point
    }
}

/// The closed set of supported curve families.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(Line),
    Circle(Circle),
    Ellipse(Ellipse),
}

impl ShapeKind {
    /// Returns the variant's behavior.
    #[must_use]
    pub fn curve(&self) -> &dyn ShapeCurve {
        match self {
            Self::Line(line) => line,
            Self::Circle(circle) => circle,
            Self::Ellipse(ellipse) => ellipse,
        }
    }

    /// Returns the factory type code of this variant.
    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Line(_) => ShapeType::Line,
            Self::Circle(_) => ShapeType::Circle,
            Self::Ellipse(_) => ShapeType::Ellipse,
        }
    }
}

/// A curve together with its sampling domain and noise tolerance.
///
/// Curve parameters are fixed at construction; range and tolerance may be
/// adjusted any number of times before generating points.
#[derive(Debug, Clone)]
pub struct Shape {
    kind: ShapeKind,
    range: SampleRange,
    tolerance: f64,
}

impl Shape {
    /// Creates a shape sampling over the variant's natural range with the
    /// default tolerance.
    #[must_use]
    pub fn new(kind: ShapeKind) -> Self {
        let range = kind.curve().natural_range();
        Self {
            kind,
            range,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Creates a line shape `y = slope * x + intercept`.
    #[must_use]
    pub fn line(slope: f64, intercept: f64) -> Self {
        Self::new(ShapeKind::Line(Line::new(slope, intercept)))
    }

    /// Creates a circle shape.
    #[must_use]
    pub fn circle(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self::new(ShapeKind::Circle(Circle::new(
            Point2::new(center_x, center_y),
            radius,
        )))
    }

    /// Creates an ellipse shape. `rotation` is in radians and is normalized.
    #[must_use]
    pub fn ellipse(
        center_x: f64,
        center_y: f64,
        semi_major: f64,
        semi_minor: f64,
        rotation: f64,
    ) -> Self {
        Self::new(ShapeKind::Ellipse(Ellipse::new(
            Point2::new(center_x, center_y),
            semi_major,
            semi_minor,
            rotation,
        )))
    }

    /// Returns the curve variant.
    #[must_use]
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Returns the current sampling range.
    #[must_use]
    pub fn range(&self) -> SampleRange {
        self.range
    }

    /// Returns the noise tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Sets the sampling range, silently narrowed to the curve's support.
    pub fn set_range(&mut self, low: f64, high: f64) {
        let requested = SampleRange::new(low, high);
        let clamped = self.kind.curve().clamp_range(requested);
        if clamped != requested {
            debug!(
                requested_low = low,
                requested_high = high,
                low = clamped.low,
                high = clamped.high,
                "sampling range clamped to curve support"
            );
        }
        self.range = clamped;
    }

    /// Sets the noise tolerance.
    ///
    /// Any value is accepted. A negative tolerance yields an inverted noise
    /// interval rather than an error.
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    /// Produces one sample: draw x, evaluate, add noise, rotate, translate.
    pub(crate) fn sample(&self, noise: &mut NoiseSource) -> Point2 {
        let curve = self.kind.curve();
        let x = noise.uniform(self.range.low, self.range.high);
        let y = curve.equation(x, noise, self.tolerance) + noise.noise(self.tolerance);
        curve.translate(curve.rotate(Point2::new(x, y)))
    }
}

/// Returns `-1.0` or `1.0` from one noise draw: a negative draw selects the
/// lower branch.
pub(crate) fn branch_sign(noise: &mut NoiseSource, tolerance: f64) -> f64 {
    if noise.noise(tolerance) < 0.0 {
        -1.0
    } else {
        1.0
    }
}
