//! Tolerance-based equality between shapes.
//!
//! Used to judge whether a fitted shape recovered the shape its points were
//! generated from. Comparison is guarded by variant: a line never equals a
//! circle, however close the numbers.

use crate::math::deg_to_rad;

use super::{Circle, Ellipse, Line, Shape, ShapeKind};

/// Slack of [`compare_angle`], applied after the degree-to-radian conversion.
pub const ANGLE_SLACK: f64 = 1.0;

/// Returns whether two coordinates differ by strictly less than `tolerance`.
#[must_use]
pub fn compare_coordinate(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Returns whether two angles are within [`ANGLE_SLACK`] of each other.
///
/// Both inputs are converted from degrees to radians before the difference is
/// taken, so the effective slack is about 57.3 degrees of input.
#[must_use]
pub fn compare_angle(a: f64, b: f64) -> bool {
    (deg_to_rad(a) - deg_to_rad(b)).abs() < ANGLE_SLACK
}

impl Shape {
    /// Approximate equality against another shape.
    ///
    /// Coordinates are compared with this shape's tolerance, so the relation
    /// is not symmetric when the two tolerances differ.
    ///
    /// * line: `atan(slope)` by [`compare_angle`], intercept by coordinate
    /// * circle: the four bounding-box edges by coordinate
    /// * ellipse: center by coordinate, normalized rotation by
    ///   [`compare_angle`]. Axis lengths are not compared.
    #[must_use]
    pub fn approx_eq(&self, other: &Shape) -> bool {
        let tolerance = self.tolerance;
        match (&self.kind, &other.kind) {
            (ShapeKind::Line(a), ShapeKind::Line(b)) => lines_match(a, b, tolerance),
            (ShapeKind::Circle(a), ShapeKind::Circle(b)) => circles_match(a, b, tolerance),
            (ShapeKind::Ellipse(a), ShapeKind::Ellipse(b)) => ellipses_match(a, b, tolerance),
            _ => false,
        }
    }
}

fn lines_match(a: &Line, b: &Line, tolerance: f64) -> bool {
    compare_angle(a.inclination(), b.inclination())
        && compare_coordinate(a.intercept(), b.intercept(), tolerance)
}

fn circles_match(a: &Circle, b: &Circle, tolerance: f64) -> bool {
    let (ba, bb) = (a.bounding_box(), b.bounding_box());
    compare_coordinate(ba.min.x, bb.min.x, tolerance)
        && compare_coordinate(ba.max.x, bb.max.x, tolerance)
        && compare_coordinate(ba.min.y, bb.min.y, tolerance)
        && compare_coordinate(ba.max.y, bb.max.y, tolerance)
}

fn ellipses_match(a: &Ellipse, b: &Ellipse, tolerance: f64) -> bool {
    compare_coordinate(a.center().x, b.center().x, tolerance)
        && compare_coordinate(a.center().y, b.center().y, tolerance)
        && compare_angle(a.rotation(), b.rotation())
}
