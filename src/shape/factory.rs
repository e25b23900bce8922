//! Construction of shapes from a type code and a stream of parameters.

use std::collections::VecDeque;
use std::io::BufRead;

use tracing::debug;

use crate::error::{Result, TestPointsError};

use super::Shape;

/// Shape type codes accepted by [`ShapeFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    /// Code 0: `slope intercept`.
    Line,
    /// Code 1: `center_x center_y radius`.
    Circle,
    /// Code 2: `center_x center_y semi_major semi_minor rotation`.
    Ellipse,
}

impl ShapeType {
    /// Maps a numeric code to a shape type.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Line),
            1 => Some(Self::Circle),
            2 => Some(Self::Ellipse),
            _ => None,
        }
    }

    /// Returns the numeric code.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Line => 0,
            Self::Circle => 1,
            Self::Ellipse => 2,
        }
    }

    /// Number of parameters read for this type.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Circle => 3,
            Self::Ellipse => 5,
        }
    }
}

/// Reads whitespace or line separated decimal numbers.
///
/// A read that hits end of input, a non-numeric token or an I/O error yields
/// `0.0` and puts the reader into a failed state; every later read then
/// yields `0.0` as well.
#[derive(Debug)]
pub struct ParamReader<R> {
    input: R,
    pending: VecDeque<String>,
    failed: bool,
}

impl<R: BufRead> ParamReader<R> {
    /// Wraps a buffered input source.
    #[must_use]
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
            failed: false,
        }
    }

    /// Returns whether a previous read failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Reads the next number, or `0.0` once the reader has failed.
    pub fn next_value(&mut self) -> f64 {
        if self.failed {
            return 0.0;
        }
        let Some(token) = self.next_token() else {
            debug!("parameter input exhausted, defaulting to zero");
            self.failed = true;
            return 0.0;
        };
        if let Ok(value) = token.parse::<f64>() {
            value
        } else {
            debug!(%token, "unparsable parameter, defaulting to zero");
            self.failed = true;
            0.0
        }
    }

    /// Reads `N` values in order.
    pub fn values<const N: usize>(&mut self) -> [f64; N] {
        std::array::from_fn(|_| self.next_value())
    }

    fn next_token(&mut self) -> Option<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(str::to_owned)),
                Err(err) => {
                    debug!(%err, "failed to read parameter input");
                    return None;
                }
            }
        }
        self.pending.pop_front()
    }
}

/// Builds shapes from a type code and positional parameters.
pub struct ShapeFactory;

impl ShapeFactory {
    /// Creates a shape of type `code`, reading its parameters from `params`.
    ///
    /// Returns `None` for an unknown code; no parameters are consumed then.
    pub fn create<R: BufRead>(code: i32, params: &mut ParamReader<R>) -> Option<Shape> {
        let Some(shape_type) = ShapeType::from_code(code) else {
            debug!(code, "unknown shape type code");
            return None;
        };
        let shape = match shape_type {
            ShapeType::Line => {
                let [slope, intercept] = params.values::<2>();
                Shape::line(slope, intercept)
            }
            ShapeType::Circle => {
                let [center_x, center_y, radius] = params.values::<3>();
                Shape::circle(center_x, center_y, radius)
            }
            ShapeType::Ellipse => {
                let [center_x, center_y, semi_major, semi_minor, rotation] =
                    params.values::<5>();
                Shape::ellipse(center_x, center_y, semi_major, semi_minor, rotation)
            }
        };
        debug!(?shape_type, defaulted = params.failed(), "created shape");
        Some(shape)
    }

    /// Like [`ShapeFactory::create`], but reports an unknown code as an error.
    ///
    /// # Errors
    ///
    /// Returns [`TestPointsError::UnknownShapeType`] if `code` is not 0, 1 or 2.
    pub fn try_create<R: BufRead>(code: i32, params: &mut ParamReader<R>) -> Result<Shape> {
        Self::create(code, params).ok_or(TestPointsError::UnknownShapeType { code })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::shape::{Circle, Ellipse, Line, ShapeKind};
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn reader(text: &str) -> ParamReader<&[u8]> {
        ParamReader::new(text.as_bytes())
    }

    #[test]
    fn codes_round_trip() {
        for code in 0..3 {
            let t = ShapeType::from_code(code).unwrap();
            assert_eq!(t.code(), code);
        }
        assert_eq!(ShapeType::Ellipse.arity(), 5);
    }

    #[test]
    fn line_from_input() {
        let shape = ShapeFactory::create(0, &mut reader("2.5 -1")).unwrap();
        assert_eq!(shape.kind(), &ShapeKind::Line(Line::new(2.5, -1.0)));
    }

    #[test]
    fn circle_from_multiline_input() {
        let shape = ShapeFactory::create(1, &mut reader("1\n2\n\n  3  \n")).unwrap();
        assert_eq!(
            shape.kind(),
            &ShapeKind::Circle(Circle::new(Point2::new(1.0, 2.0), 3.0))
        );
    }

    #[test]
    fn ellipse_from_input() {
        let shape = ShapeFactory::create(2, &mut reader("1 2 10 5 -1.5")).unwrap();
        let ShapeKind::Ellipse(e) = shape.kind() else {
            panic!("expected ellipse");
        };
        assert_eq!(e, &Ellipse::new(Point2::new(1.0, 2.0), 10.0, 5.0, -1.5));
        assert_relative_eq!(e.rotation(), TAU - 1.5, epsilon = 1e-12);
    }

    #[test]
    fn unknown_codes_are_absent() {
        for code in [-1, 3, 4, 100] {
            assert!(ShapeFactory::create(code, &mut reader("1 2 3 4 5")).is_none());
        }
    }

    #[test]
    fn unknown_code_consumes_nothing() {
        let mut params = reader("4 5");
        assert!(ShapeFactory::create(7, &mut params).is_none());
        let shape = ShapeFactory::create(0, &mut params).unwrap();
        assert_eq!(shape.kind(), &ShapeKind::Line(Line::new(4.0, 5.0)));
    }

    #[test]
    fn try_create_reports_unknown_code() {
        let err = ShapeFactory::try_create(3, &mut reader("")).unwrap_err();
        assert!(matches!(err, TestPointsError::UnknownShapeType { code: 3 }));
    }

    #[test]
    fn missing_parameters_default_to_zero() {
        let mut params = reader("4");
        let shape = ShapeFactory::create(1, &mut params).unwrap();
        assert_eq!(
            shape.kind(),
            &ShapeKind::Circle(Circle::new(Point2::new(4.0, 0.0), 0.0))
        );
        assert!(params.failed());
    }

    #[test]
    fn empty_input_gives_zero_line() {
        let shape = ShapeFactory::create(0, &mut reader("")).unwrap();
        assert_eq!(shape.kind(), &ShapeKind::Line(Line::new(0.0, 0.0)));
    }

    #[test]
    fn bad_token_zeroes_the_rest() {
        let mut params = reader("1 abc 3");
        let shape = ShapeFactory::create(1, &mut params).unwrap();
        assert_eq!(
            shape.kind(),
            &ShapeKind::Circle(Circle::new(Point2::new(1.0, 0.0), 0.0))
        );
        assert_relative_eq!(params.next_value(), 0.0);
    }

    #[test]
    fn sequential_shapes_share_a_reader() {
        let mut params = reader("1 2\n3 4 5\n");
        let line = ShapeFactory::create(0, &mut params).unwrap();
        let circle = ShapeFactory::create(1, &mut params).unwrap();
        assert_eq!(line.kind(), &ShapeKind::Line(Line::new(1.0, 2.0)));
        assert_eq!(
            circle.kind(),
            &ShapeKind::Circle(Circle::new(Point2::new(3.0, 4.0), 5.0))
        );
        assert!(!params.failed());
    }
}
