//! Synthetic point data for planar curve fitting.
//!
//! Build a [`Shape`] (directly or through [`ShapeFactory`]), optionally narrow
//! its sampling range and tolerance, then draw noisy samples with a
//! [`PointGenerator`]. [`Shape::approx_eq`] checks a fitted shape against the
//! one the data came from.

pub mod error;
pub mod generate;
pub mod math;
pub mod shape;

pub use error::{Result, TestPointsError};
pub use generate::{NoiseSource, PointGenerator, Points, Seed};
pub use shape::{
    Circle, Ellipse, Line, ParamReader, SampleRange, Shape, ShapeCurve, ShapeFactory, ShapeKind,
    ShapeType,
};
