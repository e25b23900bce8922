use thiserror::Error;

/// Top-level error type for the test-points generator.
///
/// Numeric anomalies (a square root of a negative radicand, an inverted
/// sampling range) are not errors: they surface as `NaN` or as out-of-order
/// coordinates in the generated data.
#[derive(Debug, Error)]
pub enum TestPointsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown shape type {code} (expected 0 = line, 1 = circle, 2 = ellipse)")]
    UnknownShapeType { code: i32 },
}

/// Convenience type alias for results using [`TestPointsError`].
pub type Result<T> = std::result::Result<T, TestPointsError>;
