#![allow(clippy::unwrap_used)]

use std::f64::consts::TAU;

use approx::assert_relative_eq;
use test_points::math::normalize_angle;
use test_points::{ParamReader, PointGenerator, SampleRange, Shape, ShapeFactory, ShapeKind};

fn noiseless(mut shape: Shape) -> Shape {
    shape.set_tolerance(0.0);
    shape
}

#[test]
fn unit_line_points_lie_on_diagonal() {
    let shape = noiseless(Shape::line(1.0, 0.0));
    let buffer = PointGenerator::seeded(2024).to_buffer(&shape, 500);
    for xy in buffer.chunks_exact(2) {
        assert!(xy[0] == xy[1], "{} != {}", xy[0], xy[1]);
    }
}

#[test]
fn origin_circle_points_satisfy_equation() {
    let shape = noiseless(Shape::circle(0.0, 0.0, 10.0));
    for p in PointGenerator::seeded(2024).points(&shape, 500) {
        assert_relative_eq!(p.x * p.x + p.y * p.y, 100.0, epsilon = 1e-9);
    }
}

#[test]
fn axis_aligned_ellipse_points_satisfy_equation() {
    let shape = noiseless(Shape::ellipse(0.0, 0.0, 10.0, 5.0, 0.0));
    for p in PointGenerator::seeded(2024).points(&shape, 500) {
        assert_relative_eq!((p.x / 10.0).powi(2) + (p.y / 5.0).powi(2), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn rotated_shifted_ellipse_points_satisfy_equation() {
    let (cx, cy, a, b, rot) = (3.0, -2.0, 8.0, 3.0, 0.6_f64);
    let shape = noiseless(Shape::ellipse(cx, cy, a, b, rot));
    for p in PointGenerator::seeded(7).points(&shape, 500) {
        // Undo translate, then undo rotate.
        let (dx, dy) = (p.x - cx, p.y - cy);
        let u = dx * rot.cos() + dy * rot.sin();
        let v = -dx * rot.sin() + dy * rot.cos();
        assert_relative_eq!((u / a).powi(2) + (v / b).powi(2), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn circle_range_clamped_to_radius() {
    let mut shape = Shape::circle(0.0, 0.0, 5.0);
    shape.set_range(-100.0, 100.0);
    assert_eq!(shape.range(), SampleRange::new(-5.0, 5.0));
    for p in PointGenerator::seeded(1).points(&shape, 200) {
        assert!(p.x >= -5.0 && p.x < 5.0);
        assert!(!p.y.is_nan());
    }
}

#[test]
fn rotation_normalization() {
    for i in -100..100 {
        let angle = f64::from(i) * 0.37;
        let n = normalize_angle(angle);
        assert!((0.0..TAU).contains(&n));
    }
    for theta in [0.1, 1.0, 3.0, 6.0] {
        assert_relative_eq!(normalize_angle(-theta), TAU - theta, epsilon = 1e-12);
        let shape = Shape::ellipse(0.0, 0.0, 1.0, 1.0, -theta);
        let ShapeKind::Ellipse(e) = shape.kind() else {
            panic!("expected ellipse");
        };
        assert_relative_eq!(e.rotation(), TAU - theta, epsilon = 1e-12);
    }
}

#[test]
fn unknown_type_code_is_absent() {
    let mut params = ParamReader::new("1 2 3 4 5".as_bytes());
    assert!(ShapeFactory::create(3, &mut params).is_none());
    assert!(ShapeFactory::create(-1, &mut params).is_none());
}

#[test]
fn comparator_lines_and_type_guard() {
    let mut line = Shape::line(1.0, 0.0);
    line.set_tolerance(0.01);
    assert!(line.approx_eq(&Shape::line(1.0001, 0.0)));

    let mut lenient = Shape::line(1.0, 0.0);
    lenient.set_tolerance(1e12);
    for (x, y, r) in [(0.0, 0.0, 1.0), (1.0, 1.0, 0.0), (-3.0, 2.0, 100.0)] {
        assert!(!lenient.approx_eq(&Shape::circle(x, y, r)));
    }
}

#[test]
fn comparator_circles_by_bounding_box() {
    let other = Shape::circle(1.0, 1.0, 5.0);
    let mut shape = Shape::circle(0.0, 0.0, 5.0);
    shape.set_tolerance(0.5);
    assert!(!shape.approx_eq(&other));
    shape.set_tolerance(2.0);
    assert!(shape.approx_eq(&other));
}

#[test]
fn factory_shape_generates_text() {
    let mut params = ParamReader::new("0 0 4".as_bytes());
    let mut shape = ShapeFactory::create(1, &mut params).unwrap();
    shape.set_tolerance(0.0);

    let mut out = Vec::new();
    PointGenerator::seeded(5)
        .write_text(&shape, 20, 4, &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("20"));

    let mut n = 0;
    for line in lines {
        let (x, y) = line.split_once(',').unwrap();
        assert_eq!(x.split_once('.').unwrap().1.len(), 4);
        let (x, y): (f64, f64) = (x.parse().unwrap(), y.parse().unwrap());
        assert_relative_eq!((x * x + y * y).sqrt(), 4.0, epsilon = 1e-3);
        n += 1;
    }
    assert_eq!(n, 20);
}

#[test]
fn generated_fit_round_trip_matches() {
    // A least-squares line through generated data should compare equal to the
    // source line under the source tolerance.
    let mut source = Shape::line(0.75, -3.0);
    source.set_tolerance(0.5);
    let buffer = PointGenerator::seeded(99).to_buffer(&source, 400);

    let n = (buffer.len() / 2) as f64;
    let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for xy in buffer.chunks_exact(2) {
        sx += xy[0];
        sy += xy[1];
        sxx += xy[0] * xy[0];
        sxy += xy[0] * xy[1];
    }
    let slope = (n * sxy - sx * sy) / (n * sxx - sx * sx);
    let intercept = (sy - slope * sx) / n;

    assert!(source.approx_eq(&Shape::line(slope, intercept)));
}
