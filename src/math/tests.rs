use super::*;
use crate::Error;
use assert_approx_eq::assert_approx_eq;
use std::f64::consts::{FRAC_PI_2, PI};
use test_case::test_case;

fn assert_point_eq(a: Point, b: Point) {
    assert_approx_eq!(a.x, b.x, 1e-9);
    assert_approx_eq!(a.y, b.y, 1e-9);
}

#[test]
fn identity_keeps_points() {
    let m = Matrix::identity();
    assert_eq!(m.transform_point(Point::new(3.5, -2.0)), Point::new(3.5, -2.0));
    assert_eq!(m.determinant(), 1.0);
}

#[test]
fn product_applies_right_operand_first() {
    let t = Matrix::translate(10.0, 0.0);
    let s = Matrix::scale(2.0, 2.0);
    let p = Point::new(1.0, 1.0);
    assert_point_eq((t * s).transform_point(p), Point::new(12.0, 2.0));
    assert_point_eq((s * t).transform_point(p), Point::new(22.0, 2.0));
}

#[test]
fn rotation_quarter_turn() {
    let m = Matrix::rotate(FRAC_PI_2);
    assert_point_eq(m.transform_point(Point::new(1.0, 0.0)), Point::new(0.0, 1.0));
}

#[test_case(Matrix::translate(3.0, -4.0))]
#[test_case(Matrix::scale(2.0, 0.5))]
#[test_case(Matrix::rotate(0.7))]
#[test_case(Matrix::skew(0.3, -0.2))]
#[test_case(Matrix::new(1.5, 0.2, -0.7, 3.0, 11.0, -8.0))]
fn inverse_undoes_transform(m: Matrix) {
    let inv = m.inverse().unwrap();
    assert!((m * inv).approx_eq(&Matrix::identity(), 1e-12));
    let p = Point::new(-6.25, 17.0);
    assert_point_eq(inv.transform_point(m.transform_point(p)), p);
}

#[test_case(Matrix::scale(0.0, 1.0) ; "zero x scale")]
#[test_case(Matrix::new(1.0, 2.0, 2.0, 4.0, 5.0, 5.0) ; "dependent columns")]
#[test_case(Matrix::new(f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0) ; "nan coefficient")]
fn singular_matrix_has_no_inverse(m: Matrix) {
    assert!(matches!(m.inverse(), Err(Error::SingularTransform { .. })));
}

#[test]
fn epsilon_controls_singularity() {
    let m = Matrix::scale(1e-5, 1e-5);
    assert!(m.inverse().is_ok());
    assert!(m.try_inverse(1e-9).is_err());
}

#[test]
fn accessors_follow_homogeneous_layout() {
    let m = Matrix::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
    assert_eq!(m.get(0, 1), 3.0);
    assert_eq!(m.get(1, 0), 2.0);
    assert_eq!(m.get(2, 2), 1.0);
    assert_eq!(m.column(0), Point::new(1.0, 2.0));
    assert_eq!(m.column(1), Point::new(3.0, 4.0));
    assert_eq!(m.column(2), Point::new(5.0, 6.0));
    assert_eq!(m.diagonal(), Point::new(1.0, 4.0));
    assert_eq!(m.translation(), Point::new(5.0, 6.0));
    assert_eq!(m.minor(), Matrix::new(1.0, 2.0, 3.0, 4.0, 0.0, 0.0));
    assert_eq!(m.transform_vector(Point::new(1.0, 0.0)), Point::new(1.0, 2.0));
}

#[test]
fn skew_shifts_along_axes() {
    let m = Matrix::skew(0.5, 0.0);
    assert_point_eq(m.transform_point(Point::new(0.0, 2.0)), Point::new(1.0, 2.0));
    let m = Matrix::skew_y(PI / 4.0);
    assert_point_eq(m.transform_point(Point::new(2.0, 0.0)), Point::new(2.0, 2.0));
}

#[test]
fn point_helpers() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.length(), 5.0);
    assert_eq!(p.half(), Point::new(1.5, 2.0));
    assert_eq!(p.reverse(), Point::new(-3.0, -4.0));
    assert_eq!(p.multiply(Point::new(2.0, 0.5)), Point::new(6.0, 2.0));
    assert_eq!(p.divide(Point::new(3.0, 2.0)), Point::new(1.0, 2.0));
    assert_point_eq(Point::polar(2.0, FRAC_PI_2), Point::new(0.0, 2.0));
    assert_eq!(Point::from((1, 2)), Point::new(1.0, 2.0));
}

#[test]
fn rect_from_corners_normalizes() {
    let r = Rect::from_corners(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
    assert_eq!(r, Rect::from((4, 2, 6, 6)));
    assert!(r.contains(Point::new(4.0, 2.0)));
    assert!(!r.contains(Point::new(10.0, 8.0)));
}
