use super::*;
use assert_approx_eq::assert_approx_eq;
use test_case::test_case;

fn assert_point_eq(a: Point, b: Point) {
    assert_approx_eq!(a.x, b.x, 1e-9);
    assert_approx_eq!(a.y, b.y, 1e-9);
}

#[test]
fn fresh_stack_is_identity() {
    let stack = TransformStack::<()>::default();
    let v = Point::new(-3.0, 42.5);
    assert_eq!(stack.to_absolute(v), v);
    assert_eq!(stack.to_local(v).unwrap(), v);
    assert_eq!(stack.depth(), 0);
}

#[test_case(Matrix::translate(7.0, -2.0))]
#[test_case(Matrix::scale(3.0, -0.25))]
#[test_case(Matrix::rotate(2.2))]
#[test_case(Matrix::skew(1.2, 0.4))]
#[test_case(Matrix::new(0.3, 1.7, -2.0, 0.9, 100.0, -50.0))]
fn local_absolute_round_trip(delta: Matrix) {
    let mut stack = TransformStack::<()>::default();
    stack.compose(Matrix::translate(5.0, 5.0));
    stack.compose(delta);
    for v in [Point::ZERO, Point::new(1.0, -1.0), Point::new(1e3, 2.5e2)] {
        assert_point_eq(stack.to_local(stack.to_absolute(v)).unwrap(), v);
    }
}

#[test]
fn singular_matrix_is_reported() {
    let mut stack = TransformStack::<()>::default();
    stack.compose(Matrix::scale(0.0, 2.0));
    assert!(matches!(
        stack.to_local(Point::new(1.0, 1.0)),
        Err(Error::SingularTransform { .. })
    ));
}

#[test]
fn compose_is_post_multiplication() {
    let a = Matrix::rotate(0.5);
    let b = Matrix::new(2.0, 0.0, 0.5, 1.0, 3.0, 4.0);

    let mut sequential = TransformStack::<()>::default();
    sequential.compose(a);
    sequential.compose(b);

    let mut single = TransformStack::<()>::default();
    single.compose(a * b);

    assert!(sequential.matrix().approx_eq(&single.matrix(), 1e-12));
}

#[test]
fn translations_add_up() {
    let mut stack = TransformStack::<()>::default();
    stack.compose(Matrix::translate(1.0, 2.0));
    stack.compose(Matrix::translate(10.0, 20.0));
    assert!(stack
        .matrix()
        .approx_eq(&Matrix::translate(11.0, 22.0), 1e-12));
}

#[test]
fn set_absolute_keeps_pen_in_place() {
    let mut stack = TransformStack::<()>::default();
    stack.compose(Matrix::translate(10.0, 10.0));
    stack.compose(Matrix::scale(2.0, 2.0));
    let pointer = Point::new(3.0, 4.0);
    let before = stack.to_absolute(pointer);

    let remapped = stack
        .set_absolute(Matrix::new(0.0, 1.0, -1.0, 0.0, 5.0, 0.0), pointer)
        .unwrap();

    assert_point_eq(stack.to_absolute(remapped), before);
    assert_point_eq(before, Point::new(16.0, 18.0));
    assert_point_eq(remapped, Point::new(18.0, -11.0));
}

#[test]
fn set_absolute_rejects_singular_matrix() {
    let mut stack = TransformStack::<()>::default();
    stack.compose(Matrix::translate(1.0, 1.0));
    let result = stack.set_absolute(Matrix::scale(0.0, 0.0), Point::ZERO);
    assert!(matches!(result, Err(Error::SingularTransform { .. })));
    assert_eq!(stack.matrix(), Matrix::translate(1.0, 1.0));
}

#[test]
fn save_restore_symmetry() {
    let mut stack = TransformStack::default();
    stack.compose(Matrix::translate(4.0, -1.0));
    let before = stack.matrix();
    let pointer = Point::new(0.5, 0.25);

    stack.save(pointer, "outer");
    stack.compose(Matrix::rotate(1.0));
    stack.compose(Matrix::scale(3.0, 3.0));
    stack.set_absolute(Matrix::skew(0.2, 0.1), pointer).unwrap();

    let frame = stack.restore().unwrap();
    assert_eq!(stack.matrix(), before);
    assert_eq!(frame.pointer, pointer);
    assert_eq!(frame.extra, "outer");
    assert_eq!(stack.depth(), 0);
}

#[test]
fn nested_frames_restore_in_order() {
    let mut stack = TransformStack::default();
    stack.save(Point::new(1.0, 0.0), 1);
    stack.compose(Matrix::translate(1.0, 0.0));
    stack.save(Point::new(2.0, 0.0), 2);
    stack.compose(Matrix::translate(1.0, 0.0));

    assert_eq!(stack.restore().unwrap().extra, 2);
    assert_eq!(stack.matrix(), Matrix::translate(1.0, 0.0));
    assert_eq!(stack.restore().unwrap().extra, 1);
    assert_eq!(stack.matrix(), Matrix::identity());
}

#[test]
fn restore_without_save_underflows() {
    let mut stack = TransformStack::<()>::default();
    assert!(matches!(stack.restore(), Err(Error::StackUnderflow)));
}

#[test]
fn reset_clears_matrix_and_frames() {
    let mut stack = TransformStack::default();
    stack.compose(Matrix::scale(2.0, 2.0));
    stack.save(Point::ZERO, ());
    stack.reset();
    assert_eq!(stack.matrix(), Matrix::identity());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn translate_scale_scenario() {
    let mut stack = TransformStack::default();
    stack.compose(Matrix::translate(10.0, 5.0));
    assert_point_eq(stack.to_absolute(Point::ZERO), Point::new(10.0, 5.0));

    stack.save(Point::ZERO, ());
    stack.compose(Matrix::scale(2.0, 2.0));
    assert_point_eq(stack.to_absolute(Point::new(1.0, 1.0)), Point::new(12.0, 7.0));

    stack.restore().unwrap();
    assert_point_eq(stack.to_absolute(Point::new(1.0, 1.0)), Point::new(11.0, 6.0));
}
