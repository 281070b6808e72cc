use super::*;
use crate::path::PathCommand;
use assert_approx_eq::assert_approx_eq;
use std::f64::consts::FRAC_PI_2;
use test_case::test_case;

fn path_at(pointer: Point) -> Path {
    let mut path = Path::new(PathCommands::new());
    path.set_pointer(pointer);
    path
}

fn commands(path: &Path) -> Vec<PathCommand> {
    path.commands().commands().to_vec()
}

fn assert_point_eq(a: Point, b: Point) {
    assert_approx_eq!(a.x, b.x, 1e-9);
    assert_approx_eq!(a.y, b.y, 1e-9);
}

const P: Point = Point::new(3.0, -2.0);

#[test_case(
    |p| { p.move_by((1, 2)); },
    |p| { p.move_to((4, 0)); } ; "move"
)]
#[test_case(
    |p| { p.line((5, 5)); },
    |p| { p.line_to((8, 3)); } ; "line"
)]
#[test_case(
    |p| { p.rectangle((1, 1), (4, 2)); },
    |p| { p.rectangle_at((4, -1), (4, 2)); } ; "rectangle"
)]
#[test_case(
    |p| { p.span((0, 0), (2, 3)); },
    |p| { p.span_to((3, -2), (5, 1)); } ; "span"
)]
#[test_case(
    |p| { p.square(2.0, (-1, -1)); },
    |p| { p.square_at(2.0, (2, -3)); } ; "square"
)]
#[test_case(
    |p| { p.cubic((1, 0), (2, 1), (3, 3)); },
    |p| { p.cubic_to((4, -2), (5, -1), (6, 1)); } ; "cubic"
)]
#[test_case(
    |p| { p.quadratic((1, 1), (2, 0)); },
    |p| { p.quadratic_to((4, -1), (5, -2)); } ; "quadratic"
)]
#[test_case(
    |p| { p.lines(&[Point::new(1.0, 0.0), Point::new(0.0, 1.0)]); },
    |p| { p.lines_to(&[Point::new(4.0, -2.0), Point::new(4.0, -1.0)]); } ; "lines"
)]
#[test_case(
    |p| { p.arc(2.0, 0.5, 1.0, Direction::Clockwise); },
    |p| { p.arc_to(2.0, 0.5, 1.5, Direction::Clockwise); } ; "arc"
)]
#[test_case(
    |p| { p.ellipse((2, 1), 0.0); },
    |p| { p.ellipse_at((3, -2), (2, 1), 0.0); } ; "ellipse"
)]
fn relative_matches_absolute(relative: fn(&mut Path), absolute: fn(&mut Path)) {
    let mut a = path_at(P);
    let mut b = path_at(P);
    relative(&mut a);
    absolute(&mut b);
    assert_eq!(commands(&a), commands(&b));
    assert_eq!(a.pointer(), b.pointer());
}

#[test]
fn move_and_line_update_pointer() {
    let mut path = path_at(P);
    path.move_x(2.0).move_y(1.0);
    assert_eq!(path.pointer(), Point::new(5.0, -1.0));
    path.set_x(0.0);
    assert_eq!(path.pointer(), Point::new(0.0, -1.0));
    path.line((1, 1));
    assert_eq!(path.pointer(), Point::new(1.0, 0.0));
    path.zero();
    assert_eq!(path.pointer(), Point::ZERO);
}

#[test]
fn rectangles_keep_pointer() {
    let mut path = path_at(P);
    path.rect((2, 2))
        .rect_to((0, 0))
        .rectangle_center((4, 2))
        .square_center(1.0);
    assert_eq!(path.pointer(), P);
    assert_eq!(
        commands(&path)[2],
        PathCommand::Rect(Rect::from((1, -3, 4, 2)))
    );
}

#[test]
fn polygon_returns_to_pre_call_pointer() {
    let mut path = path_at(P);
    path.polygon(&[Point::new(1.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]);
    assert_eq!(path.pointer(), P);
    assert_eq!(
        commands(&path),
        vec![
            PathCommand::MoveTo(Point::new(4.0, -2.0)),
            PathCommand::LineTo(Point::new(5.0, -2.0)),
            PathCommand::LineTo(Point::new(5.0, -1.0)),
            PathCommand::LineTo(Point::new(4.0, -2.0)),
            PathCommand::MoveTo(P),
        ]
    );
}

#[test]
fn poly_starts_and_closes_at_pen() {
    let mut path = path_at(P);
    path.poly(&[Point::new(2.0, 0.0), Point::new(0.0, 2.0)]);
    assert_eq!(path.pointer(), P);
    assert_eq!(
        commands(&path),
        vec![
            PathCommand::LineTo(Point::new(5.0, -2.0)),
            PathCommand::LineTo(Point::new(5.0, 0.0)),
            PathCommand::LineTo(P),
        ]
    );
}

#[test]
fn empty_polygon_is_noop() {
    let mut path = path_at(P);
    path.polygon_to(&[]);
    assert!(path.commands().is_empty());
}

#[test_case(3)]
#[test_case(5)]
#[test_case(8)]
fn regular_poly_vertices(n: usize) {
    let mut path = path_at(P);
    path.regular_poly(n, 2.0, 0.0).unwrap();
    let cmds = commands(&path);
    // move to first vertex, n - 1 sides, closing side, back to center
    assert_eq!(cmds.len(), n + 2);
    let vertices: Vec<Point> = cmds[..n]
        .iter()
        .map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => *p,
            other => panic!("unexpected {:?}", other),
        })
        .collect();
    for v in &vertices {
        assert_approx_eq!(v.distance(P), 2.0, 1e-9);
    }
    assert_point_eq(vertices[0], P + Point::new(2.0, 0.0));
    assert_eq!(path.pointer(), P);
}

#[test_case(0)]
#[test_case(2)]
fn regular_poly_needs_three_vertices(n: usize) {
    let mut path = path_at(P);
    assert!(matches!(
        path.regular_poly(n, 1.0, 0.0),
        Err(Error::InvalidVertexCount(m)) if m == n
    ));
    assert!(path.commands().is_empty());
}

#[test]
fn regular_square_is_rotatable() {
    let mut path = path_at(Point::ZERO);
    path.regular_square(1.0, FRAC_PI_2);
    match commands(&path)[0] {
        PathCommand::MoveTo(p) => assert_point_eq(p, Point::new(0.0, 1.0)),
        ref other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn compass_closes_regular_figure() {
    let mut path = path_at(P);
    path.compass(6, 1.5, 1.0, 0.0);
    assert_eq!(path.commands().len(), 6);
    assert_point_eq(path.pointer(), P);
}

#[test]
fn ellipse_ends_on_center() {
    let mut path = path_at(P);
    path.ellipse_at((10, 10), (4, 2), FRAC_PI_2);
    let cmds = commands(&path);
    match cmds[0] {
        PathCommand::MoveTo(p) => assert_point_eq(p, Point::new(10.0, 14.0)),
        ref other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(cmds[1], PathCommand::Ellipse { .. }));
    assert_eq!(cmds[2], PathCommand::MoveTo(Point::new(10.0, 10.0)));
    assert_eq!(path.pointer(), Point::new(10.0, 10.0));
}

#[test]
fn grid_lines() {
    let mut path = path_at(Point::ZERO);
    path.grid((2, 3), (4, 6), true);
    let lines: Vec<_> = commands(&path)
        .into_iter()
        .filter(|c| matches!(c, PathCommand::LineTo(_)))
        .collect();
    // one inner column, two inner rows
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], PathCommand::LineTo(Point::new(2.0, 6.0)));
    assert_eq!(lines[2], PathCommand::LineTo(Point::new(4.0, 4.0)));
    assert!(matches!(commands(&path)[0], PathCommand::Rect(_)));
    assert_eq!(path.pointer(), Point::ZERO);
}

#[test]
fn close_keeps_pointer() {
    let mut path = path_at(P);
    path.line((1, 0)).close();
    assert_eq!(path.pointer(), Point::new(4.0, -2.0));
    assert_eq!(commands(&path).last(), Some(&PathCommand::Close));
}
