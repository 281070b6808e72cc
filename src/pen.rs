//! Pen-position tracking over a path sink.
//!
//! Every primitive exists in a relative form (bare verb, offsets from the
//! pointer) and an absolute form (`_to`/`_at`, positions in the current local
//! space). The relative form only adds the pointer and calls the absolute one.

use crate::math::{Extent, Point, Rect};
use crate::path::{Direction, PathCommands};
use crate::surface::PathSink;
use crate::{Error, Result};
use std::f64::consts::PI;

/// The pointer together with the sink receiving path commands.
#[derive(Debug, Clone, Default)]
pub struct PenContext<S> {
    pointer: Point,
    sink: S,
}

/// A standalone recorded path that can be drawn with the same pen calls as a
/// canvas, then filled, stroked, clipped or hit tested through it.
pub type Path = PenContext<PathCommands>;

impl<S> PenContext<S> {
    pub fn new(sink: S) -> Self {
        PenContext {
            pointer: Point::ZERO,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl Path {
    pub fn commands(&self) -> &PathCommands {
        &self.sink
    }
}

impl<S: PathSink> Pen for PenContext<S> {
    type Sink = S;

    fn pen(&self) -> &PenContext<S> {
        self
    }

    fn pen_mut(&mut self) -> &mut PenContext<S> {
        self
    }
}

/// Fluent path-building primitives, provided for every type that can hand out
/// its [`PenContext`].
pub trait Pen {
    type Sink: PathSink;

    fn pen(&self) -> &PenContext<Self::Sink>;

    fn pen_mut(&mut self) -> &mut PenContext<Self::Sink>;

    /// Pen position in the current local space.
    fn pointer(&self) -> Point {
        self.pen().pointer
    }

    /// Moves the pointer without emitting a path command.
    fn set_pointer(&mut self, pointer: Point) -> &mut Self {
        self.pen_mut().pointer = pointer;
        self
    }

    fn move_to(&mut self, pt: impl Into<Point>) -> &mut Self {
        let pt: Point = pt.into();
        let pen = self.pen_mut();
        pen.pointer = pt;
        pen.sink.move_to(pt);
        self
    }

    fn move_by(&mut self, delta: impl Into<Point>) -> &mut Self {
        let delta: Point = delta.into();
        self.move_to(self.pointer() + delta)
    }

    fn set_x(&mut self, x: f64) -> &mut Self {
        let y = self.pointer().y;
        self.move_to(Point::new(x, y))
    }

    fn set_y(&mut self, y: f64) -> &mut Self {
        let x = self.pointer().x;
        self.move_to(Point::new(x, y))
    }

    fn move_x(&mut self, dx: f64) -> &mut Self {
        let x = self.pointer().x + dx;
        self.set_x(x)
    }

    fn move_y(&mut self, dy: f64) -> &mut Self {
        let y = self.pointer().y + dy;
        self.set_y(y)
    }

    fn line_to(&mut self, pt: impl Into<Point>) -> &mut Self {
        let pt: Point = pt.into();
        let pen = self.pen_mut();
        pen.pointer = pt;
        pen.sink.line_to(pt);
        self
    }

    fn line(&mut self, delta: impl Into<Point>) -> &mut Self {
        let delta: Point = delta.into();
        self.line_to(self.pointer() + delta)
    }

    fn lines_to(&mut self, points: &[Point]) -> &mut Self {
        for &pt in points {
            self.line_to(pt);
        }
        self
    }

    /// Each delta is taken from the end of the previous segment.
    fn lines(&mut self, deltas: &[Point]) -> &mut Self {
        let points = chain(self.pointer(), deltas);
        self.lines_to(&points)
    }

    /// Rectangle from the pointer to the opposite `corner`.
    fn rect_to(&mut self, corner: impl Into<Point>) -> &mut Self {
        let corner: Point = corner.into();
        let start = self.pointer();
        let size = corner - start;
        self.pen_mut().sink.rect(Rect::new(start, size.into()));
        self
    }

    fn rect(&mut self, size: impl Into<Extent>) -> &mut Self {
        let size: Extent = size.into();
        let corner = self.pointer() + Point::from(size);
        self.rect_to(corner)
    }

    fn rectangle_at(&mut self, start: impl Into<Point>, size: impl Into<Extent>) -> &mut Self {
        let rect = Rect::new(start.into(), size.into());
        self.pen_mut().sink.rect(rect);
        self
    }

    fn rectangle(&mut self, offset: impl Into<Point>, size: impl Into<Extent>) -> &mut Self {
        let offset: Point = offset.into();
        self.rectangle_at(self.pointer() + offset, size)
    }

    /// Rectangle spanned from corner `a` to corner `b`.
    fn span_to(&mut self, a: impl Into<Point>, b: impl Into<Point>) -> &mut Self {
        let (a, b): (Point, Point) = (a.into(), b.into());
        let size = b - a;
        self.rectangle_at(a, size)
    }

    fn span(&mut self, a: impl Into<Point>, b: impl Into<Point>) -> &mut Self {
        let (a, b): (Point, Point) = (a.into(), b.into());
        let p = self.pointer();
        self.span_to(p + a, p + b)
    }

    fn square_at(&mut self, edge: f64, point: impl Into<Point>) -> &mut Self {
        self.rectangle_at(point, Extent::new(edge, edge))
    }

    fn square(&mut self, edge: f64, offset: impl Into<Point>) -> &mut Self {
        let offset: Point = offset.into();
        self.square_at(edge, self.pointer() + offset)
    }

    fn rectangle_center(&mut self, size: impl Into<Extent>) -> &mut Self {
        let size: Extent = size.into();
        let offset = Point::from(size).half().reverse();
        self.rectangle(offset, size)
    }

    fn square_center(&mut self, edge: f64) -> &mut Self {
        self.rectangle_center(Extent::new(edge, edge))
    }

    /// Closed polygon through `points`; the pointer returns to where it was.
    fn polygon_to(&mut self, points: &[Point]) -> &mut Self {
        let Some((&head, rest)) = points.split_first() else {
            return self;
        };
        let zero = self.pointer();
        self.move_to(head).lines_to(rest).line_to(head).move_to(zero)
    }

    /// Closed polygon; the first delta is taken from the pointer and each
    /// following one from the previous vertex.
    fn polygon(&mut self, deltas: &[Point]) -> &mut Self {
        let points = chain(self.pointer(), deltas);
        self.polygon_to(&points)
    }

    /// Closed polygon starting and ending at the pointer.
    fn poly_to(&mut self, points: &[Point]) -> &mut Self {
        let zero = self.pointer();
        self.lines_to(points).line_to(zero)
    }

    fn poly(&mut self, deltas: &[Point]) -> &mut Self {
        let points = chain(self.pointer(), deltas);
        self.poly_to(&points)
    }

    /// Arc centered on the pointer, from angle `start` to `end`.
    fn arc_to(&mut self, radius: f64, start: f64, end: f64, dir: Direction) -> &mut Self {
        let center = self.pointer();
        self.pen_mut().sink.arc(center, radius, start, end, dir);
        self
    }

    /// Arc centered on the pointer, sweeping `sweep` radians from `start`.
    fn arc(&mut self, radius: f64, start: f64, sweep: f64, dir: Direction) -> &mut Self {
        self.arc_to(radius, start, start + sweep, dir)
    }

    fn cubic_to(
        &mut self,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> &mut Self {
        let end: Point = end.into();
        let pen = self.pen_mut();
        pen.sink.bezier_to(cp1.into(), cp2.into(), end);
        pen.pointer = end;
        self
    }

    /// Cubic Bézier with both control points and the end relative to the pointer.
    fn cubic(
        &mut self,
        cp1: impl Into<Point>,
        cp2: impl Into<Point>,
        end: impl Into<Point>,
    ) -> &mut Self {
        let (cp1, cp2, end): (Point, Point, Point) = (cp1.into(), cp2.into(), end.into());
        let p = self.pointer();
        self.cubic_to(p + cp1, p + cp2, p + end)
    }

    fn quadratic_to(&mut self, cp: impl Into<Point>, end: impl Into<Point>) -> &mut Self {
        let end: Point = end.into();
        let pen = self.pen_mut();
        pen.sink.quad_to(cp.into(), end);
        pen.pointer = end;
        self
    }

    fn quadratic(&mut self, cp: impl Into<Point>, end: impl Into<Point>) -> &mut Self {
        let (cp, end): (Point, Point) = (cp.into(), end.into());
        let p = self.pointer();
        self.quadratic_to(p + cp, p + end)
    }

    /// Full ellipse as its own subpath; the pointer ends on `center`.
    fn ellipse_at(
        &mut self,
        center: impl Into<Point>,
        radii: impl Into<Extent>,
        rotation: f64,
    ) -> &mut Self {
        let center: Point = center.into();
        let radii: Extent = radii.into();
        let start = center + Point::polar(radii.width, rotation);
        let pen = self.pen_mut();
        pen.sink.move_to(start);
        pen.sink
            .ellipse(center, radii, rotation, 0.0, 2.0 * PI, Direction::Clockwise);
        self.move_to(center)
    }

    fn ellipse(&mut self, radii: impl Into<Extent>, rotation: f64) -> &mut Self {
        let center = self.pointer();
        self.ellipse_at(center, radii, rotation)
    }

    fn circle_at(&mut self, center: impl Into<Point>, radius: f64) -> &mut Self {
        self.ellipse_at(center, Extent::new(radius, radius), 0.0)
    }

    fn circle(&mut self, radius: f64) -> &mut Self {
        let center = self.pointer();
        self.circle_at(center, radius)
    }

    /// Regular `n`-gon centered on the pointer, first vertex at angle `rotation`.
    fn regular_poly(&mut self, n: usize, radius: f64, rotation: f64) -> Result<&mut Self> {
        if n < 3 {
            return Err(Error::InvalidVertexCount(n));
        }
        let points = regular_vertices(self.pointer(), n, radius, rotation);
        Ok(self.polygon_to(&points))
    }

    fn regular_triangle(&mut self, radius: f64, rotation: f64) -> &mut Self {
        let points = regular_vertices(self.pointer(), 3, radius, rotation);
        self.polygon_to(&points)
    }

    fn regular_square(&mut self, radius: f64, rotation: f64) -> &mut Self {
        let points = regular_vertices(self.pointer(), 4, radius, rotation);
        self.polygon_to(&points)
    }

    /// Compass-and-ruler construction: `count` chained sides of length `side`,
    /// each turned by `factor * 2π / count` from the previous one.
    fn compass(&mut self, count: usize, side: f64, factor: f64, rotation: f64) -> &mut Self {
        if count == 0 {
            return self;
        }
        let phi = factor * 2.0 * PI / count as f64;
        let deltas: Vec<Point> = (1..=count)
            .map(|i| Point::polar(side, rotation + phi * i as f64))
            .collect();
        self.lines(&deltas)
    }

    /// Grid of `cells` columns and rows filling `size` from the pointer. The
    /// pointer stays at the grid origin.
    fn grid(&mut self, cells: (usize, usize), size: impl Into<Extent>, bordered: bool) -> &mut Self {
        let size: Extent = size.into();
        if bordered {
            self.rect(size);
        }
        let origin = self.pointer();
        let (cols, rows) = cells;
        let dx = size.width / cols.max(1) as f64;
        let dy = size.height / rows.max(1) as f64;
        for i in 1..cols {
            self.move_x(dx * i as f64)
                .line(Point::new(0.0, size.height))
                .move_to(origin);
        }
        for i in 1..rows {
            self.move_y(dy * i as f64)
                .line(Point::new(size.width, 0.0))
                .move_to(origin);
        }
        self
    }

    /// Closes the current subpath.
    fn close(&mut self) -> &mut Self {
        self.pen_mut().sink.close_path();
        self
    }

    /// Moves the pen to the local origin.
    fn zero(&mut self) -> &mut Self {
        self.move_to(Point::ZERO)
    }
}

/// Absolute points of a chain of deltas starting at `start`.
fn chain(start: Point, deltas: &[Point]) -> Vec<Point> {
    deltas
        .iter()
        .scan(start, |at, &d| {
            *at += d;
            Some(*at)
        })
        .collect()
}

fn regular_vertices(center: Point, n: usize, radius: f64, rotation: f64) -> Vec<Point> {
    (0..n)
        .map(|i| center + Point::polar(radius, rotation + 2.0 * PI * i as f64 / n as f64))
        .collect()
}

#[cfg(test)]
mod tests;
