use crate::convert;
use kurbo::{PathEl, Shape};
use penvg::{Direction, Extent, Matrix, PathSink, Point, Rect};
use std::f64::consts::TAU;
use tiny_skia::PathBuilder;

const ARC_TOLERANCE: f64 = 0.01;

/// Path under construction in device space. Points are mapped through the
/// transform active when they are added, as a canvas context does.
#[derive(Clone, Default)]
pub(crate) struct DevicePath {
    builder: PathBuilder,
    open: bool,
}

impl DevicePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.builder.clear();
        self.open = false;
    }

    pub fn placed(&mut self, matrix: Matrix) -> Placed<'_> {
        Placed { path: self, matrix }
    }

    /// The path built so far, `None` when it has no drawable segment.
    pub fn to_path(&self) -> Option<tiny_skia::Path> {
        self.builder.clone().finish()
    }

    fn move_to(&mut self, p: tiny_skia::Point) {
        self.builder.move_to(p.x, p.y);
        self.open = true;
    }

    fn line_to(&mut self, p: tiny_skia::Point) {
        if self.open {
            self.builder.line_to(p.x, p.y);
        } else {
            self.move_to(p);
        }
    }
}

/// [`DevicePath`] paired with the transform for incoming local points.
pub(crate) struct Placed<'a> {
    path: &'a mut DevicePath,
    matrix: Matrix,
}

impl Placed<'_> {
    fn map(&self, pt: Point) -> tiny_skia::Point {
        convert::point(self.matrix.transform_point(pt))
    }

    fn kurbo_map(&self, pt: kurbo::Point) -> tiny_skia::Point {
        self.map(Point::new(pt.x, pt.y))
    }

    fn arc_elements(&mut self, arc: kurbo::Arc) {
        for el in arc.path_elements(ARC_TOLERANCE) {
            match el {
                PathEl::MoveTo(p) => {
                    let p = self.kurbo_map(p);
                    self.path.line_to(p);
                }
                PathEl::LineTo(p) => {
                    let p = self.kurbo_map(p);
                    self.path.line_to(p);
                }
                PathEl::QuadTo(c, p) => {
                    let (c, p) = (self.kurbo_map(c), self.kurbo_map(p));
                    self.path.builder.quad_to(c.x, c.y, p.x, p.y);
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let (c1, c2, p) = (self.kurbo_map(c1), self.kurbo_map(c2), self.kurbo_map(p));
                    self.path.builder.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
                }
                PathEl::ClosePath => self.path.builder.close(),
            }
        }
    }
}

/// Signed sweep from `start` to `end`, a full turn at most.
pub(crate) fn sweep(start: f64, end: f64, dir: Direction) -> f64 {
    match dir {
        Direction::Clockwise if end - start >= TAU => TAU,
        Direction::Clockwise => (end - start).rem_euclid(TAU),
        Direction::CounterClockwise if start - end >= TAU => -TAU,
        Direction::CounterClockwise => -(start - end).rem_euclid(TAU),
    }
}

impl PathSink for Placed<'_> {
    fn move_to(&mut self, pt: Point) {
        let p = self.map(pt);
        self.path.move_to(p);
    }

    fn line_to(&mut self, pt: Point) {
        let p = self.map(pt);
        self.path.line_to(p);
    }

    fn bezier_to(&mut self, cp1: Point, cp2: Point, pt: Point) {
        let (c1, c2, p) = (self.map(cp1), self.map(cp2), self.map(pt));
        if !self.path.open {
            self.path.move_to(c1);
        }
        self.path.builder.cubic_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y);
    }

    fn quad_to(&mut self, cp: Point, pt: Point) {
        let (c, p) = (self.map(cp), self.map(pt));
        if !self.path.open {
            self.path.move_to(c);
        }
        self.path.builder.quad_to(c.x, c.y, p.x, p.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, dir: Direction) {
        self.ellipse(center, Extent::new(radius, radius), 0.0, start, end, dir);
    }

    fn ellipse(
        &mut self,
        center: Point,
        radii: Extent,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    ) {
        if radii.width < 0.0 || radii.height < 0.0 {
            log::warn!("negative ellipse radii {:?}", radii);
            return;
        }
        self.arc_elements(kurbo::Arc {
            center: kurbo::Point::new(center.x, center.y),
            radii: kurbo::Vec2::new(radii.width, radii.height),
            start_angle: start,
            sweep_angle: sweep(start, end, dir),
            x_rotation: rotation,
        });
    }

    fn rect(&mut self, rect: Rect) {
        let (x, y) = (rect.xy.x, rect.xy.y);
        let (w, h) = (rect.size.width, rect.size.height);
        self.move_to(Point::new(x, y));
        self.line_to(Point::new(x + w, y));
        self.line_to(Point::new(x + w, y + h));
        self.line_to(Point::new(x, y + h));
        self.close_path();
        self.move_to(Point::new(x, y));
    }

    fn close_path(&mut self) {
        if self.path.open {
            self.path.builder.close();
        }
    }
}
