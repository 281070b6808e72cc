use super::Point;
use num_traits::AsPrimitive;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub const fn new(width: f64, height: f64) -> Extent {
        Extent { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Componentwise product, used to derive the view from size and pixel ratio.
    pub fn multiply(&self, ratio: Point) -> Extent {
        Extent::new(self.width * ratio.x, self.height * ratio.y)
    }
}

impl<T: AsPrimitive<f64>> From<(T, T)> for Extent {
    fn from((width, height): (T, T)) -> Self {
        Extent::new(width.as_(), height.as_())
    }
}

impl From<Extent> for Point {
    fn from(extent: Extent) -> Self {
        Point::new(extent.width, extent.height)
    }
}

impl From<Point> for Extent {
    fn from(pt: Point) -> Self {
        Extent::new(pt.x, pt.y)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub xy: Point,
    pub size: Extent,
}

impl Rect {
    pub fn new(xy: Point, size: Extent) -> Rect {
        Rect { xy, size }
    }

    /// Rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Rect {
        let min = Point::new(a.x.min(b.x), a.y.min(b.y));
        let max = Point::new(a.x.max(b.x), a.y.max(b.y));
        Rect::new(min, Extent::new(max.x - min.x, max.y - min.y))
    }

    pub fn right(&self) -> f64 {
        self.xy.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.xy.y + self.size.height
    }

    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.xy.x && pt.x < self.right() && pt.y >= self.xy.y && pt.y < self.bottom()
    }

    pub fn intersect(self, rect: Rect) -> Rect {
        let minx = self.xy.x.max(rect.xy.x);
        let miny = self.xy.y.max(rect.xy.y);
        let maxx = self.right().min(rect.right());
        let maxy = self.bottom().min(rect.bottom());
        Self::new(
            Point::new(minx, miny),
            Extent::new((maxx - minx).max(0.0), (maxy - miny).max(0.0)),
        )
    }
}

impl<T: AsPrimitive<f64>> From<(T, T, T, T)> for Rect {
    fn from((x, y, w, h): (T, T, T, T)) -> Self {
        Rect::new((x.as_(), y.as_()).into(), (w.as_(), h.as_()).into())
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    pub fn new(min: Point, max: Point) -> Bounds {
        Bounds { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn left_top(&self) -> Point {
        self.min
    }

    pub fn right_bottom(&self) -> Point {
        self.max
    }

    /// Grows the bounds so that they include `pt`.
    pub fn include(&mut self, pt: Point) {
        self.min.x = self.min.x.min(pt.x);
        self.min.y = self.min.y.min(pt.y);
        self.max.x = self.max.x.max(pt.x);
        self.max.y = self.max.y.max(pt.y);
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min, Extent::new(self.width(), self.height()))
    }
}
