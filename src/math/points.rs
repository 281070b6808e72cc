use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use num_traits::AsPrimitive;

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    /// Point at `radius` from the origin in direction `angle` (radians).
    pub fn polar(radius: f64, angle: f64) -> Point {
        Point::new(radius * angle.cos(), radius * angle.sin())
    }

    pub fn offset(&self, tx: f64, ty: f64) -> Point {
        Point::new(self.x + tx, self.y + ty)
    }

    pub fn scale(&self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }

    pub fn half(&self) -> Point {
        self.scale(0.5)
    }

    /// Same magnitude, opposite direction.
    pub fn reverse(&self) -> Point {
        Point::new(-self.x, -self.y)
    }

    /// Componentwise product.
    pub fn multiply(&self, other: Point) -> Point {
        Point::new(self.x * other.x, self.y * other.y)
    }

    /// Componentwise quotient.
    pub fn divide(&self, other: Point) -> Point {
        Point::new(self.x / other.x, self.y / other.y)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (*self - other).length()
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub(crate) fn equals(self, pt: Point, tol: f64) -> bool {
        let dx = pt.x - self.x;
        let dy = pt.y - self.y;
        dx * dx + dy * dy <= tol * tol
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: AsPrimitive<f64>> From<(T, T)> for Point {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x.as_(), y.as_())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, k: f64) -> Self::Output {
        Point::new(self.x / k, self.y / k)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Self::Output {
        self.reverse()
    }
}
