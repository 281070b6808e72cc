use super::Point;
use crate::{Error, Result};
use num_traits::AsPrimitive;
use std::ops::{Mul, MulAssign};

/// Determinants at or below this magnitude are treated as singular.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// 2D affine transform, the upper two rows of a 3x3 homogeneous matrix:
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
///
/// Stored as `[a, b, c, d, e, f]`, the argument order of canvas `setTransform`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix(pub [f64; 6]);

impl Default for Matrix {
    fn default() -> Self {
        Matrix::identity()
    }
}

impl Matrix {
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Matrix {
        Matrix([a, b, c, d, e, f])
    }

    pub const fn identity() -> Matrix {
        Matrix([1.0, 0.0, 0.0, 1.0, 0.0, 0.0])
    }

    pub fn translate(tx: f64, ty: f64) -> Matrix {
        Matrix([1.0, 0.0, 0.0, 1.0, tx, ty])
    }

    pub fn scale(sx: f64, sy: f64) -> Matrix {
        Matrix([sx, 0.0, 0.0, sy, 0.0, 0.0])
    }

    pub fn rotate(a: f64) -> Matrix {
        let (sn, cs) = a.sin_cos();
        Matrix([cs, sn, -sn, cs, 0.0, 0.0])
    }

    /// Shear by raw factors: `kx` shifts x by `kx * y`, `ky` shifts y by `ky * x`.
    pub fn skew(kx: f64, ky: f64) -> Matrix {
        Matrix([1.0, ky, kx, 1.0, 0.0, 0.0])
    }

    pub fn skew_x(a: f64) -> Matrix {
        Matrix([1.0, 0.0, a.tan(), 1.0, 0.0, 0.0])
    }

    pub fn skew_y(a: f64) -> Matrix {
        Matrix([1.0, a.tan(), 0.0, 1.0, 0.0, 0.0])
    }

    pub fn coefficients(&self) -> [f64; 6] {
        self.0
    }

    /// Row-major 3x3 homogeneous form.
    pub fn to_homogeneous(&self) -> [[f64; 3]; 3] {
        let [a, b, c, d, e, f] = self.0;
        [[a, c, e], [b, d, f], [0.0, 0.0, 1.0]]
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.to_homogeneous()[row][col]
    }

    /// First two components of column `col` (0 and 1 are the basis vectors,
    /// 2 is the translation).
    pub fn column(&self, col: usize) -> Point {
        let m = self.to_homogeneous();
        Point::new(m[0][col], m[1][col])
    }

    pub fn diagonal(&self) -> Point {
        Point::new(self.0[0], self.0[3])
    }

    pub fn translation(&self) -> Point {
        Point::new(self.0[4], self.0[5])
    }

    /// The 2x2 linear part, without translation.
    pub fn minor(&self) -> Matrix {
        let [a, b, c, d, _, _] = self.0;
        Matrix([a, b, c, d, 0.0, 0.0])
    }

    pub fn with_translation(self, t: Point) -> Matrix {
        let [a, b, c, d, _, _] = self.0;
        Matrix([a, b, c, d, t.x, t.y])
    }

    pub fn determinant(&self) -> f64 {
        let t = &self.0;
        t[0] * t[3] - t[2] * t[1]
    }

    pub fn is_singular(&self, epsilon: f64) -> bool {
        let det = self.determinant();
        !det.is_finite() || det.abs() <= epsilon
    }

    pub fn try_inverse(&self, epsilon: f64) -> Result<Matrix> {
        let t = &self.0;
        let det = self.determinant();
        if self.is_singular(epsilon) {
            return Err(Error::SingularTransform { determinant: det });
        }
        let invdet = 1.0 / det;
        let mut inv = [0f64; 6];
        inv[0] = t[3] * invdet;
        inv[2] = -t[2] * invdet;
        inv[4] = (t[2] * t[5] - t[3] * t[4]) * invdet;
        inv[1] = -t[1] * invdet;
        inv[3] = t[0] * invdet;
        inv[5] = (t[1] * t[4] - t[0] * t[5]) * invdet;
        Ok(Matrix(inv))
    }

    pub fn inverse(&self) -> Result<Matrix> {
        self.try_inverse(DEFAULT_EPSILON)
    }

    pub fn transform_point(&self, pt: Point) -> Point {
        let t = &self.0;
        Point::new(
            pt.x * t[0] + pt.y * t[2] + t[4],
            pt.x * t[1] + pt.y * t[3] + t[5],
        )
    }

    /// Applies only the linear part, as for directions and offsets.
    pub fn transform_vector(&self, v: Point) -> Point {
        let t = &self.0;
        Point::new(v.x * t[0] + v.y * t[2], v.x * t[1] + v.y * t[3])
    }

    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }
}

/// Standard matrix product: `(m * n).transform_point(p) == m.transform_point(n.transform_point(p))`.
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        let m = &self.0;
        let n = &rhs.0;
        Matrix([
            m[0] * n[0] + m[2] * n[1],
            m[1] * n[0] + m[3] * n[1],
            m[0] * n[2] + m[2] * n[3],
            m[1] * n[2] + m[3] * n[3],
            m[0] * n[4] + m[2] * n[5] + m[4],
            m[1] * n[4] + m[3] * n[5] + m[5],
        ])
    }
}

impl MulAssign for Matrix {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: AsPrimitive<f64>> From<(T, T, T, T, T, T)> for Matrix {
    fn from((a1, a2, a3, a4, a5, a6): (T, T, T, T, T, T)) -> Self {
        Matrix([a1.as_(), a2.as_(), a3.as_(), a4.as_(), a5.as_(), a6.as_()])
    }
}

impl<T: AsPrimitive<f64>> From<[T; 6]> for Matrix {
    fn from(values: [T; 6]) -> Self {
        Matrix(values.map(|v| v.as_()))
    }
}
