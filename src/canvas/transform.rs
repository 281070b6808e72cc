use super::{Canvas, Corner};
use crate::math::{Matrix, Point};
use crate::pen::Pen;
use crate::surface::Surface;
use crate::{Error, Result};

impl<S: Surface> Canvas<S> {
    /// Post-multiplies `delta` onto the matrix and mirrors it on the surface.
    pub fn transform(&mut self, delta: Matrix) -> &mut Self {
        self.stack.compose(delta);
        self.surface_mut().transform(delta);
        self
    }

    /// Replaces the matrix. The pointer is re-expressed in the new local space
    /// so that it stays on the same device position.
    pub fn transform_to(&mut self, matrix: Matrix) -> Result<&mut Self> {
        let pointer = self.pointer();
        let pointer = self.stack.set_absolute(matrix, pointer)?;
        self.set_pointer(pointer);
        self.surface_mut().set_transform(matrix);
        log::debug!("absolute transform {:?}", matrix.coefficients());
        Ok(self)
    }

    pub fn reset_transform(&mut self) -> Result<&mut Self> {
        self.transform_to(Matrix::identity())
    }

    /// Moves the origin to `pointer + delta`.
    pub fn translate(&mut self, delta: impl Into<Point>) -> &mut Self {
        let delta: Point = delta.into();
        let to = self.pointer() + delta;
        self.translate_to(to)
    }

    /// Moves the origin to the local point `to`.
    pub fn translate_to(&mut self, to: impl Into<Point>) -> &mut Self {
        let to: Point = to.into();
        self.transform(Matrix::translate(to.x, to.y))
    }

    pub fn scale(&mut self, factors: impl Into<Point>) -> &mut Self {
        let s: Point = factors.into();
        self.transform(Matrix::scale(s.x, s.y))
    }

    /// Scales so that the matrix diagonal becomes `factors`.
    pub fn scale_to(&mut self, factors: impl Into<Point>) -> Result<&mut Self> {
        let factors: Point = factors.into();
        let diagonal = self.scale_vector();
        if diagonal.x == 0.0 || diagonal.y == 0.0 {
            return Err(Error::SingularTransform {
                determinant: self.matrix().determinant(),
            });
        }
        Ok(self.scale(factors.divide(diagonal)))
    }

    pub fn zoom(&mut self, factor: f64) -> &mut Self {
        self.scale((factor, factor))
    }

    pub fn zoom_to(&mut self, factor: f64) -> Result<&mut Self> {
        self.scale_to((factor, factor))
    }

    /// Mirrors the x axis.
    pub fn flip_x(&mut self) -> &mut Self {
        self.scale((-1.0, 1.0))
    }

    /// Mirrors the y axis.
    pub fn flip_y(&mut self) -> &mut Self {
        self.scale((1.0, -1.0))
    }

    /// Shears by raw factors: x gains `factors.x * y`, y gains `factors.y * x`.
    pub fn skew(&mut self, factors: impl Into<Point>) -> &mut Self {
        let k: Point = factors.into();
        self.transform(Matrix::skew(k.x, k.y))
    }

    /// Sets the shear coefficients `c` and `b` of the matrix to `factors`.
    pub fn skew_to(&mut self, factors: impl Into<Point>) -> Result<&mut Self> {
        let k: Point = factors.into();
        let [a, _, _, d, e, f] = self.matrix().coefficients();
        self.transform_to(Matrix::new(a, k.y, k.x, d, e, f))
    }

    pub fn skew_x(&mut self, angle: f64) -> &mut Self {
        self.transform(Matrix::skew_x(angle))
    }

    pub fn skew_y(&mut self, angle: f64) -> &mut Self {
        self.transform(Matrix::skew_y(angle))
    }

    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.transform(Matrix::rotate(angle))
    }

    /// Replaces the linear part with a pure rotation, keeping the translation.
    pub fn rotate_to(&mut self, angle: f64) -> Result<&mut Self> {
        let matrix = Matrix::rotate(angle).with_translation(self.translate_vector());
        self.transform_to(matrix)
    }

    /// Rotates the x axis towards `direction`.
    pub fn rotate_towards(&mut self, direction: impl Into<Point>) -> &mut Self {
        let direction: Point = direction.into();
        self.rotate(direction.angle())
    }

    pub fn translate_vector(&self) -> Point {
        self.matrix().translation()
    }

    pub fn scale_vector(&self) -> Point {
        self.matrix().diagonal()
    }

    /// `(c, b)`: the shear coefficients in the order [`skew`](Self::skew) takes them.
    pub fn skew_vector(&self) -> Point {
        let [_, b, c, _, _, _] = self.matrix().coefficients();
        Point::new(c, b)
    }

    pub fn rotation_matrix(&self) -> Matrix {
        self.matrix().minor()
    }

    /// Moves the origin by `delta` from the pointer and puts the pen on it.
    pub fn shift(&mut self, delta: impl Into<Point>) -> &mut Self {
        self.translate(delta).zero()
    }

    pub fn shift_to(&mut self, to: impl Into<Point>) -> &mut Self {
        self.translate_to(to).zero()
    }

    /// Moves the origin and the pen to the view center.
    pub fn center_origin(&mut self) -> &mut Self {
        let center = self.center();
        self.shift_to(center)
    }

    /// Reset, then origin at the view center.
    pub fn basis(&mut self) -> &mut Self {
        self.reset().center_origin()
    }

    /// Switches to the basis whose axis vectors are `a` and `b`, expressed in
    /// the current local space.
    pub fn change_basis(&mut self, a: impl Into<Point>, b: impl Into<Point>) -> &mut Self {
        let (a, b): (Point, Point) = (a.into(), b.into());
        self.transform(Matrix::new(a.x, a.y, b.x, b.y, 0.0, 0.0))
    }

    /// Puts the origin and the pen on a corner of the view, flipping axes so
    /// that they point into the view. Unset flags mean top and left.
    pub fn nook(&mut self, corner: Corner) -> Result<&mut Self> {
        let view = self.view();
        let absolute = Point::new(
            if corner.contains(Corner::RIGHT) {
                view.width
            } else {
                0.0
            },
            if corner.contains(Corner::BOTTOM) {
                view.height
            } else {
                0.0
            },
        );
        let local = self.to_local(absolute)?;
        self.shift_to(local);
        if corner.contains(Corner::RIGHT) {
            self.flip_x();
        }
        if corner.contains(Corner::BOTTOM) {
            self.flip_y();
        }
        Ok(self)
    }

    /// [`nook`](Self::nook) from the identity transform.
    pub fn nook_reset(&mut self, corner: Corner) -> Result<&mut Self> {
        self.reset().nook(corner)
    }
}
