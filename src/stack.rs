//! Accumulated transform and the save/restore stack.
//!
//! The matrix maps local coordinates (what drawing calls receive) to absolute
//! coordinates (the root space of the surface). Relative transform calls are
//! post-multiplied, so each one acts in the local frame left by the previous
//! call.

use crate::math::{Matrix, Point, DEFAULT_EPSILON};
use crate::{Error, Result};

/// Snapshot pushed by [`TransformStack::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame<T = ()> {
    pub matrix: Matrix,
    pub pointer: Point,
    pub extra: T,
}

#[derive(Debug, Clone)]
pub struct TransformStack<T = ()> {
    matrix: Matrix,
    frames: Vec<StackFrame<T>>,
    epsilon: f64,
}

impl<T> Default for TransformStack<T> {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

impl<T> TransformStack<T> {
    /// `epsilon` is the determinant magnitude under which the matrix counts as singular.
    pub fn new(epsilon: f64) -> Self {
        TransformStack {
            matrix: Matrix::identity(),
            frames: Vec::new(),
            epsilon,
        }
    }

    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[StackFrame<T>] {
        &self.frames
    }

    /// Maps an absolute point into the current local space.
    pub fn to_local(&self, absolute: Point) -> Result<Point> {
        let inverse = self.matrix.try_inverse(self.epsilon)?;
        Ok(inverse.transform_point(absolute))
    }

    /// Maps a local point into absolute space.
    pub fn to_absolute(&self, local: Point) -> Point {
        self.matrix.transform_point(local)
    }

    /// `matrix = matrix * delta`.
    pub fn compose(&mut self, delta: Matrix) -> Matrix {
        self.matrix = self.matrix * delta;
        self.matrix
    }

    /// Replaces the matrix outright and returns `pointer` re-expressed in the
    /// new local space, so that its absolute position does not move.
    ///
    /// On a singular `matrix` nothing changes and the error is returned.
    pub fn set_absolute(&mut self, matrix: Matrix, pointer: Point) -> Result<Point> {
        let absolute = self.to_absolute(pointer);
        let inverse = matrix.try_inverse(self.epsilon)?;
        self.matrix = matrix;
        Ok(inverse.transform_point(absolute))
    }

    pub fn save(&mut self, pointer: Point, extra: T) {
        self.frames.push(StackFrame {
            matrix: self.matrix,
            pointer,
            extra,
        });
        log::debug!("save: depth {}", self.frames.len());
    }

    /// Pops the latest frame, making its matrix current again. The caller
    /// takes back the pointer and the extra payload.
    pub fn restore(&mut self) -> Result<StackFrame<T>> {
        let frame = self.frames.pop().ok_or(Error::StackUnderflow)?;
        self.matrix = frame.matrix;
        log::debug!("restore: depth {}", self.frames.len());
        Ok(frame)
    }

    pub fn reset(&mut self) {
        self.matrix = Matrix::identity();
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests;
