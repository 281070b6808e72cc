use super::Canvas;
use crate::math::{Extent, Matrix, Point, Rect};
use crate::pen::{Path, Pen};
use crate::style::{Color, FillRule, Gradient, Paint, Style};
use crate::surface::Surface;
use crate::Result;

impl<S: Surface> Canvas<S> {
    /// Starts a new path.
    pub fn begin(&mut self) -> &mut Self {
        self.surface_mut().begin_path();
        self
    }

    pub fn fill(&mut self, rule: FillRule) -> Result<&mut Self> {
        self.surface_mut().fill(rule)?;
        Ok(self)
    }

    pub fn stroke(&mut self) -> Result<&mut Self> {
        self.surface_mut().stroke()?;
        Ok(self)
    }

    pub fn fill_path(&mut self, path: &Path, rule: FillRule) -> Result<&mut Self> {
        self.surface_mut().fill_path(path.commands(), rule)?;
        Ok(self)
    }

    pub fn stroke_path(&mut self, path: &Path) -> Result<&mut Self> {
        self.surface_mut().stroke_path(path.commands())?;
        Ok(self)
    }

    /// Fills with `paint` without changing the fill style.
    pub fn fill_with(&mut self, paint: impl Into<Paint>, rule: FillRule) -> Result<&mut Self> {
        self.with_style(Style::Fill(paint.into()), |s| s.fill(rule))
    }

    /// Strokes with `paint` without changing the stroke style.
    pub fn stroke_with(&mut self, paint: impl Into<Paint>) -> Result<&mut Self> {
        self.with_style(Style::Stroke(paint.into()), |s| s.stroke())
    }

    pub fn fill_path_with(
        &mut self,
        path: &Path,
        paint: impl Into<Paint>,
        rule: FillRule,
    ) -> Result<&mut Self> {
        self.with_style(Style::Fill(paint.into()), |s| {
            s.fill_path(path.commands(), rule)
        })
    }

    pub fn stroke_path_with(&mut self, path: &Path, paint: impl Into<Paint>) -> Result<&mut Self> {
        self.with_style(Style::Stroke(paint.into()), |s| {
            s.stroke_path(path.commands())
        })
    }

    pub fn clip(&mut self, rule: FillRule) -> Result<&mut Self> {
        self.surface_mut().clip(rule)?;
        Ok(self)
    }

    pub fn clip_path(&mut self, path: &Path, rule: FillRule) -> Result<&mut Self> {
        self.surface_mut().clip_path(path.commands(), rule)?;
        Ok(self)
    }

    /// Clears `size` from the pointer.
    pub fn clear(&mut self, size: impl Into<Extent>) -> Result<&mut Self> {
        let start = self.pointer();
        self.clear_at(start, size)
    }

    pub fn clear_at(&mut self, start: impl Into<Point>, size: impl Into<Extent>) -> Result<&mut Self> {
        let rect = Rect::new(start.into(), size.into());
        self.surface_mut().clear_rect(rect)?;
        Ok(self)
    }

    /// Clears the whole view whatever the current transform.
    pub fn clear_all(&mut self) -> Result<&mut Self> {
        let view = self.view();
        let matrix = self.matrix();
        let surface = self.surface_mut();
        surface.set_transform(Matrix::identity());
        let cleared = surface.clear_rect(Rect::new(Point::ZERO, view));
        surface.set_transform(matrix);
        cleared?;
        Ok(self)
    }

    /// Radial gradient around the pointer, `start` at the center and
    /// `finish` at `radius`.
    pub fn radial(&self, radius: f64, start: Color, finish: Color) -> Gradient {
        self.radial_at(self.pointer(), radius, start, finish)
    }

    pub fn radial_at(
        &self,
        point: impl Into<Point>,
        radius: f64,
        start: Color,
        finish: Color,
    ) -> Gradient {
        let point: Point = point.into();
        Gradient::radial(point, 0.0, point, radius)
            .with_stop(0.0, start)
            .with_stop(1.0, finish)
    }

    /// Two-circle gradient between circles at `pointer + a` and `pointer + b`
    /// with radii `radii.0` and `radii.1`. Stops are left to the caller.
    pub fn radial_between(
        &self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        radii: (f64, f64),
    ) -> Gradient {
        let (a, b): (Point, Point) = (a.into(), b.into());
        let p = self.pointer();
        self.radial_between_to(p + a, p + b, radii)
    }

    pub fn radial_between_to(
        &self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        radii: (f64, f64),
    ) -> Gradient {
        Gradient::radial(a.into(), radii.0, b.into(), radii.1)
    }
}
