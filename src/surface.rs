//! The immediate-mode 2D surface a [`Canvas`](crate::Canvas) draws on.
//!
//! Path and drawing coordinates are interpreted through the surface's own
//! current transform, which the canvas keeps equal to its transform stack.
//! Hit tests and pixel access take device coordinates.

use crate::math::{Extent, Matrix, Point, Rect};
use crate::path::{Direction, PathCommands};
use crate::raster::Image;
use crate::style::{FillRule, Style};

/// Receiver of path-building calls: the surface's current path or a
/// recorded [`PathCommands`].
pub trait PathSink {
    fn move_to(&mut self, pt: Point);

    fn line_to(&mut self, pt: Point);

    fn bezier_to(&mut self, cp1: Point, cp2: Point, pt: Point);

    fn quad_to(&mut self, cp: Point, pt: Point);

    /// Circular arc around `center` from angle `start` to `end` (radians).
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, dir: Direction);

    fn ellipse(
        &mut self,
        center: Point,
        radii: Extent,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    );

    /// Closed rectangular subpath.
    fn rect(&mut self, rect: Rect);

    fn close_path(&mut self);
}

pub trait Surface: PathSink {
    /// Size of the drawing buffer in device pixels.
    fn view(&self) -> Extent;

    fn resize(&mut self, _view: Extent) -> anyhow::Result<()> {
        Ok(())
    }

    fn begin_path(&mut self);

    fn save(&mut self);

    fn restore(&mut self);

    /// Replaces the current transform.
    fn set_transform(&mut self, matrix: Matrix);

    /// Post-multiplies the current transform.
    fn transform(&mut self, matrix: Matrix);

    fn translate(&mut self, t: Point) {
        self.transform(Matrix::translate(t.x, t.y));
    }

    fn scale(&mut self, s: Point) {
        self.transform(Matrix::scale(s.x, s.y));
    }

    fn rotate(&mut self, angle: f64) {
        self.transform(Matrix::rotate(angle));
    }

    fn set_style(&mut self, style: &Style) -> anyhow::Result<()>;

    fn fill(&mut self, rule: FillRule) -> anyhow::Result<()>;

    fn stroke(&mut self) -> anyhow::Result<()>;

    fn fill_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()>;

    fn stroke_path(&mut self, path: &PathCommands) -> anyhow::Result<()>;

    /// Intersects the clip region with the current path.
    fn clip(&mut self, rule: FillRule) -> anyhow::Result<()>;

    fn clip_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()>;

    fn clear_rect(&mut self, rect: Rect) -> anyhow::Result<()>;

    /// Draws the `src` region of `image` into `dst` (local coordinates).
    fn draw_image(&mut self, image: &Image, src: Rect, dst: Rect) -> anyhow::Result<()>;

    /// Reads back device pixels, ignoring the transform and the clip.
    fn get_image_data(&mut self, rect: Rect) -> anyhow::Result<Image>;

    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;

    fn fill_text(&mut self, text: &str, at: Point, max_width: Option<f64>)
        -> anyhow::Result<()>;

    fn stroke_text(
        &mut self,
        text: &str,
        at: Point,
        max_width: Option<f64>,
    ) -> anyhow::Result<()>;

    fn is_point_in_path(&mut self, pt: Point, rule: FillRule) -> bool;

    fn is_point_in_path_of(&mut self, path: &PathCommands, pt: Point, rule: FillRule) -> bool;

    fn is_point_in_stroke(&mut self, pt: Point) -> bool;

    fn is_point_in_stroke_of(&mut self, path: &PathCommands, pt: Point) -> bool;
}
