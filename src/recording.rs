//! A [`Surface`] that records every call instead of drawing.

use crate::math::{Extent, Matrix, Point, Rect};
use crate::path::{Direction, PathCommand, PathCommands};
use crate::raster::Image;
use crate::style::{FillRule, Style};
use crate::surface::{PathSink, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Path(PathCommand),
    Resize(Extent),
    BeginPath,
    Save,
    Restore,
    SetTransform(Matrix),
    Transform(Matrix),
    SetStyle(Style),
    Fill(FillRule),
    Stroke,
    FillPath(PathCommands, FillRule),
    StrokePath(PathCommands),
    Clip(FillRule),
    ClipPath(PathCommands, FillRule),
    ClearRect(Rect),
    DrawImage {
        size: Extent,
        src: Rect,
        dst: Rect,
    },
    GetImageData(Rect),
    MeasureText(String),
    FillText {
        text: String,
        at: Point,
        max_width: Option<f64>,
    },
    StrokeText {
        text: String,
        at: Point,
        max_width: Option<f64>,
    },
    HitPath(Option<PathCommands>, Point, FillRule),
    HitStroke(Option<PathCommands>, Point),
}

/// Records surface traffic and tracks the transform the way a canvas would.
///
/// Text is measured as `char_width` per character. Pixel reads are served
/// from the preset pixels when there are any, transparent otherwise. Hit
/// tests always miss.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    view: Extent,
    commands: Vec<Command>,
    matrix: Matrix,
    saved: Vec<Matrix>,
    char_width: f64,
    pixels: Option<Image>,
}

impl RecordingSurface {
    pub fn new(view: impl Into<Extent>) -> Self {
        RecordingSurface {
            view: view.into(),
            commands: Vec::new(),
            matrix: Matrix::identity(),
            saved: Vec::new(),
            char_width: 8.0,
            pixels: None,
        }
    }

    pub fn with_char_width(mut self, char_width: f64) -> Self {
        self.char_width = char_width;
        self
    }

    pub fn with_pixels(mut self, pixels: Image) -> Self {
        self.pixels = Some(pixels);
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// The transform a real surface would hold after the recorded calls.
    pub fn matrix(&self) -> Matrix {
        self.matrix
    }

    fn record(&mut self, command: Command) {
        log::trace!("{:?}", command);
        self.commands.push(command);
    }
}

impl PathSink for RecordingSurface {
    fn move_to(&mut self, pt: Point) {
        self.record(Command::Path(PathCommand::MoveTo(pt)));
    }

    fn line_to(&mut self, pt: Point) {
        self.record(Command::Path(PathCommand::LineTo(pt)));
    }

    fn bezier_to(&mut self, cp1: Point, cp2: Point, pt: Point) {
        self.record(Command::Path(PathCommand::BezierTo { cp1, cp2, pt }));
    }

    fn quad_to(&mut self, cp: Point, pt: Point) {
        self.record(Command::Path(PathCommand::QuadTo { cp, pt }));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, dir: Direction) {
        self.record(Command::Path(PathCommand::Arc {
            center,
            radius,
            start,
            end,
            dir,
        }));
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
        self.record(Command::Path(PathCommand::Ellipse {
            center,
            radii,
            rotation,
            start,
            end,
            dir,
        }));
    }

    fn rect(&mut self, rect: Rect) {
        self.record(Command::Path(PathCommand::Rect(rect)));
    }

    fn close_path(&mut self) {
        self.record(Command::Path(PathCommand::Close));
    }
}

impl Surface for RecordingSurface {
    fn view(&self) -> Extent {
        self.view
    }

    fn resize(&mut self, view: Extent) -> anyhow::Result<()> {
        self.view = view;
        self.record(Command::Resize(view));
        Ok(())
    }

    fn begin_path(&mut self) {
        self.record(Command::BeginPath);
    }

    fn save(&mut self) {
        self.saved.push(self.matrix);
        self.record(Command::Save);
    }

    fn restore(&mut self) {
        if let Some(matrix) = self.saved.pop() {
            self.matrix = matrix;
        }
        self.record(Command::Restore);
    }

    fn set_transform(&mut self, matrix: Matrix) {
        self.matrix = matrix;
        self.record(Command::SetTransform(matrix));
    }

    fn transform(&mut self, matrix: Matrix) {
        self.matrix = self.matrix * matrix;
        self.record(Command::Transform(matrix));
    }

    fn set_style(&mut self, style: &Style) -> anyhow::Result<()> {
        self.record(Command::SetStyle(style.clone()));
        Ok(())
    }

    fn fill(&mut self, rule: FillRule) -> anyhow::Result<()> {
        self.record(Command::Fill(rule));
        Ok(())
    }

    fn stroke(&mut self) -> anyhow::Result<()> {
        self.record(Command::Stroke);
        Ok(())
    }

    fn fill_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()> {
        self.record(Command::FillPath(path.clone(), rule));
        Ok(())
    }

    fn stroke_path(&mut self, path: &PathCommands) -> anyhow::Result<()> {
        self.record(Command::StrokePath(path.clone()));
        Ok(())
    }

    fn clip(&mut self, rule: FillRule) -> anyhow::Result<()> {
        self.record(Command::Clip(rule));
        Ok(())
    }

    fn clip_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()> {
        self.record(Command::ClipPath(path.clone(), rule));
        Ok(())
    }

    fn clear_rect(&mut self, rect: Rect) -> anyhow::Result<()> {
        self.record(Command::ClearRect(rect));
        Ok(())
    }

    fn draw_image(&mut self, image: &Image, src: Rect, dst: Rect) -> anyhow::Result<()> {
        self.record(Command::DrawImage {
            size: image.size(),
            src,
            dst,
        });
        Ok(())
    }

    fn get_image_data(&mut self, rect: Rect) -> anyhow::Result<Image> {
        self.record(Command::GetImageData(rect));
        let image = match &self.pixels {
            Some(pixels) => pixels.crop(rect),
            None => Image::new(
                rect.size.width.max(0.0).round() as u32,
                rect.size.height.max(0.0).round() as u32,
            ),
        };
        Ok(image)
    }

    fn measure_text(&mut self, text: &str) -> f64 {
        self.record(Command::MeasureText(text.to_string()));
        text.chars().count() as f64 * self.char_width
    }

    fn fill_text(
        &mut self,
        text: &str,
        at: Point,
        max_width: Option<f64>,
    ) -> anyhow::Result<()> {
        self.record(Command::FillText {
            text: text.to_string(),
            at,
            max_width,
        });
        Ok(())
    }

    fn stroke_text(
        &mut self,
        text: &str,
        at: Point,
        max_width: Option<f64>,
    ) -> anyhow::Result<()> {
        self.record(Command::StrokeText {
            text: text.to_string(),
            at,
            max_width,
        });
        Ok(())
    }

    fn is_point_in_path(&mut self, pt: Point, rule: FillRule) -> bool {
        self.record(Command::HitPath(None, pt, rule));
        false
    }

    fn is_point_in_path_of(&mut self, path: &PathCommands, pt: Point, rule: FillRule) -> bool {
        self.record(Command::HitPath(Some(path.clone()), pt, rule));
        false
    }

    fn is_point_in_stroke(&mut self, pt: Point) -> bool {
        self.record(Command::HitStroke(None, pt));
        false
    }

    fn is_point_in_stroke_of(&mut self, path: &PathCommands, pt: Point) -> bool {
        self.record(Command::HitStroke(Some(path.clone()), pt));
        false
    }
}
