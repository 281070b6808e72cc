use super::Canvas;
use crate::math::Point;
use crate::pen::Pen;
use crate::style::TextAlign;
use crate::surface::Surface;
use crate::{Error, Result};

/// Box for [`Canvas::text_block`]: lines wrap at `width` and are
/// `line_height` apart.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextLayout {
    pub width: f64,
    pub line_height: f64,
}

impl TextLayout {
    pub fn new(width: f64, line_height: f64) -> Self {
        TextLayout { width, line_height }
    }
}

impl<S: Surface> Canvas<S> {
    /// Advance width of `text` in the current font.
    pub fn measure(&mut self, text: &str) -> f64 {
        self.surface_mut().measure_text(text)
    }

    pub fn fill_text(&mut self, text: &str, max_width: Option<f64>) -> Result<&mut Self> {
        let at = self.pointer();
        self.fill_text_to(text, at, max_width)
    }

    pub fn fill_text_by(
        &mut self,
        text: &str,
        offset: impl Into<Point>,
        max_width: Option<f64>,
    ) -> Result<&mut Self> {
        let offset: Point = offset.into();
        let at = self.pointer() + offset;
        self.fill_text_to(text, at, max_width)
    }

    pub fn fill_text_to(
        &mut self,
        text: &str,
        point: impl Into<Point>,
        max_width: Option<f64>,
    ) -> Result<&mut Self> {
        self.surface_mut().fill_text(text, point.into(), max_width)?;
        Ok(self)
    }

    pub fn stroke_text(&mut self, text: &str, max_width: Option<f64>) -> Result<&mut Self> {
        let at = self.pointer();
        self.stroke_text_to(text, at, max_width)
    }

    pub fn stroke_text_by(
        &mut self,
        text: &str,
        offset: impl Into<Point>,
        max_width: Option<f64>,
    ) -> Result<&mut Self> {
        let offset: Point = offset.into();
        let at = self.pointer() + offset;
        self.stroke_text_to(text, at, max_width)
    }

    pub fn stroke_text_to(
        &mut self,
        text: &str,
        point: impl Into<Point>,
        max_width: Option<f64>,
    ) -> Result<&mut Self> {
        self.surface_mut().stroke_text(text, point.into(), max_width)?;
        Ok(self)
    }

    /// Splits `text` into lines no wider than `width`. Breaks happen between
    /// words; a word wider than `width` gets a line of its own. Every `'\n'`
    /// starts a new paragraph.
    pub fn wrap_text(&mut self, text: &str, width: f64) -> Vec<String> {
        let mut lines = Vec::new();
        for paragraph in text.split('\n') {
            let mut line = String::new();
            for word in paragraph.split_whitespace() {
                if line.is_empty() {
                    line.push_str(word);
                    continue;
                }
                let candidate = format!("{} {}", line, word);
                if self.measure(&candidate) <= width {
                    line = candidate;
                } else {
                    lines.push(std::mem::replace(&mut line, word.to_string()));
                }
            }
            lines.push(line);
        }
        lines
    }

    /// Wrapped, filled text starting at the pointer. See
    /// [`text_block_to`](Self::text_block_to) for the alignment rules.
    pub fn text_block(&mut self, text: &str, layout: TextLayout) -> Result<&mut Self> {
        let at = self.pointer();
        self.text_block_to(at, text, layout)
    }

    /// Wrapped, filled text in the box at `point`. Lines are anchored on the
    /// left edge, the right edge or the middle of the box following the
    /// `align` style; `start` and `end` are rejected.
    ///
    /// `align` starts out as `start`, so a canvas that never set it fails
    /// with [`Error::UnsupportedAlignment`]. Set `Style::Align` to left,
    /// right or center first.
    pub fn text_block_to(
        &mut self,
        point: impl Into<Point>,
        text: &str,
        layout: TextLayout,
    ) -> Result<&mut Self> {
        let point: Point = point.into();
        let x = match self.style.align() {
            TextAlign::Left => point.x,
            TextAlign::Right => point.x + layout.width,
            TextAlign::Center => point.x + layout.width / 2.0,
            align => return Err(Error::UnsupportedAlignment(align)),
        };
        let lines = self.wrap_text(text, layout.width);
        log::trace!("text block of {} lines at {:?}", lines.len(), point);
        for (i, line) in lines.iter().enumerate() {
            let at = Point::new(x, point.y + i as f64 * layout.line_height);
            self.fill_text_to(line, at, None)?;
        }
        Ok(self)
    }
}
