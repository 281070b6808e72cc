use penvg::{
    CompositeOperation, LineCap, LineJoin, Matrix, Paint, SmoothingQuality, Style, TextAlign,
    DEFAULT_FONT,
};
use tiny_skia::Mask;

/// Everything `save`/`restore` push and pop.
#[derive(Clone)]
pub(crate) struct DrawingState {
    pub fill: Paint,
    pub stroke: Paint,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f64,
    pub alpha: f64,
    pub composite: CompositeOperation,
    pub font: String,
    pub align: TextAlign,
    pub smooth: bool,
    pub smoothing: SmoothingQuality,
    pub matrix: Matrix,
    /// Device-space clip coverage; `None` when nothing is clipped.
    pub clip: Option<Mask>,
}

impl Default for DrawingState {
    fn default() -> Self {
        DrawingState {
            fill: Paint::default(),
            stroke: Paint::default(),
            width: 1.0,
            cap: LineCap::default(),
            join: LineJoin::default(),
            miter_limit: 10.0,
            alpha: 1.0,
            composite: CompositeOperation::default(),
            font: DEFAULT_FONT.to_string(),
            align: TextAlign::default(),
            smooth: true,
            smoothing: SmoothingQuality::default(),
            matrix: Matrix::identity(),
            clip: None,
        }
    }
}

impl DrawingState {
    /// Applies `style`. Out-of-range numbers are ignored like a canvas
    /// context ignores them; styles with no raster effect here are accepted
    /// and dropped.
    pub fn apply(&mut self, style: &Style) {
        match style {
            Style::Fill(paint) => self.fill = paint.clone(),
            Style::Stroke(paint) => self.stroke = paint.clone(),
            Style::Width(w) if w.is_finite() && *w > 0.0 => self.width = *w,
            Style::Miters(m) if m.is_finite() && *m > 0.0 => self.miter_limit = *m,
            Style::Cap(cap) => self.cap = *cap,
            Style::Join(join) => self.join = *join,
            Style::Alpha(a) => self.alpha = *a,
            Style::Composite(op) => self.composite = *op,
            Style::Font(font) => self.font = font.clone(),
            Style::Align(align) => self.align = *align,
            Style::Smooth(smooth) => self.smooth = *smooth,
            Style::Smoothing(quality) => self.smoothing = *quality,
            Style::Width(_) | Style::Miters(_) => {
                log::debug!("ignoring out of range {:?}", style);
            }
            Style::Shadow(color) if color.a > 0.0 => {
                log::warn!("shadows are not rendered, ignoring {:?}", style);
            }
            Style::ShadowBlur(v) | Style::ShadowX(v) | Style::ShadowY(v) if *v != 0.0 => {
                log::warn!("shadows are not rendered, ignoring {:?}", style);
            }
            Style::Baseline(_)
            | Style::Direction(_)
            | Style::Shadow(_)
            | Style::ShadowBlur(_)
            | Style::ShadowX(_)
            | Style::ShadowY(_) => {
                log::trace!("{:?} has no effect on this surface", style);
            }
        }
    }

    /// Mean axis scale of the transform; line widths are given in local units.
    pub fn line_scale(&self) -> f64 {
        let [a, b, c, d, _, _] = self.matrix.coefficients();
        ((a * a + b * b).sqrt() + (c * c + d * d).sqrt()) / 2.0
    }
}
