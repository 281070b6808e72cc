//! The user-facing drawing facade.

mod hit;
mod images;
mod paint;
mod text;
mod transform;

pub use images::ImageOptions;
pub use text::TextLayout;

use crate::config::Config;
use crate::math::{Extent, Matrix, Point};
use crate::pen::{Pen, PenContext};
use crate::stack::TransformStack;
use crate::style::{Color, Decoration, Style, StyleKey};
use crate::surface::Surface;
use crate::Result;

bitflags! {
    /// Corner of the view, combined from one vertical and one horizontal flag.
    pub struct Corner: u32 {
        const TOP = 0x1;
        const BOTTOM = 0x2;
        const LEFT = 0x4;
        const RIGHT = 0x8;
        const TOP_LEFT = Self::TOP.bits | Self::LEFT.bits;
        const TOP_RIGHT = Self::TOP.bits | Self::RIGHT.bits;
        const BOTTOM_LEFT = Self::BOTTOM.bits | Self::LEFT.bits;
        const BOTTOM_RIGHT = Self::BOTTOM.bits | Self::RIGHT.bits;
    }
}

/// Pen, transform stack and style state on top of a [`Surface`].
///
/// The canvas keeps the surface transform equal to its own matrix, so path
/// calls can be forwarded in local coordinates. Relative operations take
/// offsets from the pointer; `_to`/`_at` operations take positions in the
/// current local space.
pub struct Canvas<S: Surface> {
    pen: PenContext<S>,
    stack: TransformStack<Decoration>,
    style: Decoration,
    size: Extent,
}

impl<S: Surface> Canvas<S> {
    pub fn create(surface: S) -> Result<Canvas<S>> {
        Self::with_config(surface, Config::default())
    }

    pub fn with_config(mut surface: S, config: Config) -> Result<Canvas<S>> {
        if let Some(view) = config.view {
            surface.resize(view)?;
        }
        let size = config.size.unwrap_or_else(|| surface.view());
        surface.set_transform(Matrix::identity());
        Ok(Canvas {
            pen: PenContext::new(surface),
            stack: TransformStack::new(config.epsilon),
            style: Decoration::new(),
            size,
        })
    }

    pub fn surface(&self) -> &S {
        self.pen.sink()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.pen.sink_mut()
    }

    pub fn into_surface(self) -> S {
        self.pen.into_sink()
    }

    /// Displayed size.
    pub fn size(&self) -> Extent {
        self.size
    }

    /// Drawing buffer size in device pixels.
    pub fn view(&self) -> Extent {
        self.surface().view()
    }

    /// `(size, view)`.
    pub fn port(&self) -> (Extent, Extent) {
        (self.size, self.view())
    }

    /// Device pixel ratio, `view / size` per axis.
    pub fn hard(&self) -> Point {
        Point::from(self.view()).divide(self.size.into())
    }

    /// Center of the view in device pixels.
    pub fn center(&self) -> Point {
        Point::from(self.view()).half()
    }

    /// Distance from the pointer to the far corner of the view.
    pub fn remaining(&self) -> Point {
        Point::from(self.view()) - self.pointer()
    }

    pub fn set_size(&mut self, size: impl Into<Extent>) -> &mut Self {
        self.size = size.into();
        self
    }

    pub fn set_view(&mut self, view: impl Into<Extent>) -> Result<&mut Self> {
        self.surface_mut().resize(view.into())?;
        Ok(self)
    }

    /// Sets both the displayed size and the view.
    pub fn set_port(&mut self, extent: impl Into<Extent>) -> Result<&mut Self> {
        let extent: Extent = extent.into();
        self.set_size(extent).set_view(extent)
    }

    /// Resizes the view to `size * ratio`.
    pub fn set_hard(&mut self, ratio: impl Into<Point>) -> Result<&mut Self> {
        let view = self.size.multiply(ratio.into());
        self.set_view(view)
    }

    pub fn matrix(&self) -> Matrix {
        self.stack.matrix()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn to_local(&self, absolute: impl Into<Point>) -> Result<Point> {
        self.stack.to_local(absolute.into())
    }

    pub fn to_absolute(&self, local: impl Into<Point>) -> Point {
        self.stack.to_absolute(local.into())
    }

    /// Pushes the matrix, pointer and style.
    pub fn save(&mut self) -> &mut Self {
        self.surface_mut().save();
        let pointer = self.pointer();
        self.stack.save(pointer, self.style.clone());
        self
    }

    /// Pops the state pushed by the matching [`save`](Self::save).
    pub fn restore(&mut self) -> Result<&mut Self> {
        let frame = self.stack.restore()?;
        self.surface_mut().restore();
        self.set_pointer(frame.pointer);
        self.style = frame.extra;
        Ok(self)
    }

    /// Unwinds every saved state, resets the transform to identity and puts
    /// the pen on the origin.
    pub fn reset(&mut self) -> &mut Self {
        while self.stack.depth() > 0 {
            if self.restore().is_err() {
                break;
            }
        }
        self.stack.reset();
        self.surface_mut().set_transform(Matrix::identity());
        log::debug!("reset");
        self.zero()
    }

    /// Current decoration, holding only the explicitly set values.
    pub fn style(&self) -> &Decoration {
        &self.style
    }

    /// Current value of `key`, its default when never set.
    pub fn style_value(&self, key: StyleKey) -> Style {
        self.style.value(key)
    }

    /// Applies `style` to the surface and records it. Alpha is clamped to
    /// `0.0..=1.0`.
    pub fn set_style(&mut self, style: Style) -> Result<&mut Self> {
        let style = match style {
            Style::Alpha(a) => Style::alpha(a),
            style => style,
        };
        self.surface_mut().set_style(&style)?;
        self.style.set(style);
        Ok(self)
    }

    pub fn decore<I: IntoIterator<Item = Style>>(&mut self, styles: I) -> Result<&mut Self> {
        for style in styles {
            self.set_style(style)?;
        }
        Ok(self)
    }

    /// String-keyed [`decore`](Self::decore). Unknown keys are skipped; a
    /// value that does not parse for a known key is an error.
    pub fn decore_str<K, V>(&mut self, pairs: &[(K, V)]) -> Result<&mut Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            let key = key.as_ref();
            match key.parse::<StyleKey>() {
                Ok(k) => {
                    self.set_style(Style::parse(k, value.as_ref())?)?;
                }
                Err(_) => log::debug!("ignoring unknown style key {:?}", key),
            }
        }
        Ok(self)
    }

    pub fn shadow(&mut self, color: Color, offset: impl Into<Point>, blur: f64) -> Result<&mut Self> {
        let offset: Point = offset.into();
        self.decore([
            Style::ShadowX(offset.x),
            Style::ShadowY(offset.y),
            Style::ShadowBlur(blur),
            Style::Shadow(color),
        ])
    }

    /// Applies `style` for the duration of `paint`, then puts back the prior
    /// value, or the default when the key was never set.
    fn with_style<F>(&mut self, style: Style, paint: F) -> Result<&mut Self>
    where
        F: FnOnce(&mut S) -> anyhow::Result<()>,
    {
        let key = style.key();
        let prior = self.style.get(key).cloned();
        self.set_style(style)?;
        let painted = paint(self.surface_mut());
        match prior {
            Some(prior) => {
                self.set_style(prior)?;
            }
            None => {
                self.surface_mut().set_style(&Style::default_for(key))?;
                self.style.remove(key);
            }
        }
        painted?;
        Ok(self)
    }
}

impl<S: Surface> Pen for Canvas<S> {
    type Sink = S;

    fn pen(&self) -> &PenContext<S> {
        &self.pen
    }

    fn pen_mut(&mut self) -> &mut PenContext<S> {
        &mut self.pen
    }
}
