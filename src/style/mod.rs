//! Drawing style attributes and their translation to native canvas names.

mod composite;
mod paint;

pub use composite::*;
pub use paint::*;

use crate::{Error, Result};
use clamped::Clamp;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Recognized style keys. Parsing accepts the short key names (`"fill"`,
/// `"shadowX"`, ...); [`StyleKey::native_name`] gives the canvas attribute.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum StyleKey {
    Fill,
    Stroke,
    Width,
    Cap,
    Miters,
    Join,
    Baseline,
    Align,
    Direction,
    Composite,
    Alpha,
    Font,
    Shadow,
    #[strum(serialize = "shadowBlur")]
    ShadowBlur,
    #[strum(serialize = "shadowX")]
    ShadowX,
    #[strum(serialize = "shadowY")]
    ShadowY,
    Smoothing,
    Smooth,
}

impl StyleKey {
    pub fn native_name(self) -> &'static str {
        match self {
            StyleKey::Fill => "fillStyle",
            StyleKey::Stroke => "strokeStyle",
            StyleKey::Width => "lineWidth",
            StyleKey::Cap => "lineCap",
            StyleKey::Miters => "miterLimit",
            StyleKey::Join => "lineJoin",
            StyleKey::Baseline => "textBaseline",
            StyleKey::Align => "textAlign",
            StyleKey::Direction => "direction",
            StyleKey::Composite => "globalCompositeOperation",
            StyleKey::Alpha => "globalAlpha",
            StyleKey::Font => "font",
            StyleKey::Shadow => "shadowColor",
            StyleKey::ShadowBlur => "shadowBlur",
            StyleKey::ShadowX => "shadowOffsetX",
            StyleKey::ShadowY => "shadowOffsetY",
            StyleKey::Smoothing => "imageSmoothingQuality",
            StyleKey::Smooth => "imageSmoothingEnabled",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LineJoin {
    Bevel,
    Round,
    #[default]
    Miter,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextAlign {
    Left,
    Right,
    Center,
    #[default]
    Start,
    End,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TextDirection {
    Ltr,
    Rtl,
    #[default]
    Inherit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum SmoothingQuality {
    #[default]
    Low,
    Medium,
    High,
}

/// Fill rule for filling, clipping and hit testing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

pub const DEFAULT_FONT: &str = "10px sans-serif";

/// One style attribute together with its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Fill(Paint),
    Stroke(Paint),
    Width(f64),
    Cap(LineCap),
    Miters(f64),
    Join(LineJoin),
    Baseline(TextBaseline),
    Align(TextAlign),
    Direction(TextDirection),
    Composite(CompositeOperation),
    /// Clamped to `0.0..=1.0` by [`Style::alpha`] and when set on a canvas.
    Alpha(f64),
    Font(String),
    Shadow(Color),
    ShadowBlur(f64),
    ShadowX(f64),
    ShadowY(f64),
    Smoothing(SmoothingQuality),
    Smooth(bool),
}

impl Style {
    pub fn alpha(value: f64) -> Style {
        Style::Alpha(value.clamped(0.0, 1.0))
    }

    pub fn key(&self) -> StyleKey {
        match self {
            Style::Fill(_) => StyleKey::Fill,
            Style::Stroke(_) => StyleKey::Stroke,
            Style::Width(_) => StyleKey::Width,
            Style::Cap(_) => StyleKey::Cap,
            Style::Miters(_) => StyleKey::Miters,
            Style::Join(_) => StyleKey::Join,
            Style::Baseline(_) => StyleKey::Baseline,
            Style::Align(_) => StyleKey::Align,
            Style::Direction(_) => StyleKey::Direction,
            Style::Composite(_) => StyleKey::Composite,
            Style::Alpha(_) => StyleKey::Alpha,
            Style::Font(_) => StyleKey::Font,
            Style::Shadow(_) => StyleKey::Shadow,
            Style::ShadowBlur(_) => StyleKey::ShadowBlur,
            Style::ShadowX(_) => StyleKey::ShadowX,
            Style::ShadowY(_) => StyleKey::ShadowY,
            Style::Smoothing(_) => StyleKey::Smoothing,
            Style::Smooth(_) => StyleKey::Smooth,
        }
    }

    /// The value a fresh 2D context starts with.
    pub fn default_for(key: StyleKey) -> Style {
        match key {
            StyleKey::Fill => Style::Fill(Paint::default()),
            StyleKey::Stroke => Style::Stroke(Paint::default()),
            StyleKey::Width => Style::Width(1.0),
            StyleKey::Cap => Style::Cap(LineCap::default()),
            StyleKey::Miters => Style::Miters(10.0),
            StyleKey::Join => Style::Join(LineJoin::default()),
            StyleKey::Baseline => Style::Baseline(TextBaseline::default()),
            StyleKey::Align => Style::Align(TextAlign::default()),
            StyleKey::Direction => Style::Direction(TextDirection::default()),
            StyleKey::Composite => Style::Composite(CompositeOperation::default()),
            StyleKey::Alpha => Style::Alpha(1.0),
            StyleKey::Font => Style::Font(DEFAULT_FONT.to_string()),
            StyleKey::Shadow => Style::Shadow(Color::TRANSPARENT),
            StyleKey::ShadowBlur => Style::ShadowBlur(0.0),
            StyleKey::ShadowX => Style::ShadowX(0.0),
            StyleKey::ShadowY => Style::ShadowY(0.0),
            StyleKey::Smoothing => Style::Smoothing(SmoothingQuality::default()),
            StyleKey::Smooth => Style::Smooth(true),
        }
    }

    /// Parses the textual form of a value for `key`, as a canvas would accept
    /// it when assigned to the native attribute.
    pub fn parse(key: StyleKey, value: &str) -> Result<Style> {
        let invalid = || Error::InvalidStyleValue {
            key,
            value: value.to_string(),
        };
        let text = value.trim();
        let number = || text.parse::<f64>().map_err(|_| invalid());
        let color = || Color::from_str(text).map_err(|_| invalid());
        let style = match key {
            StyleKey::Fill => Style::Fill(color()?.into()),
            StyleKey::Stroke => Style::Stroke(color()?.into()),
            StyleKey::Width => Style::Width(number()?),
            StyleKey::Cap => Style::Cap(text.parse().map_err(|_| invalid())?),
            StyleKey::Miters => Style::Miters(number()?),
            StyleKey::Join => Style::Join(text.parse().map_err(|_| invalid())?),
            StyleKey::Baseline => Style::Baseline(text.parse().map_err(|_| invalid())?),
            StyleKey::Align => Style::Align(text.parse().map_err(|_| invalid())?),
            StyleKey::Direction => Style::Direction(text.parse().map_err(|_| invalid())?),
            StyleKey::Composite => Style::Composite(text.parse().map_err(|_| invalid())?),
            StyleKey::Alpha => Style::alpha(number()?),
            StyleKey::Font => Style::Font(text.to_string()),
            StyleKey::Shadow => Style::Shadow(color()?),
            StyleKey::ShadowBlur => Style::ShadowBlur(number()?),
            StyleKey::ShadowX => Style::ShadowX(number()?),
            StyleKey::ShadowY => Style::ShadowY(number()?),
            StyleKey::Smoothing => Style::Smoothing(text.parse().map_err(|_| invalid())?),
            StyleKey::Smooth => Style::Smooth(text.parse().map_err(|_| invalid())?),
        };
        Ok(style)
    }
}

/// The style values explicitly set on a canvas. Keys never set fall back to
/// [`Style::default_for`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoration {
    values: BTreeMap<StyleKey, Style>,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StyleKey) -> Option<&Style> {
        self.values.get(&key)
    }

    /// Current value of `key`, or its default when it was never set.
    pub fn value(&self, key: StyleKey) -> Style {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| Style::default_for(key))
    }

    /// Stores `style`, returning the value it replaces.
    pub fn set(&mut self, style: Style) -> Option<Style> {
        self.values.insert(style.key(), style)
    }

    pub fn remove(&mut self, key: StyleKey) -> Option<Style> {
        self.values.remove(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Style> {
        self.values.values()
    }

    pub fn width(&self) -> f64 {
        match self.get(StyleKey::Width) {
            Some(Style::Width(w)) => *w,
            _ => 1.0,
        }
    }

    pub fn align(&self) -> TextAlign {
        match self.get(StyleKey::Align) {
            Some(Style::Align(a)) => *a,
            _ => TextAlign::default(),
        }
    }

    pub fn font(&self) -> &str {
        match self.get(StyleKey::Font) {
            Some(Style::Font(f)) => f.as_str(),
            _ => DEFAULT_FONT,
        }
    }
}

impl FromIterator<Style> for Decoration {
    fn from_iter<I: IntoIterator<Item = Style>>(iter: I) -> Self {
        let mut decoration = Decoration::new();
        for style in iter {
            decoration.set(style);
        }
        decoration
    }
}

#[cfg(test)]
mod tests;
