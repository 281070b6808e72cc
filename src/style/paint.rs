use crate::math::Point;
use clamped::Clamp;
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    pub fn rgb_i(r: u8, g: u8, b: u8) -> Color {
        Color::rgba_i(r, g, b, 255)
    }

    pub fn rgba_i(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn gray(v: f32) -> Color {
        Color::rgb(v, v, v)
    }

    pub fn with_alpha(self, a: f32) -> Color {
        Color {
            a: a.clamped(0.0, 1.0),
            ..self
        }
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamped(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Parses any CSS color syntax: names, hex, `rgb()`, `hsl()` and so on.
impl FromStr for Color {
    type Err = csscolorparser::ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [r, g, b, a] = csscolorparser::parse(s)?.to_rgba8();
        Ok(Color::rgba_i(r, g, b, a))
    }
}

/// CSS `rgba()` notation, the form a canvas reports back for colors.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({}, {}, {}, {})", r, g, b, self.a.clamped(0.0, 1.0))
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// Two-circle radial gradient in the local coordinates current at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub start: Point,
    pub start_radius: f64,
    pub end: Point,
    pub end_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl Gradient {
    pub fn radial(start: Point, start_radius: f64, end: Point, end_radius: f64) -> Gradient {
        Gradient {
            start,
            start_radius,
            end,
            end_radius,
            stops: Vec::new(),
        }
    }

    /// Inserts a stop keeping the list ordered by offset; `offset` is clamped
    /// to `0.0..=1.0` and equal offsets keep insertion order.
    pub fn add_color_stop(&mut self, offset: f64, color: Color) -> &mut Self {
        let offset = offset.clamped(0.0, 1.0);
        let at = self.stops.partition_point(|s| s.offset <= offset);
        self.stops.insert(at, ColorStop { offset, color });
        self
    }

    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_color_stop(offset, color);
        self
    }
}

/// Value of the `fill` and `stroke` styles.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(Color),
    Gradient(Gradient),
}

impl Default for Paint {
    fn default() -> Self {
        Paint::Color(Color::BLACK)
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Color(color)
    }
}

impl From<Gradient> for Paint {
    fn from(gradient: Gradient) -> Self {
        Paint::Gradient(gradient)
    }
}
