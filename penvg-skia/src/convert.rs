//! Mapping of penvg values onto tiny-skia ones.

use penvg::{
    Color, CompositeOperation as Op, FillRule, LineCap, LineJoin, Matrix, Point, SmoothingQuality,
};
use tiny_skia::{BlendMode, FilterQuality, Transform};

pub(crate) fn transform(m: Matrix) -> Transform {
    let [a, b, c, d, e, f] = m.coefficients();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

pub(crate) fn point(p: Point) -> tiny_skia::Point {
    tiny_skia::Point::from_xy(p.x as f32, p.y as f32)
}

pub(crate) fn color(c: Color, alpha: f32) -> tiny_skia::Color {
    let [r, g, b, a] = c.to_rgba8();
    let mut color = tiny_skia::Color::from_rgba8(r, g, b, a);
    if alpha < 1.0 {
        color.apply_opacity(alpha);
    }
    color
}

pub(crate) fn fill_rule(rule: FillRule) -> tiny_skia::FillRule {
    match rule {
        FillRule::NonZero => tiny_skia::FillRule::Winding,
        FillRule::EvenOdd => tiny_skia::FillRule::EvenOdd,
    }
}

pub(crate) fn line_cap(cap: LineCap) -> tiny_skia::LineCap {
    match cap {
        LineCap::Butt => tiny_skia::LineCap::Butt,
        LineCap::Round => tiny_skia::LineCap::Round,
        LineCap::Square => tiny_skia::LineCap::Square,
    }
}

pub(crate) fn line_join(join: LineJoin) -> tiny_skia::LineJoin {
    match join {
        LineJoin::Miter => tiny_skia::LineJoin::Miter,
        LineJoin::Round => tiny_skia::LineJoin::Round,
        LineJoin::Bevel => tiny_skia::LineJoin::Bevel,
    }
}

pub(crate) fn filter_quality(smooth: bool, quality: SmoothingQuality) -> FilterQuality {
    if !smooth {
        return FilterQuality::Nearest;
    }
    match quality {
        SmoothingQuality::Low | SmoothingQuality::Medium => FilterQuality::Bilinear,
        SmoothingQuality::High => FilterQuality::Bicubic,
    }
}

pub(crate) fn blend_mode(op: Op) -> BlendMode {
    match op {
        Op::SourceOver => BlendMode::SourceOver,
        Op::SourceIn => BlendMode::SourceIn,
        Op::SourceOut => BlendMode::SourceOut,
        Op::SourceAtop => BlendMode::SourceAtop,
        Op::DestinationOver => BlendMode::DestinationOver,
        Op::DestinationIn => BlendMode::DestinationIn,
        Op::DestinationOut => BlendMode::DestinationOut,
        Op::DestinationAtop => BlendMode::DestinationAtop,
        Op::Lighter => BlendMode::Plus,
        Op::Copy => BlendMode::Source,
        Op::Xor => BlendMode::Xor,
        Op::Multiply => BlendMode::Multiply,
        Op::Screen => BlendMode::Screen,
        Op::Overlay => BlendMode::Overlay,
        Op::Darken => BlendMode::Darken,
        Op::Lighten => BlendMode::Lighten,
        Op::ColorDodge => BlendMode::ColorDodge,
        Op::ColorBurn => BlendMode::ColorBurn,
        Op::HardLight => BlendMode::HardLight,
        Op::SoftLight => BlendMode::SoftLight,
        Op::Difference => BlendMode::Difference,
        Op::Exclusion => BlendMode::Exclusion,
        Op::Hue => BlendMode::Hue,
        Op::Saturation => BlendMode::Saturation,
        Op::Color => BlendMode::Color,
        Op::Luminosity => BlendMode::Luminosity,
    }
}

/// Pixel size from a CSS font shorthand such as `"bold 12px serif"`.
pub(crate) fn font_size(font: &str) -> f64 {
    font.split_whitespace()
        .find_map(|token| token.strip_suffix("px")?.parse::<f64>().ok())
        .unwrap_or(10.0)
}
