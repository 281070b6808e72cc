use super::*;
use crate::math::Point;
use strum::IntoEnumIterator;
use test_case::test_case;

#[test_case("fill", StyleKey::Fill, "fillStyle")]
#[test_case("width", StyleKey::Width, "lineWidth")]
#[test_case("miters", StyleKey::Miters, "miterLimit")]
#[test_case("composite", StyleKey::Composite, "globalCompositeOperation")]
#[test_case("shadowBlur", StyleKey::ShadowBlur, "shadowBlur")]
#[test_case("shadowX", StyleKey::ShadowX, "shadowOffsetX")]
#[test_case("smooth", StyleKey::Smooth, "imageSmoothingEnabled")]
fn key_names(name: &str, key: StyleKey, native: &str) {
    assert_eq!(name.parse::<StyleKey>().unwrap(), key);
    assert_eq!(key.to_string(), name);
    assert_eq!(key.native_name(), native);
}

#[test]
fn unknown_key_does_not_parse() {
    assert!("colour".parse::<StyleKey>().is_err());
}

#[test]
fn every_default_matches_its_key() {
    for key in StyleKey::iter() {
        assert_eq!(Style::default_for(key).key(), key);
    }
}

#[test]
fn parse_values() {
    assert_eq!(
        Style::parse(StyleKey::Fill, "red").unwrap(),
        Style::Fill(Paint::Color(Color::rgb(1.0, 0.0, 0.0)))
    );
    assert_eq!(
        Style::parse(StyleKey::Width, " 2.5 ").unwrap(),
        Style::Width(2.5)
    );
    assert_eq!(
        Style::parse(StyleKey::Cap, "round").unwrap(),
        Style::Cap(LineCap::Round)
    );
    assert_eq!(
        Style::parse(StyleKey::Composite, "color-dodge").unwrap(),
        Style::Composite(CompositeOperation::ColorDodge)
    );
    assert_eq!(
        Style::parse(StyleKey::Smooth, "false").unwrap(),
        Style::Smooth(false)
    );
}

#[test_case("2" ; "above range")]
#[test_case("-0.5" ; "below range")]
fn alpha_is_clamped(value: &str) {
    match Style::parse(StyleKey::Alpha, value).unwrap() {
        Style::Alpha(a) => assert!((0.0..=1.0).contains(&a)),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn invalid_value_reports_key() {
    let err = Style::parse(StyleKey::Join, "pointy").unwrap_err();
    match err {
        Error::InvalidStyleValue { key, value } => {
            assert_eq!(key, StyleKey::Join);
            assert_eq!(value, "pointy");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn decoration_falls_back_to_defaults() {
    let mut deco = Decoration::new();
    assert_eq!(deco.value(StyleKey::Width), Style::Width(1.0));
    assert_eq!(deco.font(), DEFAULT_FONT);

    assert_eq!(deco.set(Style::Width(4.0)), None);
    assert_eq!(deco.set(Style::Width(6.0)), Some(Style::Width(4.0)));
    assert_eq!(deco.width(), 6.0);
    assert_eq!(deco.len(), 1);
}

#[test]
fn composite_categories() {
    assert!(!CompositeOperation::Xor.is_blend_mode());
    assert!(CompositeOperation::Multiply.is_blend_mode());
    assert_eq!(CompositeOperation::default().to_string(), "source-over");
}

#[test]
fn color_parsing_and_display() {
    let c: Color = "#ff000080".parse().unwrap();
    assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
    assert_eq!(Color::rgb_i(0, 128, 255).to_string(), "rgba(0, 128, 255, 1)");
    assert!("not-a-color".parse::<Color>().is_err());
}

#[test]
fn gradient_stops_stay_ordered() {
    let mut g = Gradient::radial(Point::ZERO, 0.0, Point::ZERO, 10.0);
    g.add_color_stop(1.0, Color::WHITE)
        .add_color_stop(0.0, Color::BLACK)
        .add_color_stop(0.5, Color::gray(0.5))
        .add_color_stop(7.0, Color::TRANSPARENT);
    let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0, 1.0]);
    assert_eq!(g.stops[3].color, Color::TRANSPARENT);
}
