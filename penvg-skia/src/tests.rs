use super::*;
use penvg::{Canvas, Color, FillRule, ImageFormat, ImageOptions, Path, PathCommands, Pen, Style};

const RED: [u8; 4] = [255, 0, 0, 255];
const CLEAR: [u8; 4] = [0, 0, 0, 0];

fn canvas() -> Canvas<SkiaSurface> {
    Canvas::create(SkiaSurface::new(64, 48).unwrap()).unwrap()
}

fn pixel(canvas: &Canvas<SkiaSurface>, x: u32, y: u32) -> [u8; 4] {
    canvas.surface().to_image().pixel(x, y).unwrap()
}

fn red() -> Color {
    Color::rgb_i(255, 0, 0)
}

#[test]
fn test_fill_rectangle() {
    let mut c = canvas();
    c.begin().rectangle_at((10, 10), (20, 20));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 15, 15), RED);
    assert_eq!(pixel(&c, 5, 5), CLEAR);
    assert_eq!(pixel(&c, 30, 30), CLEAR);
}

#[test]
fn test_fill_follows_transform() {
    let mut c = canvas();
    c.translate((20, 10)).scale((2, 2));
    c.begin().rectangle_at((0, 0), (5, 5));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 21, 11), RED);
    assert_eq!(pixel(&c, 29, 19), RED);
    assert_eq!(pixel(&c, 31, 21), CLEAR);
    assert_eq!(pixel(&c, 19, 9), CLEAR);
}

#[test]
fn test_path_keeps_points_of_earlier_transform() {
    let mut c = canvas();
    c.begin().rectangle_at((0, 0), (4, 4));
    c.translate((40, 0));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 2, 2), RED);
    assert_eq!(pixel(&c, 42, 2), CLEAR);
}

#[test]
fn test_stroke_width() {
    let mut c = canvas();
    c.set_style(Style::Width(4.0)).unwrap();
    c.begin().move_to((0, 20)).line_to((64, 20));
    c.stroke_with(red()).unwrap();
    assert_eq!(pixel(&c, 30, 19), RED);
    assert_eq!(pixel(&c, 30, 20), RED);
    assert_eq!(pixel(&c, 30, 24), CLEAR);
}

#[test]
fn test_fill_circle() {
    let mut c = canvas();
    c.begin().circle_at((32, 24), 10.0);
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 32, 24), RED);
    assert_eq!(pixel(&c, 38, 24), RED);
    assert_eq!(pixel(&c, 32, 36), CLEAR);
    assert_eq!(pixel(&c, 40, 32), CLEAR);
}

#[test]
fn test_clip_and_restore() {
    let mut c = canvas();
    c.save();
    c.begin().rectangle_at((0, 0), (32, 48));
    c.clip(FillRule::NonZero).unwrap();
    c.begin().rectangle_at((0, 0), (64, 48));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 10, 10), RED);
    assert_eq!(pixel(&c, 50, 10), CLEAR);

    c.restore().unwrap();
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 50, 10), RED);
}

#[test]
fn test_clear_rect() {
    let mut c = canvas();
    c.begin().rectangle_at((0, 0), (64, 48));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    c.clear_at((10, 10), (5, 5)).unwrap();
    assert_eq!(pixel(&c, 12, 12), CLEAR);
    assert_eq!(pixel(&c, 20, 20), RED);
    c.clear_all().unwrap();
    assert!(c.bounds().unwrap().is_none());
}

#[test]
fn test_even_odd() {
    let mut c = canvas();
    c.begin()
        .rectangle_at((0, 0), (30, 30))
        .rectangle_at((10, 10), (10, 10));
    c.fill_with(red(), FillRule::EvenOdd).unwrap();
    assert_eq!(pixel(&c, 5, 5), RED);
    assert_eq!(pixel(&c, 15, 15), CLEAR);
}

#[test]
fn test_hit_tests() {
    let mut c = canvas();
    c.translate((10, 10));
    c.begin().rectangle_at((0, 0), (20, 10));
    assert!(c.contains((5, 5)));
    assert!(c.contains_absolute((15, 15)));
    assert!(!c.contains((25, 5)));

    let mut path = Path::new(PathCommands::new());
    path.move_to((0, 30)).line_to((40, 30));
    c.set_style(Style::Width(4.0)).unwrap();
    assert!(c.stroke_contains_in(&path, (20, 31)));
    assert!(!c.stroke_contains_in(&path, (20, 35)));
    assert!(!c.contains_in(&path, (20, 30), FillRule::NonZero));
}

#[test]
fn test_draw_image_scaled() {
    let mut c = canvas();
    let mut image = Image::new(2, 2);
    for px in image.data_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&RED);
    }
    c.set_style(Style::Smooth(false)).unwrap();
    c.image_at(&image, ImageOptions::at((10, 10)).with_size((20, 20)))
        .unwrap();
    assert_eq!(pixel(&c, 20, 20), RED);
    assert_eq!(pixel(&c, 35, 35), CLEAR);
    let bounds = c.bounds().unwrap().unwrap();
    assert_eq!(bounds.left_top(), penvg::Point::new(10.0, 10.0));
    assert_eq!(bounds.right_bottom(), penvg::Point::new(30.0, 30.0));
}

#[test]
fn test_pixels_and_trim() {
    let mut c = canvas();
    c.begin().rectangle_at((8, 4), (6, 3));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    let pixels = c.pixels_at(Some((4, 4).into()), (6, 2)).unwrap();
    assert_eq!(pixels.pixel(0, 0), Some(CLEAR));
    assert_eq!(pixels.pixel(2, 2), Some(RED));
    let trimmed = c.trim().unwrap().unwrap();
    assert_eq!((trimmed.width(), trimmed.height()), (6, 3));
}

#[test]
fn test_pixels_outside_view_are_transparent() {
    let mut c = canvas();
    c.begin().rectangle_at((0, 0), (64, 48));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    let pixels = c.pixels_at(Some((4, 4).into()), (62, 46)).unwrap();
    assert_eq!(pixels.pixel(1, 1), Some(RED));
    assert_eq!(pixels.pixel(3, 3), Some(CLEAR));
}

#[test]
fn test_export_png() {
    let mut c = canvas();
    c.begin().circle_at((10, 10), 5.0);
    c.fill(FillRule::NonZero).unwrap();
    let png = c.export(ImageFormat::Png).unwrap();
    let decoded = Image::decode(png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (64, 48));
    assert_eq!(decoded.pixel(10, 10), Some([0, 0, 0, 255]));
}

#[test]
fn test_resize() {
    let mut c = canvas();
    c.set_view((32, 16)).unwrap();
    assert_eq!(c.surface().pixmap().width(), 32);
    assert_eq!(c.view(), (32, 16).into());
}

#[test]
fn test_measure_text() {
    let mut c = canvas();
    assert_eq!(c.measure("abcd"), 20.0);
    c.set_style(Style::Font("bold 20px serif".into())).unwrap();
    assert_eq!(c.measure("abcd"), 40.0);
}

#[test_log::test]
fn test_text_is_rejected() {
    let mut c = canvas();
    c.move_to((10, 10));
    assert!(matches!(
        c.fill_text("hello", None),
        Err(penvg::Error::Surface(_))
    ));
    assert!(matches!(
        c.stroke_text_to("hello", (5, 5), Some(20.0)),
        Err(penvg::Error::Surface(_))
    ));
    c.set_style(Style::Align(penvg::TextAlign::Left)).unwrap();
    assert!(c.text_block("hello world", penvg::TextLayout::new(40.0, 12.0)).is_err());
    assert!(c.bounds().unwrap().is_none());
}

#[test_log::test]
fn test_shadow_styles_are_accepted() {
    let mut c = canvas();
    c.shadow(Color::BLACK, (2, 2), 4.0).unwrap();
    c.begin().rectangle_at((10, 10), (4, 4));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 11, 11), RED);
    assert_eq!(pixel(&c, 15, 15), CLEAR);
}

#[test]
fn test_destination_out() {
    let mut c = canvas();
    c.begin().rectangle_at((0, 0), (20, 20));
    c.fill_with(red(), FillRule::NonZero).unwrap();
    c.decore_str(&[("composite", "destination-out")]).unwrap();
    c.begin().rectangle_at((0, 0), (10, 10));
    c.fill(FillRule::NonZero).unwrap();
    assert_eq!(pixel(&c, 5, 5), CLEAR);
    assert_eq!(pixel(&c, 15, 15), RED);
}

#[test]
fn test_radial_gradient_fill() {
    let mut c = canvas();
    c.move_to((32, 24));
    let gradient = c.radial(20.0, Color::WHITE, Color::BLACK);
    c.begin().rectangle_at((0, 0), (64, 48));
    c.fill_with(gradient, FillRule::NonZero).unwrap();
    let center = pixel(&c, 32, 24);
    let edge = pixel(&c, 50, 24);
    assert!(center[0] > 200);
    assert!(edge[0] < center[0]);
    assert_eq!(edge[3], 255);
}

#[test]
fn test_from_image() {
    let mut image = Image::new(3, 3);
    image.data_mut()[..4].copy_from_slice(&RED);
    let surface = SkiaSurface::from_image(&image).unwrap();
    assert_eq!(surface.to_image(), image);
}
