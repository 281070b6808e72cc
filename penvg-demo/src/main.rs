use anyhow::Result;
use clap::{Parser, ValueEnum};
use penvg::{Canvas, Color, Config, Corner, FillRule, Image, ImageFormat, Pen, Style};
use penvg_skia::SkiaSurface;
use std::f64::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Scene {
    Shapes,
    Star,
    Grid,
    Corners,
    Gradient,
    Tiles,
    /// Every scene, one file each
    All,
}

#[derive(Parser)]
#[command(about = "Render penvg demo scenes to image files")]
struct Cli {
    #[arg(value_enum, default_value_t = Scene::Shapes)]
    scene: Scene,
    /// Output file; the extension picks the format
    #[arg(short, long, default_value = "penvg.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 400)]
    width: u32,
    #[arg(long, default_value_t = 300)]
    height: u32,
    /// Device pixels per displayed pixel
    #[arg(long, default_value_t = 1.0)]
    ratio: f64,
}

type DemoCanvas = Canvas<SkiaSurface>;
type Painter = fn(&mut DemoCanvas) -> penvg::Result<()>;

impl Scene {
    fn painter(self) -> Option<Painter> {
        match self {
            Scene::Shapes => Some(shapes),
            Scene::Star => Some(star),
            Scene::Grid => Some(grid),
            Scene::Corners => Some(corners),
            Scene::Gradient => Some(gradient),
            Scene::Tiles => Some(tiles),
            Scene::All => None,
        }
    }
}

fn shapes(c: &mut DemoCanvas) -> penvg::Result<()> {
    c.decore([
        Style::Width(3.0),
        Style::Stroke(Color::rgb(0.1, 0.2, 0.6).into()),
    ])?;
    c.basis();
    c.begin().circle(100.0);
    c.stroke()?;
    c.begin().regular_poly(6, 80.0, 0.0)?;
    c.fill_with(Color::rgba(0.9, 0.5, 0.1, 0.6), FillRule::NonZero)?;
    c.begin().regular_triangle(50.0, -FRAC_PI_2);
    c.fill_with(Color::rgb(0.2, 0.6, 0.3), FillRule::NonZero)?;
    c.begin().move_by((-120, 110)).span((0, 0), (240, 0));
    c.stroke()?;
    Ok(())
}

fn star(c: &mut DemoCanvas) -> penvg::Result<()> {
    c.basis();
    c.decore_str(&[("fill", "gold"), ("stroke", "#443300"), ("width", "2")])?;
    c.begin().move_to((90, -20)).compass(5, 180.0, 2.0, 0.0).close();
    c.fill(FillRule::NonZero)?.stroke()?;
    Ok(())
}

fn grid(c: &mut DemoCanvas) -> penvg::Result<()> {
    let size = c.view();
    c.nook_reset(Corner::TOP_LEFT)?;
    c.set_style(Style::Stroke(Color::gray(0.4).into()))?;
    c.begin()
        .move_to((20, 20))
        .grid((8, 6), (size.width - 40.0, size.height - 40.0), true);
    c.stroke()?;
    Ok(())
}

fn corners(c: &mut DemoCanvas) -> penvg::Result<()> {
    let colors = [
        (Corner::TOP_LEFT, Color::rgb(0.8, 0.1, 0.1)),
        (Corner::TOP_RIGHT, Color::rgb(0.1, 0.6, 0.1)),
        (Corner::BOTTOM_LEFT, Color::rgb(0.1, 0.1, 0.8)),
        (Corner::BOTTOM_RIGHT, Color::rgb(0.6, 0.5, 0.1)),
    ];
    for (corner, color) in colors {
        c.nook_reset(corner)?;
        c.begin().square_at(40.0, (10, 10));
        c.fill_with(color, FillRule::NonZero)?.stroke_with(color)?;
    }
    c.reset();
    Ok(())
}

fn gradient(c: &mut DemoCanvas) -> penvg::Result<()> {
    c.basis();
    let glow = c.radial(120.0, Color::WHITE, Color::rgb(0.05, 0.1, 0.3));
    let view = c.view();
    c.begin().rectangle((-view.width / 2.0, -view.height / 2.0), view);
    c.fill_with(glow, FillRule::NonZero)?;
    c.save().rotate(PI / 8.0);
    c.begin().ellipse((110, 40), 0.0);
    c.stroke_with(Color::rgba(1.0, 1.0, 1.0, 0.7))?;
    c.restore()?;
    Ok(())
}

/// A solid tile with a darker one-pixel border.
fn tile(size: u32, color: Color) -> Image {
    let [r, g, b, a] = color.to_rgba8();
    let mut image = Image::new(size, size);
    for (i, px) in image.data_mut().chunks_exact_mut(4).enumerate() {
        let (x, y) = (i as u32 % size, i as u32 / size);
        let edge = x == 0 || y == 0 || x + 1 == size || y + 1 == size;
        let k = if edge { 2 } else { 1 };
        px.copy_from_slice(&[r / k, g / k, b / k, a]);
    }
    image
}

fn tiles(c: &mut DemoCanvas) -> penvg::Result<()> {
    let rows: Vec<Vec<Image>> = (0..6)
        .map(|row| {
            (0..8)
                .map(|col| tile(32, Color::gray(0.3 + 0.08 * ((row + col) % 8) as f32)))
                .collect()
        })
        .collect();
    c.reset().move_to((20, 20));
    c.tiles(&rows, 36.0, (0, 0))?;
    Ok(())
}

fn render(scene: Scene, paint: Painter, cli: &Cli, output: &Path) -> Result<()> {
    let surface = SkiaSurface::new(cli.width, cli.height)?;
    let config = Config::default().with_size((cli.width, cli.height));
    let mut canvas = Canvas::with_config(surface, config)?;
    canvas.set_hard((cli.ratio, cli.ratio))?;
    canvas.set_style(Style::Fill(Color::WHITE.into()))?;
    let view = canvas.view();
    canvas.begin().rectangle_at((0, 0), view);
    canvas.fill(FillRule::NonZero)?;
    canvas.set_style(Style::Fill(Color::BLACK.into()))?;

    paint(&mut canvas)?;

    let format = ImageFormat::from_path(output)?;
    std::fs::write(output, canvas.export(format)?)?;
    log::info!("{:?} written to {}", scene, output.display());
    Ok(())
}

/// `out.png` becomes `out-shapes.png` and so on.
fn scene_path(output: &Path, scene: Scene) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "penvg".to_string());
    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "png".to_string());
    let name = format!("{}-{:?}.{}", stem, scene, ext).to_lowercase();
    output.with_file_name(name)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.scene.painter() {
        Some(paint) => render(cli.scene, paint, &cli, &cli.output),
        None => {
            for &scene in Scene::value_variants() {
                if let Some(paint) = scene.painter() {
                    render(scene, paint, &cli, &scene_path(&cli.output, scene))?;
                }
            }
            Ok(())
        }
    }
}
