//! CPU raster [`Surface`](penvg::Surface) for penvg, drawn with tiny-skia.
//!
//! ```rust,ignore
//! use penvg::{Canvas, Color, FillRule, ImageFormat, Pen};
//! use penvg_skia::SkiaSurface;
//!
//! let mut canvas = Canvas::create(SkiaSurface::new(200, 100)?)?;
//! canvas.begin().circle_at((100, 50), 40.0);
//! canvas.fill_with(Color::rgb(0.8, 0.2, 0.2), FillRule::NonZero)?;
//! let png = canvas.export(ImageFormat::Png)?;
//! ```
//!
//! Text is measured from the font size alone. Drawing text is an error, since
//! no glyphs are rasterized. Shadow styles are accepted with a warning and not
//! rendered, and radial gradients use the end radius only.

mod convert;
mod path;
mod state;
mod surface;

use anyhow::anyhow;
use path::DevicePath;
use penvg::Image;
use state::DrawingState;
use tiny_skia::{ColorU8, Pixmap};

pub struct SkiaSurface {
    pixmap: Pixmap,
    state: DrawingState,
    saved: Vec<DrawingState>,
    path: DevicePath,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> anyhow::Result<SkiaSurface> {
        Ok(SkiaSurface {
            pixmap: new_pixmap(width, height)?,
            state: DrawingState::default(),
            saved: Vec::new(),
            path: DevicePath::new(),
        })
    }

    /// Surface holding a copy of `image`.
    pub fn from_image(image: &Image) -> anyhow::Result<SkiaSurface> {
        let mut surface = Self::new(image.width(), image.height())?;
        surface.pixmap = to_pixmap(image)?;
        Ok(surface)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha copy of the whole surface.
    pub fn to_image(&self) -> Image {
        self.read_pixels(0, 0, self.pixmap.width(), self.pixmap.height())
    }

    /// Straight-alpha pixels of a device rectangle. Pixels outside the
    /// surface read as transparent.
    fn read_pixels(&self, x: i32, y: i32, width: u32, height: u32) -> Image {
        let mut image = Image::new(width, height);
        let (w, h) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        let pixels = self.pixmap.pixels();
        let data = image.data_mut();
        for dy in 0..height as i32 {
            for dx in 0..width as i32 {
                let (sx, sy) = (x + dx, y + dy);
                if sx < 0 || sy < 0 || sx >= w || sy >= h {
                    continue;
                }
                let c = pixels[(sy * w + sx) as usize].demultiply();
                let i = ((dy * width as i32 + dx) * 4) as usize;
                data[i..i + 4].copy_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
            }
        }
        image
    }
}

fn new_pixmap(width: u32, height: u32) -> anyhow::Result<Pixmap> {
    Pixmap::new(width, height).ok_or_else(|| anyhow!("invalid surface size {}x{}", width, height))
}

/// Premultiplied copy of a straight-alpha image.
fn to_pixmap(image: &Image) -> anyhow::Result<Pixmap> {
    let mut pixmap = new_pixmap(image.width(), image.height())?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.data().chunks_exact(4))
    {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Ok(pixmap)
}

#[cfg(test)]
mod tests;
