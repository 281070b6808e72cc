use crate::math::{Bounds, Extent, Point, Rect};
use crate::Result;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;

/// Decoded raster image: RGBA8, straight alpha, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Fully transparent image.
    pub fn new(width: u32, height: u32) -> Image {
        Image {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// `None` when `data` is not exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Image> {
        if data.len() != width as usize * height as usize * 4 {
            return None;
        }
        Some(Image {
            width,
            height,
            data,
        })
    }

    pub fn decode<D: AsRef<[u8]>>(data: D) -> Result<Image> {
        let img = image::load_from_memory(data.as_ref())?;
        Ok(img.to_rgba8().into())
    }

    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Image> {
        Self::decode(std::fs::read(path)?)
    }

    /// Fetches and decodes the image at `url`.
    #[cfg(feature = "fetch")]
    pub async fn load(url: &str) -> Result<Image> {
        log::debug!("loading image {}", url);
        let response = reqwest::get(url).await?.error_for_status()?;
        let bytes = response.bytes().await?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Extent {
        Extent::new(self.width as f64, self.height as f64)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Smallest pixel-aligned box holding every pixel with non-zero alpha,
    /// `None` for a fully transparent image.
    pub fn opaque_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for (i, px) in self.data.chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let x = (i % self.width as usize) as f64;
            let y = (i / self.width as usize) as f64;
            let b = bounds.get_or_insert(Bounds::new(Point::new(x, y), Point::new(x, y)));
            b.include(Point::new(x, y));
            b.include(Point::new(x + 1.0, y + 1.0));
        }
        bounds
    }

    /// Copies the part of the image under `rect`. The region is rounded
    /// outwards to whole pixels and clipped to the image; a region outside
    /// the image gives an empty image.
    pub fn crop(&self, rect: Rect) -> Image {
        let full = Rect::new(Point::ZERO, self.size());
        let r = Rect::from_corners(
            Point::new(rect.xy.x.floor(), rect.xy.y.floor()),
            Point::new(rect.right().ceil(), rect.bottom().ceil()),
        )
        .intersect(full);
        if r.size.is_empty() {
            return Image::new(0, 0);
        }
        let (x0, y0) = (r.xy.x as usize, r.xy.y as usize);
        let (w, h) = (r.size.width as usize, r.size.height as usize);
        let mut data = Vec::with_capacity(w * h * 4);
        for row in y0..y0 + h {
            let start = (row * self.width as usize + x0) * 4;
            data.extend_from_slice(&self.data[start..start + w * 4]);
        }
        Image {
            width: w as u32,
            height: h as u32,
            data,
        }
    }

    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    /// Encodes the image; formats without alpha get the color channels only.
    pub fn encode(&self, format: ImageFormat) -> Result<Vec<u8>> {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .map(DynamicImage::ImageRgba8)
            .unwrap_or_else(|| DynamicImage::new_rgba8(self.width, self.height));
        let img = match format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(rgba.to_rgb8()),
            _ => rgba,
        };
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format)?;
        Ok(out.into_inner())
    }
}

impl From<RgbaImage> for Image {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Image {
            width,
            height,
            data: img.into_raw(),
        }
    }
}
