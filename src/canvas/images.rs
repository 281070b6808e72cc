use super::Canvas;
use crate::math::{Bounds, Extent, Point, Rect};
use crate::pen::Pen;
use crate::raster::Image;
use crate::surface::Surface;
use crate::Result;
use base64::Engine;
use image::ImageFormat;

/// Placement of an image: `point` is the destination corner, `size` the
/// drawn size, `offset`/`region` the source rectangle. Sizes default to the
/// image size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub point: Point,
    pub offset: Point,
    pub size: Option<Extent>,
    pub region: Option<Extent>,
}

impl ImageOptions {
    pub fn at(point: impl Into<Point>) -> Self {
        ImageOptions {
            point: point.into(),
            ..Default::default()
        }
    }

    pub fn with_size(mut self, size: impl Into<Extent>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn with_source(mut self, offset: impl Into<Point>, region: impl Into<Extent>) -> Self {
        self.offset = offset.into();
        self.region = Some(region.into());
        self
    }

    fn rects(&self, image: &Image) -> (Rect, Rect) {
        let src = Rect::new(self.offset, self.region.unwrap_or_else(|| image.size()));
        let dst = Rect::new(self.point, self.size.unwrap_or_else(|| image.size()));
        (src, dst)
    }
}

impl<S: Surface> Canvas<S> {
    /// Draws `image` with `options.point` taken from the pointer.
    pub fn image(&mut self, image: &Image, options: ImageOptions) -> Result<&mut Self> {
        let point = self.pointer() + options.point;
        self.image_at(image, ImageOptions { point, ..options })
    }

    pub fn image_at(&mut self, image: &Image, options: ImageOptions) -> Result<&mut Self> {
        let (src, dst) = options.rects(image);
        self.surface_mut().draw_image(image, src, dst)?;
        Ok(self)
    }

    /// Draws `image` centered on `pointer + options.point`.
    pub fn image_center(&mut self, image: &Image, options: ImageOptions) -> Result<&mut Self> {
        let point = self.pointer() + options.point;
        self.image_center_at(image, ImageOptions { point, ..options })
    }

    pub fn image_center_at(&mut self, image: &Image, options: ImageOptions) -> Result<&mut Self> {
        let size = options.size.unwrap_or_else(|| image.size());
        let point = options.point - Point::from(size).half();
        self.image_at(image, ImageOptions { point, ..options })
    }

    /// Draws `images` one after another, starting at `pointer + point`;
    /// `next` gives each following position from the previous one and the
    /// previous image size.
    pub fn strip<F>(&mut self, images: &[Image], point: impl Into<Point>, next: F) -> Result<&mut Self>
    where
        F: Fn(Point, Extent) -> Point,
    {
        let point: Point = point.into();
        let start = self.pointer() + point;
        self.strip_at(images, start, next)
    }

    pub fn strip_at<F>(&mut self, images: &[Image], point: impl Into<Point>, next: F) -> Result<&mut Self>
    where
        F: Fn(Point, Extent) -> Point,
    {
        let mut point: Point = point.into();
        for image in images {
            self.image_at(image, ImageOptions::at(point))?;
            point = next(point, image.size());
        }
        Ok(self)
    }

    pub fn strip_horizontal(&mut self, images: &[Image], point: impl Into<Point>) -> Result<&mut Self> {
        self.strip(images, point, next_right)
    }

    pub fn strip_horizontal_at(&mut self, images: &[Image], point: impl Into<Point>) -> Result<&mut Self> {
        self.strip_at(images, point, next_right)
    }

    pub fn strip_vertical(&mut self, images: &[Image], point: impl Into<Point>) -> Result<&mut Self> {
        self.strip(images, point, next_below)
    }

    pub fn strip_vertical_at(&mut self, images: &[Image], point: impl Into<Point>) -> Result<&mut Self> {
        self.strip_at(images, point, next_below)
    }

    /// Rows of images laid out as horizontal strips `step` apart.
    pub fn tiles<R: AsRef<[Image]>>(
        &mut self,
        rows: &[R],
        step: f64,
        point: impl Into<Point>,
    ) -> Result<&mut Self> {
        let point: Point = point.into();
        let start = self.pointer() + point;
        self.tiles_at(rows, step, start)
    }

    pub fn tiles_at<R: AsRef<[Image]>>(
        &mut self,
        rows: &[R],
        step: f64,
        point: impl Into<Point>,
    ) -> Result<&mut Self> {
        let mut position: Point = point.into();
        for row in rows {
            self.strip_horizontal_at(row.as_ref(), position)?;
            position.y += step;
        }
        Ok(self)
    }

    /// Device pixels at `offset` from the pointer's device position.
    /// `size` defaults to the rest of the view.
    pub fn pixels(&mut self, size: Option<Extent>, offset: impl Into<Point>) -> Result<Image> {
        let offset: Point = offset.into();
        let point = self.to_absolute(self.pointer()) + offset;
        self.pixels_at(size, point)
    }

    /// Device pixels at the device position `point`.
    pub fn pixels_at(&mut self, size: Option<Extent>, point: impl Into<Point>) -> Result<Image> {
        let point: Point = point.into();
        let size = size.unwrap_or_else(|| (Point::from(self.view()) - point).into());
        Ok(self.surface_mut().get_image_data(Rect::new(point, size))?)
    }

    /// Bounding box, in device pixels, of everything not fully transparent.
    pub fn bounds(&mut self) -> Result<Option<Bounds>> {
        let pixels = self.pixels_at(None, Point::ZERO)?;
        Ok(pixels.opaque_bounds())
    }

    /// The view cropped to [`bounds`](Self::bounds).
    pub fn trim(&mut self) -> Result<Option<Image>> {
        let pixels = self.pixels_at(None, Point::ZERO)?;
        Ok(pixels.opaque_bounds().map(|b| pixels.crop(b.to_rect())))
    }

    /// Encodes the whole view.
    pub fn export(&mut self, format: ImageFormat) -> Result<Vec<u8>> {
        let pixels = self.pixels_at(None, Point::ZERO)?;
        pixels.encode(format)
    }

    /// The whole view as a `data:` URL.
    pub fn to_data_url(&mut self, format: ImageFormat) -> Result<String> {
        let bytes = self.export(format)?;
        Ok(format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            base64::engine::general_purpose::STANDARD.encode(bytes)
        ))
    }
}

fn next_right(point: Point, size: Extent) -> Point {
    point.offset(size.width, 0.0)
}

fn next_below(point: Point, size: Extent) -> Point {
    point.offset(0.0, size.height)
}
