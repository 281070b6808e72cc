use crate::convert;
use crate::path::DevicePath;
use crate::{new_pixmap, to_pixmap, SkiaSurface};
use anyhow::anyhow;
use penvg::{
    Direction, Extent, FillRule, Image, Matrix, Paint, PathCommands, PathSink, Point, Rect, Style,
    Surface,
};
use tiny_skia::{GradientStop, Mask, PixmapPaint, RadialGradient, SpreadMode, Stroke, Transform};

impl SkiaSurface {
    /// tiny-skia paint for `paint` under the current alpha and blend mode.
    /// `None` for a gradient that has no stops.
    fn skia_paint(&self, paint: &Paint) -> Option<tiny_skia::Paint<'static>> {
        let alpha = self.state.alpha as f32;
        let mut skia = tiny_skia::Paint {
            anti_alias: true,
            blend_mode: convert::blend_mode(self.state.composite),
            ..Default::default()
        };
        match paint {
            Paint::Color(color) => skia.set_color(convert::color(*color, alpha)),
            Paint::Gradient(gradient) => {
                let stops = gradient
                    .stops
                    .iter()
                    .map(|stop| {
                        GradientStop::new(stop.offset as f32, convert::color(stop.color, alpha))
                    })
                    .collect();
                skia.shader = RadialGradient::new(
                    convert::point(gradient.start),
                    convert::point(gradient.end),
                    gradient.end_radius as f32,
                    stops,
                    SpreadMode::Pad,
                    convert::transform(self.state.matrix),
                )?;
            }
        }
        Some(skia)
    }

    fn skia_stroke(&self) -> Stroke {
        Stroke {
            width: (self.state.width * self.state.line_scale()) as f32,
            line_cap: convert::line_cap(self.state.cap),
            line_join: convert::line_join(self.state.join),
            miter_limit: self.state.miter_limit as f32,
            ..Default::default()
        }
    }

    fn device_path(&self, commands: &PathCommands) -> Option<tiny_skia::Path> {
        let mut path = DevicePath::new();
        commands.replay(&mut path.placed(self.state.matrix));
        path.to_path()
    }

    fn fill_device(&mut self, path: Option<tiny_skia::Path>, rule: FillRule) {
        let Some(path) = path else { return };
        let Some(paint) = self.skia_paint(&self.state.fill) else {
            log::debug!("fill skipped, gradient without stops");
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint,
            convert::fill_rule(rule),
            Transform::identity(),
            self.state.clip.as_ref(),
        );
    }

    fn stroke_device(&mut self, path: Option<tiny_skia::Path>) {
        let Some(path) = path else { return };
        let Some(paint) = self.skia_paint(&self.state.stroke) else {
            log::debug!("stroke skipped, gradient without stops");
            return;
        };
        let stroke = self.skia_stroke();
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            Transform::identity(),
            self.state.clip.as_ref(),
        );
    }

    /// Narrows the clip to `path`. An empty path clips everything away.
    fn clip_device(&mut self, path: Option<tiny_skia::Path>, rule: FillRule) -> anyhow::Result<()> {
        let rule = convert::fill_rule(rule);
        if let (Some(mask), Some(path)) = (self.state.clip.as_mut(), path.as_ref()) {
            mask.intersect_path(path, rule, true, Transform::identity());
            return Ok(());
        }
        let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())
            .ok_or_else(|| anyhow!("cannot allocate clip mask"))?;
        if let Some(path) = &path {
            mask.fill_path(path, rule, true, Transform::identity());
        }
        self.state.clip = Some(mask);
        Ok(())
    }

    /// Whether the pixel under the device point `pt` is covered by `path`.
    fn covers(path: Option<&tiny_skia::Path>, pt: Point, rule: tiny_skia::FillRule) -> bool {
        let (Some(path), Some(mut mask)) = (path, Mask::new(1, 1)) else {
            return false;
        };
        let shift = Transform::from_translate(-pt.x.floor() as f32, -pt.y.floor() as f32);
        mask.fill_path(path, rule, false, shift);
        mask.data()[0] > 0
    }

    fn hit_fill(&self, path: Option<tiny_skia::Path>, pt: Point, rule: FillRule) -> bool {
        Self::covers(path.as_ref(), pt, convert::fill_rule(rule))
    }

    fn hit_stroke(&self, path: Option<tiny_skia::Path>, pt: Point) -> bool {
        let outline = path.and_then(|path| path.stroke(&self.skia_stroke(), 1.0));
        Self::covers(outline.as_ref(), pt, tiny_skia::FillRule::Winding)
    }
}

impl PathSink for SkiaSurface {
    fn move_to(&mut self, pt: Point) {
        self.path.placed(self.state.matrix).move_to(pt);
    }

    fn line_to(&mut self, pt: Point) {
        self.path.placed(self.state.matrix).line_to(pt);
    }

    fn bezier_to(&mut self, cp1: Point, cp2: Point, pt: Point) {
        self.path.placed(self.state.matrix).bezier_to(cp1, cp2, pt);
    }

    fn quad_to(&mut self, cp: Point, pt: Point) {
        self.path.placed(self.state.matrix).quad_to(cp, pt);
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, dir: Direction) {
        self.path
            .placed(self.state.matrix)
            .arc(center, radius, start, end, dir);
    }

    fn ellipse(
        &mut self,
        center: Point,
        radii: Extent,
        rotation: f64,
        start: f64,
        end: f64,
        dir: Direction,
    ) {
        self.path
            .placed(self.state.matrix)
            .ellipse(center, radii, rotation, start, end, dir);
    }

    fn rect(&mut self, rect: Rect) {
        self.path.placed(self.state.matrix).rect(rect);
    }

    fn close_path(&mut self) {
        self.path.placed(self.state.matrix).close_path();
    }
}

impl Surface for SkiaSurface {
    fn view(&self) -> Extent {
        Extent::new(self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    /// Replaces the pixels with a transparent buffer of the new size. Clips
    /// are dropped; the rest of the state is kept.
    fn resize(&mut self, view: Extent) -> anyhow::Result<()> {
        let (width, height) = (view.width.round() as u32, view.height.round() as u32);
        self.pixmap = new_pixmap(width, height)?;
        self.state.clip = None;
        for state in &mut self.saved {
            state.clip = None;
        }
        log::debug!("resized to {}x{}", width, height);
        Ok(())
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => log::debug!("restore without save"),
        }
    }

    fn set_transform(&mut self, matrix: Matrix) {
        self.state.matrix = matrix;
    }

    fn transform(&mut self, matrix: Matrix) {
        self.state.matrix = self.state.matrix * matrix;
    }

    fn set_style(&mut self, style: &Style) -> anyhow::Result<()> {
        self.state.apply(style);
        Ok(())
    }

    fn fill(&mut self, rule: FillRule) -> anyhow::Result<()> {
        let path = self.path.to_path();
        self.fill_device(path, rule);
        Ok(())
    }

    fn stroke(&mut self) -> anyhow::Result<()> {
        let path = self.path.to_path();
        self.stroke_device(path);
        Ok(())
    }

    fn fill_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()> {
        let path = self.device_path(path);
        self.fill_device(path, rule);
        Ok(())
    }

    fn stroke_path(&mut self, path: &PathCommands) -> anyhow::Result<()> {
        let path = self.device_path(path);
        self.stroke_device(path);
        Ok(())
    }

    fn clip(&mut self, rule: FillRule) -> anyhow::Result<()> {
        let path = self.path.to_path();
        self.clip_device(path, rule)
    }

    fn clip_path(&mut self, path: &PathCommands, rule: FillRule) -> anyhow::Result<()> {
        let path = self.device_path(path);
        self.clip_device(path, rule)
    }

    fn clear_rect(&mut self, rect: Rect) -> anyhow::Result<()> {
        let mut path = DevicePath::new();
        path.placed(self.state.matrix).rect(rect);
        if let Some(path) = path.to_path() {
            let paint = tiny_skia::Paint {
                blend_mode: tiny_skia::BlendMode::Clear,
                ..Default::default()
            };
            self.pixmap.fill_path(
                &path,
                &paint,
                tiny_skia::FillRule::Winding,
                Transform::identity(),
                self.state.clip.as_ref(),
            );
        }
        Ok(())
    }

    fn draw_image(&mut self, image: &Image, src: Rect, dst: Rect) -> anyhow::Result<()> {
        let src = src.intersect(Rect::new(Point::ZERO, image.size()));
        if src.size.is_empty() || dst.size.is_empty() {
            log::debug!("nothing to draw from {:?} to {:?}", src, dst);
            return Ok(());
        }
        let source = to_pixmap(image)?;
        let mut region = new_pixmap(
            src.size.width.ceil() as u32,
            src.size.height.ceil() as u32,
        )?;
        region.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::from_translate(-src.xy.x.floor() as f32, -src.xy.y.floor() as f32),
            None,
        );
        let paint = PixmapPaint {
            opacity: self.state.alpha as f32,
            blend_mode: convert::blend_mode(self.state.composite),
            quality: convert::filter_quality(self.state.smooth, self.state.smoothing),
        };
        let transform = convert::transform(self.state.matrix)
            .pre_translate(dst.xy.x as f32, dst.xy.y as f32)
            .pre_scale(
                (dst.size.width / src.size.width) as f32,
                (dst.size.height / src.size.height) as f32,
            );
        self.pixmap.draw_pixmap(
            0,
            0,
            region.as_ref(),
            &paint,
            transform,
            self.state.clip.as_ref(),
        );
        Ok(())
    }

    fn get_image_data(&mut self, rect: Rect) -> anyhow::Result<Image> {
        Ok(self.read_pixels(
            rect.xy.x.floor() as i32,
            rect.xy.y.floor() as i32,
            rect.size.width.round().max(0.0) as u32,
            rect.size.height.round().max(0.0) as u32,
        ))
    }

    /// Half the font size per character.
    fn measure_text(&mut self, text: &str) -> f64 {
        text.chars().count() as f64 * convert::font_size(&self.state.font) * 0.5
    }

    fn fill_text(&mut self, text: &str, at: Point, _max_width: Option<f64>) -> anyhow::Result<()> {
        Err(anyhow!("text rendering is not supported: {:?} at {:?}", text, at))
    }

    fn stroke_text(
        &mut self,
        text: &str,
        at: Point,
        _max_width: Option<f64>,
    ) -> anyhow::Result<()> {
        Err(anyhow!("text rendering is not supported: {:?} at {:?}", text, at))
    }

    fn is_point_in_path(&mut self, pt: Point, rule: FillRule) -> bool {
        self.hit_fill(self.path.to_path(), pt, rule)
    }

    fn is_point_in_path_of(&mut self, path: &PathCommands, pt: Point, rule: FillRule) -> bool {
        self.hit_fill(self.device_path(path), pt, rule)
    }

    fn is_point_in_stroke(&mut self, pt: Point) -> bool {
        self.hit_stroke(self.path.to_path(), pt)
    }

    fn is_point_in_stroke_of(&mut self, path: &PathCommands, pt: Point) -> bool {
        self.hit_stroke(self.device_path(path), pt)
    }
}
