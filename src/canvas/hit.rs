use super::Canvas;
use crate::math::Point;
use crate::pen::Path;
use crate::style::FillRule;
use crate::surface::Surface;

/// Hit testing. The `_absolute` forms take device coordinates, the others
/// local ones.
impl<S: Surface> Canvas<S> {
    pub fn contains(&mut self, local: impl Into<Point>) -> bool {
        let p = self.to_absolute(local);
        self.contains_absolute(p)
    }

    pub fn contains_absolute(&mut self, point: impl Into<Point>) -> bool {
        self.surface_mut()
            .is_point_in_path(point.into(), FillRule::NonZero)
    }

    pub fn contains_in(&mut self, path: &Path, local: impl Into<Point>, rule: FillRule) -> bool {
        let p = self.to_absolute(local);
        self.contains_in_absolute(path, p, rule)
    }

    pub fn contains_in_absolute(
        &mut self,
        path: &Path,
        point: impl Into<Point>,
        rule: FillRule,
    ) -> bool {
        self.surface_mut()
            .is_point_in_path_of(path.commands(), point.into(), rule)
    }

    pub fn stroke_contains(&mut self, local: impl Into<Point>) -> bool {
        let p = self.to_absolute(local);
        self.stroke_contains_absolute(p)
    }

    pub fn stroke_contains_absolute(&mut self, point: impl Into<Point>) -> bool {
        self.surface_mut().is_point_in_stroke(point.into())
    }

    pub fn stroke_contains_in(&mut self, path: &Path, local: impl Into<Point>) -> bool {
        let p = self.to_absolute(local);
        self.stroke_contains_in_absolute(path, p)
    }

    pub fn stroke_contains_in_absolute(&mut self, path: &Path, point: impl Into<Point>) -> bool {
        self.surface_mut()
            .is_point_in_stroke_of(path.commands(), point.into())
    }
}
