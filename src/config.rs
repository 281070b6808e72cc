use crate::math::{Extent, DEFAULT_EPSILON};

/// Construction parameters of a [`Canvas`](crate::Canvas).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
    /// Determinant magnitude under which a transform counts as singular.
    pub epsilon: f64,
    /// Drawing buffer size in device pixels; the surface's own size when `None`.
    pub view: Option<Extent>,
    /// Displayed size; equal to the view when `None`.
    pub size: Option<Extent>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            epsilon: DEFAULT_EPSILON,
            view: None,
            size: None,
        }
    }
}

impl Config {
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_view<E: Into<Extent>>(mut self, view: E) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn with_size<E: Into<Extent>>(mut self, size: E) -> Self {
        self.size = Some(size.into());
        self
    }
}
