#[macro_use]
extern crate bitflags;

mod canvas;
mod config;
mod error;
mod math;
pub mod path;
mod pen;
mod raster;
pub mod recording;
mod stack;
pub mod style;
pub mod surface;

pub use canvas::{Canvas, Corner, ImageOptions, TextLayout};
pub use config::Config;
pub use error::{Error, Result};
pub use image::ImageFormat;
pub use math::*;
pub use path::*;
pub use pen::{Path, Pen, PenContext};
pub use raster::Image;
pub use stack::*;
pub use style::*;
pub use surface::{PathSink, Surface};
