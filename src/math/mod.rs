mod points;
mod primitive;
mod transform;

pub use points::*;
pub use primitive::*;
pub use transform::*;

#[cfg(test)]
mod tests;
