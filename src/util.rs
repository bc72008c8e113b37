mod matrix;
mod point;
pub mod scale;

pub use matrix::{is_rectangular, is_square, is_symmetric, transpose};
pub use point::Point;
