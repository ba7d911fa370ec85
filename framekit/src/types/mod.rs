mod color;
mod enums;
mod geometry;

pub use color::Color;
pub use enums::{Alignment, BorderStyle, BoxMode, Edge, GradientMode};
pub use geometry::{Placement, Position, Size};
