pub mod error;
pub mod frame;
pub mod layout;
pub mod style;
pub mod types;

pub use error::{Error, Result};
pub use frame::{Frame, FrameId, FrameTree};
pub use layout::{distribute, BoxBuilder, BoxLayout};
pub use style::{
    Border, BorderSide, Brush, ColorStop, Fill, FillKind, Gradient, GradientGeometry,
    GradientValue, Image, Radius, StopColor,
};
pub use types::*;
