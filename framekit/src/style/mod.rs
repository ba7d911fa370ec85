mod border;
mod border_side;
mod fill;
mod gradient;

pub use border::Border;
pub use border_side::{BorderSide, Radius};
pub use fill::{Brush, Fill, FillKind, Image};
pub use gradient::{ColorStop, Gradient, GradientGeometry, GradientValue, StopColor};
