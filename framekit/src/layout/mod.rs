mod box_layout;
mod distribute;

pub use box_layout::{BoxBuilder, BoxLayout};
pub use distribute::distribute;
