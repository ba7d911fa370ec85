use super::FrameId;
use crate::types::{Position, Size};

/// A positioned rectangle inside a [`FrameTree`](super::FrameTree).
///
/// `position` and `size` are fractions of the container's extent; the host
/// turns them into pixels when it renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub name: String,
    pub position: Position,
    pub size: Size,
    pub(super) container: Option<FrameId>,
    pub(super) children: Vec<FrameId>,
}

impl Frame {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::default(),
            size: Size::full(),
            container: None,
            children: Vec::new(),
        }
    }

    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// The frame this one is registered in, if any.
    pub fn container(&self) -> Option<FrameId> {
        self.container
    }

    pub fn children(&self) -> &[FrameId] {
        &self.children
    }
}
