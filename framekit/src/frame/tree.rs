use std::ops::{Index, IndexMut};

use super::{ancestors, Frame, FrameId};

/// Arena owning every frame of a panel tree.
///
/// Frames refer to each other by [`FrameId`]; parent back-references and
/// child lists are kept consistent by [`FrameTree::set_container`].
#[derive(Debug, Clone, Default)]
pub struct FrameTree {
    frames: Vec<Frame>,
}

impl FrameTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a frame and return its id.
    ///
    /// Any container or children carried by `frame` are discarded; use
    /// [`add_child`](Self::add_child) to link frames.
    pub fn insert(&mut self, mut frame: Frame) -> FrameId {
        frame.container = None;
        frame.children.clear();
        let id = FrameId(self.frames.len());
        self.frames.push(frame);
        id
    }

    pub fn get(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id.0)
    }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.get_mut(id.0)
    }

    pub fn contains(&self, id: FrameId) -> bool {
        id.0 < self.frames.len()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Find the first frame with the given name.
    pub fn find(&self, name: &str) -> Option<FrameId> {
        self.frames
            .iter()
            .position(|frame| frame.name == name)
            .map(FrameId)
    }

    pub fn container(&self, id: FrameId) -> Option<FrameId> {
        self.get(id).and_then(|frame| frame.container)
    }

    pub fn children(&self, id: FrameId) -> &[FrameId] {
        match self.get(id) {
            Some(frame) => &frame.children,
            None => &[],
        }
    }

    /// Register `child` inside `parent`.
    pub fn add_child(&mut self, parent: FrameId, child: FrameId) {
        self.set_container(child, Some(parent));
    }

    /// Move `id` under `parent`, or detach it when `parent` is `None`.
    ///
    /// Unknown ids and moves that would create a cycle are ignored.
    pub fn set_container(&mut self, id: FrameId, parent: Option<FrameId>) {
        if !self.contains(id) {
            return;
        }
        if let Some(p) = parent {
            if !self.contains(p) || p == id || ancestors(self, p).contains(&id) {
                log::warn!("[frame] refusing to move {id:?} under {p:?}");
                return;
            }
        }

        if let Some(old) = self.frames[id.0].container.take() {
            self.frames[old.0].children.retain(|c| *c != id);
        }

        if let Some(parent) = parent {
            self.frames[parent.0].children.push(id);
            self.frames[id.0].container = Some(parent);
        }
    }
}

impl Index<FrameId> for FrameTree {
    type Output = Frame;

    fn index(&self, id: FrameId) -> &Frame {
        &self.frames[id.0]
    }
}

impl IndexMut<FrameId> for FrameTree {
    fn index_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.0]
    }
}
