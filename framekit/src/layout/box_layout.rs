use indexmap::IndexMap;

use super::distribute;
use crate::error::{Error, Result};
use crate::frame::{Frame, FrameId, FrameTree};
use crate::types::{BoxMode, Position, Size};

/// Distributes a fixed set of named child frames inside a container frame.
///
/// The box owns neither the container nor the children; they live in a
/// [`FrameTree`] that every mutating call receives. The container always
/// holds exactly the frames of the registry, in registry order.
#[derive(Debug, Clone)]
pub struct BoxLayout {
    name: String,
    mode: BoxMode,
    frames: IndexMap<String, FrameId>,
    frame: FrameId,
}

impl BoxLayout {
    /// Create a box and lay out `children` immediately.
    pub fn new(
        tree: &mut FrameTree,
        name: impl Into<String>,
        position: Position,
        size: Size,
        mode: BoxMode,
        children: &[FrameId],
    ) -> Result<Self> {
        Self::builder(name)
            .position(position.x, position.y)
            .size(size.width, size.height)
            .mode(mode)
            .children(children.iter().copied())
            .build(tree)
    }

    pub fn builder(name: impl Into<String>) -> BoxBuilder {
        BoxBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> BoxMode {
        self.mode
    }

    /// The container frame every child is registered in.
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Snapshot of the child registry, keyed by child name.
    pub fn frames(&self) -> IndexMap<String, FrameId> {
        self.frames.clone()
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Switch the arrangement mode and lay the children out again.
    pub fn set_mode(&mut self, tree: &mut FrameTree, mode: BoxMode) {
        self.mode = mode;
        self.refresh(tree);
    }

    /// Like [`set_mode`](Self::set_mode), from the mode's name.
    ///
    /// An unknown name leaves mode and geometry untouched.
    pub fn set_mode_name(&mut self, tree: &mut FrameTree, mode: &str) -> Result<()> {
        let mode = mode.parse::<BoxMode>().map_err(|e| {
            log::warn!("[box] {}: rejected mode {mode:?}", self.name);
            e.within(&self.name)
        })?;
        self.set_mode(tree, mode);
        Ok(())
    }

    /// The frame hosting this box's container.
    pub fn container(&self, tree: &FrameTree) -> Option<FrameId> {
        tree.container(self.frame)
    }

    pub fn set_container(&self, tree: &mut FrameTree, parent: Option<FrameId>) {
        tree.set_container(self.frame, parent);
    }

    /// Assign every registered child its placement for the current mode.
    ///
    /// Does nothing on a tree that does not hold this box's container, and
    /// skips children that have since been moved out of the container.
    pub fn refresh(&self, tree: &mut FrameTree) {
        if tree.get(self.frame).map(|frame| frame.name.as_str()) != Some(self.name.as_str()) {
            log::warn!("[box] {}: container not found in tree, skipping layout", self.name);
            return;
        }

        let placements = distribute(self.mode, self.frames.len());

        log::debug!(
            "[box] {}: distributing {} frame(s) as {}",
            self.name,
            placements.len(),
            self.mode
        );

        for (id, placement) in self.frames.values().zip(placements) {
            if tree.container(*id) != Some(self.frame) {
                log::debug!("[box] {}: {id:?} left the container, skipping", self.name);
                continue;
            }
            if let Some(child) = tree.get_mut(*id) {
                child.position = placement.position();
                child.size = placement.size();
            }
        }
    }
}

/// Construction options for a [`BoxLayout`].
#[derive(Debug, Clone)]
pub struct BoxBuilder {
    name: String,
    position: Position,
    size: Size,
    mode: BoxMode,
    children: Vec<FrameId>,
}

impl BoxBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Position::default(),
            size: Size::full(),
            mode: BoxMode::default(),
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

    pub fn mode(mut self, mode: BoxMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn child(mut self, child: FrameId) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = FrameId>) -> Self {
        self.children.extend(children);
        self
    }

    /// Create the container frame, register the children and lay them out.
    pub fn build(self, tree: &mut FrameTree) -> Result<BoxLayout> {
        if self.name.is_empty() {
            return Err(Error::invalid_argument("box name is required"));
        }
        if let Some(unknown) = self.children.iter().find(|id| !tree.contains(**id)) {
            return Err(Error::invalid_argument(format!(
                "{}: unknown frame {unknown:?}",
                self.name
            )));
        }

        let frame = tree.insert(
            Frame::new(self.name.clone())
                .position(self.position.x, self.position.y)
                .size(self.size.width, self.size.height),
        );

        // Later frames with a duplicate name replace earlier ones in place.
        let mut frames = IndexMap::with_capacity(self.children.len());
        for id in self.children {
            frames.insert(tree[id].name.clone(), id);
        }
        for id in frames.values() {
            tree.add_child(frame, *id);
        }

        let layout = BoxLayout {
            name: self.name,
            mode: self.mode,
            frames,
            frame,
        };
        layout.refresh(tree);
        Ok(layout)
    }
}
