mod node;
mod tree;

pub use node::Frame;
pub use tree::FrameTree;

/// Handle to a frame stored in a [`FrameTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(usize);

/// Walk up from `id` and collect every ancestor, nearest first.
pub fn ancestors(tree: &FrameTree, id: FrameId) -> Vec<FrameId> {
    let mut chain = Vec::new();
    let mut current = tree.container(id);
    while let Some(parent) = current {
        chain.push(parent);
        current = tree.container(parent);
    }
    chain
}
