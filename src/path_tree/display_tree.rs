use std::ops::Index;

use super::{Node, NodeCounts, NodeId};

/// A finished, read-only tree ready to be rendered.
///
/// Holds the arena built by [`super::PathTree`], the node the output starts
/// from and the counts taken before any folding of the top level.
#[derive(Debug, Clone)]
pub struct DisplayTree {
    nodes: Vec<Node>,
    root: NodeId,
    counts: NodeCounts,
}

impl DisplayTree {
    pub(super) fn new(nodes: Vec<Node>, root: NodeId, counts: NodeCounts) -> Self {
        Self {
            nodes,
            root,
            counts,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn counts(&self) -> NodeCounts {
        self.counts
    }

    /// Whether `id` is the final entry of its parent's children.
    ///
    /// Nodes without a parent, the displayed root among them, are never last.
    ///
    /// # Panics
    ///
    /// If the parent of `id` does not list it as a child. The tree is built so
    /// this cannot happen; reaching it means the arena is corrupted.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        let node = &self[id];
        let Some(parent_id) = node.parent() else {
            return false;
        };
        let parent = &self[parent_id];

        if parent.child_named(node.name()) != Some(id) {
            panic!("node {id} is not a child of its parent {parent_id}");
        }
        parent.last_child() == Some(id)
    }
}

impl Index<NodeId> for DisplayTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
