use std::collections::HashSet;
use std::ops::Index;

use tracing::debug;

use super::{CollapseMode, DisplayTree, EmptySegmentPolicy, Node, NodeCounts, NodeId};

pub const PATH_SEPARATOR: char = '/';
pub const SYNTHETIC_ROOT_NAME: &str = ".";

/// Prefix tree of slash-delimited paths.
///
/// Nodes live in a flat arena; index 0 is the synthetic root that every
/// inserted path hangs off. Paths sharing a prefix share the nodes of that
/// prefix.
#[derive(Debug, Clone)]
pub struct PathTree {
    nodes: Vec<Node>,
    empty_segments: EmptySegmentPolicy,
}

impl Default for PathTree {
    fn default() -> Self {
        Self::new(EmptySegmentPolicy::default())
    }
}

impl PathTree {
    pub fn new(empty_segments: EmptySegmentPolicy) -> Self {
        Self {
            nodes: vec![Node::new(SYNTHETIC_ROOT_NAME, None)],
            empty_segments,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, the synthetic root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Inserts every segment of `path` below the root, reusing existing nodes
    /// for segments already present at the same level.
    ///
    /// Returns the node of the last segment, or the root when the policy
    /// dropped every segment.
    pub fn insert(&mut self, path: &str) -> NodeId {
        let mut current = self.root();
        for segment in path.split(PATH_SEPARATOR) {
            if !self.empty_segments.keeps(segment) {
                continue;
            }
            current = match self[current].child_named(segment) {
                Some(existing) => existing,
                None => self.push_child(current, segment),
            };
        }
        current
    }

    fn push_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name, Some(parent)));
        self.nodes[parent.index()].adopt(name, id);
        id
    }

    /// Walks the tree depth first and classifies every node below the root
    pub fn count_nodes(&self) -> NodeCounts {
        let mut counts = NodeCounts::default();
        let mut seen = HashSet::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            let node = &self[id];
            if id != self.root() {
                counts.record(node.is_leaf());
            }
            stack.extend(node.children());
        }

        counts
    }

    /// Counts the nodes, then picks the displayed root according to `mode`.
    ///
    /// Counting happens first, so folded nodes are still reported as directories.
    pub fn finish(mut self, mode: CollapseMode) -> DisplayTree {
        let counts = self.count_nodes();
        let display_root = self.collapse(mode);
        debug!(
            "Finished tree with {} nodes, displaying from {} ({:?})",
            self.nodes.len(),
            display_root,
            counts
        );
        DisplayTree::new(self.nodes, display_root, counts)
    }

    fn collapse(&mut self, mode: CollapseMode) -> NodeId {
        let mut display_root = self.root();
        if mode == CollapseMode::None {
            return display_root;
        }

        while let Some(child) = self[display_root].only_child() {
            let name = if display_root == self.root() {
                self[child].name().to_owned()
            } else {
                format!(
                    "{}{}{}",
                    self[display_root].name(),
                    PATH_SEPARATOR,
                    self[child].name()
                )
            };
            let promoted = &mut self.nodes[child.index()];
            promoted.rename(name);
            promoted.detach_from_parent();
            display_root = child;

            if mode == CollapseMode::Once {
                break;
            }
        }

        // a promoted empty segment would leave the header line blank
        if self[display_root].name().is_empty() {
            self.nodes[display_root.index()].rename(SYNTHETIC_ROOT_NAME.to_owned());
        }

        display_root
    }
}

impl Index<NodeId> for PathTree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}
