use derive_more::Display;
use hashlink::LinkedHashMap;

/// Handle of a node inside the arena of the tree that created it.
///
/// Handles are only meaningful for the tree they came from; the arena never
/// removes nodes, so a handle stays valid for the lifetime of its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("#{_0}")]
pub struct NodeId(usize);

impl NodeId {
    pub(super) const ROOT: NodeId = NodeId(0);

    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A single path segment.
///
/// Children are keyed by name and keep their insertion order. The parent link
/// is a plain handle into the arena and never owns anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    parent: Option<NodeId>,
    children: LinkedHashMap<String, NodeId>,
}

impl Node {
    pub(super) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            children: LinkedHashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child_named(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.children.back().map(|(_, id)| *id)
    }

    pub(super) fn only_child(&self) -> Option<NodeId> {
        match self.children.len() {
            1 => self.children.front().map(|(_, id)| *id),
            _ => None,
        }
    }

    pub(super) fn adopt(&mut self, name: &str, child: NodeId) {
        self.children.insert(name.to_owned(), child);
    }

    pub(super) fn detach_from_parent(&mut self) {
        self.parent = None;
    }

    pub(super) fn rename(&mut self, name: String) {
        self.name = name;
    }
}
