//! Prefix tree of slash-delimited paths.
//!
//! [`PathTree`] is built one path at a time, merging shared prefixes into the
//! same nodes. Once every path is in, [`PathTree::finish`] counts the nodes and
//! folds the top level into a [`DisplayTree`] for rendering.

mod display_tree;
mod node;
mod node_counts;
#[allow(clippy::module_inception)]
mod path_tree;
mod policy;

pub use display_tree::DisplayTree;
pub use node::{Node, NodeId};
pub use node_counts::NodeCounts;
pub use path_tree::PathTree;
pub use policy::{CollapseMode, EmptySegmentPolicy};
