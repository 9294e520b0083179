use colored::Colorize;

use crate::path_tree::{DisplayTree, NodeId};
use crate::render::glyphs;

/// How node names are painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Plain,
    /// Directories in bold blue, the way `tree -C` shows them
    Colored,
}

/// A node waiting to be printed, with the rails of all its ancestors
struct Frame {
    id: NodeId,
    prefix: String,
}

pub struct TreeRenderer<'a> {
    tree: &'a DisplayTree,
    palette: Palette,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(tree: &'a DisplayTree, palette: Palette) -> Self {
        Self { tree, palette }
    }

    /// Renders the displayed root and all its descendants, one per line, in
    /// depth-first pre-order. Every line, the last included, ends with `\n`.
    ///
    /// Traversal uses an explicit stack, each entry carrying the prefix built
    /// from its ancestors, so deep trees neither recurse nor re-walk ancestor
    /// chains.
    pub fn render(&self) -> String {
        let root = self.tree.root();
        let mut out = String::new();
        push_line(&mut out, "", &self.paint(root));

        let mut stack = Vec::new();
        self.push_children(&mut stack, root, String::new());

        while let Some(Frame { id, prefix }) = stack.pop() {
            let is_last = self.tree.is_last_child(id);
            let connector = glyphs::connector(is_last);
            push_line(&mut out, &prefix, &(connector + &self.paint(id)));

            if !self.tree[id].is_leaf() {
                let child_prefix = prefix + &glyphs::rail(is_last);
                self.push_children(&mut stack, id, child_prefix);
            }
        }

        out
    }

    fn push_children(&self, stack: &mut Vec<Frame>, parent: NodeId, prefix: String) {
        let children = self.tree[parent].children().collect::<Vec<_>>();
        // reversed so the first child is popped first
        stack.extend(children.into_iter().rev().map(|id| Frame {
            id,
            prefix: prefix.clone(),
        }));
    }

    fn paint(&self, id: NodeId) -> String {
        let node = &self.tree[id];
        match self.palette {
            Palette::Colored if !node.is_leaf() => node.name().blue().bold().to_string(),
            _ => node.name().to_owned(),
        }
    }
}

fn push_line(out: &mut String, prefix: &str, text: &str) {
    out.push_str(prefix);
    out.push_str(text);
    out.push('\n');
}
