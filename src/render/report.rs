use derive_more::Display;

use crate::path_tree::{DisplayTree, NodeCounts};
use crate::render::{Palette, TreeRenderer, summary_line};

/// The full output for one run: the drawn tree, a blank line and the summary
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{tree}\n{}\n", summary_line(*counts))]
pub struct Report {
    tree: String,
    counts: NodeCounts,
}

impl Report {
    pub fn generate(tree: &DisplayTree, palette: Palette) -> Self {
        Self {
            tree: TreeRenderer::new(tree, palette).render(),
            counts: tree.counts(),
        }
    }

    pub fn counts(&self) -> NodeCounts {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_tree::{CollapseMode, PathTree};

    fn report_of(paths: &[&str]) -> String {
        let mut tree = PathTree::default();
        for path in paths {
            tree.insert(path);
        }
        Report::generate(&tree.finish(CollapseMode::Once), Palette::Plain).to_string()
    }

    #[test]
    fn report_for_two_siblings() {
        assert_eq!(
            report_of(&["a/b", "a/c"]),
            "a\n├── b\n└── c\n\n1 directory, 2 files\n"
        );
    }

    #[test]
    fn report_for_single_file() {
        assert_eq!(report_of(&["x"]), "x\n\n0 directories, 1 file\n");
    }

    #[test]
    fn report_for_nested_tree() {
        let expected = "\
a
├── b
│   ├── c
│   └── d
└── e

2 directories, 3 files
";
        assert_eq!(report_of(&["a/b/c", "a/b/d", "a/e"]), expected);
    }

    #[test]
    fn report_for_no_input() {
        assert_eq!(report_of(&[]), ".\n\n0 directories, 0 files\n");
    }

    #[test]
    fn report_exposes_counts() {
        let mut tree = PathTree::default();
        tree.insert("a/b");
        let report = Report::generate(&tree.finish(CollapseMode::Once), Palette::Plain);
        assert_eq!(report.counts(), NodeCounts::new(1, 1));
    }
}
