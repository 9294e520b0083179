/// Number of directories (nodes with children) and files (nodes without)
/// in a tree, not counting the synthetic root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeCounts {
    pub directories: usize,
    pub files: usize,
}

impl NodeCounts {
    #[cfg(test)]
    pub fn new(directories: usize, files: usize) -> Self {
        Self { directories, files }
    }

    pub fn total(&self) -> usize {
        self.directories + self.files
    }

    pub(super) fn record(&mut self, is_leaf: bool) {
        if is_leaf {
            self.files += 1;
        } else {
            self.directories += 1;
        }
    }
}
