use clap::ValueEnum;

/// How empty segments (from leading, trailing or doubled slashes) are inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum EmptySegmentPolicy {
    /// Keep them as empty-named nodes, so `a//b` has an unnamed node between `a` and `b`
    #[default]
    Preserve,
    /// Drop them, so `a//b` is the same path as `a/b`
    Skip,
}

impl EmptySegmentPolicy {
    pub fn keeps(self, segment: &str) -> bool {
        match self {
            EmptySegmentPolicy::Preserve => true,
            EmptySegmentPolicy::Skip => !segment.is_empty(),
        }
    }
}

/// How a top level with a single child is folded into the displayed root
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum CollapseMode {
    /// Never fold; the synthetic root is shown as `.`
    None,
    /// Promote the only child of the synthetic root, once
    #[default]
    Once,
    /// Keep promoting while the displayed root has exactly one child
    Chain,
}
