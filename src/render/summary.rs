use crate::path_tree::NodeCounts;

fn directories(count: usize) -> &'static str {
    if count == 1 { "directory" } else { "directories" }
}

fn files(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

/// `"<n> directories, <m> files"`, singular only for a count of exactly one
pub fn summary_line(counts: NodeCounts) -> String {
    format!(
        "{} {}, {} {}",
        counts.directories,
        directories(counts.directories),
        counts.files,
        files(counts.files)
    )
}
