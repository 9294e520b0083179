//! Drawing a [`crate::path_tree::DisplayTree`] the way `tree` draws directories.

mod glyphs;
mod renderer;
mod report;
mod summary;

pub use renderer::{Palette, TreeRenderer};
pub use report::Report;
pub use summary::summary_line;
