use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorMode, LogLevel};
use crate::path_tree::{CollapseMode, EmptySegmentPolicy};

/// Draws a list of slash-separated paths, one per line, as a `tree`-style tree
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File to read paths from; standard input when absent or `-`
    pub input: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// How a single top-level entry is folded into the displayed root
    #[clap(long, default_value = "once", value_enum)]
    pub collapse: CollapseMode,

    /// What to do with empty segments such as the middle of `a//b`
    #[clap(long, default_value = "preserve", value_enum)]
    pub empty_segments: EmptySegmentPolicy,

    /// Paint directory names
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorMode,
}
