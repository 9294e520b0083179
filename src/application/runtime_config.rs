use crate::application::data::ColorMode;
use crate::cli::Cli;
use crate::input::InputSource;
use crate::path_tree::{CollapseMode, EmptySegmentPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub input: InputSource,
    pub collapse: CollapseMode,
    pub empty_segments: EmptySegmentPolicy,
    pub color: ColorMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            collapse: CollapseMode::default(),
            empty_segments: EmptySegmentPolicy::default(),
            color: ColorMode::default(),
        }
    }
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: InputSource::from_arg(cli.input),
            collapse: cli.collapse,
            empty_segments: cli.empty_segments,
            color: cli.color,
        }
    }
}
