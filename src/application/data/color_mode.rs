use clap::ValueEnum;
use supports_color::Stream;

use crate::render::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum ColorMode {
    /// Color only when stdout is a terminal that supports it
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn to_palette(self) -> Palette {
        let enabled = match self {
            ColorMode::Auto => supports_color::on(Stream::Stdout).is_some(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        };
        if enabled {
            Palette::Colored
        } else {
            Palette::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_terminal() {
        assert_eq!(ColorMode::Always.to_palette(), Palette::Colored);
        assert_eq!(ColorMode::Never.to_palette(), Palette::Plain);
    }
}
