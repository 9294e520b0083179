use std::io::{self, BufRead, Write};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info, warn};

use crate::application::RuntimeConfig;
use crate::input::{InputError, LineReader};
use crate::path_tree::PathTree;
use crate::render::{Palette, Report};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        let palette = app_config.color.to_palette();
        if palette == Palette::Colored {
            colored::control::set_override(true);
        }

        let reader = app_config.input.open().context(InputSnafu)?;
        let report = Self::build_report(reader, &app_config, palette)?;

        let mut stdout = io::stdout().lock();
        stdout
            .write_all(report.to_string().as_bytes())
            .context(WriteSnafu)?;
        stdout.flush().context(WriteSnafu)?;

        Ok(())
    }

    /// Reads every line of `reader` into a tree and renders it.
    ///
    /// Nothing is rendered if reading fails partway through.
    pub fn build_report(
        reader: impl BufRead,
        app_config: &RuntimeConfig,
        palette: Palette,
    ) -> Result<Report, ApplicationError> {
        let mut tree = PathTree::new(app_config.empty_segments);
        let mut lines = LineReader::new(reader);

        for line in lines.by_ref() {
            tree.insert(&line.context(InputSnafu)?);
        }

        info!("Read {} lines into {} nodes", lines.line_number(), tree.node_count());
        if lines.line_number() == 0 {
            warn!("Input was empty, rendering a bare root");
        }

        let report = Report::generate(&tree.finish(app_config.collapse), palette);
        debug!(
            "Rendered {} entries: {:?}",
            report.counts().total(),
            report.counts()
        );
        Ok(report)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while reading input"))]
    InputError { source: InputError },
    #[snafu(display("Failed to write the rendered tree"))]
    WriteError { source: io::Error },
}
