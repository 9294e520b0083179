use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use derive_more::Display;
use snafu::ResultExt;
use tracing::debug;

use crate::ext::BestEffortPathExt;
use crate::input::{InputError, OpenSnafu};

const STDIN_MARKER: &str = "-";

/// Where path lines are read from
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputSource {
    #[display("standard input")]
    Stdin,
    #[display("{}", _0.best_effort_path_display())]
    File(PathBuf),
}

impl InputSource {
    /// Maps the optional positional argument; absent or `-` means standard input
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }

    pub fn open(&self) -> Result<Box<dyn BufRead>, InputError> {
        debug!("Reading paths from {}", self);
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path).context(OpenSnafu {
                    path: path.best_effort_path_display(),
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    #[case(None, InputSource::Stdin)]
    #[case(Some("-"), InputSource::Stdin)]
    #[case(Some("paths.txt"), InputSource::File(PathBuf::from("paths.txt")))]
    fn from_arg_maps_positional(#[case] arg: Option<&str>, #[case] expected: InputSource) {
        assert_eq!(InputSource::from_arg(arg.map(PathBuf::from)), expected);
    }

    #[test]
    fn open_reads_file_contents() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "a/b").expect("Failed to write to temp file");

        let mut reader = InputSource::File(temp_file.path().to_path_buf())
            .open()
            .expect("Failed to open temp file");
        let mut line = String::new();
        reader.read_line(&mut line).expect("Failed to read line");
        assert_eq!(line, "a/b\n");
    }

    #[test]
    fn open_missing_file_is_open_error() {
        let result = InputSource::File(PathBuf::from("/this/path/does/not/exist.txt")).open();
        match result {
            Err(InputError::OpenError { path, .. }) => assert!(path.ends_with("exist.txt")),
            _ => panic!("Expected OpenError"),
        }
    }

    #[test]
    fn stdin_displays_as_words() {
        assert_eq!(InputSource::Stdin.to_string(), "standard input");
    }
}
