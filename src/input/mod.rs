//! Reading path lines from standard input or a file.

mod input_source;
mod line_reader;

pub use input_source::InputSource;
pub use line_reader::LineReader;

use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum InputError {
    #[snafu(display("Failed to open input file: {}", path))]
    OpenError {
        path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to read input at line {}", line_number))]
    ReadError {
        line_number: usize,
        source: std::io::Error,
    },
}
