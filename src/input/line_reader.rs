use std::borrow::Cow;
use std::io::BufRead;

use snafu::ResultExt;
use tracing::warn;

use crate::input::{InputError, ReadSnafu};

/// Yields the lines of a reader with `\n` or `\r\n` stripped.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so any
/// input line can still be turned into a path.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn strip_terminator(buffer: &[u8]) -> &[u8] {
        let line = buffer.strip_suffix(b"\n").unwrap_or(buffer);
        line.strip_suffix(b"\r").unwrap_or(line)
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer);
        if let Ok(0) = read {
            return None;
        }
        self.line_number += 1;

        if let Err(source) = read {
            return Some(Err(source).context(ReadSnafu {
                line_number: self.line_number,
            }));
        }

        let line = match String::from_utf8_lossy(Self::strip_terminator(&self.buffer)) {
            Cow::Borrowed(line) => line.to_owned(),
            Cow::Owned(line) => {
                warn!(
                    "Line {} is not valid UTF-8, invalid bytes were replaced",
                    self.line_number
                );
                line
            }
        };
        Some(Ok(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::{self, Cursor, Read};

    fn lines_of(input: &[u8]) -> Vec<String> {
        LineReader::new(Cursor::new(input.to_vec()))
            .collect::<Result<Vec<_>, _>>()
            .expect("Reading from memory should not fail")
    }

    #[rstest]
    #[case(b"a/b\na/c\n", vec!["a/b", "a/c"])]
    #[case(b"a/b\na/c", vec!["a/b", "a/c"])]
    #[case(b"a/b\r\na/c\r\n", vec!["a/b", "a/c"])]
    #[case(b"\n", vec![""])]
    #[case(b"", vec![])]
    #[case(b" padded \n", vec![" padded "])]
    fn strips_only_line_terminators(#[case] input: &[u8], #[case] expected: Vec<&str>) {
        assert_eq!(lines_of(input), expected);
    }

    #[test]
    fn replaces_invalid_utf8() {
        let lines = lines_of(b"ok/\xff\n");
        assert_eq!(lines, vec!["ok/\u{FFFD}"]);
    }

    #[test]
    fn counts_lines_read() {
        let mut reader = LineReader::new(Cursor::new(b"a\nb\n".to_vec()));
        reader.next();
        reader.next();
        assert!(reader.next().is_none());
        assert_eq!(reader.line_number(), 2);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream closed"))
        }
    }

    #[test]
    fn read_failure_reports_line_number() {
        let mut reader = LineReader::new(io::BufReader::new(FailingReader));
        match reader.next() {
            Some(Err(InputError::ReadError { line_number, .. })) => assert_eq!(line_number, 1),
            _ => panic!("Expected ReadError"),
        }
    }
}
