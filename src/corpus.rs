//! The fixed, ordered collection of lines being searched.
//!
//! A [`Corpus`] is frozen at construction: there is no way to add, remove or
//! edit a line afterwards, so anything derived from it (the inverted index)
//! stays valid for the life of the session.
//!
//! Two acquisition helpers are provided for the shell: [`Corpus::from_reader`]
//! for files given via `--data`, and [`Corpus::read_console`] for the
//! count-prefixed console protocol. Neither is used by the index or the
//! evaluator.

use std::fs;
use std::io::BufRead;
use std::ops::Index;
use std::path::Path;

use crate::error::{Result, SearchError};
use crate::types::LineId;

/// Immutable sequence of text lines, addressed by 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Freeze a set of lines. Fails with [`SearchError::EmptyCorpus`] when
    /// there are none.
    pub fn new(lines: Vec<String>) -> Result<Self> {
        if lines.is_empty() {
            return Err(SearchError::EmptyCorpus);
        }
        Ok(Self { lines })
    }

    /// Read one line per entry until EOF.
    ///
    /// Line terminators (`\n` or `\r\n`) are stripped. A blank final line, as
    /// left by a trailing newline, is not a line of data.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Self::new(lines)
    }

    /// Load the corpus from a file, one line per entry.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = fs::File::open(path.as_ref())?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Console protocol: the first line holds the number of data lines, the
    /// next `n` lines are the data.
    ///
    /// Equivalent to [`parse_line_count`] on the first line followed by
    /// [`Corpus::read_lines`]. The interactive shell calls those two
    /// separately so it can prompt in between.
    pub fn read_console<R: BufRead>(reader: &mut R) -> Result<Self> {
        let header = read_trimmed(reader)?.unwrap_or_default();
        let expected = parse_line_count(&header)?;
        Self::read_lines(reader, expected)
    }

    /// Read exactly `expected` lines, trimming surrounding whitespace from
    /// each, as an interactive user would expect.
    ///
    /// A count of zero is an [`SearchError::EmptyCorpus`]; running out of
    /// input early is a [`SearchError::TruncatedInput`].
    pub fn read_lines<R: BufRead>(reader: &mut R, expected: usize) -> Result<Self> {
        // `expected` is user input; grow as lines arrive
        let mut lines = Vec::new();
        while lines.len() < expected {
            match read_trimmed(reader)? {
                Some(line) => lines.push(line),
                None => {
                    return Err(SearchError::TruncatedInput {
                        expected,
                        actual: lines.len(),
                    })
                }
            }
        }
        Self::new(lines)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false for a constructed corpus; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, line: LineId) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(line_id, text)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (LineId, &str)> {
        self.lines.iter().map(String::as_str).enumerate()
    }
}

impl Index<LineId> for Corpus {
    type Output = str;

    fn index(&self, line: LineId) -> &str {
        &self.lines[line]
    }
}

impl TryFrom<Vec<String>> for Corpus {
    type Error = SearchError;

    fn try_from(lines: Vec<String>) -> Result<Self> {
        Self::new(lines)
    }
}

/// Parse the declared number of console lines.
///
/// Anything but a non-negative integer (after trimming) is an
/// [`SearchError::InvalidLineCount`].
pub fn parse_line_count(text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| SearchError::InvalidLineCount {
            input: text.trim().to_string(),
        })
}

/// Read one line, trimmed. `None` at EOF.
pub fn read_trimmed<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}
