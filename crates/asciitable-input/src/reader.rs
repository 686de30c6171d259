//! The line reader abstraction and its scripted mock.

use std::collections::VecDeque;
use std::time::Duration;

use crate::InputError;

/// Source of single lines of user input.
///
/// Implementations block until a line arrives or `timeout` elapses. A timeout
/// is reported as `Ok(None)` so callers can decide whether to retry.
pub trait LineReader {
    /// Read one line, without its terminator and surrounding whitespace.
    fn read_line(&mut self, timeout: Option<Duration>) -> Result<Option<String>, InputError>;
}

impl<R: LineReader + ?Sized> LineReader for &mut R {
    fn read_line(&mut self, timeout: Option<Duration>) -> Result<Option<String>, InputError> {
        (**self).read_line(timeout)
    }
}

impl<R: LineReader + ?Sized> LineReader for Box<R> {
    fn read_line(&mut self, timeout: Option<Duration>) -> Result<Option<String>, InputError> {
        (**self).read_line(timeout)
    }
}

/// Strips the line terminator and surrounding whitespace from raw input.
pub(crate) fn clean_line(raw: &str) -> String {
    raw.trim().to_string()
}

/// Mock line reader for testing.
///
/// Replays a script of answers in order. `None` entries simulate a timeout.
/// Once the script is exhausted every read fails with [`InputError::Closed`].
///
/// # Example
///
/// ```
/// use asciitable_input::{LineReader, MockReader};
///
/// let mut reader = MockReader::new().line("yes").timeout();
/// assert_eq!(reader.read_line(None).unwrap(), Some("yes".to_string()));
/// assert_eq!(reader.read_line(None).unwrap(), None);
/// assert!(reader.read_line(None).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockReader {
    script: VecDeque<Option<String>>,
    timeouts_seen: Vec<Option<Duration>>,
}

impl MockReader {
    /// Create an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script from a list of lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: lines.into_iter().map(|l| Some(l.into())).collect(),
            timeouts_seen: Vec::new(),
        }
    }

    /// Append a line to the script.
    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.script.push_back(Some(text.into()));
        self
    }

    /// Append a simulated timeout to the script.
    pub fn timeout(mut self) -> Self {
        self.script.push_back(None);
        self
    }

    /// Number of scripted answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// The timeouts passed to each `read_line` call so far.
    pub fn timeouts_seen(&self) -> &[Option<Duration>] {
        &self.timeouts_seen
    }
}

impl LineReader for MockReader {
    fn read_line(&mut self, timeout: Option<Duration>) -> Result<Option<String>, InputError> {
        self.timeouts_seen.push(timeout);
        match self.script.pop_front() {
            Some(Some(text)) => Ok(Some(clean_line(&text))),
            Some(None) => Ok(None),
            None => Err(InputError::Closed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_replays_in_order() {
        let mut reader = MockReader::with_lines(["example", "exit"]);
        assert_eq!(reader.read_line(None).unwrap(), Some("example".into()));
        assert_eq!(reader.read_line(None).unwrap(), Some("exit".into()));
        assert!(reader.read_line(None).unwrap_err().is_closed());
    }

    #[test]
    fn mock_trims_terminators() {
        let mut reader = MockReader::new().line("  subtable\r\n");
        assert_eq!(reader.read_line(None).unwrap(), Some("subtable".into()));
    }

    #[test]
    fn mock_records_timeouts() {
        let mut reader = MockReader::new().timeout().line("x");
        let wait = Some(Duration::from_secs(2));
        assert_eq!(reader.read_line(wait).unwrap(), None);
        reader.read_line(None).unwrap();
        assert_eq!(reader.timeouts_seen(), &[wait, None]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn boxed_reader_delegates() {
        let mut reader: Box<dyn LineReader> = Box::new(MockReader::new().line("a"));
        assert_eq!(reader.read_line(None).unwrap(), Some("a".into()));
    }
}
