//! Line reader backed by standard input.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::reader::{clean_line, LineReader};
use crate::InputError;

type Source = Box<dyn BufRead + Send>;

/// Reads lines from stdin (or any buffered source) with an optional timeout.
///
/// Blocking reads cannot be interrupted, so the first read hands the source
/// to a background thread that forwards each line through a channel. A read
/// that times out leaves the line in the channel for the next call; nothing
/// typed by the user is lost.
///
/// # Example
///
/// ```no_run
/// use asciitable_input::{LineReader, StdinReader};
/// use std::time::Duration;
///
/// let mut reader = StdinReader::new();
/// match reader.read_line(Some(Duration::from_secs(30))) {
///     Ok(Some(answer)) => println!("got {answer}"),
///     Ok(None) => println!("timed out"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
pub struct StdinReader {
    source: Option<Source>,
    lines: Option<Receiver<io::Result<String>>>,
}

impl StdinReader {
    /// Create a reader over the process' standard input.
    pub fn new() -> Self {
        Self::from_source(io::BufReader::new(io::stdin()))
    }

    /// Create a reader over an arbitrary buffered source.
    pub fn from_source(source: impl BufRead + Send + 'static) -> Self {
        Self {
            source: Some(Box::new(source)),
            lines: None,
        }
    }

    fn channel(&mut self) -> &Receiver<io::Result<String>> {
        let source = &mut self.source;
        self.lines.get_or_insert_with(|| spawn_line_pump(source.take()))
    }
}

fn spawn_line_pump(source: Option<Source>) -> Receiver<io::Result<String>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let Some(mut source) = source else {
            return;
        };
        loop {
            let mut line = String::new();
            match source.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if tx.send(Ok(line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }
        tracing::debug!("input source reached end of stream");
    });
    rx
}

impl Default for StdinReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinReader {
    fn read_line(&mut self, timeout: Option<Duration>) -> Result<Option<String>, InputError> {
        let lines = self.channel();
        let received = match timeout {
            Some(wait) => match lines.recv_timeout(wait) {
                Ok(received) => received,
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Err(InputError::Closed),
            },
            None => lines.recv().map_err(|_| InputError::Closed)?,
        };
        let line = received.map_err(InputError::ReadFailed)?;
        Ok(Some(clean_line(&line)))
    }
}
