//! Error types for line input.

use std::io;

/// Errors that can occur while reading a line of input.
///
/// A timeout is not an error: readers report it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading from the underlying stream failed.
    #[error("Failed to read input: {0}")]
    ReadFailed(#[source] io::Error),

    /// The input stream reached end-of-file or was closed.
    #[error("Input closed.")]
    Closed,
}

impl InputError {
    /// Returns true when the stream is gone and further reads are pointless.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
