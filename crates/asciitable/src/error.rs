//! Error type for table output.

use asciitable_input::InputError;

/// Errors surfaced by printing, prompting and configuration loading.
///
/// Building a table never fails: oversized rows are logged and clamped.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Writing a line to the console or a redirection sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the answer to a prompt failed.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// A configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TableError = io_err.into();
        assert!(matches!(err, TableError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn input_error_converts() {
        let err: TableError = InputError::Closed.into();
        assert!(matches!(err, TableError::Input(InputError::Closed)));
    }
}
