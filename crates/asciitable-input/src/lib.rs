//! Line input for interactive table prompts.
//!
//! `asciitable-input` supplies the one blocking operation of the asciitable
//! family: reading a line the user typed after a prompt row was printed.
//! Reads accept an optional timeout; running out of time is not an error but
//! an `Ok(None)` "nothing read" result, leaving the retry decision to the
//! caller.
//!
//! # Architecture
//!
//! ```text
//! LineReader (trait)
//! ├── StdinReader   → background thread + channel, honors timeouts
//! └── MockReader    → scripted answers for tests
//! ```
//!
//! # Testing
//!
//! ```
//! use asciitable_input::{LineReader, MockReader};
//!
//! let mut reader = MockReader::with_lines(["yes"]);
//! assert_eq!(reader.read_line(None).unwrap().as_deref(), Some("yes"));
//! ```

mod error;
mod reader;
mod stdin;

pub use error::InputError;
pub use reader::{LineReader, MockReader};
pub use stdin::StdinReader;
