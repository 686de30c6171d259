//! Shared state of a table tree.
//!
//! A [`Context`] is a cheap handle: cloning it shares the underlying state.
//! Every table created from a context, and every subtable derived from
//! those tables, reads the same configuration, writes through the same
//! [`ConsoleWriter`] and sees the same current console color.

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::rc::Rc;

use tracing::debug;

use crate::config::{Limits, RowWindow, TableConfig};
use crate::console::{AnsiWriter, CaptureWriter, ConsoleWriter, LineColor};

struct Shared {
    config: TableConfig,
    writer: Box<dyn ConsoleWriter>,
    current: LineColor,
    deferred: Option<io::Error>,
}

/// Configuration, output target and console state shared by tables.
#[derive(Clone)]
pub struct Context {
    inner: Rc<RefCell<Shared>>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.inner.borrow();
        f.debug_struct("Context")
            .field("config", &shared.config)
            .field("current", &shared.current)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Context writing through `writer`.
    pub fn new(config: TableConfig, writer: impl ConsoleWriter + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Shared {
                config,
                writer: Box::new(writer),
                current: LineColor::Plain,
                deferred: None,
            })),
        }
    }

    /// Default configuration, colored output on stdout.
    pub fn stdout() -> Self {
        Self::new(TableConfig::default(), AnsiWriter::new())
    }

    /// Context recording its output, together with the recorder.
    pub fn capture(config: TableConfig) -> (Self, CaptureWriter) {
        let capture = CaptureWriter::new();
        (Self::new(config, capture.clone()), capture)
    }

    pub fn page_length(&self) -> usize {
        self.inner.borrow().config.page_length
    }

    pub fn row_window(&self) -> RowWindow {
        self.inner.borrow().config.row_window
    }

    pub fn separator(&self) -> String {
        self.inner.borrow().config.separator.clone()
    }

    pub fn limits(&self) -> Limits {
        self.inner.borrow().config.limits
    }

    pub fn set_page_length(&self, rows: usize) {
        self.inner.borrow_mut().config.page_length = rows;
    }

    pub fn set_row_window(&self, window: RowWindow) {
        self.inner.borrow_mut().config.row_window = window;
    }

    pub fn set_separator(&self, separator: impl Into<String>) {
        self.inner.borrow_mut().config.separator = separator.into();
    }

    /// Replaces the output target for every table sharing this context.
    pub fn redirect(&self, writer: impl ConsoleWriter + 'static) {
        debug!("redirecting table output");
        self.inner.borrow_mut().writer = Box::new(writer);
    }

    /// The color of the last line written.
    pub fn current_color(&self) -> LineColor {
        self.inner.borrow().current
    }

    /// Writes a finished line and remembers its color.
    pub(crate) fn emit(&self, line: &str, color: LineColor) -> io::Result<()> {
        let mut shared = self.inner.borrow_mut();
        shared.current = color;
        shared.writer.write_line(line, color)
    }

    /// Keeps an error raised where it could not be returned. Only the
    /// first one is kept.
    pub(crate) fn defer_error(&self, err: io::Error) {
        let mut shared = self.inner.borrow_mut();
        if shared.deferred.is_none() {
            shared.deferred = Some(err);
        }
    }

    pub(crate) fn take_error(&self) -> Option<io::Error> {
        self.inner.borrow_mut().deferred.take()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::stdout()
    }
}
