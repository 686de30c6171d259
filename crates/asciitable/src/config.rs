//! Table configuration.
//!
//! The knobs here have process lifetime in spirit: they are shared by a
//! table and all of its subtables through a [`Context`](crate::Context).
//! A configuration can be built in code or loaded from YAML:
//!
//! ```rust
//! use asciitable::{RowWindow, TableConfig};
//!
//! let config = TableConfig::from_yaml(r#"
//! page_length: 50
//! row_window: -10
//! separator: " | "
//! "#).unwrap();
//!
//! assert_eq!(config.page_length, 50);
//! assert_eq!(config.row_window, RowWindow::Tail(10));
//! assert_eq!(config.limits.max_col_count, 32);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::attr::DEFAULT_WIDTH;
use crate::error::TableError;

/// Rows a table may buffer before it flushes itself.
pub const DEFAULT_PAGE_LENGTH: usize = 10_000;

/// Which body rows a print shows.
///
/// In configuration files a window is written as a signed count: positive
/// for a head window, negative for a tail window, zero for everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RowWindow {
    /// Every row.
    #[default]
    All,
    /// At most the first `n` data rows.
    Head(usize),
    /// Only the last `n` body rows.
    Tail(usize),
}

impl RowWindow {
    /// Builds a window from the signed convention: positive shows the first
    /// `n` rows, negative the last `-n`, zero everything.
    pub fn from_signed(n: i64) -> Self {
        match n {
            0 => RowWindow::All,
            n if n > 0 => RowWindow::Head(n as usize),
            n => RowWindow::Tail(n.unsigned_abs() as usize),
        }
    }
}

impl From<i64> for RowWindow {
    fn from(n: i64) -> Self {
        Self::from_signed(n)
    }
}

impl From<RowWindow> for i64 {
    fn from(window: RowWindow) -> Self {
        match window {
            RowWindow::All => 0,
            RowWindow::Head(n) => n as i64,
            RowWindow::Tail(n) => -(n as i64),
        }
    }
}

/// Hard limits applied while building and printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Narrowest fixed-width column.
    pub min_col_width: usize,
    /// Widest column.
    pub max_col_width: usize,
    /// Most cells in one row; further cells are dropped.
    pub max_col_count: usize,
    /// Widest printed line.
    pub max_row_width: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_col_width: DEFAULT_WIDTH,
            max_col_width: 2048,
            max_col_count: 32,
            max_row_width: 4096,
        }
    }
}

/// Configuration shared by a table tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Row count after which appending a row flushes the table.
    pub page_length: usize,
    /// Body rows shown by a print.
    pub row_window: RowWindow,
    /// Column separator.
    pub separator: String,
    /// Size limits.
    pub limits: Limits,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_length: DEFAULT_PAGE_LENGTH,
            row_window: RowWindow::All,
            separator: "|".to_string(),
            limits: Limits::default(),
        }
    }
}

impl TableConfig {
    /// Parses a configuration from YAML. Missing fields keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, TableError> {
        serde_yaml::from_str(yaml).map_err(|e| TableError::Config(e.to_string()))
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&text)
    }

    /// Sets the flush threshold.
    pub fn page_length(mut self, rows: usize) -> Self {
        self.page_length = rows;
        self
    }

    /// Sets the row window.
    pub fn row_window(mut self, window: RowWindow) -> Self {
        self.row_window = window;
        self
    }

    /// Sets the column separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the limits.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
