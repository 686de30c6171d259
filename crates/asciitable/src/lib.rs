//! Colorized fixed-width ASCII tables for the terminal.
//!
//! `asciitable` buffers a table of typed cells and renders it as boxed,
//! optionally colored text lines. Tables support boxed headers, numeric,
//! hexadecimal and boolean cell formats, cells that spill into neighboring
//! columns, nested subtables, paging of long tables and simple prompts.
//!
//! # Quick Start
//!
//! ```rust
//! use asciitable::{Attributes, Color, Context, Flags, Table, TableConfig};
//!
//! let (ctx, capture) = Context::capture(TableConfig::default().separator(" | "));
//! let mut table = Table::new(&ctx, "Customers", Attributes::from(Color::Toggle));
//!
//! table.header().cell("Company").cell("Contact").cell("Country");
//! table.row().cell("Alfreds Futterkiste").cell("Maria Anders").cell("Germany");
//! table.print_all().unwrap();
//!
//! let lines = capture.texts();
//! assert_eq!(lines[0], " Customers");
//! assert_eq!(lines[4], " | Alfreds Futterkiste | Maria Anders | Germany | ");
//! ```
//!
//! Use [`Context::stdout`] for colored terminal output instead of a capture.
//!
//! # Architecture
//!
//! ```text
//! Context ── config, writer, console color (shared by a table tree)
//!    │
//! Table ── rows[0] = header row (column widths and formats)
//!    ├── Row ── Cell, Cell, ...
//!    ├── Row ── Subtable ── Row ...
//!    └── Row (prompt)
//! ```
//!
//! Building never fails: cells past the column limit are dropped with a
//! `tracing` warning and widths are clamped. Printing returns
//! [`TableError`] when the writer fails.
//!
//! # Colors
//!
//! [`Color::Toggle`] alternates bright and dark rows, starting dark after
//! a header. Writers receive resolved [`LineColor`]s; [`AnsiWriter`] maps
//! them to ANSI styles, [`PlainWriter`] drops them.

mod attr;
mod cell;
mod config;
mod console;
mod context;
mod error;
mod row;
mod table;
pub mod util;
mod value;

pub use attr::{Attributes, Color, Flags, DEFAULT_WIDTH};
pub use cell::Cell;
pub use config::{Limits, RowWindow, TableConfig, DEFAULT_PAGE_LENGTH};
pub use console::{AnsiWriter, CaptureWriter, ConsoleWriter, LineColor, PlainWriter};
pub use context::Context;
pub use error::TableError;
pub use row::Row;
pub use table::{PrintScope, Table, DEFAULT_INDENT, SUBTABLE_INDENT};
pub use value::CellValue;

// The prompt reader lives in its own crate; re-export what callers need.
pub use asciitable_input::{InputError, LineReader, MockReader, StdinReader};
