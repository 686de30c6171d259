//! The table model and its builder surface.
//!
//! A [`Table`] owns its rows; row 0 is always the header. Cells are
//! appended to the last row, whichever kind it is, so a table is built by
//! alternating row-starting calls and cell calls:
//!
//! ```rust
//! use asciitable::{Context, Table, TableConfig};
//!
//! let (ctx, capture) = Context::capture(TableConfig::default());
//! let mut table = Table::plain(&ctx);
//! table.header().cell("Company").cell("Country");
//! table.row().cell("Alfreds Futterkiste").cell("Germany");
//! table.print_all().unwrap();
//!
//! assert_eq!(capture.texts()[3], " |Alfreds Futterkiste|Germany|");
//! ```
//!
//! # Widths
//!
//! Column widths live on the header cells. Every data cell appended to a
//! column grows the header cell to the widest line seen so far, unless the
//! column is fixed-width or the cell is a merge cell. Cell-format flags on
//! a header cell apply to every data cell below it.
//!
//! # Paging
//!
//! Starting a row on a table that already holds more rows than the page
//! length prints what is buffered and drops the printed rows, keeping the
//! header. See [`Context::set_page_length`].

mod render;

use tracing::{debug, warn};

use crate::attr::{Attributes, Flags};
use crate::cell::Cell;
use crate::context::Context;
use crate::row::Row;
use crate::util::{display_width, widest_line};
use crate::value::CellValue;

pub use render::PrintScope;

/// Indent of a top-level table.
pub const DEFAULT_INDENT: usize = 1;

/// Extra indent of a subtable relative to its parent.
pub const SUBTABLE_INDENT: usize = 4;

/// A table of rows and cells with an optional headline.
#[derive(Debug)]
pub struct Table {
    ctx: Context,
    rows: Vec<Row>,
    attrs: Attributes,
    headline: String,
    indent: usize,
    prompt: Option<usize>,
    pending: Attributes,
    line: String,
}

impl Table {
    /// Creates a table with a headline and table-level attributes.
    ///
    /// The attribute flags are added to every row started afterwards. The
    /// color is the default row color; the width is the minimum line width.
    pub fn new(ctx: &Context, headline: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            ctx: ctx.clone(),
            rows: vec![Row::header()],
            attrs,
            headline: headline.into(),
            indent: DEFAULT_INDENT,
            prompt: None,
            pending: Attributes::new(),
            line: String::new(),
        }
    }

    /// A table without headline or attributes.
    pub fn plain(ctx: &Context) -> Self {
        Self::new(ctx, "", Attributes::new())
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Replaces the attributes consumed by the next cell or row call.
    pub fn attrs(&mut self, attrs: Attributes) -> &mut Self {
        self.pending = attrs;
        self
    }

    /// Adds a flag to the attributes consumed by the next cell or row call.
    pub fn flag(&mut self, flag: Flags) -> &mut Self {
        self.pending.set(flag);
        self
    }

    fn take_pending(&mut self) -> Attributes {
        std::mem::take(&mut self.pending)
    }

    /// Makes the header row visible, using the pending attributes.
    pub fn header(&mut self) -> &mut Self {
        let attrs = self.take_pending();
        self.header_with(attrs)
    }

    /// Makes the header row visible and merges `attrs` into it.
    pub fn header_with(&mut self, attrs: Attributes) -> &mut Self {
        let header = &mut self.rows[0];
        header.attrs.clear(Flags::INVISIBLE);
        header.attrs.merge(&attrs);
        self
    }

    /// Starts a data row, using the pending attributes.
    pub fn row(&mut self) -> &mut Self {
        let attrs = self.take_pending();
        self.row_with(attrs)
    }

    /// Starts a data row with `attrs`.
    pub fn row_with(&mut self, attrs: Attributes) -> &mut Self {
        self.new_row(attrs);
        self
    }

    /// Starts a separator-line row.
    pub fn line(&mut self) -> &mut Self {
        let attrs = self.take_pending().with_flag(Flags::LINE);
        self.new_row(attrs);
        self
    }

    /// Appends a cell to the last row, consuming the pending attributes.
    ///
    /// Cells beyond the column limit, or that would make a line wider than
    /// the row limit, are dropped with a warning.
    pub fn cell(&mut self, value: impl Into<CellValue>) -> &mut Self {
        let attrs = self.take_pending();
        let limits = self.ctx.limits();
        let last = self.rows.len() - 1;
        let col = self.rows[last].cells.len();

        if col >= limits.max_col_count {
            warn!(
                column = col,
                limit = limits.max_col_count,
                "too many cells in row, dropping cell"
            );
            return self;
        }

        let (cell, column_width) = if last == 0 {
            let cell = self.header_cell(value.into(), attrs);
            let width = cell.attrs().width;
            (cell, width)
        } else {
            self.data_cell(col, value.into(), attrs)
        };

        let width = self.width_with_column(col, column_width);
        if width > limits.max_row_width {
            warn!(
                width,
                limit = limits.max_row_width,
                "row too wide, dropping cell"
            );
            return self;
        }

        let header_cells = &mut self.rows[0].cells;
        if header_cells.len() <= col {
            header_cells.resize_with(col + 1, Cell::default);
        }
        if last == 0 {
            header_cells[col] = cell;
        } else {
            let header = header_cells[col].attrs_mut();
            header.width = header.width.max(column_width);
            self.rows[last].cells.push(cell);
        }
        self
    }

    /// Line width if column `col` were `column_width` wide.
    fn width_with_column(&self, col: usize, column_width: usize) -> usize {
        let sep = display_width(&self.ctx.separator());
        let mut widths = self.column_widths();
        if widths.len() <= col {
            widths.resize(col + 1, Cell::default().attrs().width);
        }
        widths[col] = widths[col].max(column_width);
        1 + widths.iter().map(|w| w + sep).sum::<usize>()
    }

    fn header_cell(&self, value: CellValue, mut attrs: Attributes) -> Cell {
        let limits = self.ctx.limits();
        let text = value.render(&mut attrs);
        let text_width = widest_line(&text);

        attrs.width = if attrs.test(Flags::FIXED) {
            attrs
                .width
                .max(limits.min_col_width.max(text_width.min(limits.max_col_width)))
                .min(limits.max_col_width)
        } else {
            attrs.width.max(text_width).min(limits.max_col_width)
        };

        Cell::raw(text, attrs)
    }

    /// Builds a data cell for column `col` and the width its column needs.
    fn data_cell(&self, col: usize, value: CellValue, mut attrs: Attributes) -> (Cell, usize) {
        let limits = self.ctx.limits();
        let header_attrs = self.rows[0]
            .cells
            .get(col)
            .map(|c| *c.attrs())
            .unwrap_or_default();

        if value.is_numeric() {
            attrs.merge(&header_attrs);
        }
        attrs.flags |= header_attrs.cell_format();

        let text = value.render(&mut attrs);
        let mut cell = Cell::new(text, attrs);

        if header_attrs.test(Flags::FIXED) {
            cell.attrs_mut().width = header_attrs.width;
            return (cell, header_attrs.width);
        }

        let width = cell
            .natural_width()
            .max(cell.attrs().width)
            .max(header_attrs.width)
            .min(limits.max_col_width);
        cell.attrs_mut().width = width;

        let column_width = if cell.attrs().test(Flags::MERGE) {
            header_attrs.width
        } else {
            width
        };
        (cell, column_width)
    }

    /// Starts a row that holds a new subtable and returns the subtable.
    ///
    /// The subtable shares this table's context and is indented further.
    pub fn subtable(&mut self, attrs: Attributes) -> &mut Table {
        self.new_row(attrs);

        let mut table = Table::new(&self.ctx, "", attrs);
        table.indent = self.indent + SUBTABLE_INDENT;

        let last = self.rows.len() - 1;
        let row = &mut self.rows[last];
        row.attrs.set(Flags::SUBTABLE);
        row.subtable.insert(Box::new(table))
    }

    /// The subtable attached to row `row`, if any.
    pub fn subtable_mut(&mut self, row: usize) -> Option<&mut Table> {
        self.rows.get_mut(row)?.subtable.as_deref_mut()
    }

    /// The most recently attached subtable still in the buffer.
    pub fn last_subtable_mut(&mut self) -> Option<&mut Table> {
        self.rows
            .iter_mut()
            .rev()
            .find_map(|row| row.subtable.as_deref_mut())
    }

    /// Replaces the header row with a copy of `other`'s header, so this
    /// table lines up with `other` when both are printed.
    ///
    /// Widths keep growing independently after the copy.
    pub fn adopt_header(&mut self, other: &Table) {
        let header = &mut self.rows[0];
        header.attrs = other.rows[0].attrs;
        header.cells = other.rows[0].cells.clone();
    }

    fn new_row(&mut self, attrs: Attributes) {
        if self.rows.len() > self.ctx.page_length() {
            self.flush_page();
        }

        let mut attrs = attrs;
        attrs.flags |= self.attrs.flags;
        self.rows.push(Row::new(attrs));
    }

    /// Prints the buffered rows and drops them, keeping the header and any
    /// subtable rows directly below it.
    fn flush_page(&mut self) {
        debug!(rows = self.rows.len(), "page full, flushing table");

        let printed = self
            .render(PrintScope::Header)
            .and_then(|()| self.render(PrintScope::Body));
        if let Err(err) = printed {
            self.ctx.defer_error(err);
        }

        let keep = 1 + self.rows[1..]
            .iter()
            .take_while(|row| row.survives_flush())
            .count();
        self.rows.truncate(keep);
        self.prompt = None;
    }

    /// Number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// All rows; index 0 is the header.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header_row(&self) -> &Row {
        &self.rows[0]
    }

    /// Widths of the columns, taken from the header cells.
    pub fn column_widths(&self) -> Vec<usize> {
        self.rows[0].cells.iter().map(|c| c.attrs().width).collect()
    }

    /// Width of a full line: every column plus its separator and one more.
    ///
    /// Capped at the configured row width.
    pub fn total_width(&self) -> usize {
        let limits = self.ctx.limits();
        let sep = display_width(&self.ctx.separator());
        let width = 1 + self
            .column_widths()
            .iter()
            .map(|w| w + sep)
            .sum::<usize>();
        width.min(limits.max_row_width).max(self.rows[0].attrs.width)
    }

    /// The text of a cell, if it exists.
    pub fn cell_text(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.cells.get(col).map(|c| c.value())
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn set_headline(&mut self, headline: impl Into<String>) {
        self.headline = headline.into();
    }

    pub fn indent(&self) -> usize {
        self.indent
    }
}
