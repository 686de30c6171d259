//! Rows: ordered cells sharing one set of row attributes.

use crate::attr::{Attributes, Flags};
use crate::cell::Cell;
use crate::table::Table;

/// A row of a [`Table`].
///
/// A row may own one subtable, which is printed right after it. The header
/// a row is laid out against is not stored here: the owning table passes
/// its header explicitly when rendering.
#[derive(Debug, Default)]
pub struct Row {
    pub(crate) cells: Vec<Cell>,
    pub(crate) attrs: Attributes,
    pub(crate) subtable: Option<Box<Table>>,
    pub(crate) continuing: bool,
}

impl Row {
    pub(crate) fn new(attrs: Attributes) -> Self {
        Self {
            attrs,
            ..Self::default()
        }
    }

    /// The header row of a fresh table: flagged header, initially invisible.
    pub(crate) fn header() -> Self {
        Self::new(Attributes::from(Flags::HEADER | Flags::INVISIBLE))
    }

    /// The cells of this row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The row attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    /// The subtable attached to this row, if any.
    pub fn subtable(&self) -> Option<&Table> {
        self.subtable.as_deref()
    }

    /// True if the row is the header row.
    pub fn is_header(&self) -> bool {
        self.attrs.test(Flags::HEADER)
    }

    /// True if the row waits to be printed after the table as a prompt.
    pub fn is_prompt(&self) -> bool {
        self.attrs.test(Flags::PROMPT) || self.attrs.test(Flags::ACKNOWLEDGE)
    }

    /// Rows kept when a page is flushed: header and subtable placeholders.
    pub(crate) fn survives_flush(&self) -> bool {
        self.is_header() || self.attrs.test(Flags::SUBTABLE)
    }
}
