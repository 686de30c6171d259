//! A single table cell and its line-wrap cursor.

use crate::attr::{Attributes, Flags};
use crate::util::{split_at_width, widest_line};

/// One field of a row.
///
/// Besides its value and attributes a cell keeps a wrap cursor: the part
/// of the value that has not been printed yet. Multi-line values and values
/// of fixed-width cells are printed one chunk per physical line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    value: String,
    attrs: Attributes,
    remaining: String,
}

impl Cell {
    /// Construct a cell, applying boolean conversion once.
    ///
    /// With [`Flags::BOOL`] any value other than `"0"` becomes `"true"` and
    /// `"0"` becomes `"false"`; [`Flags::YESNO`] does the same with `"yes"`
    /// and `"no"`.
    pub fn new(value: impl Into<String>, attrs: Attributes) -> Self {
        let mut value = value.into();
        if attrs.test(Flags::BOOL) {
            value = if value != "0" { "true" } else { "false" }.to_string();
        } else if attrs.test(Flags::YESNO) {
            value = if value != "0" { "yes" } else { "no" }.to_string();
        }
        Self {
            value,
            attrs,
            remaining: String::new(),
        }
    }

    /// Construct a cell without boolean conversion, as header cells are.
    pub(crate) fn raw(value: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            value: value.into(),
            attrs,
            remaining: String::new(),
        }
    }

    /// The full value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The cell attributes.
    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub(crate) fn attrs_mut(&mut self) -> &mut Attributes {
        &mut self.attrs
    }

    /// Width of the widest line of the value.
    pub fn natural_width(&self) -> usize {
        widest_line(&self.value)
    }

    /// Returns the next printable chunk and whether more text remains.
    ///
    /// A call with `continuing == false` rewinds the cursor to the start of
    /// the value. The chunk ends at the first newline (a `\r` before it is
    /// dropped too). A fixed-width cell whose segment is wider than its width
    /// is cut at the width instead, and the rest wraps onto the next line.
    pub fn next_chunk(&mut self, continuing: bool) -> (String, bool) {
        if !continuing {
            self.remaining = self.value.clone();
        }

        let (mut end, mut skip) = match self.remaining.find('\n') {
            None => (self.remaining.len(), 0),
            Some(pos) if pos > 0 && self.remaining.as_bytes()[pos - 1] == b'\r' => (pos - 1, 2),
            Some(pos) => (pos, 1),
        };

        if self.attrs.test(Flags::FIXED) {
            let (head, cut) = split_at_width(&self.remaining[..end], self.attrs.width);
            // A cut at zero would never make progress.
            if head.len() < end && cut > 0 {
                end = cut;
                skip = 0;
            }
        }

        let chunk = self.remaining[..end].to_string();
        self.remaining.drain(..end + skip);
        let has_more = !self.remaining.is_empty();
        (chunk, has_more)
    }
}
