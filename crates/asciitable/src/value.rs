//! Values accepted by [`Table::cell`](crate::Table::cell).

use crate::attr::{Attributes, Flags};

/// A value appended to a table cell.
///
/// Text is stored as given. Numbers are rendered when appended, using the
/// cell's attributes merged with those of its header column, so a `HEX`
/// flag declared once on the header renders every value in the column as
/// hexadecimal.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Literal text.
    Text(String),
    /// Signed integer.
    Signed(i64),
    /// Unsigned integer.
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean, rendered as `true`/`false` unless `YESNO` is requested.
    Bool(bool),
}

impl CellValue {
    /// True for every variant except [`CellValue::Text`].
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CellValue::Text(_))
    }

    /// Renders the value and adjusts `attrs` for it.
    ///
    /// Numeric values gain [`Flags::NUMBER`]; booleans also gain
    /// [`Flags::BOOL`] unless a yes/no rendering was asked for.
    pub(crate) fn render(self, attrs: &mut Attributes) -> String {
        match self {
            CellValue::Text(text) => text,
            CellValue::Signed(v) => {
                attrs.set(Flags::NUMBER);
                if attrs.test(Flags::HEX) {
                    hex(v as u64)
                } else if attrs.test(Flags::UNSIGNED) {
                    (v as u64).to_string()
                } else {
                    v.to_string()
                }
            }
            CellValue::Unsigned(v) => {
                attrs.set(Flags::NUMBER);
                if attrs.test(Flags::HEX) {
                    hex(v)
                } else {
                    v.to_string()
                }
            }
            CellValue::Float(v) => {
                attrs.set(Flags::NUMBER);
                v.to_string()
            }
            CellValue::Bool(b) => {
                attrs.set(Flags::NUMBER);
                if !attrs.test(Flags::YESNO) {
                    attrs.set(Flags::BOOL);
                }
                let digit = if b { "1" } else { "0" };
                digit.to_string()
            }
        }
    }
}

/// Hexadecimal rendering of the low 32 bits.
fn hex(v: u64) -> String {
    format!("0x{:x}", v & 0xFFFF_FFFF)
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<&String> for CellValue {
    fn from(v: &String) -> Self {
        CellValue::Text(v.clone())
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(f64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

macro_rules! signed_from {
    ($($t:ty),*) => {
        $(impl From<$t> for CellValue {
            fn from(v: $t) -> Self {
                CellValue::Signed(v as i64)
            }
        })*
    };
}

macro_rules! unsigned_from {
    ($($t:ty),*) => {
        $(impl From<$t> for CellValue {
            fn from(v: $t) -> Self {
                CellValue::Unsigned(v as u64)
            }
        })*
    };
}

signed_from!(i8, i16, i32, i64, isize);
unsigned_from!(u8, u16, u32, u64, usize);
