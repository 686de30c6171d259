//! Layout attributes for tables, rows and cells.
//!
//! An [`Attributes`] value bundles three things: a set of [`Flags`], a
//! [`Color`] and a width. The same type is used at every level of the
//! table → row → cell hierarchy; what a flag means depends on where it is
//! set (see [`Flags::CELL_FORMAT`] and [`Flags::ROW_KIND`]).
//!
//! # Composition
//!
//! Attributes compose with "merge-add" semantics:
//!
//! ```rust
//! use asciitable::{Attributes, Color, Flags};
//!
//! let mut base = Attributes::new().with_flag(Flags::NUMBER).with_width(10);
//! base.merge(&Attributes::new().with_flag(Flags::HEX).with_color(Color::Red));
//!
//! assert!(base.test(Flags::NUMBER) && base.test(Flags::HEX));
//! assert_eq!(base.color, Color::Red);
//! assert_eq!(base.width, 10); // default width on the right does not override
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Width carried by default-constructed attributes.
///
/// Also the default minimum column width. A width equal to this value is
/// treated as "unset" when attributes are merged.
pub const DEFAULT_WIDTH: usize = 3;

bitflags! {
    /// Layout markers for cells and rows.
    ///
    /// Cell-format flags describe how a value is converted and aligned.
    /// Row-kind flags describe what a row is. Both live in the same set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Flags: u32 {
        /// Integer data, right-aligned in data rows.
        const NUMBER      = 1 << 0;
        /// Render integers as unsigned.
        const UNSIGNED    = 1 << 1;
        /// Render integers as `0x` hexadecimal.
        const HEX         = 1 << 2;
        /// Convert values to `true` / `false`.
        const BOOL        = 1 << 3;
        /// Convert values to `yes` / `no`.
        const YESNO       = 1 << 4;
        /// The column width is fixed; long values wrap at the width.
        const FIXED       = 1 << 5;
        /// The cell may spill into the columns to its right.
        const MERGE       = 1 << 6;
        /// Right-align the cell.
        const RIGHT       = 1 << 7;
        /// Left-align the cell, even when numeric.
        const LEFT        = 1 << 8;
        /// The row is drawn as a separator line.
        const LINE        = 1 << 9;
        /// The row is the header row.
        const HEADER      = 1 << 10;
        /// The row is not printed.
        const INVISIBLE   = 1 << 11;
        /// The row is a placeholder for a subtable.
        const SUBTABLE    = 1 << 12;
        /// The row is printed as a prompt after the table.
        const PROMPT      = 1 << 13;
        /// The row is printed as an acknowledge prompt after the table.
        const ACKNOWLEDGE = 1 << 14;
        /// The row carries a message; it is framed with spaces.
        const MESSAGE     = 1 << 15;

        /// Flags that describe cell formatting.
        const CELL_FORMAT = Self::NUMBER.bits()
            | Self::UNSIGNED.bits()
            | Self::HEX.bits()
            | Self::BOOL.bits()
            | Self::YESNO.bits()
            | Self::FIXED.bits()
            | Self::MERGE.bits()
            | Self::RIGHT.bits()
            | Self::LEFT.bits();

        /// Flags that describe what kind of row this is.
        const ROW_KIND = Self::LINE.bits()
            | Self::HEADER.bits()
            | Self::INVISIBLE.bits()
            | Self::SUBTABLE.bits()
            | Self::PROMPT.bits()
            | Self::ACKNOWLEDGE.bits()
            | Self::MESSAGE.bits();
    }
}

/// Color of a row, cell or table.
///
/// `Toggle`, `ToggleDark` and `Same` are directives that the table resolves
/// when a line is flushed; every other variant names a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// No color of its own; inherit from the enclosing level.
    #[default]
    None,
    /// Bright text on a dark background.
    Inverse,
    /// Alternate bright and dark, starting bright.
    Toggle,
    /// Alternate bright and dark, starting dark.
    ToggleDark,
    /// Keep the color of the previous line.
    Same,
    /// Bright background.
    Bright,
    /// Dark background.
    Dark,
    /// Marker characters `*` and `#` get colors of their own.
    PerChar,
    /// Green background.
    Green,
    /// Red background.
    Red,
    /// Blue background.
    Blue,
    /// White background.
    White,
}

/// Flags, color and width of a table, row or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attributes {
    /// Layout markers.
    pub flags: Flags,
    /// Color, or `Color::None` to inherit.
    pub color: Color,
    /// Cell or column width; for a table, the total line width.
    pub width: usize,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            flags: Flags::empty(),
            color: Color::None,
            width: DEFAULT_WIDTH,
        }
    }
}

impl Attributes {
    /// Default attributes: no flags, no color, minimum width.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag in place.
    pub fn set(&mut self, flag: Flags) {
        self.flags.insert(flag);
    }

    /// Clear a flag in place.
    pub fn clear(&mut self, flag: Flags) {
        self.flags.remove(flag);
    }

    /// True if every bit of `flag` is set.
    pub fn test(&self, flag: Flags) -> bool {
        self.flags.contains(flag)
    }

    /// Copy with `flag` added.
    #[must_use]
    pub fn with_flag(mut self, flag: Flags) -> Self {
        self.set(flag);
        self
    }

    /// Copy with `flag` removed.
    #[must_use]
    pub fn without_flag(mut self, flag: Flags) -> Self {
        self.clear(flag);
        self
    }

    /// Copy with the color replaced.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Copy with the width replaced.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Merge-add `other` into `self`.
    ///
    /// Flags are OR'ed. A color other than `Color::None` overrides, and a
    /// width other than [`DEFAULT_WIDTH`] overrides.
    pub fn merge(&mut self, other: &Attributes) {
        self.flags |= other.flags;
        if other.color != Color::None {
            self.color = other.color;
        }
        if other.width != DEFAULT_WIDTH {
            self.width = other.width;
        }
    }

    /// Pure form of [`merge`](Self::merge).
    #[must_use]
    pub fn merged(mut self, other: &Attributes) -> Self {
        self.merge(other);
        self
    }

    /// Only the cell-format part of the flags.
    pub fn cell_format(&self) -> Flags {
        self.flags & Flags::CELL_FORMAT
    }
}

impl From<Flags> for Attributes {
    fn from(flags: Flags) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }
}

impl From<Color> for Attributes {
    fn from(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}
