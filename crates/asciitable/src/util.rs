//! Text measuring helpers shared by the cell model and the print engine.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to values cut short to fit their column.
pub const TRUNCATION_MARKER: char = '*';

/// Display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Width of the widest line of a possibly multi-line value.
///
/// Lines are split on `\n`; a `\r` before the newline is not counted.
pub fn widest_line(s: &str) -> usize {
    s.split('\n')
        .map(|line| display_width(line.strip_suffix('\r').unwrap_or(line)))
        .max()
        .unwrap_or(0)
}

/// Cuts `s` down to `width` columns, marking the cut.
///
/// The kept prefix is at most `width - 1` columns wide and is followed by
/// [`TRUNCATION_MARKER`]. A zero width yields an empty string.
///
/// ```rust
/// use asciitable::util::truncate_with_marker;
///
/// assert_eq!(truncate_with_marker("abcdefgh", 5), "abcd*");
/// assert_eq!(truncate_with_marker("abc", 5), "abc");
/// ```
pub fn truncate_with_marker(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let limit = width - 1;
    let mut result = String::with_capacity(width);
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push(TRUNCATION_MARKER);
    result
}

/// Splits `s` after at most `width` columns, never inside a character.
///
/// Returns the head and the byte offset where the tail starts.
pub fn split_at_width(s: &str, width: usize) -> (&str, usize) {
    let mut current = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if current + w > width {
            return (&s[..idx], idx);
        }
        current += w;
    }
    (s, s.len())
}
