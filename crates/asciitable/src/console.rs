//! Console writers: where rendered lines end up.
//!
//! The print engine only ever calls [`ConsoleWriter::write_line`] with a
//! finished line and a [`LineColor`]. The color directives of [`Color`]
//! (toggling, "same as before") are resolved by the table before a writer
//! sees them.
//!
//! Three writers are provided:
//!
//! - [`AnsiWriter`] styles lines with ANSI sequences on stdout
//! - [`PlainWriter`] writes raw text to any [`io::Write`] sink
//! - [`CaptureWriter`] records lines in memory

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use console::{Style, Term};

use crate::attr::Color;

/// A concrete line color, as handed to a [`ConsoleWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineColor {
    /// Terminal default.
    #[default]
    Plain,
    Inverse,
    Bright,
    Dark,
    /// `*` and `#` get colors of their own, everything else is default.
    PerChar,
    Green,
    Red,
    Blue,
    White,
}

impl LineColor {
    /// The concrete color for `color`, or `None` for the directives
    /// (`None`, `Toggle`, `ToggleDark`, `Same`) that need table state.
    pub fn concrete(color: Color) -> Option<LineColor> {
        match color {
            Color::Inverse => Some(LineColor::Inverse),
            Color::Bright => Some(LineColor::Bright),
            Color::Dark => Some(LineColor::Dark),
            Color::PerChar => Some(LineColor::PerChar),
            Color::Green => Some(LineColor::Green),
            Color::Red => Some(LineColor::Red),
            Color::Blue => Some(LineColor::Blue),
            Color::White => Some(LineColor::White),
            Color::None | Color::Toggle | Color::ToggleDark | Color::Same => None,
        }
    }
}

/// Sink for rendered table lines.
pub trait ConsoleWriter {
    /// Writes one complete line. The line carries no terminator.
    fn write_line(&mut self, line: &str, color: LineColor) -> io::Result<()>;
}

impl<W: ConsoleWriter + ?Sized> ConsoleWriter for Box<W> {
    fn write_line(&mut self, line: &str, color: LineColor) -> io::Result<()> {
        (**self).write_line(line, color)
    }
}

/// Writes colored lines to stdout.
///
/// Color support is detected once, when the writer is created; on a
/// terminal without color support lines are written as plain text.
#[derive(Debug)]
pub struct AnsiWriter {
    term: Term,
    colors: bool,
}

impl AnsiWriter {
    /// Writer for stdout with detected color support.
    pub fn new() -> Self {
        let term = Term::stdout();
        let colors = term.features().colors_supported();
        Self { term, colors }
    }

    /// Writer for stdout that always or never emits color.
    pub fn with_colors(colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            colors,
        }
    }

    fn style(&self, color: LineColor) -> Style {
        let style = match color {
            LineColor::Plain | LineColor::PerChar => Style::new(),
            LineColor::Inverse => Style::new().white().on_yellow(),
            LineColor::Bright | LineColor::White => Style::new().black().on_white(),
            LineColor::Dark => Style::new().black().on_cyan(),
            LineColor::Green => Style::new().white().on_green(),
            LineColor::Red => Style::new().white().on_red(),
            LineColor::Blue => Style::new().white().on_blue(),
        };
        style.force_styling(self.colors)
    }

    fn per_char(&self, line: &str) -> String {
        let star = Style::new().blue().force_styling(self.colors);
        let hash = Style::new().white().bright().force_styling(self.colors);
        let mut out = String::with_capacity(line.len() * 2);
        for c in line.chars() {
            match c {
                '*' => out.push_str(&star.apply_to(c).to_string()),
                '#' => out.push_str(&hash.apply_to(c).to_string()),
                _ => out.push(c),
            }
        }
        out
    }
}

impl Default for AnsiWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleWriter for AnsiWriter {
    fn write_line(&mut self, line: &str, color: LineColor) -> io::Result<()> {
        let rendered = match color {
            LineColor::Plain => line.to_string(),
            LineColor::PerChar => self.per_char(line),
            other => self.style(other).apply_to(line).to_string(),
        };
        self.term.write_line(&rendered)
    }
}

/// Writes raw lines to an [`io::Write`] sink, ignoring colors.
///
/// This is the redirection target: a file, a pipe, a buffer.
#[derive(Debug)]
pub struct PlainWriter<W: Write> {
    sink: W,
}

impl<W: Write> PlainWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Returns the wrapped sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> ConsoleWriter for PlainWriter<W> {
    fn write_line(&mut self, line: &str, _color: LineColor) -> io::Result<()> {
        writeln!(self.sink, "{}", line)?;
        self.sink.flush()
    }
}

/// Records every line with its color.
///
/// Clones share the same buffer, so a test can hand one clone to a
/// [`Context`](crate::Context) and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    lines: Rc<RefCell<Vec<(String, LineColor)>>>,
}

impl CaptureWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines with their colors.
    pub fn lines(&self) -> Vec<(String, LineColor)> {
        self.lines.borrow().clone()
    }

    /// Only the text of the recorded lines.
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|(t, _)| t.clone()).collect()
    }

    /// Only the colors of the recorded lines.
    pub fn colors(&self) -> Vec<LineColor> {
        self.lines.borrow().iter().map(|(_, c)| *c).collect()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl ConsoleWriter for CaptureWriter {
    fn write_line(&mut self, line: &str, color: LineColor) -> io::Result<()> {
        self.lines.borrow_mut().push((line.to_string(), color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_are_not_concrete() {
        assert_eq!(LineColor::concrete(Color::Toggle), None);
        assert_eq!(LineColor::concrete(Color::ToggleDark), None);
        assert_eq!(LineColor::concrete(Color::Same), None);
        assert_eq!(LineColor::concrete(Color::None), None);
        assert_eq!(LineColor::concrete(Color::Green), Some(LineColor::Green));
    }

    #[test]
    fn plain_writer_writes_raw_lines() {
        let mut writer = PlainWriter::new(Vec::new());
        writer.write_line("first", LineColor::Bright).unwrap();
        writer.write_line("second", LineColor::PerChar).unwrap();
        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(out, "first\nsecond\n");
    }

    #[test]
    fn capture_clones_share_lines() {
        let capture = CaptureWriter::new();
        let mut handle = capture.clone();
        handle.write_line("row", LineColor::Dark).unwrap();
        assert_eq!(capture.lines(), vec![("row".to_string(), LineColor::Dark)]);
        capture.clear();
        assert!(capture.texts().is_empty());
    }

    #[test]
    fn per_char_keeps_markers_without_color() {
        let writer = AnsiWriter::with_colors(false);
        assert_eq!(writer.per_char("**##ab"), "**##ab");
    }

    #[test]
    fn boxed_writers_forward() {
        let capture = CaptureWriter::new();
        let mut boxed: Box<dyn ConsoleWriter> = Box::new(capture.clone());
        boxed.write_line("x", LineColor::Red).unwrap();
        assert_eq!(capture.colors(), vec![LineColor::Red]);
    }
}
