//! The print engine: line layout, wrapping, merging and color resolution.

use std::io;
use std::iter;
use std::time::Duration;

use asciitable_input::LineReader;
use tracing::warn;

use super::Table;
use crate::attr::{Color, Flags};
use crate::config::{Limits, RowWindow};
use crate::console::LineColor;
use crate::error::TableError;
use crate::util::{display_width, truncate_with_marker};

/// Which part of a table a print covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrintScope {
    /// Headline, header and body.
    #[default]
    All,
    /// Headline and header, including those of leading subtables.
    Header,
    /// Body rows only.
    Body,
}

/// Settings that stay fixed for one print.
struct Layout {
    widths: Vec<usize>,
    sep: String,
    sep_width: usize,
    max_row_width: usize,
}

impl Table {
    /// Prints the table.
    ///
    /// An I/O error left behind by an automatic page flush is returned
    /// here, before anything is printed.
    pub fn print(&mut self, scope: PrintScope) -> Result<(), TableError> {
        if let Some(err) = self.ctx.take_error() {
            return Err(err.into());
        }
        self.render(scope)?;
        Ok(())
    }

    /// Prints the whole table.
    pub fn print_all(&mut self) -> Result<(), TableError> {
        self.print(PrintScope::All)
    }

    /// Shows the prompt row and reads the answer.
    ///
    /// If the last print already drew a prompt it is not drawn again;
    /// otherwise the last prompt row of the table is drawn first. Returns
    /// `Ok(None)` when the reader timed out.
    pub fn prompt_and_read(
        &mut self,
        reader: &mut dyn LineReader,
        timeout: Option<Duration>,
    ) -> Result<Option<String>, TableError> {
        if let Some(err) = self.ctx.take_error() {
            return Err(err.into());
        }

        if self.prompt.take().is_none() {
            if let Some(idx) = self.rows.iter().rposition(|row| row.is_prompt()) {
                self.draw_prompt(idx)?;
            }
        }

        Ok(reader.read_line(timeout)?)
    }

    pub(super) fn render(&mut self, scope: PrintScope) -> io::Result<()> {
        let limits = self.ctx.limits();
        self.prompt = None;

        if scope != PrintScope::Body && !self.headline.is_empty() {
            self.begin_line(limits.max_row_width);
            self.line.push_str(&self.headline);
            self.endline(self.attrs.color)?;
        }

        let layout = self.layout(&limits);
        let (skip, mut budget) = self.window();

        for idx in 0..self.rows.len() {
            self.line.clear();

            if idx == 0 {
                if scope != PrintScope::Body {
                    self.print_header(&layout)?;
                }
                continue;
            }
            if idx <= skip {
                continue;
            }
            if budget == 0 && scope != PrintScope::Header {
                break;
            }

            let attrs = self.rows[idx].attrs;
            if scope == PrintScope::Header {
                if !attrs.test(Flags::SUBTABLE) {
                    break;
                }
                if let Some(sub) = self.rows[idx].subtable.as_deref_mut() {
                    sub.render(scope)?;
                }
                continue;
            }

            if attrs.test(Flags::LINE) {
                self.begin_line(layout.max_row_width);
                self.draw_line(&layout, Color::Bright)?;
            } else if attrs.test(Flags::INVISIBLE) {
                continue;
            } else if self.rows[idx].is_prompt() {
                self.prompt = Some(idx);
            } else if attrs.test(Flags::SUBTABLE) {
                if let Some(sub) = self.rows[idx].subtable.as_deref_mut() {
                    sub.render(scope)?;
                }
            } else {
                budget -= 1;
                let color = if attrs.color != Color::None {
                    attrs.color
                } else {
                    self.attrs.color
                };
                self.print_row(idx, &layout, color)?;
            }
        }

        if let Some(idx) = self.prompt {
            self.draw_prompt(idx)?;
        }
        Ok(())
    }

    /// Column widths and the total width, recorded on the header row.
    fn layout(&mut self, limits: &Limits) -> Layout {
        let sep = self.ctx.separator();
        let sep_width = display_width(&sep);
        let widths = self.column_widths();

        let mut total = 1 + widths.iter().map(|w| w + sep_width).sum::<usize>();
        if total > limits.max_row_width {
            warn!(
                width = total,
                limit = limits.max_row_width,
                "table wider than the row limit"
            );
            total = limits.max_row_width;
        }
        let header = &mut self.rows[0].attrs;
        if header.width < total {
            header.width = total;
        }

        Layout {
            widths,
            sep,
            sep_width,
            max_row_width: limits.max_row_width,
        }
    }

    /// Rows to skip and the number of data rows to show.
    fn window(&self) -> (usize, usize) {
        let body = self.rows.len() - 1;
        match self.ctx.row_window() {
            RowWindow::All => (0, usize::MAX),
            RowWindow::Head(n) => (0, n),
            RowWindow::Tail(n) => (body.saturating_sub(n), usize::MAX),
        }
    }

    fn print_header(&mut self, layout: &Layout) -> io::Result<()> {
        if self.rows[0].attrs.test(Flags::INVISIBLE) {
            return Ok(());
        }

        self.begin_line(layout.max_row_width);
        self.draw_line(layout, Color::Bright)?;
        self.print_row(0, layout, Color::Bright)?;
        self.begin_line(layout.max_row_width);
        self.draw_line(layout, Color::Bright)
    }

    /// Draws a separator line after the indent already in the buffer.
    fn draw_line(&mut self, layout: &Layout, color: Color) -> io::Result<()> {
        let dashes = layout.sep_width.saturating_sub(1);
        for width in &layout.widths {
            self.line.push('+');
            fill(&mut self.line, width + dashes, '-', layout.max_row_width);
        }

        let used = display_width(&self.line);
        if self.attrs.width > used {
            fill(&mut self.line, self.attrs.width - used, '-', layout.max_row_width);
        }
        fill(&mut self.line, dashes, '-', layout.max_row_width);
        self.line.push('+');
        self.endline(color)?;

        if self.attrs.color == Color::Toggle {
            self.attrs.color = Color::ToggleDark;
        }
        Ok(())
    }

    /// Prints row `idx`, one physical line per pass until every cell is
    /// exhausted. Passes after the first keep the color of the first.
    fn print_row(&mut self, idx: usize, layout: &Layout, color: Color) -> io::Result<()> {
        let message = self.rows[idx].attrs.test(Flags::MESSAGE);
        let is_header = self.rows[idx].is_header();
        let edge = if message { " " } else { layout.sep.as_str() };

        let mut color = color;
        self.rows[idx].continuing = false;

        loop {
            self.begin_line(layout.max_row_width);
            self.line.push_str(edge);

            let row = &mut self.rows[idx];
            let cell_count = row.cells.len();
            let mut more = false;
            let mut col = 0;
            let mut cell_idx = 0;

            while col < layout.widths.len() && cell_idx < cell_count {
                let cell = &mut row.cells[cell_idx];
                let attrs = *cell.attrs();
                let (chunk, has_more) = cell.next_chunk(row.continuing);
                more |= has_more;

                let size = display_width(&chunk);
                let mut width = layout.widths[col];

                if width < size && attrs.test(Flags::MERGE) {
                    col += 1;
                    while col < layout.widths.len() {
                        width += layout.widths[col] + layout.sep_width;
                        if width >= size {
                            break;
                        }
                        col += 1;
                    }
                    if width < size && col == layout.widths.len() {
                        width = self.attrs.width.saturating_sub(display_width(&self.line));
                    }
                }

                let text = if size <= width {
                    chunk
                } else {
                    truncate_with_marker(&chunk, width)
                };
                let pad = width.saturating_sub(display_width(&text));

                let right = attrs.test(Flags::RIGHT)
                    || (attrs.test(Flags::NUMBER) && !is_header && !attrs.test(Flags::LEFT));
                if right {
                    fill(&mut self.line, pad, ' ', layout.max_row_width);
                    self.line.push_str(&text);
                } else {
                    self.line.push_str(&text);
                    fill(&mut self.line, pad, ' ', layout.max_row_width);
                }

                if col < layout.widths.len() {
                    col += 1;
                }
                cell_idx += 1;
                if col < layout.widths.len() && cell_idx < cell_count {
                    self.line.push_str(&layout.sep);
                }
            }

            let used = display_width(&self.line);
            if self.attrs.width > used {
                fill(&mut self.line, self.attrs.width - used, ' ', layout.max_row_width);
            }
            self.line.push_str(edge);
            self.endline(color)?;

            if !more {
                break;
            }
            self.rows[idx].continuing = true;
            color = Color::Same;
        }

        self.rows[idx].continuing = false;
        Ok(())
    }

    fn draw_prompt(&mut self, idx: usize) -> io::Result<()> {
        let row = &self.rows[idx];
        let Some(first) = row.cells.first() else {
            return Ok(());
        };
        let acknowledge = row.attrs.test(Flags::ACKNOWLEDGE);
        let text = first.value().to_string();

        self.line.clear();
        fill(&mut self.line, self.indent, ' ', self.ctx.limits().max_row_width);
        if acknowledge {
            self.line.push(' ');
            self.line.push_str(&text);
            self.line.push_str(": ");
            self.endline(Color::Green)
        } else {
            self.line.push_str(&text);
            self.endline(Color::Bright)
        }
    }

    /// Clears the buffer and writes the indent.
    fn begin_line(&mut self, max_row_width: usize) {
        self.line.clear();
        fill(&mut self.line, self.indent, ' ', max_row_width);
    }

    /// Hands the buffered line to the writer and clears the buffer.
    fn endline(&mut self, color: Color) -> io::Result<()> {
        let resolved = self.resolve(color);
        let line = std::mem::take(&mut self.line);
        self.ctx.emit(&line, resolved)
    }

    /// Turns a color directive into a concrete color, flipping a toggling
    /// table color as a side effect.
    fn resolve(&mut self, color: Color) -> LineColor {
        match color {
            Color::Toggle => {
                self.attrs.color = Color::ToggleDark;
                LineColor::Bright
            }
            Color::ToggleDark => {
                self.attrs.color = Color::Toggle;
                LineColor::Dark
            }
            other => LineColor::concrete(other).unwrap_or_else(|| self.ctx.current_color()),
        }
    }
}

/// Appends `count` copies of `c`, never more than `max`.
fn fill(line: &mut String, count: usize, c: char, max: usize) {
    line.extend(iter::repeat(c).take(count.min(max)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::Attributes;
    use crate::config::TableConfig;
    use crate::context::Context;
    use crate::CaptureWriter;

    fn setup() -> (Context, CaptureWriter) {
        Context::capture(TableConfig::default())
    }

    #[test]
    fn fill_is_capped() {
        let mut line = String::new();
        fill(&mut line, 10, '-', 4);
        assert_eq!(line, "----");
    }

    #[test]
    fn invisible_header_prints_only_body() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.row().cell("a").cell("b");
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec![" |a  |b  |"]);
    }

    #[test]
    fn header_block_is_bright() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("Name");
        table.row().cell("x");
        table.print_all().unwrap();
        assert_eq!(
            capture.texts(),
            vec![" +----+", " |Name|", " +----+", " |x   |"]
        );
        assert_eq!(
            capture.colors(),
            vec![
                LineColor::Bright,
                LineColor::Bright,
                LineColor::Bright,
                LineColor::Bright
            ]
        );
    }

    #[test]
    fn headline_uses_table_color() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "Customers", Attributes::from(Color::Blue));
        table.row().cell("x");
        table.print_all().unwrap();
        assert_eq!(capture.lines()[0], (" Customers".to_string(), LineColor::Blue));
    }

    #[test]
    fn numbers_align_right_in_body_only() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("Count");
        table.row().cell(42);
        table.row().flag(Flags::LEFT).cell(7);
        table.print_all().unwrap();
        let texts = capture.texts();
        assert_eq!(texts[1], " |Count|");
        assert_eq!(texts[3], " |   42|");
        assert_eq!(texts[4], " |7    |");
    }

    #[test]
    fn explicit_right_alignment() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("Label");
        table.row().flag(Flags::RIGHT).cell("ab");
        table.print(PrintScope::Body).unwrap();
        assert_eq!(capture.texts(), vec![" |   ab|"]);
    }

    #[test]
    fn message_rows_have_space_edges() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::from(Flags::MESSAGE));
        table.row().cell("hello");
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec!["  hello "]);
    }

    #[test]
    fn table_width_pads_rows_and_lines() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::new().with_width(12));
        table.header().cell("ab");
        table.row().cell("x");
        table.print_all().unwrap();
        let texts = capture.texts();
        assert_eq!(texts[0], " +----------+");
        assert_eq!(texts[1], " |ab        |");
        assert_eq!(texts[3], " |x         |");
    }

    #[test]
    fn long_separator_keeps_lines_aligned() {
        let (ctx, capture) = setup();
        ctx.set_separator(" | ");
        let mut table = Table::plain(&ctx);
        table.header().cell("Name").cell("Age");
        table.row().cell("Ann").cell(31);
        table.print_all().unwrap();
        let texts = capture.texts();
        assert_eq!(texts[0], " +------+-------+");
        assert_eq!(texts[1], " | Name | Age | ");
        assert_eq!(texts[3], " | Ann  |  31 | ");
        assert_eq!(texts[0].len(), texts[1].len());
    }

    #[test]
    fn line_rows_draw_separators() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("abc");
        table.row().cell("x");
        table.line();
        table.print(PrintScope::Body).unwrap();
        assert_eq!(capture.texts(), vec![" |x  |", " +---+"]);
        assert_eq!(capture.colors()[1], LineColor::Bright);
    }

    #[test]
    fn toggle_alternates_after_header() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::from(Color::Toggle));
        table.header().cell("n");
        for i in 0..4 {
            table.row().cell(i);
        }
        table.print_all().unwrap();
        let colors = capture.colors();
        assert_eq!(
            &colors[3..],
            &[
                LineColor::Dark,
                LineColor::Bright,
                LineColor::Dark,
                LineColor::Bright
            ]
        );
    }

    #[test]
    fn continuation_lines_keep_row_color() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::from(Color::Toggle));
        table.row().cell("one\ntwo");
        table.row().cell("three");
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec![" |one  |", " |two  |", " |three|"]);
        assert_eq!(
            capture.colors(),
            vec![LineColor::Bright, LineColor::Bright, LineColor::Dark]
        );
    }

    #[test]
    fn row_color_overrides_table_color() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::from(Color::Dark));
        table.row().cell("a");
        table.attrs(Attributes::from(Color::Red)).row().cell("b");
        table.print_all().unwrap();
        assert_eq!(capture.colors(), vec![LineColor::Dark, LineColor::Red]);
    }

    #[test]
    fn uncolored_rows_keep_console_color() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("h");
        table.row().cell("a");
        table.print_all().unwrap();
        assert_eq!(capture.colors()[3], LineColor::Bright);
    }

    #[test]
    fn fixed_cells_wrap_instead_of_truncating() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table
            .header()
            .attrs(Attributes::from(Flags::FIXED).with_width(4))
            .cell("Text");
        table.row().cell("abcdefghij");
        table.print(PrintScope::Body).unwrap();
        assert_eq!(capture.texts(), vec![" |abcd|", " |efgh|", " |ij  |"]);
    }

    #[test]
    fn merge_falls_back_to_table_width() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "", Attributes::new().with_width(10));
        table.header().cell("a").cell("b");
        table.row().flag(Flags::MERGE).cell("abcdefghijklmnop");
        table.print(PrintScope::Body).unwrap();
        // " |" is 2 columns wide, leaving 8 of the table width.
        assert_eq!(capture.texts(), vec![" |abcdefg*|"]);
    }

    #[test]
    fn merge_fallback_uses_what_is_left() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.header().cell("a");
        table.row().flag(Flags::MERGE).cell("abcdefghijklmnop");
        table.print(PrintScope::Body).unwrap();
        assert_eq!(capture.texts(), vec![" |*|"]);
    }

    #[test]
    fn merge_fallback_floors_at_zero() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        let sub = table.subtable(Attributes::new());
        sub.row().flag(Flags::MERGE).cell("abcdefghijklmnop");
        table.print(PrintScope::Body).unwrap();
        assert_eq!(capture.texts(), vec!["     ||"]);
    }

    #[test]
    fn tail_window_shows_last_rows() {
        let (ctx, capture) = setup();
        ctx.set_row_window(RowWindow::Tail(2));
        let mut table = Table::plain(&ctx);
        table.header().cell("n");
        for i in 1..=5 {
            table.row().cell(i);
        }
        table.print_all().unwrap();
        let texts = capture.texts();
        assert_eq!(texts.len(), 5);
        assert_eq!(texts[1], " |n  |");
        assert_eq!(texts[3], " |  4|");
        assert_eq!(texts[4], " |  5|");
    }

    #[test]
    fn head_window_shows_first_rows() {
        let (ctx, capture) = setup();
        ctx.set_row_window(RowWindow::Head(2));
        let mut table = Table::plain(&ctx);
        for i in 1..=5 {
            table.row().cell(i);
        }
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec![" |  1|", " |  2|"]);
    }

    #[test]
    fn head_window_stops_after_the_last_shown_row() {
        let (ctx, capture) = setup();
        ctx.set_row_window(RowWindow::Head(1));
        let mut table = Table::plain(&ctx);
        table.row().cell("one");
        table.line();
        table.line();
        table.subtable(Attributes::new()).row().cell("sub");
        table.row().cell("two");
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec![" |one|"]);
    }

    #[test]
    fn head_window_keeps_rows_before_the_cap() {
        let (ctx, capture) = setup();
        ctx.set_row_window(RowWindow::Head(2));
        let mut table = Table::plain(&ctx);
        table.row().cell("one");
        table.line();
        table.row().cell("two");
        table.line();
        table.print_all().unwrap();
        assert_eq!(capture.texts(), vec![" |one|", " +---+", " |two|"]);
    }

    #[test]
    fn plain_prompt_is_drawn_after_rows() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.flag(Flags::PROMPT).row().cell("Enter command");
        table.row().cell("x");
        table.print_all().unwrap();
        assert_eq!(
            capture.lines(),
            vec![
                (" |x            |".to_string(), LineColor::Plain),
                (" Enter command".to_string(), LineColor::Bright),
            ]
        );
    }

    #[test]
    fn acknowledge_prompt_is_green() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.flag(Flags::ACKNOWLEDGE).row().cell("Continue");
        table.print_all().unwrap();
        assert_eq!(
            capture.lines(),
            vec![("  Continue: ".to_string(), LineColor::Green)]
        );
    }

    #[test]
    fn empty_prompt_draws_nothing() {
        let (ctx, capture) = setup();
        let mut table = Table::plain(&ctx);
        table.flag(Flags::PROMPT).row();
        table.print_all().unwrap();
        assert!(capture.texts().is_empty());
    }

    #[test]
    fn header_scope_stops_at_first_data_row() {
        let (ctx, capture) = setup();
        let mut table = Table::new(&ctx, "Title", Attributes::new());
        table.header().cell("h");
        table.row().cell("x");
        table.print(PrintScope::Header).unwrap();
        assert_eq!(capture.texts(), vec![" Title", " +---+", " |h  |", " +---+"]);
    }
}
