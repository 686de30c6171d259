use asciitable::{Attributes, Context, Flags, PrintScope, Table, TableConfig};
use proptest::prelude::*;

// Single-line or multi-line ASCII values.
fn value_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z ]{0,12}", 1..4).prop_map(|lines| lines.join("\n"))
}

fn rows_strategy(columns: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec(value_strategy(), columns), 1..8)
}

fn widest(value: &str) -> usize {
    value.split('\n').map(str::len).max().unwrap_or(0)
}

// A trailing newline does not start another printed line.
fn physical_lines(value: &str) -> usize {
    let segments = value.split('\n').count();
    if value.ends_with('\n') {
        segments - 1
    } else {
        segments
    }
}

proptest! {
    #[test]
    fn headers_cover_every_cell(
        headers in prop::collection::vec("[A-Za-z]{1,10}", 3),
        rows in rows_strategy(3),
    ) {
        let (ctx, _) = Context::capture(TableConfig::default());
        let mut table = Table::plain(&ctx);
        table.header();
        for h in &headers {
            table.cell(h.as_str());
        }
        for row in &rows {
            table.row();
            for value in row {
                table.cell(value.as_str());
            }
        }

        let widths = table.column_widths();
        for (col, width) in widths.iter().enumerate() {
            prop_assert!(*width >= headers[col].len());
            for row in &rows {
                prop_assert!(*width >= widest(&row[col]));
            }
        }
    }

    #[test]
    fn fixed_columns_keep_their_width(
        width in 3usize..20,
        values in prop::collection::vec(value_strategy(), 1..6),
    ) {
        let (ctx, _) = Context::capture(TableConfig::default());
        let mut table = Table::plain(&ctx);
        table
            .header()
            .attrs(Attributes::from(Flags::FIXED).with_width(width))
            .cell("Fix");
        for value in &values {
            table.row().cell(value.as_str());
        }
        prop_assert_eq!(table.column_widths(), vec![width]);
    }

    #[test]
    fn printed_lines_have_equal_length(rows in rows_strategy(2)) {
        let (ctx, capture) = Context::capture(TableConfig::default());
        let mut table = Table::plain(&ctx);
        table.header().cell("Left").cell("Right");
        for row in &rows {
            table.row().cell(row[0].as_str()).cell(row[1].as_str());
        }
        table.print(PrintScope::All).unwrap();

        let texts = capture.texts();
        let expected = texts[0].len();
        for line in &texts {
            prop_assert_eq!(line.len(), expected);
        }
        let physical: usize = rows
            .iter()
            .map(|r| r.iter().map(|v| physical_lines(v)).max().unwrap_or(1))
            .sum();
        prop_assert_eq!(texts.len(), 3 + physical);
    }

    #[test]
    fn boolean_conversion_is_stable(value in any::<u8>()) {
        let (ctx, _) = Context::capture(TableConfig::default());
        let mut table = Table::plain(&ctx);
        table.header().flag(Flags::BOOL).cell("b").flag(Flags::YESNO).cell("y");
        table.row().cell(value).cell(value);

        let expected = if value != 0 { ("true", "yes") } else { ("false", "no") };
        prop_assert_eq!(table.cell_text(1, 0), Some(expected.0));
        prop_assert_eq!(table.cell_text(1, 1), Some(expected.1));
    }
}
