//! The demo tables and the command loop.

use std::time::Duration;

use asciitable::{Attributes, Color, Context, Flags, Table, TableError};
use asciitable_input::{InputError, LineReader};
use tracing::debug;

/// Settings shared by every demo.
#[derive(Debug, Clone, Copy)]
pub struct DemoOptions {
    /// Line width the demo tables pad to.
    pub width: usize,
    /// How long a prompt waits for input.
    pub timeout: Option<Duration>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            width: 78,
            timeout: None,
        }
    }
}

const LOGO: &[&str] = &[
    " ******************************************",
    " *****************************************",
    " ***#####******####*****#######*********",
    " **##***##****##**##****##****##*******",
    " ***##********##**##****##****##*****",
    " ****###*****########***#######*****",
    " ******##****##****##***##********",
    " **##***##**##******##**##*******",
    " ***#####***##******##**##*****",
    " *****************************",
    " ****************************",
];

pub const COMMANDS: &str = " valid commands: [example, complex, subtable, exit] ";

fn toggling(width: usize) -> Attributes {
    Attributes::from(Color::Toggle).with_width(width)
}

/// Prints the two-colored logo.
pub fn logo(ctx: &Context, opts: &DemoOptions) -> Result<(), TableError> {
    let attrs = Attributes::from(Flags::MESSAGE)
        .with_color(Color::PerChar)
        .with_width(opts.width);
    let mut table = Table::new(ctx, "", attrs);

    table.row();
    for line in LOGO {
        table.row().cell(*line);
    }
    table.row().cell(COMMANDS);
    table.row();
    table.print_all()
}

/// Three customers, rows alternating bright and dark.
pub fn simple(ctx: &Context, opts: &DemoOptions) -> Result<(), TableError> {
    let mut table = Table::new(ctx, "Table Simple Example", toggling(opts.width));
    table.header().cell("Company").cell("Contact").cell("Country");

    table
        .row()
        .cell("Alfreds Futterkiste")
        .cell("Maria Anders")
        .cell("Germany");
    table
        .row()
        .cell("Centro comercial Moctezuma")
        .cell("Francisco Chang")
        .cell("Mexico");
    table
        .row()
        .cell("Laughing Bacchus Winecellars")
        .cell("Yoshi Tannamuri")
        .cell("Canada");

    table.print_all()
}

/// Cell formats, a merge cell, a separator row and an acknowledge prompt.
///
/// Returns the answer to the prompt, or `None` if the read timed out.
pub fn complex(
    ctx: &Context,
    opts: &DemoOptions,
    reader: &mut dyn LineReader,
) -> Result<Option<String>, TableError> {
    let attrs = toggling(opts.width);
    let mut table = Table::new(ctx, "Table Complex Example", attrs);

    table
        .header()
        .cell("Description")
        .flag(Flags::BOOL)
        .cell("Bool (true/false)")
        .flag(Flags::YESNO)
        .cell("Bool (yes/no)")
        .flag(Flags::FIXED)
        .cell("Number");

    table.row().cell("Row[false]").cell(0).cell(0).cell(0);
    table
        .row()
        .cell("Row[true]")
        .cell(1)
        .cell(1)
        .flag(Flags::RIGHT)
        .cell("100");
    table
        .row()
        .cell("Row[true/hex]")
        .cell(1)
        .cell(1)
        .flag(Flags::HEX)
        .cell(100);
    table
        .row()
        .flag(Flags::MERGE)
        .cell("Row[merge] spills into the columns to its right");
    table.line();

    table
        .subtable(attrs)
        .flag(Flags::ACKNOWLEDGE)
        .row()
        .cell("Continue? [yes]/no");

    table.print_all()?;

    match table.last_subtable_mut() {
        Some(confirm) => confirm.prompt_and_read(reader, opts.timeout),
        None => Ok(None),
    }
}

fn addresses(table: &mut Table, attrs: Attributes, street: &str, number: u32) {
    let sub = table.subtable(attrs);
    sub.header()
        .attrs(Attributes::from(Flags::FIXED).with_width(20))
        .cell("Street")
        .flag(Flags::FIXED)
        .cell("Number");
    sub.row().cell(street).cell(number);
}

/// Customers, each with an address subtable.
pub fn subtable(ctx: &Context, opts: &DemoOptions) -> Result<(), TableError> {
    let attrs = toggling(opts.width);
    let mut table = Table::new(ctx, "Table Subtable Example", attrs);
    table.header().cell("Company").cell("Contact").cell("Country");

    table
        .row()
        .cell("Alfreds Futterkiste")
        .cell("Maria Anders")
        .cell("Germany");
    addresses(&mut table, attrs, "Neue Strasse", 22);

    table
        .row()
        .cell("Centro comercial Moctezuma")
        .cell("Francisco Chang")
        .cell("Mexico");
    addresses(&mut table, attrs, "Via Dolores", 4477);

    table
        .row()
        .cell("Laughing Bacchus Winecellars")
        .cell("Yoshi Tannamuri")
        .cell("Canada");
    addresses(&mut table, attrs, "Main Road", 2222);

    table.print_all()
}

/// Reads commands until `exit` or the end of input.
pub fn run_loop(
    ctx: &Context,
    opts: &DemoOptions,
    reader: &mut dyn LineReader,
) -> Result<(), TableError> {
    loop {
        let mut prompt = Table::plain(ctx);
        prompt.flag(Flags::PROMPT).row().cell("> ");
        prompt.print_all()?;

        let command = match prompt.prompt_and_read(reader, opts.timeout) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(TableError::Input(InputError::Closed)) => return Ok(()),
            Err(e) => return Err(e),
        };

        match command.as_str() {
            "exit" => return Ok(()),
            "example" => simple(ctx, opts)?,
            "complex" => {
                let answer = complex(ctx, opts, reader)?;
                debug!(?answer, "complex example acknowledged");
            }
            "subtable" => subtable(ctx, opts)?,
            other => debug!(command = other, "ignoring unknown command"),
        }
    }
}
