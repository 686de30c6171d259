//! `asciitable`: shows the table renderer in a terminal.
//!
//! Without a subcommand it prints the logo and reads commands from stdin
//! until `exit`.

mod demos;

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context as _;
use asciitable::{AnsiWriter, Context, PlainWriter, RowWindow, TableConfig};
use asciitable_input::StdinReader;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::demos::DemoOptions;

/// Interactive demo of the asciitable renderer
#[derive(Parser, Debug)]
#[command(name = "asciitable")]
#[command(version)]
#[command(about = "Draws demo tables in the terminal")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML file with table settings
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rows buffered before a table prints itself
    #[arg(long, global = true, value_name = "ROWS")]
    page_length: Option<usize>,

    /// Print only the first N body rows of each table
    #[arg(long, global = true, value_name = "N", conflicts_with = "tail")]
    head: Option<usize>,

    /// Print only the last N body rows of each table
    #[arg(long, global = true, value_name = "N")]
    tail: Option<usize>,

    /// Column separator
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Line width of the demo tables
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Write plain text to FILE instead of the terminal
    #[arg(short, long, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Seconds a prompt waits for input
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Print the logo
    Logo,
    /// A three-row customer table
    Simple,
    /// Cell formats, merging and an acknowledge prompt
    Complex,
    /// Tables nested inside table rows
    Subtable,
    /// Read commands without printing the logo first
    Repl,
}

/// Fallback when the terminal size is unknown.
const FALLBACK_WIDTH: usize = 78;

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

/// Demo width for a terminal `columns` wide: the fallback, narrowed so the
/// indent and closing edge still fit.
fn default_width(columns: Option<usize>) -> usize {
    columns
        .map(|c| c.saturating_sub(2).min(FALLBACK_WIDTH))
        .filter(|w| *w > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

impl Cli {
    fn table_config(&self) -> anyhow::Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::from_path(path)
                .with_context(|| format!("reading config {}", path.display()))?,
            None => TableConfig::default(),
        };

        if let Some(rows) = self.page_length {
            config = config.page_length(rows);
        }
        if let Some(n) = self.head {
            config = config.row_window(RowWindow::Head(n));
        }
        if let Some(n) = self.tail {
            config = config.row_window(RowWindow::Tail(n));
        }
        if let Some(sep) = &self.separator {
            config = config.separator(sep.as_str());
        }
        Ok(config)
    }

    fn demo_options(&self) -> DemoOptions {
        DemoOptions {
            width: self.width.unwrap_or_else(|| default_width(terminal_width())),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }

    fn context(&self) -> anyhow::Result<Context> {
        let config = self.table_config()?;
        let ctx = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating {}", path.display()))?;
                Context::new(config, PlainWriter::new(file))
            }
            None => Context::new(config, AnsiWriter::new()),
        };
        Ok(ctx)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = cli.context()?;
    let opts = cli.demo_options();
    let mut reader = StdinReader::new();

    match cli.command {
        Some(Commands::Logo) => demos::logo(&ctx, &opts)?,
        Some(Commands::Simple) => demos::simple(&ctx, &opts)?,
        Some(Commands::Complex) => {
            demos::complex(&ctx, &opts, &mut reader)?;
        }
        Some(Commands::Subtable) => demos::subtable(&ctx, &opts)?,
        Some(Commands::Repl) => demos::run_loop(&ctx, &opts, &mut reader)?,
        None => {
            demos::logo(&ctx, &opts)?;
            demos::run_loop(&ctx, &opts, &mut reader)?;
        }
    }
    Ok(())
}
