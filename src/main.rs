use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sql_notes::{generate_notes, FormatOptions, FunctionCase, GenerateOptions};

#[derive(Parser)]
#[command(name = "sql-notes")]
#[command(author, version, about = "Convert a SQL schema into cross-linked Obsidian notes")]
struct Cli {
    /// Path to the SQL schema file
    input: PathBuf,

    /// Output directory (defaults to the directory of the input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// SQL dialect (sqlite, postgresql, mysql, mssql, generic, ...)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Also write an index page with this name listing every table
    #[arg(short, long)]
    index: Option<String>,

    /// Keep the SQL block of table pages on a single line
    #[arg(long)]
    no_pretty: bool,

    /// Indentation of column definitions in the SQL block
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Spaces prefixed to every line of the SQL block
    #[arg(long, default_value_t = 0)]
    pad: usize,

    /// Casing of function names in the SQL block (unmodified, upper, lower)
    #[arg(long, default_value = "unmodified")]
    normalize_functions: FunctionCase,

    /// Keep statements that fit this width on a single line
    #[arg(long)]
    max_text_width: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GenerateOptions {
        input_path: cli.input,
        output_dir: cli.output,
        dialect: cli.dialect,
        index_name: cli.index,
        format: FormatOptions {
            pretty: !cli.no_pretty,
            indent: cli.indent,
            pad: cli.pad,
            normalize_functions: cli.normalize_functions,
            max_text_width: cli.max_text_width,
        },
    };

    generate_notes(options)?;

    Ok(())
}
