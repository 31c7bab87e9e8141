//! sql-notes: cross-linked Obsidian notes from SQL schemas
//!
//! This library reads `CREATE TABLE` statements, extracts one page per table
//! and one page per column, and writes them as Markdown notes that link to each
//! other with wiki-style links.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

pub use error::NoteError;
pub use render::{FormatOptions, FunctionCase, RenderOptions};

/// Options for generating notes from a schema file
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Path to the SQL schema file
    pub input_path: PathBuf,
    /// Output directory (defaults to the directory of the input file)
    pub output_dir: Option<PathBuf>,
    /// SQL dialect name (defaults to the generic dialect)
    pub dialect: Option<String>,
    /// Name of an additional index page listing every table
    pub index_name: Option<String>,
    /// Layout of the SQL block on table pages
    pub format: FormatOptions,
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    /// Table names in source order
    pub tables: Vec<String>,
    pub notes_written: usize,
}

/// Parse SQL text and extract a page for every CREATE TABLE statement
pub fn parse_schema(sql: &str, dialect: Option<&str>) -> Result<Vec<model::TablePage>> {
    let statements = parser::parse_sql(sql, dialect)?;
    Ok(model::build_pages(&statements)?)
}

/// Generate notes for a schema file
pub fn generate_notes(options: GenerateOptions) -> Result<GenerateSummary> {
    info!(input = %options.input_path.display(), "generating notes");

    // Step 1: Parse the schema file
    let statements = parser::parse_sql_file(&options.input_path, options.dialect.as_deref())?;
    info!(statements = statements.len(), "parsed SQL statements");

    // Step 2: Extract table and column pages
    let tables = model::build_pages(&statements)?;

    // Step 3: Determine output directory
    let output_dir = options
        .output_dir
        .unwrap_or_else(|| default_output_dir(&options.input_path));

    // Step 4: Render everything before touching the output directory
    let render_options = RenderOptions {
        dialect: options.dialect,
        format: options.format,
    };
    let index = options
        .index_name
        .as_deref()
        .map(|name| render::IndexPage::new(name, &tables));
    let notes = writer::render_notes(&tables, index.as_ref(), &output_dir, &render_options);
    writer::ensure_unique_stems(&notes)?;

    // Step 5: Write the notes
    writer::prepare_output_dirs(&output_dir)?;
    writer::write_notes(&notes)?;
    info!(
        notes = notes.len(),
        output = %output_dir.display(),
        "wrote notes"
    );

    Ok(GenerateSummary {
        output_dir,
        tables: tables.into_iter().map(|t| t.name).collect(),
        notes_written: notes.len(),
    })
}

/// Directory containing the input file, or the current directory for a bare file name
fn default_output_dir(input_path: &Path) -> PathBuf {
    match input_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
