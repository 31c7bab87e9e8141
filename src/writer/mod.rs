//! Writing rendered notes to the output directory
//!
//! Layout:
//! ```text
//! <output-root>/
//!   tables/<table>.md
//!   columns/<table>-<column>.md
//!   <index>.md
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;
use tracing::debug;

use crate::error::NoteError;
use crate::model::TablePage;
use crate::render::{IndexPage, Page, RenderOptions};

/// Subdirectory holding table pages
pub const TABLES_DIR: &str = "tables";

/// Subdirectory holding column pages
pub const COLUMNS_DIR: &str = "columns";

/// Minimum number of tables to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// A rendered document and the path it belongs at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNote {
    pub path: PathBuf,
    pub contents: String,
}

/// Render a table page and all of its column pages
fn render_table(table: &TablePage, output_root: &Path, options: &RenderOptions) -> Vec<RenderedNote> {
    let tables_dir = output_root.join(TABLES_DIR);
    let columns_dir = output_root.join(COLUMNS_DIR);

    let mut notes = Vec::with_capacity(table.columns.len() + 1);
    notes.push(RenderedNote {
        path: tables_dir.join(table.file_name()),
        contents: table.stringify(options),
    });
    for column in &table.columns {
        notes.push(RenderedNote {
            path: columns_dir.join(column.file_name()),
            contents: column.stringify(options),
        });
    }
    notes
}

/// Render every page in memory, table by table in source order
pub fn render_notes(
    tables: &[TablePage],
    index: Option<&IndexPage>,
    output_root: &Path,
    options: &RenderOptions,
) -> Vec<RenderedNote> {
    let per_table: Vec<Vec<RenderedNote>> = if tables.len() >= PARALLEL_THRESHOLD {
        tables
            .par_iter()
            .map(|table| render_table(table, output_root, options))
            .collect()
    } else {
        tables
            .iter()
            .map(|table| render_table(table, output_root, options))
            .collect()
    };

    let mut notes: Vec<RenderedNote> = per_table.into_iter().flatten().collect();

    if let Some(index) = index {
        notes.push(RenderedNote {
            path: output_root.join(index.file_name()),
            contents: index.stringify(options),
        });
    }

    notes
}

/// Reject notes that share a file stem.
///
/// Links resolve by stem alone, so two notes with the same stem make links
/// ambiguous even in different directories, and two notes with the same path
/// would race when written in parallel.
pub fn ensure_unique_stems(notes: &[RenderedNote]) -> Result<()> {
    let mut seen: HashMap<String, &Path> = HashMap::with_capacity(notes.len());
    for note in notes {
        let stem = note
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let Some(first) = seen.insert(stem.clone(), &note.path) {
            return Err(NoteError::DuplicatePage {
                stem,
                first: first.to_path_buf(),
                second: note.path.clone(),
            }
            .into());
        }
    }
    Ok(())
}

/// Create the output root and its page subdirectories
pub fn prepare_output_dirs(output_root: &Path) -> Result<()> {
    for dir in [output_root.join(TABLES_DIR), output_root.join(COLUMNS_DIR)] {
        std::fs::create_dir_all(&dir).map_err(|e| NoteError::OutputWriteError {
            path: dir.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn write_note(note: &RenderedNote) -> Result<()> {
    std::fs::write(&note.path, &note.contents).map_err(|e| NoteError::OutputWriteError {
        path: note.path.clone(),
        source: e,
    })?;
    debug!(path = %note.path.display(), "wrote note");
    Ok(())
}

/// Write notes, overwriting existing files.
///
/// Directories must already exist (see [`prepare_output_dirs`]).
pub fn write_notes(notes: &[RenderedNote]) -> Result<()> {
    if notes.len() >= PARALLEL_THRESHOLD {
        let results: Vec<Result<()>> = notes.par_iter().map(write_note).collect();
        // Propagate the first error if any
        for result in results {
            result?;
        }
    } else {
        for note in notes {
            write_note(note)?;
        }
    }
    Ok(())
}
