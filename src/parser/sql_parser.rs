//! Reading and parsing SQL schema files

use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use encoding_rs::WINDOWS_1252;
use regex::Regex;
use sqlparser::ast::Statement;
use sqlparser::dialect::{dialect_from_str, Dialect, SQLiteDialect};
use sqlparser::parser::Parser;

use crate::error::NoteError;

/// Source name reported for SQL that did not come from a file
const INLINE_SOURCE: &str = "<input>";

static ERROR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Line:\s*(\d+)").expect("valid line regex"));

/// Extract line number from a sqlparser error message
/// Format: "... at Line: X, Column: Y"
fn extract_line_from_error(error_msg: &str) -> Option<usize> {
    let caps = ERROR_LINE_RE.captures(error_msg)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback
fn read_file_with_encoding_fallback(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(err) => {
            // Schemas exported by Windows tooling are often Windows-1252
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "File contains invalid characters",
                ))
            } else {
                Ok(decoded.into_owned())
            }
        }
    }
}

/// Resolve a dialect name ("sqlite", "postgresql", "mysql", ...) to a sqlparser dialect.
///
/// `None` selects SQLite, the dialect that accepts untyped columns.
pub fn resolve_dialect(name: Option<&str>) -> Result<Box<dyn Dialect>> {
    match name {
        None => Ok(Box::new(SQLiteDialect {})),
        Some(name) => dialect_from_str(name).ok_or_else(|| {
            NoteError::UnknownDialect {
                name: name.to_string(),
            }
            .into()
        }),
    }
}

/// Read the SQL text of a schema file
pub fn read_sql_file(path: &Path) -> Result<String> {
    let content =
        read_file_with_encoding_fallback(path).map_err(|e| NoteError::InputReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

    // Strip UTF-8 BOM if present
    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Parse SQL text into statements using the named dialect
pub fn parse_sql(sql: &str, dialect: Option<&str>) -> Result<Vec<Statement>> {
    parse_sql_source(sql, dialect, Path::new(INLINE_SOURCE))
}

/// Read and parse a schema file
pub fn parse_sql_file(path: &Path, dialect: Option<&str>) -> Result<Vec<Statement>> {
    let content = read_sql_file(path)?;
    parse_sql_source(&content, dialect, path)
}

fn parse_sql_source(sql: &str, dialect: Option<&str>, source: &Path) -> Result<Vec<Statement>> {
    let dialect = resolve_dialect(dialect)?;

    Parser::parse_sql(dialect.as_ref(), sql).map_err(|e| {
        let message = e.to_string();
        NoteError::SqlParseError {
            path: source.to_path_buf(),
            line: extract_line_from_error(&message).unwrap_or(1),
            message,
        }
        .into()
    })
}
