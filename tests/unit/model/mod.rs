//! Unit tests for the page model builder
//!
//! These tests verify the transformation from SQL AST to table and column pages.

use sql_notes::model::{ColumnPage, Constraint, ConstraintKind, TablePage};
use sql_notes::NoteError;

mod column_tests;

/// Helper to parse SQL and build pages
pub fn parse_tables(sql: &str, dialect: Option<&str>) -> Vec<TablePage> {
    match sql_notes::parse_schema(sql, dialect) {
        Ok(tables) => tables,
        Err(e) => panic!("Failed to build pages: {:#}", e),
    }
}

/// Helper to parse SQL containing a single table
pub fn parse_table(sql: &str) -> TablePage {
    let mut tables = parse_tables(sql, Some("sqlite"));
    assert_eq!(tables.len(), 1, "Expected exactly one table");
    tables.remove(0)
}

/// Helper to build pages and return the extraction error
pub fn build_error(sql: &str) -> NoteError {
    let err = match sql_notes::parse_schema(sql, Some("sqlite")) {
        Ok(tables) => panic!("Expected an error, got {} tables", tables.len()),
        Err(e) => e,
    };
    match err.downcast::<NoteError>() {
        Ok(note_error) => note_error,
        Err(other) => panic!("Expected a NoteError, got {:#}", other),
    }
}

/// Get a column of a table, panicking if it does not exist
pub fn column<'a>(table: &'a TablePage, name: &str) -> &'a ColumnPage {
    table
        .column(name)
        .unwrap_or_else(|| panic!("Table {} has no column {}", table.name, name))
}

/// Constraints of a column with the given kind
pub fn constraints_of(column: &ColumnPage, kind: ConstraintKind) -> Vec<&Constraint> {
    column.constraints.iter().filter(|c| c.kind == kind).collect()
}
