//! Error types for sql-notes

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a schema into notes
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Failed to read SQL file: {path}")]
    InputReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown SQL dialect: {name}")]
    UnknownDialect { name: String },

    #[error("SQL parse error in {path} at line {line}: {message}")]
    SqlParseError {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Not a CREATE TABLE statement: {statement}")]
    NotACreateTable { statement: String },

    #[error("No column list found for table {table}")]
    MissingSchema { table: String },

    #[error("No table name found in CREATE TABLE statement")]
    MissingTableName,

    #[error("No foreign table found for column {column} of table {table}")]
    MissingForeignTable { table: String, column: String },

    #[error("Foreign key mismatch in table {table}: [{}] != [{}]", local.join(", "), referenced.join(", "))]
    ForeignKeyMismatch {
        table: String,
        local: Vec<String>,
        referenced: Vec<String>,
    },

    #[error("{constraint} constraint on table {table} names unknown column {column}")]
    UnknownColumn {
        table: String,
        column: String,
        constraint: String,
    },

    #[error("Column {column} is declared more than once in table {table}")]
    DuplicateColumn { table: String, column: String },

    #[error("Notes {} and {} share the name {stem}", first.display(), second.display())]
    DuplicatePage {
        stem: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Failed to write note to {path}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
