//! Build note pages from parsed SQL statements
//!
//! Columns are extracted first so that table-level constraints naming a single
//! column can be merged into that column's page afterwards.

use sqlparser::ast::{ColumnDef, DataType, Statement, TableConstraint};
use tracing::{debug, info};

use crate::error::NoteError;

use super::constraint::{
    constraint_from_column_option, ident_names, object_base_name, reference_pairs,
};
use super::{ColumnPage, Constraint, ConstraintKind, TablePage, COLUMN_TAGS, TABLE_TAGS};

/// Build a table page for every CREATE TABLE statement.
///
/// Other statements (views, inserts, indexes, ...) are ignored. The first
/// malformed table aborts the whole build.
pub fn build_pages(statements: &[Statement]) -> Result<Vec<TablePage>, NoteError> {
    let mut pages = Vec::new();

    for statement in statements {
        if !matches!(statement, Statement::CreateTable(_)) {
            debug!(statement = %truncate(&statement.to_string()), "skipping non-table statement");
            continue;
        }
        pages.push(table_from_statement(statement)?);
    }

    info!(tables = pages.len(), "extracted table pages");
    Ok(pages)
}

/// Build the page of a single CREATE TABLE statement
pub fn table_from_statement(statement: &Statement) -> Result<TablePage, NoteError> {
    let Statement::CreateTable(create_table) = statement else {
        return Err(NoteError::NotACreateTable {
            statement: truncate(&statement.to_string()),
        });
    };

    let name = object_base_name(&create_table.name).ok_or(NoteError::MissingTableName)?;

    // CREATE TABLE ... AS SELECT has no column list to document
    if create_table.columns.is_empty() && create_table.constraints.is_empty() {
        return Err(NoteError::MissingSchema { table: name });
    }

    let mut page = TablePage {
        name: name.clone(),
        tags: TABLE_TAGS.iter().map(|t| t.to_string()).collect(),
        columns: Vec::with_capacity(create_table.columns.len()),
        constraints: Vec::new(),
        statement: statement.clone(),
    };

    for col in &create_table.columns {
        let column = column_from_def(col, &name)?;
        if page.column(&column.name).is_some() {
            return Err(NoteError::DuplicateColumn {
                table: name,
                column: column.name,
            });
        }
        page.columns.push(column);
    }

    for constraint in &create_table.constraints {
        apply_table_constraint(&mut page, constraint)?;
    }

    Ok(page)
}

/// Build the page of a single column definition
pub fn column_from_def(col: &ColumnDef, table: &str) -> Result<ColumnPage, NoteError> {
    let name = col.name.value.clone();

    let data_type = match &col.data_type {
        // SQLite allows columns without a declared type
        DataType::Unspecified => String::new(),
        data_type => data_type.to_string(),
    };

    let mut column = ColumnPage {
        name,
        table: table.to_string(),
        tags: COLUMN_TAGS.iter().map(|t| t.to_string()).collect(),
        data_type,
        constraints: Vec::new(),
    };

    for option in &col.options {
        if let Some(constraint) = constraint_from_column_option(&option.option, table, &column.name)? {
            let tag = constraint.kind.column_tag();
            column.add_constraint(tag, constraint);
        }
    }

    Ok(column)
}

/// Resolve one table-level constraint against the already built columns
fn apply_table_constraint(
    page: &mut TablePage,
    constraint: &TableConstraint,
) -> Result<(), NoteError> {
    match constraint {
        TableConstraint::PrimaryKey { columns, .. } => {
            apply_key_group(page, ConstraintKind::PrimaryKey, ident_names(columns))
        }
        TableConstraint::Unique { columns, .. } => {
            apply_key_group(page, ConstraintKind::Unique, ident_names(columns))
        }
        TableConstraint::ForeignKey {
            columns,
            foreign_table,
            referred_columns,
            ..
        } => {
            let pairs = reference_pairs(&page.name, columns, foreign_table, referred_columns)?;
            for (column_name, reference) in pairs {
                let column = lookup_column(page, &column_name, ConstraintKind::References)?;
                column.add_constraint("foreignkey", reference);
            }
            Ok(())
        }
        // The scope of a check expression is not tied to a column list, so it stays on the table
        TableConstraint::Check { .. } => {
            page.constraints.push(Constraint::new(
                ConstraintKind::Check,
                vec![constraint.to_string()],
            ));
            Ok(())
        }
        other => {
            debug!(table = %page.name, constraint = %other, "skipping unsupported table constraint");
            Ok(())
        }
    }
}

/// Keep a multi-column key on the table, demote a single-column key to its column
fn apply_key_group(
    page: &mut TablePage,
    kind: ConstraintKind,
    columns: Vec<String>,
) -> Result<(), NoteError> {
    match columns.as_slice() {
        [single] => {
            let column = lookup_column(page, single, kind)?;
            column.add_constraint(kind.column_tag(), Constraint::bare(kind));
        }
        _ => page.constraints.push(Constraint::new(kind, columns)),
    }
    Ok(())
}

fn lookup_column<'a>(
    page: &'a mut TablePage,
    column: &str,
    kind: ConstraintKind,
) -> Result<&'a mut ColumnPage, NoteError> {
    let table = page.name.clone();
    page.column_mut(column)
        .ok_or_else(|| NoteError::UnknownColumn {
            table,
            column: column.to_string(),
            constraint: kind.display_name().to_string(),
        })
}

/// Shorten statement text for error messages and logs
fn truncate(sql: &str) -> String {
    const MAX_CHARS: usize = 60;
    if sql.chars().count() <= MAX_CHARS {
        sql.to_string()
    } else {
        let head: String = sql.chars().take(MAX_CHARS).collect();
        format!("{}...", head)
    }
}
