//! Normalization of column and table constraint nodes
//!
//! Column options and table constraints from the sqlparser AST are reduced to
//! [`Constraint`] values: a closed kind plus positional string arguments.

use sqlparser::ast::{ColumnOption, Ident, ObjectName};
use tracing::debug;

use crate::error::NoteError;

use super::{Constraint, ConstraintKind};

/// Keywords that sqlparser keeps as dialect-specific tokens and that mark an auto-increment column
const AUTO_INCREMENT_KEYWORDS: &[&str] = &["AUTOINCREMENT", "AUTO_INCREMENT"];

/// Unqualified name of an object: `main.season` resolves to `season`
pub(crate) fn object_base_name(name: &ObjectName) -> Option<String> {
    name.0
        .last()
        .map(|ident| ident.value.clone())
        .filter(|value| !value.is_empty())
}

/// Column names of a key list, in declaration order
pub(crate) fn ident_names(idents: &[Ident]) -> Vec<String> {
    idents.iter().map(|ident| ident.value.clone()).collect()
}

/// Normalize a single column option.
///
/// Returns `Ok(None)` for options outside the supported constraint kinds
/// (`NULL`, `COLLATE`, comments, generated columns, ...).
pub(crate) fn constraint_from_column_option(
    option: &ColumnOption,
    table: &str,
    column: &str,
) -> Result<Option<Constraint>, NoteError> {
    let constraint = match option {
        ColumnOption::Unique { is_primary, .. } => {
            if *is_primary {
                Constraint::bare(ConstraintKind::PrimaryKey)
            } else {
                Constraint::bare(ConstraintKind::Unique)
            }
        }
        ColumnOption::NotNull => Constraint::bare(ConstraintKind::NotNull),
        ColumnOption::Default(expr) => {
            Constraint::new(ConstraintKind::Default, vec![expr.to_string()])
        }
        ColumnOption::Check(expr) => Constraint::new(ConstraintKind::Check, vec![expr.to_string()]),
        ColumnOption::Identity(_) => Constraint::bare(ConstraintKind::AutoIncrement),
        ColumnOption::DialectSpecific(tokens)
            if tokens.iter().any(|token| {
                let text = token.to_string();
                AUTO_INCREMENT_KEYWORDS
                    .iter()
                    .any(|kw| text.eq_ignore_ascii_case(kw))
            }) =>
        {
            Constraint::bare(ConstraintKind::AutoIncrement)
        }
        ColumnOption::ForeignKey {
            foreign_table,
            referred_columns,
            ..
        } => {
            let target =
                object_base_name(foreign_table).ok_or_else(|| NoteError::MissingForeignTable {
                    table: table.to_string(),
                    column: column.to_string(),
                })?;
            let mut args = vec![target];
            // Without a column list the reference targets the table's primary key
            if let Some(referred) = referred_columns.first() {
                args.push(referred.value.clone());
            }
            Constraint::new(ConstraintKind::References, args)
        }
        other => {
            debug!(table, column, option = %other, "skipping unsupported column option");
            return Ok(None);
        }
    };

    Ok(Some(constraint))
}

/// Pair each local foreign key column with the referenced column at the same position.
///
/// Both lists must have the same length; a mismatch is reported with both lists.
pub(crate) fn reference_pairs(
    table: &str,
    columns: &[Ident],
    foreign_table: &ObjectName,
    referred_columns: &[Ident],
) -> Result<Vec<(String, Constraint)>, NoteError> {
    let local = ident_names(columns);
    let referenced = ident_names(referred_columns);

    let target = object_base_name(foreign_table).ok_or_else(|| NoteError::MissingForeignTable {
        table: table.to_string(),
        column: local.join(", "),
    })?;

    if local.len() != referenced.len() {
        return Err(NoteError::ForeignKeyMismatch {
            table: table.to_string(),
            local,
            referenced,
        });
    }

    Ok(local
        .into_iter()
        .zip(referenced)
        .map(|(column, referred)| {
            (
                column,
                Constraint::new(ConstraintKind::References, vec![target.clone(), referred]),
            )
        })
        .collect())
}
