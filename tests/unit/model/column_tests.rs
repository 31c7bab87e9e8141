//! Column Extraction Tests

use sql_notes::model::{Constraint, ConstraintKind};

use super::{column, constraints_of, parse_table, parse_tables};

// ============================================================================
// Column Basics
// ============================================================================

#[test]
fn test_columns_keep_declaration_order() {
    let table = parse_table(
        "CREATE TABLE t (zeta INTEGER, alpha TEXT, mid REAL, beta BLOB, omega INTEGER)",
    );

    let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "mid", "beta", "omega"]);
}

#[test]
fn test_column_knows_owning_table() {
    let table = parse_table("CREATE TABLE season (seasonid INTEGER)");
    assert_eq!(column(&table, "seasonid").table, "season");
}

#[test]
fn test_column_data_type_spelling() {
    let table = parse_table("CREATE TABLE t (a INT, b INTEGER, c VARCHAR(255), d TEXT)");

    assert_eq!(column(&table, "a").data_type, "INT");
    assert_eq!(column(&table, "b").data_type, "INTEGER");
    assert_eq!(column(&table, "c").data_type, "VARCHAR(255)");
    assert_eq!(column(&table, "d").data_type, "TEXT");
}

#[test]
fn test_column_without_type_has_empty_type() {
    let table = parse_table("CREATE TABLE t (anything, other TEXT)");
    assert_eq!(column(&table, "anything").data_type, "");
}

#[test]
fn test_plain_column_has_base_tags_only() {
    let table = parse_table("CREATE TABLE t (a TEXT)");
    let a = column(&table, "a");

    assert_eq!(a.tags, vec!["sql", "column"]);
    assert!(a.constraints.is_empty());
}

// ============================================================================
// Column Constraints
// ============================================================================

#[test]
fn test_scenario_a_primary_key_and_not_null() {
    let table = parse_table("CREATE TABLE t(id INTEGER PRIMARY KEY, name TEXT NOT NULL)");

    assert_eq!(table.name, "t");
    assert_eq!(table.columns.len(), 2);

    let id = column(&table, "id");
    assert_eq!(id.constraints, vec![Constraint::bare(ConstraintKind::PrimaryKey)]);
    assert!(id.tags.contains(&"primarykey".to_string()));

    let name = column(&table, "name");
    assert_eq!(name.constraints, vec![Constraint::bare(ConstraintKind::NotNull)]);
    assert!(name.tags.contains(&"notnull".to_string()));
}

#[test]
fn test_sqlite_autoincrement() {
    let table = parse_table("CREATE TABLE t (id INTEGER PRIMARY KEY AUTOINCREMENT)");
    let id = column(&table, "id");

    assert_eq!(
        id.constraints,
        vec![
            Constraint::bare(ConstraintKind::PrimaryKey),
            Constraint::bare(ConstraintKind::AutoIncrement),
        ]
    );
    assert_eq!(id.tags, vec!["sql", "column", "primarykey", "autoincrement"]);
}

#[test]
fn test_mysql_auto_increment() {
    let tables = parse_tables(
        "CREATE TABLE t (id INT NOT NULL AUTO_INCREMENT, PRIMARY KEY (id))",
        Some("mysql"),
    );
    let id = column(&tables[0], "id");

    assert!(id.has_constraint(ConstraintKind::AutoIncrement));
    assert!(id.has_constraint(ConstraintKind::PrimaryKey));
}

#[test]
fn test_mssql_identity_is_auto_increment() {
    let tables = parse_tables(
        "CREATE TABLE t (id INT IDENTITY(1, 1) NOT NULL)",
        Some("mssql"),
    );
    let id = column(&tables[0], "id");

    assert!(id.has_constraint(ConstraintKind::AutoIncrement));
    assert!(id.tags.contains(&"autoincrement".to_string()));
}

#[test]
fn test_default_keeps_expression_text() {
    let table = parse_table("CREATE TABLE t (status TEXT DEFAULT 'active', n INTEGER DEFAULT 0)");

    let status = column(&table, "status");
    assert_eq!(
        status.constraints,
        vec![Constraint::new(
            ConstraintKind::Default,
            vec!["'active'".to_string()]
        )]
    );
    assert!(status.tags.contains(&"hasdefault".to_string()));

    let n = column(&table, "n");
    assert_eq!(constraints_of(n, ConstraintKind::Default)[0].args, vec!["0"]);
}

#[test]
fn test_inline_unique_and_check() {
    let table = parse_table("CREATE TABLE t (email TEXT UNIQUE, age INTEGER CHECK (age >= 0))");

    let email = column(&table, "email");
    assert_eq!(email.constraints, vec![Constraint::bare(ConstraintKind::Unique)]);
    assert!(email.tags.contains(&"isunique".to_string()));

    let age = column(&table, "age");
    assert_eq!(
        age.constraints,
        vec![Constraint::new(
            ConstraintKind::Check,
            vec!["age >= 0".to_string()]
        )]
    );
    assert!(age.tags.contains(&"hascheck".to_string()));
}

#[test]
fn test_inline_reference() {
    let table = parse_table("CREATE TABLE season (medium TEXT REFERENCES mediums(mediumid))");
    let medium = column(&table, "medium");

    assert_eq!(
        medium.constraints,
        vec![Constraint::new(
            ConstraintKind::References,
            vec!["mediums".to_string(), "mediumid".to_string()]
        )]
    );
    assert_eq!(medium.tags, vec!["sql", "column", "foreignkey-reference"]);
}

#[test]
fn test_inline_reference_without_column() {
    let table = parse_table("CREATE TABLE t (owner INTEGER REFERENCES users)");
    let owner = column(&table, "owner");

    assert_eq!(
        constraints_of(owner, ConstraintKind::References)[0].args,
        vec!["users"]
    );
}

#[test]
fn test_unsupported_options_are_skipped() {
    let table = parse_table("CREATE TABLE t (a TEXT NULL)");
    let a = column(&table, "a");

    assert!(a.constraints.is_empty());
    assert_eq!(a.tags, vec!["sql", "column"]);
}

#[test]
fn test_constraints_keep_declaration_order() {
    let table = parse_table("CREATE TABLE t (a INTEGER NOT NULL DEFAULT 1 UNIQUE CHECK (a > 0))");
    let kinds: Vec<ConstraintKind> = column(&table, "a")
        .constraints
        .iter()
        .map(|c| c.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            ConstraintKind::NotNull,
            ConstraintKind::Default,
            ConstraintKind::Unique,
            ConstraintKind::Check,
        ]
    );
}

#[test]
fn test_untyped_column_parses_without_dialect() {
    let tables = parse_tables("CREATE TABLE t (anything, other TEXT)", None);
    assert_eq!(column(&tables[0], "anything").data_type, "");
    assert_eq!(column(&tables[0], "other").data_type, "TEXT");
}
