//! Note model element types

use sqlparser::ast::Statement;

/// Tags every table page starts with
pub const TABLE_TAGS: &[&str] = &["sql", "table"];

/// Tags every column page starts with
pub const COLUMN_TAGS: &[&str] = &["sql", "column"];

/// Constraint kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    PrimaryKey,
    AutoIncrement,
    NotNull,
    Default,
    Unique,
    Check,
    References,
}

impl ConstraintKind {
    /// Human readable name, also used as the rendering of an argument-less constraint
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "Primary Key",
            ConstraintKind::AutoIncrement => "Auto Increment",
            ConstraintKind::NotNull => "Not Null",
            ConstraintKind::Default => "Default",
            ConstraintKind::Unique => "Unique",
            ConstraintKind::Check => "Check",
            ConstraintKind::References => "References",
        }
    }

    /// Tag a column receives when it declares this constraint itself
    pub fn column_tag(&self) -> &'static str {
        match self {
            ConstraintKind::PrimaryKey => "primarykey",
            ConstraintKind::AutoIncrement => "autoincrement",
            ConstraintKind::NotNull => "notnull",
            ConstraintKind::Default => "hasdefault",
            ConstraintKind::Unique => "isunique",
            ConstraintKind::Check => "hascheck",
            ConstraintKind::References => "foreignkey-reference",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A normalized constraint: its kind plus positional arguments
///
/// Arguments by kind:
/// - `PrimaryKey` / `Unique`: column names when table-level, empty when column-level
/// - `Check` / `Default`: the expression text
/// - `References`: referenced table, then referenced column (may be absent)
/// - `AutoIncrement` / `NotNull`: none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub kind: ConstraintKind,
    pub args: Vec<String>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind, args: Vec<String>) -> Self {
        Self { kind, args }
    }

    /// A constraint without arguments
    pub fn bare(kind: ConstraintKind) -> Self {
        Self {
            kind,
            args: Vec::new(),
        }
    }
}

/// Table page
#[derive(Debug, Clone)]
pub struct TablePage {
    pub name: String,
    pub tags: Vec<String>,
    /// Columns in declaration order
    pub columns: Vec<ColumnPage>,
    /// Constraints that span more than one column
    pub constraints: Vec<Constraint>,
    /// The CREATE TABLE statement the page was built from
    pub statement: Statement,
}

impl TablePage {
    pub fn column(&self, name: &str) -> Option<&ColumnPage> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut ColumnPage> {
        self.columns.iter_mut().find(|c| c.name == name)
    }
}

/// Column page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPage {
    pub name: String,
    /// Name of the owning table
    pub table: String,
    pub tags: Vec<String>,
    /// Declared data type, empty when the column has none
    pub data_type: String,
    pub constraints: Vec<Constraint>,
}

impl ColumnPage {
    /// Attach a constraint together with the tag that advertises it
    pub(crate) fn add_constraint(&mut self, tag: &str, constraint: Constraint) {
        self.tags.push(tag.to_string());
        self.constraints.push(constraint);
    }

    /// Whether the column carries a constraint of the given kind
    pub fn has_constraint(&self, kind: ConstraintKind) -> bool {
        self.constraints.iter().any(|c| c.kind == kind)
    }
}
