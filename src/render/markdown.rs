//! Markdown bodies of table and column pages

use std::fmt::Write;

use crate::model::{ColumnPage, Constraint, ConstraintKind, TablePage};

use super::{
    column_stem, format_statement, note_stem, stringify_constraint, tag_line, wiki_link, Page,
    RenderOptions,
};

impl TablePage {
    /// Format a constraint that carries arguments, as listed on the table page
    pub fn format_constraint(&self, constraint: &Constraint) -> String {
        match constraint.kind {
            ConstraintKind::PrimaryKey => {
                format!("Primary Key Group: {}", constraint.args.join(", "))
            }
            ConstraintKind::Unique => {
                format!("Unique Column Group: ({})", constraint.args.join(", "))
            }
            ConstraintKind::Check => constraint.args[0].clone(),
            ConstraintKind::AutoIncrement
            | ConstraintKind::NotNull
            | ConstraintKind::Default
            | ConstraintKind::References => format_column_constraint(constraint),
        }
    }
}

impl ColumnPage {
    /// Format a constraint that carries arguments, as listed on the column page
    pub fn format_constraint(&self, constraint: &Constraint) -> String {
        format_column_constraint(constraint)
    }
}

fn format_column_constraint(constraint: &Constraint) -> String {
    let args = &constraint.args;
    match constraint.kind {
        ConstraintKind::Default => format!("Default {}", args[0]),
        ConstraintKind::Check => format!("Check {}", args[0]),
        ConstraintKind::References => match args.as_slice() {
            [table, column, ..] => format!(
                "References {}",
                wiki_link(&column_stem(table, column), &format!("{}.{}", table, column))
            ),
            // No referenced column: the link goes to the table page
            _ => format!("References {}", wiki_link(&note_stem(&args[0]), &args[0])),
        },
        ConstraintKind::PrimaryKey
        | ConstraintKind::AutoIncrement
        | ConstraintKind::NotNull
        | ConstraintKind::Unique => constraint.kind.display_name().to_string(),
    }
}

impl Page for TablePage {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn file_stem(&self) -> String {
        note_stem(&self.name)
    }

    fn stringify(&self, options: &RenderOptions) -> String {
        let mut out = tag_line(&self.tags);

        out.push_str("### Columns:\n");
        for column in &self.columns {
            let _ = writeln!(out, "{}", wiki_link(&column.file_stem(), &column.name));
        }

        out.push_str("\n### Constraints:\n");
        for constraint in &self.constraints {
            let text = stringify_constraint(constraint, |c| self.format_constraint(c));
            let _ = writeln!(out, "* {}", text);
        }

        out.push_str("\n### SQL\n");
        let _ = write!(
            out,
            "```{}\n{}\n```",
            options.dialect.as_deref().unwrap_or(""),
            format_statement(&self.statement, &options.format)
        );
        out
    }
}

impl Page for ColumnPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn file_stem(&self) -> String {
        column_stem(&self.table, &self.name)
    }

    fn stringify(&self, _options: &RenderOptions) -> String {
        let mut out = tag_line(&self.tags);

        let _ = writeln!(out, "### Name:\n{}", self.name);
        let _ = writeln!(out, "### Type:\n{}", self.data_type);

        out.push_str("\n### Constraints:\n");
        for constraint in &self.constraints {
            let text = stringify_constraint(constraint, |c| self.format_constraint(c));
            let _ = writeln!(out, "* {}", text);
        }
        out
    }
}
