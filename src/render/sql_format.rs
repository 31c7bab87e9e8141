//! Re-serialization of CREATE TABLE statements for the SQL block of a table page

use std::ops::ControlFlow;
use std::str::FromStr;

use sqlparser::ast::{visit_expressions_mut, Expr, Statement};

/// Casing applied to function names when a statement is re-serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionCase {
    /// Keep the schema author's spelling
    #[default]
    Unmodified,
    Upper,
    Lower,
}

impl FromStr for FunctionCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unmodified" | "none" | "false" => Ok(FunctionCase::Unmodified),
            "upper" => Ok(FunctionCase::Upper),
            "lower" => Ok(FunctionCase::Lower),
            _ => Err(format!("Unknown function casing: {}", s)),
        }
    }
}

impl FunctionCase {
    fn apply(&self, name: &str) -> String {
        match self {
            FunctionCase::Unmodified => name.to_string(),
            FunctionCase::Upper => name.to_uppercase(),
            FunctionCase::Lower => name.to_lowercase(),
        }
    }
}

/// Options for the SQL block of a table page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Put each column and constraint definition on its own line
    pub pretty: bool,
    /// Spaces before each definition line in pretty mode
    pub indent: usize,
    /// Spaces prefixed to every line of the block
    pub pad: usize,
    pub normalize_functions: FunctionCase,
    /// In pretty mode, keep statements on one line when they fit this width
    pub max_text_width: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: 2,
            pad: 0,
            normalize_functions: FunctionCase::Unmodified,
            max_text_width: None,
        }
    }
}

/// Format a statement as SQL text
pub fn format_statement(statement: &Statement, options: &FormatOptions) -> String {
    let normalized;
    let statement = match options.normalize_functions {
        FunctionCase::Unmodified => statement,
        case => {
            normalized = normalize_function_names(statement, case);
            &normalized
        }
    };

    let compact = statement.to_string();
    let text = if !options.pretty {
        compact
    } else {
        match options.max_text_width {
            Some(width) if compact.chars().count() <= width => compact,
            _ => pretty_create_table(statement, &compact, options.indent).unwrap_or(compact),
        }
    };

    pad_lines(&text, options.pad)
}

/// Rewrite every function name in a copy of the statement
fn normalize_function_names(statement: &Statement, case: FunctionCase) -> Statement {
    let mut statement = statement.clone();
    let _ = visit_expressions_mut(&mut statement, |expr| {
        if let Expr::Function(function) = expr {
            for part in function.name.0.iter_mut() {
                part.value = case.apply(&part.value);
            }
        }
        ControlFlow::<()>::Continue(())
    });
    statement
}

/// Break the definition list of a CREATE TABLE onto separate lines.
///
/// Returns `None` when the statement has no definition list to break.
fn pretty_create_table(statement: &Statement, compact: &str, indent: usize) -> Option<String> {
    let Statement::CreateTable(create_table) = statement else {
        return None;
    };

    let definitions: Vec<String> = create_table
        .columns
        .iter()
        .map(|c| c.to_string())
        .chain(create_table.constraints.iter().map(|c| c.to_string()))
        .collect();
    if definitions.is_empty() {
        return None;
    }

    let body = format!("({})", definitions.join(", "));
    let start = compact.find(&body)?;
    let prefix = &compact[..start];
    let suffix = &compact[start + body.len()..];

    let indentation = " ".repeat(indent);
    let lines: Vec<String> = definitions
        .iter()
        .map(|d| format!("{}{}", indentation, d))
        .collect();

    Some(format!("{}(\n{}\n){}", prefix, lines.join(",\n"), suffix))
}

fn pad_lines(text: &str, pad: usize) -> String {
    if pad == 0 {
        return text.to_string();
    }
    let padding = " ".repeat(pad);
    text.lines()
        .map(|line| format!("{}{}", padding, line))
        .collect::<Vec<_>>()
        .join("\n")
}
