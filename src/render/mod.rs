//! Markdown note rendering
//!
//! Every page renders to a standalone Markdown document. Pages link to each
//! other with `[[stem|text]]` links, where `stem` is the target page's file
//! name without the `.md` extension.

mod index;
mod markdown;
mod sql_format;

use std::sync::LazyLock;

use regex::Regex;

use crate::model::Constraint;

pub use index::IndexPage;
pub use sql_format::{format_statement, FormatOptions, FunctionCase};

/// Characters that cannot appear in a link target or would split a path
static UNSAFE_STEM_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/\\:\[\]|#^]").expect("valid stem regex"));

/// Options shared by all pages of one rendering run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Dialect name, used as the language of the SQL code fence
    pub dialect: Option<String>,
    pub format: FormatOptions,
}

/// A rendered document
pub trait Page {
    fn name(&self) -> &str;

    fn tags(&self) -> &[String];

    /// File name without extension; also the target of every link to this page
    fn file_stem(&self) -> String;

    fn file_name(&self) -> String {
        format!("{}.md", self.file_stem())
    }

    /// Produce the Markdown body of the page
    fn stringify(&self, options: &RenderOptions) -> String;
}

/// Stem for a note name, with characters the note system cannot link replaced
pub fn note_stem(name: &str) -> String {
    UNSAFE_STEM_CHARS.replace_all(name, "_").into_owned()
}

/// Stem of a column page
pub fn column_stem(table: &str, column: &str) -> String {
    note_stem(&format!("{}-{}", table, column))
}

/// Wiki link to another page
pub(crate) fn wiki_link(stem: &str, text: &str) -> String {
    format!("[[{}|{}]]", stem, text)
}

/// Render a constraint: bare name without arguments, the page formatter otherwise
pub(crate) fn stringify_constraint(
    constraint: &Constraint,
    format_with_args: impl Fn(&Constraint) -> String,
) -> String {
    if constraint.args.is_empty() {
        constraint.kind.display_name().to_string()
    } else {
        format_with_args(constraint)
    }
}

/// Tag line shared by all pages: `#sql #table ` followed by a blank line
pub(crate) fn tag_line(tags: &[String]) -> String {
    let mut out: String = tags.iter().map(|t| format!("#{} ", t)).collect();
    out.push_str("\n\n");
    out
}
