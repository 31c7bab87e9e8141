//! Index page listing every table of a schema

use std::fmt::Write;

use crate::model::TablePage;

use super::{note_stem, tag_line, wiki_link, Page, RenderOptions};

/// Page that links to every table page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPage {
    pub name: String,
    pub tags: Vec<String>,
    /// Table names in source order
    pub tables: Vec<String>,
}

impl IndexPage {
    /// Build an index over the given tables. A trailing `.md` on the name is dropped.
    pub fn new(name: &str, tables: &[TablePage]) -> Self {
        let name = name.strip_suffix(".md").unwrap_or(name);
        Self {
            name: name.to_string(),
            tags: vec!["sql".to_string(), "index".to_string()],
            tables: tables.iter().map(|t| t.name.clone()).collect(),
        }
    }
}

impl Page for IndexPage {
    fn name(&self) -> &str {
        &self.name
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn file_stem(&self) -> String {
        note_stem(&self.name)
    }

    fn stringify(&self, _options: &RenderOptions) -> String {
        let mut out = tag_line(&self.tags);
        out.push_str("### Tables:\n");
        for table in &self.tables {
            let _ = writeln!(out, "{}", wiki_link(&note_stem(table), table));
        }
        out
    }
}
