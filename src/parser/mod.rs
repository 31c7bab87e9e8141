//! SQL reading and parsing

mod sql_parser;

pub use sql_parser::{parse_sql, parse_sql_file, read_sql_file, resolve_dialect};
