//! Note model building

mod builder;
mod constraint;
mod elements;

pub use builder::{build_pages, column_from_def, table_from_statement};
pub use elements::*;
