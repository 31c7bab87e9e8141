//! Cross-link integrity tests
//!
//! Every link a generated page emits must resolve to a generated note, except
//! references to tables that live outside the schema file.

use std::collections::HashSet;

use crate::common::{link_targets, note_stems, TestContext};

#[test]
fn test_table_column_links_resolve_to_column_notes() {
    let ctx = TestContext::with_fixture("bookstore");
    ctx.generate_successfully(Some("sqlite"));

    let column_stems: HashSet<String> = note_stems(&ctx.output_dir().join("columns"))
        .into_iter()
        .collect();

    for table in note_stems(&ctx.output_dir().join("tables")) {
        let page = ctx.read_note(&format!("tables/{}.md", table));
        let targets = link_targets(&page);
        assert!(!targets.is_empty(), "Table {} links no columns", table);

        for target in targets {
            assert!(
                column_stems.contains(&target),
                "Link {} in table {} has no column note",
                target,
                table
            );
        }
    }
}

#[test]
fn test_every_column_note_is_linked_exactly_once() {
    let ctx = TestContext::with_fixture("bookstore");
    ctx.generate_successfully(Some("sqlite"));

    let mut linked = Vec::new();
    for table in note_stems(&ctx.output_dir().join("tables")) {
        linked.extend(link_targets(&ctx.read_note(&format!("tables/{}.md", table))));
    }
    linked.sort();

    assert_eq!(linked, note_stems(&ctx.output_dir().join("columns")));
}

#[test]
fn test_references_within_schema_resolve() {
    let ctx = TestContext::with_fixture("bookstore");
    ctx.generate_successfully(Some("sqlite"));

    let column_stems: HashSet<String> = note_stems(&ctx.output_dir().join("columns"))
        .into_iter()
        .collect();

    let mut checked = 0;
    for column in &column_stems {
        let page = ctx.read_note(&format!("columns/{}.md", column));
        for target in link_targets(&page) {
            assert!(
                column_stems.contains(&target),
                "Reference {} from {} does not resolve",
                target,
                column
            );
            checked += 1;
        }
    }
    assert_eq!(checked, 9, "Every bookstore reference should be checked");
}
