//! Tests for latest-entry selection and insertion points

use autorev_content::{
    CommentStyle, Document, InsertionPoint, RevisionNumber, find_latest_revision_line,
    insertion_point, next_revision_number,
};
use proptest::prelude::*;
use rstest::rstest;

fn entry(number: u32) -> String {
    format!("#   REV.{number:02} 2024/01/{:02}  BY. AB", number % 28 + 1)
}

#[test]
fn test_no_entries_inserts_at_document_start() {
    let doc = Document::new("class Foo\nend\n");
    let style = CommentStyle::Line.handler();

    assert_eq!(find_latest_revision_line(&doc), None);
    assert_eq!(insertion_point(&doc, style.as_ref()), InsertionPoint::START);
}

#[test]
fn test_single_entry_is_found() {
    let doc = Document::new("# header\n#\n#   REV.03 2024/01/01  BY. AB\n#\n");
    assert_eq!(find_latest_revision_line(&doc), Some(2));
}

#[test]
fn test_last_entry_wins() {
    let source = [
        "# REVISION HISTORY".to_string(),
        entry(0),
        "#     first".to_string(),
        entry(1),
        "#     second".to_string(),
        entry(2),
        "#     third".to_string(),
        "#".to_string(),
    ]
    .join("\n");
    let doc = Document::new(source);

    assert_eq!(find_latest_revision_line(&doc), Some(5));
}

#[test]
fn test_entries_in_block_comment_are_found() {
    let doc = Document::new(
        "/* ====\n *   REV.00 2024/01/01 BY. AB\n *   REV.01 2024/02/01 BY. AB\n * =====\n */\n",
    );
    assert_eq!(find_latest_revision_line(&doc), Some(2));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(10)]
fn test_delimiter_within_window_is_used(#[case] k: usize) {
    let mut lines = vec![entry(4)];
    lines.extend((1..k).map(|i| format!("#     note {i}")));
    lines.push("#".to_string());
    lines.push("class Foo".to_string());
    let doc = Document::new(lines.join("\n"));
    let style = CommentStyle::Line.handler();

    assert_eq!(
        insertion_point(&doc, style.as_ref()),
        InsertionPoint::line_start(k)
    );
}

#[test]
fn test_delimiter_beyond_window_falls_back() {
    let mut lines = vec!["# header".to_string(), entry(4)];
    lines.extend((1..=10).map(|i| format!("#     note {i}")));
    lines.push("#".to_string());
    let doc = Document::new(lines.join("\n"));
    let style = CommentStyle::Line.handler();

    assert_eq!(
        insertion_point(&doc, style.as_ref()),
        InsertionPoint::line_start(3)
    );
}

#[test]
fn test_short_document_without_delimiter_falls_back() {
    let doc = Document::new(entry(1));
    let style = CommentStyle::Line.handler();

    assert_eq!(
        insertion_point(&doc, style.as_ref()),
        InsertionPoint::line_start(2)
    );
}

#[test]
fn test_block_style_stops_at_rule_line() {
    let doc = Document::new(
        "/* =====\n * REVISION HISTORY\n *   REV.00 2024/01/01 BY. AB\n *       msg\n * =====\n */\n",
    );
    let style = CommentStyle::Block.handler();

    assert_eq!(
        insertion_point(&doc, style.as_ref()),
        InsertionPoint::line_start(4)
    );
}

#[test]
fn test_line_delimiter_is_not_block_delimiter() {
    let doc = Document::new("#   REV.00 2024/01/01  BY. AB\n#\n");
    let style = CommentStyle::Block.handler();

    assert_eq!(
        insertion_point(&doc, style.as_ref()),
        InsertionPoint::line_start(2)
    );
}

proptest! {
    #[test]
    fn prop_next_number_increments(n in 0u32..=98) {
        let next = next_revision_number(&entry(n)).unwrap();
        prop_assert_eq!(next, RevisionNumber::new(n + 1));
        prop_assert_eq!(next.to_string(), format!("{:02}", n + 1));
        prop_assert_eq!(next.to_string().len(), 2);
    }

    #[test]
    fn prop_latest_entry_is_last_by_position(
        numbers in proptest::collection::vec(0u32..100, 1..12),
        filler in 0usize..4,
    ) {
        let mut lines = Vec::new();
        let mut last_line = 0;
        for n in &numbers {
            for _ in 0..filler {
                lines.push("# filler".to_string());
            }
            last_line = lines.len();
            lines.push(entry(*n));
        }
        lines.push("#".to_string());
        let doc = Document::new(lines.join("\n"));

        prop_assert_eq!(find_latest_revision_line(&doc), Some(last_line));
    }
}
