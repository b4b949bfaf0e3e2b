//! Parser behaviour tests.
//!
//! Every successful parse is run through [`invariants::check`].


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::ast::{Document, NodeKind, render_ast};
use crate::error::ErrorKind;
use crate::parsing::{parse, parse_bytes, parse_optional};

fn parse_ok(src: &str) -> Document {
    let doc = parse(src).unwrap_or_else(|e| panic!("parse failed for {src:?}: {e}"));
    invariants::check(src, &doc);
    doc
}

fn shape(doc: &Document) -> Vec<(NodeKind, Option<&str>)> {
    doc.children()
        .iter()
        .map(|n| (n.kind, n.content()))
        .collect()
}

const MIXED: &str = "# Main Heading\n\n\
This is a paragraph with some text.\n\n\
[[diagram]]\ngraph TD\nA[Start] --> B[Process]\nB --> C[End]\n[[/diagram]]\n\n\
> important: This is an important note.\n\n\
%% This is a comment block %%\n\
Some content here\n\
%% End comment %%\n";

#[test]
fn mixed_document_structure() {
    let doc = parse_ok(MIXED);

    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Heading, Some("Main Heading")),
            (
                NodeKind::Paragraph,
                Some("This is a paragraph with some text.")
            ),
            (NodeKind::Component, Some("diagram")),
            (NodeKind::Annotation, Some("important")),
            (NodeKind::Comment, Some("This is a comment block")),
            (NodeKind::Paragraph, Some("Some content here")),
            (NodeKind::Comment, Some("End comment")),
        ]
    );

    let heading = &doc.children()[0];
    assert_eq!(heading.level, Some(1));

    let component = &doc.children()[2];
    assert_eq!(component.children.len(), 1);
    assert_eq!(component.children[0].kind, NodeKind::Paragraph);
    assert_eq!(
        component.children[0].content(),
        Some("graph TD\nA[Start] --> B[Process]\nB --> C[End]\n")
    );

    let annotation = &doc.children()[3];
    assert_eq!(annotation.children.len(), 1);
    assert_eq!(
        annotation.children[0].content(),
        Some("This is an important note.")
    );
}

#[test]
fn dump_of_small_document() {
    let doc = parse_ok("# Title\n\n> note: hi\n%% c %%\n[[box]]\n[[/box]]\n");
    insta::assert_snapshot!(render_ast(&doc.root, 0), @r"
    Document
      Heading: Title
      Annotation: note
        Paragraph: hi
      Comment: c
      Component: box
    ");
}

#[test]
fn surrounding_blank_lines_are_ignored() {
    let doc = parse_ok("\n\n\n# Title\n\n\nContent\n\n\n");
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Heading, Some("Title")),
            (NodeKind::Paragraph, Some("Content")),
        ]
    );
}

#[test]
fn frontmatter_populates_metadata() {
    let doc = parse_ok("---\ntitle: T\nauthor: A\n---\n");

    assert_eq!(doc.children().len(), 1);
    let meta = &doc.children()[0];
    assert_eq!(meta.kind, NodeKind::Metadata);
    let pairs: Vec<_> = meta.children.iter().filter_map(|n| n.content()).collect();
    assert_eq!(pairs, vec!["title:T", "author:A"]);

    assert_eq!(doc.get_metadata("title"), Some("T"));
    assert_eq!(doc.get_metadata("author"), Some("A"));
    assert_eq!(doc.get_metadata("date"), None);
}

#[test]
fn frontmatter_content_is_kept_verbatim() {
    let doc = parse_ok("---\ntitle  :  Test\n# a comment\n---\n# Body\n");
    let meta = &doc.children()[0];
    assert_eq!(meta.content(), Some("\ntitle  :  Test\n# a comment\n"));
    assert_eq!(meta.children.len(), 1);
    assert_eq!(meta.children[0].content(), Some("title:Test"));
    assert_eq!(doc.get_metadata("title"), Some("Test"));
    assert_eq!(doc.children()[1].kind, NodeKind::Heading);
}

#[test]
fn duplicate_metadata_keys_first_wins() {
    let doc = parse_ok("---\ntag: a\ntag: b\n---\nText\n");
    assert_eq!(doc.get_metadata("tag"), Some("a"));
    assert_eq!(
        doc.metadata.get_all("tag").collect::<Vec<_>>(),
        vec!["a", "b"]
    );
}

#[test]
fn metadata_block_later_in_document_also_registers() {
    let doc = parse_ok("Intro\n---\nk: v\n---\n");
    assert_eq!(
        doc.children().iter().map(|n| n.kind).collect::<Vec<_>>(),
        vec![NodeKind::Paragraph, NodeKind::Metadata]
    );
    assert_eq!(doc.get_metadata("k"), Some("v"));
}

#[test]
fn empty_component_has_no_children() {
    let doc = parse_ok("[[empty]]\n[[/empty]]\n");
    assert_eq!(shape(&doc), vec![(NodeKind::Component, Some("empty"))]);
    assert!(doc.children()[0].children.is_empty());
}

#[test]
fn mismatched_closing_tag_is_tolerated() {
    let doc = parse_ok("[[note]]\nbody\n[[/other]]\nafter\n");
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Component, Some("note")),
            (NodeKind::Paragraph, Some("after")),
        ]
    );
    assert_eq!(doc.children()[0].children[0].content(), Some("body\n"));
}

#[rstest]
#[case("> note:\n")]
#[case("> note\n")]
#[case(">note:   \n")]
fn annotation_without_text_has_no_children(#[case] src: &str) {
    let doc = parse_ok(src);
    assert_eq!(shape(&doc), vec![(NodeKind::Annotation, Some("note"))]);
    assert!(doc.children()[0].children.is_empty());
}

#[test]
fn empty_comment_keeps_empty_content() {
    let doc = parse_ok("%% %%\n");
    assert_eq!(shape(&doc), vec![(NodeKind::Comment, Some(""))]);
}

#[test]
fn comment_may_span_lines() {
    let doc = parse_ok("%% line one\nline two %%\nafter\n");
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Comment, Some("line one\nline two")),
            (NodeKind::Paragraph, Some("after")),
        ]
    );
}

#[rstest]
#[case("# One\n", 1, "One")]
#[case("### Deep\n", 3, "Deep")]
#[case("##\tTabbed   \n", 2, "Tabbed")]
#[case("#NoSpace", 1, "NoSpace")]
fn heading_levels(#[case] src: &str, #[case] level: usize, #[case] text: &str) {
    let doc = parse_ok(src);
    let heading = &doc.children()[0];
    assert_eq!(heading.kind, NodeKind::Heading);
    assert_eq!(heading.level, Some(level));
    assert_eq!(heading.content(), Some(text));
}

#[test]
fn paragraph_stops_before_construct_at_line_start() {
    let doc = parse_ok("first line\nsecond line\n# Heading\n");
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Paragraph, Some("first line\nsecond line")),
            (NodeKind::Heading, Some("Heading")),
        ]
    );
}

#[test]
fn double_marker_does_not_open_annotation() {
    let doc = parse_ok("quoted\n>> still text\n");
    assert_eq!(
        shape(&doc),
        vec![(NodeKind::Paragraph, Some("quoted\n>> still text"))]
    );
}

#[rstest]
#[case::component(
    "text\n[[x]]\nbody\n[[/x]]\n",
    vec![(NodeKind::Paragraph, Some("text")), (NodeKind::Component, Some("x"))]
)]
#[case::annotation(
    "text\n> n: v\n",
    vec![(NodeKind::Paragraph, Some("text")), (NodeKind::Annotation, Some("n"))]
)]
#[case::comment(
    "text\n%% c %%\n",
    vec![(NodeKind::Paragraph, Some("text")), (NodeKind::Comment, Some("c"))]
)]
#[case::frontmatter(
    "text\n---\nk: v\n---\n",
    vec![(NodeKind::Paragraph, Some("text")), (NodeKind::Metadata, Some("\nk: v\n"))]
)]
#[case::empty_heading_then_heading("#\n# Real\n", vec![(NodeKind::Heading, Some("Real"))])]
fn line_start_construct_ends_paragraph(
    #[case] src: &str,
    #[case] expected: Vec<(NodeKind, Option<&str>)>,
) {
    let doc = parse_ok(src);
    assert_eq!(shape(&doc), expected);
}

#[test]
fn crlf_after_block_delimiters() {
    let src = "[[x]]\r\nbody\r\n[[/x]]\r\n\
               %% c %%\r\n\
               > n: v\r\n\
               ---\r\nk: v\r\n---\r\n\
               after\r\n";
    let doc = parse_ok(src);
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Component, Some("x")),
            (NodeKind::Comment, Some("c")),
            (NodeKind::Annotation, Some("n")),
            (NodeKind::Metadata, Some("\r\nk: v\r\n")),
            (NodeKind::Paragraph, Some("after")),
        ]
    );
    assert_eq!(doc.children()[0].children[0].content(), Some("body\r\n"));
    assert_eq!(doc.children()[2].children[0].content(), Some("v"));
    assert_eq!(doc.get_metadata("k"), Some("v"));
}

#[test]
fn delimiters_inside_a_line_are_text() {
    let doc = parse_ok("C# and [[x]] mid-line\n");
    assert_eq!(
        shape(&doc),
        vec![(NodeKind::Paragraph, Some("C# and [[x]] mid-line"))]
    );
}

#[test]
fn whitespace_only_line_does_not_break_paragraph() {
    let doc = parse_ok("a\n   \nb\n");
    assert_eq!(shape(&doc), vec![(NodeKind::Paragraph, Some("a\n   \nb"))]);
}

#[test]
fn crlf_line_endings() {
    let doc = parse_ok("# Title\r\n\r\nPara one\r\n\r\nPara two\r\n");
    assert_eq!(
        shape(&doc),
        vec![
            (NodeKind::Heading, Some("Title")),
            (NodeKind::Paragraph, Some("Para one")),
            (NodeKind::Paragraph, Some("Para two")),
        ]
    );
}

#[test]
fn frontmatter_only_document_is_valid() {
    let doc = parse_ok("---\nk: v\n---");
    assert_eq!(doc.children().len(), 1);
    assert_eq!(doc.children()[0].kind, NodeKind::Metadata);
}

#[test]
fn spans_preserve_source_order() {
    let doc = parse_ok(MIXED);
    let mut last = 0;
    for node in doc.children() {
        assert!(node.span.start >= last);
        last = node.span.end;
        let text = node.span.slice(MIXED).unwrap();
        let content = node.content().unwrap();
        assert!(
            text.contains(content),
            "{} span {:?} does not contain {content:?}",
            node.kind,
            node.span
        );
    }
}

#[test]
fn walk_counts_every_node_once() {
    let doc = parse_ok(MIXED);
    // root + 7 top-level + component body + annotation text
    assert_eq!(doc.root.walk().count(), 10);
    assert_eq!(doc.root.find_all(NodeKind::Comment).len(), 2);
}

#[rstest]
#[case::empty("")]
#[case::whitespace_only("   \n\t\n")]
#[case::metadata_without_colon("---\ninvalid metadata\n---\n")]
#[case::unclosed_frontmatter("---\ntitle: Test\n")]
#[case::unclosed_component_tag("[[invalid component\n")]
#[case::component_without_end_tag("[[diagram]]\ncontent\n")]
#[case::component_without_name("[[]]\n[[/]]\n")]
#[case::annotation_with_space("> invalid annotation\n")]
#[case::annotation_bad_identifier("> 1bad: x\n")]
#[case::annotation_without_name(">\n")]
#[case::annotation_colon_only("> : text\n")]
#[case::unclosed_comment("%% unclosed comment\n")]
#[case::empty_heading_only("#\n")]
fn syntax_errors(#[case] src: &str) {
    let err = parse(src).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax, "{src:?} gave {err}");
}

#[test]
fn error_after_valid_content_discards_document() {
    let err = parse("# ok\n%% never closed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.offset(), Some(5));
}

#[test]
fn absent_and_non_utf8_input_are_invalid_arguments() {
    assert_eq!(
        parse_optional(None).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        parse_bytes(&[b'#', b' ', 0xff, 0xfe]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert!(parse_optional(Some("# fine")).is_ok());
    assert!(parse_bytes(b"# fine\n").is_ok());
}
