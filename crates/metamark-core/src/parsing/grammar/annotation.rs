use super::expect;
use super::kinds::{ANNOTATION_SEPARATOR, is_valid_identifier};
use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::parsing::Parser;
use crate::parsing::span::Span;
use crate::parsing::token::TokenKind;

/// `> type: content` or `> type`, always a single line.
pub(super) fn annotation(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();
    expect(p, TokenKind::AnnotationMarker)?;
    p.sc.skip_inline_whitespace();

    let name_start = p.sc.pos();
    p.sc.skip_until(|b| b == ANNOTATION_SEPARATOR || b == b'\n');
    let name = p.sc.extract(name_start, p.sc.pos()).unwrap_or("").trim_end();
    if name.is_empty() {
        return Err(Error::syntax(name_start, "annotation has no type name"));
    }
    if !is_valid_identifier(name) {
        return Err(Error::syntax(
            name_start,
            format!("invalid annotation type '{name}'"),
        ));
    }

    let mut node = Node::new(NodeKind::Annotation, Span::default()).with_content(name);

    if p.sc.eat(ANNOTATION_SEPARATOR) {
        p.sc.skip_inline_whitespace();
        let text_start = p.sc.pos();
        p.sc.skip_until(|b| b == b'\n');
        let text = p.sc.extract(text_start, p.sc.pos()).unwrap_or("").trim_end();
        if !text.is_empty() {
            node.add_child(
                Node::new(
                    NodeKind::Paragraph,
                    Span::new(text_start, text_start + text.len()),
                )
                .with_content(text),
            )?;
        }
    }
    p.sc.eat_line_end();

    node.span = Span::new(start, p.sc.pos());
    Ok(Some(node))
}
