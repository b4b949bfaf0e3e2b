use log::warn;

use super::expect;
use super::kinds::{COMPONENT_CLOSE, COMPONENT_END_TAG};
use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::parsing::Parser;
use crate::parsing::span::Span;
use crate::parsing::token::TokenKind;

/// `[[type]]` body `[[/type]]`.
///
/// The body is not parsed; it becomes the content of a single child paragraph,
/// verbatim. An empty body gives a component with no children.
pub(super) fn component(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();
    expect(p, TokenKind::ComponentOpen)?;

    let name_start = p.sc.pos();
    p.sc.skip_until(|b| b == b']' || b == b'\n');
    if !p.sc.starts_with(COMPONENT_CLOSE.as_bytes()) {
        return Err(Error::syntax(
            p.sc.pos(),
            "component opening tag is not closed with ']]'",
        ));
    }
    let name = p.sc.extract(name_start, p.sc.pos()).unwrap_or("").trim();
    if name.is_empty() {
        return Err(Error::syntax(name_start, "component has no type name"));
    }
    expect(p, TokenKind::ComponentClose)?;
    p.sc.eat_line_end();

    let body_start = p.sc.pos();
    let Some(body_end) = p.sc.find(COMPONENT_END_TAG) else {
        return Err(Error::syntax(
            start,
            format!("unterminated component '{name}'"),
        ));
    };

    let mut node = Node::new(NodeKind::Component, Span::default()).with_content(name);
    if let Some(body) = p.sc.extract(body_start, body_end) {
        node.add_child(
            Node::new(NodeKind::Paragraph, Span::new(body_start, body_end)).with_content(body),
        )?;
    }

    // Closing tag: `[[/` then up to the next `]` on the same line.
    p.sc.seek(body_end + COMPONENT_END_TAG.len());
    let close_start = p.sc.pos();
    p.sc.skip_until(|b| b == b']' || b == b'\n');
    let close_name = p.sc.extract(close_start, p.sc.pos()).unwrap_or("").trim();
    if close_name != name {
        warn!("component '{name}' at byte {start} closed by '[[/{close_name}]]'");
    }
    if !p.sc.eat_str(COMPONENT_CLOSE) {
        p.sc.eat(b']');
    }
    p.sc.eat_line_end();

    node.span = Span::new(start, p.sc.pos());
    Ok(Some(node))
}
