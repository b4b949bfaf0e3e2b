use log::trace;

use super::kinds::HEADING_MARKER;
use crate::ast::{Node, NodeKind};
use crate::error::Result;
use crate::parsing::Parser;
use crate::parsing::span::Span;

/// `#`×N, intraline whitespace, then text up to the newline.
///
/// A marker with no text after it produces no node.
pub(super) fn heading(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();

    let mut level = 0;
    while p.sc.eat(HEADING_MARKER) {
        level += 1;
    }
    p.sc.skip_inline_whitespace();

    let text_start = p.sc.pos();
    p.sc.skip_until(|b| b == b'\n');
    let text = p.sc.extract(text_start, p.sc.pos()).unwrap_or("").trim();
    p.sc.eat_line_end();

    if text.is_empty() {
        trace!("empty heading marker at {start}");
        return Ok(None);
    }

    Ok(Some(
        Node::new(NodeKind::Heading, Span::new(start, p.sc.pos()))
            .with_content(text)
            .with_level(level),
    ))
}
