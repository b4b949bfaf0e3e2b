use super::kinds::try_open_block;
use crate::ast::{Node, NodeKind};
use crate::error::Result;
use crate::parsing::Parser;
use crate::parsing::span::Span;

/// Free text up to a blank line, or up to a line that opens another construct.
///
/// The blank line is consumed; the opening delimiter of the next construct is
/// left for the dispatcher. Only a line holding nothing but its newline (or
/// `\r\n`) counts as blank.
pub(super) fn paragraph(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();

    while let Some(b) = p.sc.advance() {
        if b != b'\n' {
            continue;
        }
        if p.sc.eat_line_end() {
            break;
        }
        if try_open_block(&p.sc).is_some() {
            break;
        }
    }

    let end = p.sc.pos();
    let text = p
        .sc
        .extract(start, end)
        .unwrap_or("")
        .trim_end_matches(['\n', '\r']);
    if text.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(
        Node::new(NodeKind::Paragraph, Span::new(start, end)).with_content(text),
    ))
}
