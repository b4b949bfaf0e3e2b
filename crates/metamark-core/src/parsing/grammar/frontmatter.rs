use log::trace;

use super::expect;
use super::kinds::FRONTMATTER_FENCE;
use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::metadata;
use crate::parsing::Parser;
use crate::parsing::span::Span;
use crate::parsing::token::TokenKind;

/// `---` … `---`.
///
/// The raw text between the fences is kept verbatim as the node's content.
/// Each `key: value` line becomes a `"key:value"` child paragraph and is
/// appended to the document metadata. A line without a colon fails the whole
/// parse.
pub(super) fn frontmatter(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();
    expect(p, TokenKind::FrontmatterFence)?;

    let raw_start = p.sc.pos();
    let Some(raw_end) = p.sc.find(FRONTMATTER_FENCE) else {
        return Err(Error::syntax(start, "unterminated frontmatter block"));
    };
    let raw = p.sc.source().get(raw_start..raw_end).unwrap_or("");

    let entries = metadata::extract(raw, raw_start)?;
    trace!("frontmatter at {start} with {} entries", entries.len());

    let mut node = Node::new(NodeKind::Metadata, Span::default()).with_content(raw);
    for entry in entries {
        node.add_child(
            Node::new(NodeKind::Paragraph, entry.span)
                .with_content(format!("{}:{}", entry.key, entry.value)),
        )?;
        p.metadata.push(entry)?;
    }

    p.sc.seek(raw_end);
    expect(p, TokenKind::FrontmatterFence)?;
    p.sc.eat_line_end();

    node.span = Span::new(start, p.sc.pos());
    Ok(Some(node))
}
