use super::expect;
use super::kinds::COMMENT_DELIM;
use crate::ast::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::parsing::Parser;
use crate::parsing::span::Span;
use crate::parsing::token::TokenKind;

/// `%% text %%`, possibly spanning lines. Empty comments keep `""` as content.
pub(super) fn comment(p: &mut Parser<'_>) -> Result<Option<Node>> {
    let start = p.sc.pos();
    expect(p, TokenKind::CommentDelimiter)?;
    p.sc.skip_inline_whitespace();

    let body_start = p.sc.pos();
    let Some(body_end) = p.sc.find(COMMENT_DELIM) else {
        return Err(Error::syntax(start, "unterminated comment"));
    };
    let body = p
        .sc
        .source()
        .get(body_start..body_end)
        .unwrap_or("")
        .trim_end();

    p.sc.seek(body_end);
    p.sc.bump_n(COMMENT_DELIM.len());
    p.sc.eat_line_end();

    Ok(Some(
        Node::new(NodeKind::Comment, Span::new(start, p.sc.pos())).with_content(body),
    ))
}
