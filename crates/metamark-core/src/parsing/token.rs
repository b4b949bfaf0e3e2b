//! Pull-based tokenizer.
//!
//! There is no token stream. The grammar asks what kind of token sits at the
//! cursor ([`classify`]) and, when it wants to consume it, pulls exactly one
//! ([`next_token`]). Multi-byte delimiters are consumed in one step so the
//! cursor never stops inside `[[`, `]]`, `%%` or `---`.

use super::grammar::kinds::{
    ANNOTATION_MARKER, COMMENT_DELIM, COMPONENT_CLOSE, COMPONENT_OPEN, FRONTMATTER_FENCE,
    HEADING_MARKER,
};
use super::scanner::{Scanner, is_space};
use super::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Newline,
    /// `#`
    HeadingMarker,
    /// `[[`
    ComponentOpen,
    /// `]]`
    ComponentClose,
    /// A single `]`
    AnnotationClose,
    /// A single `>` not followed by another `>`
    AnnotationMarker,
    /// `%%`
    CommentDelimiter,
    /// `---`
    FrontmatterFence,
    /// Run of non-whitespace bytes that opens no delimiter.
    Text,
    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// Classifies the bytes at the cursor without consuming anything.
///
/// Lookahead is at most three bytes, checked in priority order.
pub fn classify(sc: &Scanner<'_>) -> TokenKind {
    let Some(b) = sc.peek() else {
        return TokenKind::Eof;
    };
    match b {
        b'\n' => TokenKind::Newline,
        HEADING_MARKER => TokenKind::HeadingMarker,
        _ if sc.starts_with(COMPONENT_OPEN.as_bytes()) => TokenKind::ComponentOpen,
        _ if sc.starts_with(COMPONENT_CLOSE.as_bytes()) => TokenKind::ComponentClose,
        b']' => TokenKind::AnnotationClose,
        ANNOTATION_MARKER if sc.peek_at(1) != Some(ANNOTATION_MARKER) => {
            TokenKind::AnnotationMarker
        }
        _ if sc.starts_with(COMMENT_DELIM.as_bytes()) => TokenKind::CommentDelimiter,
        _ if sc.starts_with(FRONTMATTER_FENCE.as_bytes()) => TokenKind::FrontmatterFence,
        _ => TokenKind::Text,
    }
}

fn delimiter_len(kind: TokenKind) -> usize {
    match kind {
        TokenKind::Newline
        | TokenKind::HeadingMarker
        | TokenKind::AnnotationClose
        | TokenKind::AnnotationMarker => 1,
        TokenKind::ComponentOpen | TokenKind::ComponentClose | TokenKind::CommentDelimiter => 2,
        TokenKind::FrontmatterFence => 3,
        TokenKind::Text | TokenKind::Eof => 0,
    }
}

/// Skips intraline whitespace, then consumes and returns one token.
pub fn next_token<'a>(sc: &mut Scanner<'a>) -> Token<'a> {
    sc.skip_inline_whitespace();
    let start = sc.pos();
    let kind = classify(sc);
    match kind {
        TokenKind::Eof => {}
        TokenKind::Text => {
            // At least one byte, then greedily until whitespace or a delimiter.
            sc.advance();
            while sc.peek().is_some_and(|b| !is_space(b)) && classify(sc) == TokenKind::Text {
                sc.advance();
            }
        }
        delim => sc.bump_n(delimiter_len(delim)),
    }
    let end = sc.pos();
    Token {
        kind,
        text: sc.source().get(start..end).unwrap_or(""),
        span: Span::new(start, end),
    }
}
