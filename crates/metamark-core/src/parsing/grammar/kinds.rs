//! Delimiters of the MetaMark block constructs and the lookahead that decides
//! which construct opens at the cursor.

use crate::parsing::scanner::Scanner;
use crate::parsing::token::{TokenKind, classify};

pub const HEADING_MARKER: u8 = b'#';
pub const ANNOTATION_MARKER: u8 = b'>';
pub const ANNOTATION_SEPARATOR: u8 = b':';
pub const COMPONENT_OPEN: &str = "[[";
pub const COMPONENT_CLOSE: &str = "]]";
pub const COMPONENT_END_TAG: &str = "[[/";
pub const COMMENT_DELIM: &str = "%%";
pub const FRONTMATTER_FENCE: &str = "---";

/// A delimited construct. Anything else is paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Heading,
    Component,
    Annotation,
    Comment,
    Frontmatter,
}

/// Which construct, if any, the bytes at the cursor open.
pub fn try_open_block(sc: &Scanner<'_>) -> Option<BlockOpen> {
    match classify(sc) {
        TokenKind::HeadingMarker => Some(BlockOpen::Heading),
        TokenKind::ComponentOpen => Some(BlockOpen::Component),
        TokenKind::AnnotationMarker => Some(BlockOpen::Annotation),
        TokenKind::CommentDelimiter => Some(BlockOpen::Comment),
        TokenKind::FrontmatterFence => Some(BlockOpen::Frontmatter),
        TokenKind::Newline
        | TokenKind::ComponentClose
        | TokenKind::AnnotationClose
        | TokenKind::Text
        | TokenKind::Eof => None,
    }
}

/// First byte alphabetic or `_`, the rest alphanumeric or `_`.
pub fn is_valid_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
