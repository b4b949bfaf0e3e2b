//! # Grammar Rules
//!
//! Recursive-descent routines, one per block construct. Each takes the
//! [`Parser`] and returns `Ok(Some(node))` for a construct, `Ok(None)` when the
//! input at the cursor yields nothing (an empty heading, whitespace-only text),
//! or the first fatal [`Error`]. There is no recovery: any error aborts the
//! whole document.
//!
//! [`node`] picks a construct from the first non-whitespace byte; [`document`]
//! calls it until the input is exhausted.

mod annotation;
mod comment;
mod component;
mod frontmatter;
mod heading;
pub mod kinds;
mod paragraph;

use log::trace;

use crate::ast::{Document, Node};
use crate::error::{Error, Result};
use crate::parsing::Parser;
use crate::parsing::token::{Token, TokenKind, next_token};
use kinds::{BlockOpen, try_open_block};

/// Parse a whole document.
pub fn document(p: &mut Parser<'_>) -> Result<Document> {
    let mut doc = Document::new(p.sc.len());

    p.sc.skip_whitespace();
    if p.sc.eof() {
        return Err(Error::syntax(p.sc.pos(), "document is empty"));
    }

    while !p.sc.eof() {
        let before = p.sc.pos();
        match node(p)? {
            Some(n) => doc.root.add_child(n)?,
            None if p.sc.pos() == before => p.sc.skip_whitespace(),
            None => {}
        }
    }

    if doc.root.children.is_empty() {
        return Err(Error::syntax(p.sc.pos(), "document has no content"));
    }

    doc.metadata = std::mem::take(&mut p.metadata);
    Ok(doc)
}

/// Skip blank lines and leading whitespace, then parse one construct.
///
/// Returns `Ok(None)` at end of input.
pub fn node(p: &mut Parser<'_>) -> Result<Option<Node>> {
    p.sc.skip_whitespace();
    if p.sc.eof() {
        return Ok(None);
    }

    let open = try_open_block(&p.sc);
    trace!("dispatch {open:?} at byte {}", p.sc.pos());

    match open {
        Some(BlockOpen::Heading) => heading::heading(p),
        Some(BlockOpen::Component) => component::component(p),
        Some(BlockOpen::Annotation) => annotation::annotation(p),
        Some(BlockOpen::Comment) => comment::comment(p),
        Some(BlockOpen::Frontmatter) => frontmatter::frontmatter(p),
        None => paragraph::paragraph(p),
    }
}

/// Consume the next token, failing unless it has the given kind.
fn expect<'a>(p: &mut Parser<'a>, kind: TokenKind) -> Result<Token<'a>> {
    let at = p.sc.pos();
    let tok = next_token(&mut p.sc);
    if tok.kind != kind {
        return Err(Error::syntax(
            at,
            format!("expected {kind:?}, found {:?}", tok.kind),
        ));
    }
    Ok(tok)
}
