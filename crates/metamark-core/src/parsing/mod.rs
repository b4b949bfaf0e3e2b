pub mod grammar;
pub mod scanner;
pub mod span;
pub mod token;

#[cfg(test)]
mod tests;

use log::debug;

use crate::ast::{Document, Metadata};
use crate::error::{Error, Result};
use scanner::Scanner;

/// Parser state for one document: the cursor plus the metadata collected from
/// frontmatter blocks so far.
pub struct Parser<'a> {
    pub(crate) sc: Scanner<'a>,
    pub(crate) metadata: Metadata,
}

impl<'a> Parser<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            sc: Scanner::new(src),
            metadata: Metadata::new(),
        }
    }
}

/// Parse MetaMark source into a [`Document`].
///
/// Fails fast: the first structural defect aborts the parse and no partial
/// document is returned.
pub fn parse(text: &str) -> Result<Document> {
    debug!("parsing document ({} bytes)", text.len());
    let mut p = Parser::new(text);
    match grammar::document(&mut p) {
        Ok(doc) => {
            debug!(
                "parsed document: {} top-level nodes, {} metadata entries",
                doc.root.children.len(),
                doc.metadata.len()
            );
            Ok(doc)
        }
        Err(e) => {
            debug!("parse failed ({}): {e}", e.kind());
            Err(e)
        }
    }
}

/// Parse a raw buffer. Input that is not UTF-8 is an invalid argument.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidArgument(format!("input is not valid UTF-8: {e}")))?;
    parse(text)
}

/// Parse input that may be absent altogether.
pub fn parse_optional(text: Option<&str>) -> Result<Document> {
    let text = text.ok_or_else(|| Error::InvalidArgument("no input given".to_string()))?;
    parse(text)
}
