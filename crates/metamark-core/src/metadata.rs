//! Frontmatter body → ordered key/value pairs.
//!
//! Each line is trimmed; empty lines and lines starting with `#` are skipped.
//! Every other line must contain a `:`. The key is the trimmed text before
//! the first colon, the value the trimmed text after it.

use crate::ast::MetadataEntry;
use crate::error::{Error, Result};
use crate::parsing::span::Span;

/// Extracts entries from `raw`, the text between two `---` fences.
///
/// `base` is the byte offset of `raw` within the whole document; entry spans
/// and error offsets are absolute.
pub fn extract(raw: &str, base: usize) -> Result<Vec<MetadataEntry>> {
    let mut entries = Vec::new();
    let mut line_start = base;

    for line in raw.split_inclusive('\n') {
        let offset = line_start;
        line_start += line.len();

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let lead = line.len() - line.trim_start().len();
        let start = offset + lead;

        let Some((key, value)) = trimmed.split_once(':') else {
            return Err(Error::syntax(start, "metadata line is missing ':'"));
        };

        entries.try_reserve(1)?;
        entries.push(MetadataEntry {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
            span: Span::new(start, start + trimmed.len()),
        });
    }

    Ok(entries)
}
