//! MetaMark: a lightweight markup dialect with headings, fenced components,
//! single-line annotations, comments and frontmatter metadata.
//!
//! ```
//! let doc = metamark_core::parse("---\ntitle: Notes\n---\n# Hello\n").unwrap();
//! assert_eq!(doc.get_metadata("title"), Some("Notes"));
//! assert_eq!(doc.children().len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod io;
pub mod metadata;
pub mod models;
pub mod parsing;


// Re-export key types for easier usage
pub use ast::*;
pub use error::{Error, ErrorKind, Result};
pub use io::*;
pub use models::*;
pub use parsing::{parse, parse_bytes, parse_optional, span::Span};
