pub mod document;
pub mod kind;
pub mod node;
pub mod print;

pub use document::{Document, Metadata, MetadataEntry};
pub use kind::NodeKind;
pub use node::{Node, Walk};
pub use print::{print_ast, render_ast, write_ast};
