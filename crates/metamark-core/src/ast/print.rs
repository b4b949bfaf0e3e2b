//! Indented debug dump of an AST.
//!
//! One line per node: two spaces per depth level, the kind name, then
//! `": content"` when the node has content.

use std::fmt::{self, Write};

use super::Node;

pub fn write_ast<W: Write>(out: &mut W, node: &Node, indent: usize) -> fmt::Result {
    for _ in 0..indent {
        out.write_str("  ")?;
    }
    out.write_str(node.kind.name())?;
    if let Some(content) = &node.content {
        write!(out, ": {content}")?;
    }
    out.write_char('\n')?;
    for child in &node.children {
        write_ast(out, child, indent + 1)?;
    }
    Ok(())
}

/// Renders the dump into a fresh string.
pub fn render_ast(node: &Node, indent: usize) -> String {
    let mut out = String::new();
    write_ast(&mut out, node, indent).unwrap();
    out
}

/// Prints the dump to stdout.
pub fn print_ast(node: &Node, indent: usize) {
    print!("{}", render_ast(node, indent));
}
