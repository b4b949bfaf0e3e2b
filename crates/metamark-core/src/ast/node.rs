use super::NodeKind;
use crate::error::Result;
use crate::parsing::span::Span;

/// One element of the document tree.
///
/// A node owns its children outright; dropping a node drops its whole
/// subtree exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    /// Kind-specific text: heading text, component or annotation type name,
    /// raw frontmatter body, comment body, paragraph text.
    pub content: Option<String>,
    /// Number of leading `#` markers. Only set on headings.
    pub level: Option<usize>,
    pub children: Vec<Node>,
    /// Source range this node was parsed from.
    pub span: Span,
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            content: None,
            level: None,
            children: Vec::new(),
            span,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    /// Appends `child`, reporting allocation failure instead of aborting.
    pub fn add_child(&mut self, child: Node) -> Result<()> {
        self.children.try_reserve(1)?;
        self.children.push(child);
        Ok(())
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Pre-order traversal of this node and every descendant.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// All nodes of `kind` in this subtree, in document order.
    pub fn find_all(&self, kind: NodeKind) -> Vec<&Node> {
        self.walk().filter(|n| n.kind == kind).collect()
    }
}

/// Iterator returned by [`Node::walk`].
pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
