use super::{Node, NodeKind};
use crate::error::Result;
use crate::parsing::span::Span;

/// One `key: value` pair from a frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
    /// The source line the pair was read from.
    pub span: Span,
}

/// Ordered metadata table.
///
/// Keys may repeat. Entries are kept in insertion order and lookups return the
/// first entry with a matching key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<MetadataEntry>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: MetadataEntry) -> Result<()> {
        self.entries.try_reserve(1)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Value of the first entry whose key equals `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Every value recorded for `key`, in input order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.key == key)
            .map(|e| e.value.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A parsed MetaMark document: the AST root plus the metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Node,
    pub metadata: Metadata,
}

impl Document {
    /// An empty document whose root covers `len` bytes of source.
    pub fn new(len: usize) -> Self {
        Self {
            root: Node::new(NodeKind::Document, Span::new(0, len)),
            metadata: Metadata::new(),
        }
    }

    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key)
    }

    /// Top-level nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.root.children
    }
}
