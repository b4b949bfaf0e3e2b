use std::fmt;

/// Tag carried by every [`Node`](super::Node).
///
/// `Collapsible`, `Diagram`, `Math` and `Secure` are reserved: the grammar
/// never produces them today, but they have stable names so tooling that
/// builds trees by hand can use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Document,
    Metadata,
    Heading,
    Paragraph,
    Annotation,
    Comment,
    Component,
    Collapsible,
    Diagram,
    Math,
    Secure,
}

impl NodeKind {
    pub const ALL: [NodeKind; 11] = [
        NodeKind::Document,
        NodeKind::Metadata,
        NodeKind::Heading,
        NodeKind::Paragraph,
        NodeKind::Annotation,
        NodeKind::Comment,
        NodeKind::Component,
        NodeKind::Collapsible,
        NodeKind::Diagram,
        NodeKind::Math,
        NodeKind::Secure,
    ];

    /// Label used in AST dumps and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Metadata => "Metadata",
            NodeKind::Heading => "Heading",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Annotation => "Annotation",
            NodeKind::Comment => "Comment",
            NodeKind::Component => "Component",
            NodeKind::Collapsible => "Collapsible",
            NodeKind::Diagram => "Diagram",
            NodeKind::Math => "Math",
            NodeKind::Secure => "Secure",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
