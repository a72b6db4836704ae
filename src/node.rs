//! Owned document node tree and the capability contract the combinators build on.

use std::fmt;

use tracing::debug;

/// Minimal capability a tree node type must offer to be assembled by the combinators.
///
/// Any node library can plug in: implement this for its node type and every
/// function in [`crate::combinators`] works with it.
pub trait NodeTree: Sized {
    /// A node with no content and no children. Renders as nothing.
    fn empty() -> Self;

    /// Appends `child` after the existing children. Append order is render order.
    fn append_child(&mut self, child: Self);
}

/// Single attribute on an element node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Attribute value, None for boolean attributes such as `disabled`
    pub value: Option<String>,
}

/// What a node contributes to the markup in front of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// No own content; only the children are rendered
    Empty,
    /// Text content, escaped on render
    Text(String),
    /// Pre-rendered markup, written verbatim
    Raw(String),
    /// Element with tag name and ordered attributes
    Element {
        tag: String,
        attributes: Vec<Attribute>,
    },
}

/// Tree node owning its children.
///
/// Cloning is a deep copy, so two nodes never share a child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self::empty()
    }
}

impl Node {
    pub fn empty() -> Self {
        Self {
            kind: NodeKind::Empty,
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text(content.into()),
            children: Vec::new(),
        }
    }

    /// Markup written as-is by the renderer. The caller vouches for its validity.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Raw(markup.into()),
            children: Vec::new(),
        }
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.into(),
                attributes: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    /// Adds a `name="value"` attribute. Ignored on non-element nodes.
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attribute(Attribute {
            name: name.into(),
            value: Some(value.into()),
        })
    }

    /// Adds a boolean attribute rendered as a bare name. Ignored on non-element nodes.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.push_attribute(Attribute {
            name: name.into(),
            value: None,
        })
    }

    fn push_attribute(mut self, attribute: Attribute) -> Self {
        match &mut self.kind {
            NodeKind::Element { attributes, .. } => attributes.push(attribute),
            kind => debug!(
                "Ignoring attribute '{}' on non-element node: {:?}",
                attribute.name, kind
            ),
        }
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Appends a text child.
    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match &self.kind {
            NodeKind::Element { attributes, .. } => attributes,
            _ => &[],
        }
    }

    /// True for a node without own content and without children.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, NodeKind::Empty) && self.children.is_empty()
    }

    /// Number of direct children. Own content is not counted.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl NodeTree for Node {
    fn empty() -> Self {
        Node::empty()
    }

    fn append_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl From<&str> for Node {
    fn from(content: &str) -> Self {
        Node::text(content)
    }
}

impl From<String> for Node {
    fn from(content: String) -> Self {
        Node::text(content)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::Renderer::default()
            .render(self, f)
            .map_err(|_| fmt::Error)
    }
}
