//! Document tree nodes.
//!
//! The host's parser produces a generic tree; only four kinds of node carry
//! meaning for the index. Everything else is a structural container whose
//! children are walked transparently.

/// A node in a parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Section heading (`# Title`).
    Heading { depth: u8, children: Vec<Node> },

    /// Inline link with an explicit destination (`[text](url "title")`).
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },

    /// Reference-style link (`[text][id]`), resolved against definitions.
    Reference {
        identifier: String,
        label: String,
        children: Vec<Node>,
    },

    /// Link reference definition (`[id]: url "title"`).
    Definition {
        identifier: String,
        url: String,
        title: Option<String>,
    },

    /// Any other node. Text literals are generic nodes with a `value`.
    Generic {
        kind: String,
        value: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a container node of the given kind.
    pub fn container(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Generic {
            kind: kind.into(),
            value: None,
            children,
        }
    }

    /// Create a document root.
    pub fn root(children: Vec<Node>) -> Self {
        Self::container("root", children)
    }

    /// Create a text literal.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Generic {
            kind: "text".to_string(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Create a heading containing a single text literal.
    pub fn heading(depth: u8, text: impl Into<String>) -> Self {
        Node::Heading {
            depth,
            children: vec![Node::text(text)],
        }
    }

    /// Create a link containing a single text literal.
    pub fn link(url: impl Into<String>, title: Option<&str>, text: impl Into<String>) -> Self {
        Node::Link {
            url: url.into(),
            title: title.map(String::from),
            children: vec![Node::text(text)],
        }
    }

    /// Create a reference containing a single text literal.
    pub fn reference(
        identifier: impl Into<String>,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Node::Reference {
            identifier: identifier.into(),
            label: label.into(),
            children: vec![Node::text(text)],
        }
    }

    /// Create a definition.
    pub fn definition(
        identifier: impl Into<String>,
        url: impl Into<String>,
        title: Option<&str>,
    ) -> Self {
        Node::Definition {
            identifier: identifier.into(),
            url: url.into(),
            title: title.map(String::from),
        }
    }

    /// Child nodes, in document order. Definitions have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Heading { children, .. }
            | Node::Link { children, .. }
            | Node::Reference { children, .. }
            | Node::Generic { children, .. } => children,
            Node::Definition { .. } => &[],
        }
    }

    /// Literal text carried by this node itself, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Generic { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Iterate the literal text values of this subtree in document order.
    ///
    /// The iterator is single-use; call again to restart.
    pub fn texts(&self) -> Texts<'_> {
        Texts { stack: vec![self] }
    }

    /// Concatenated literal text of this subtree.
    pub fn rendered(&self) -> String {
        self.texts().collect()
    }
}

/// Pre-order iterator over the text literals of a subtree.
///
/// Produced by [`Node::texts`].
#[derive(Debug)]
pub struct Texts<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Texts<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            // Reverse push so the leftmost child is visited first
            self.stack.extend(node.children().iter().rev());
            if let Some(value) = node.value()
                && !value.is_empty()
            {
                return Some(value);
            }
        }
        None
    }
}
