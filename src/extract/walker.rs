//! Single-pass document walk.
//!
//! Visits the tree in pre-order, left to right, which is the order text
//! appears in the source. Each heading advances the [`HeaderStack`]; each link
//! and reference is stamped with the header path current at its position.

use crate::model::{HeaderPath, HeaderStack, Node};

/// A heading encountered during the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingItem {
    pub depth: u8,
    pub text: String,
    /// Ancestry including this heading.
    pub path: HeaderPath,
}

/// A link or reference together with the headings it appears under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'a> {
    pub node: &'a Node,
    pub header: HeaderPath,
}

/// The four ordered streams produced by [`walk`].
#[derive(Debug, Default)]
pub struct Walk<'a> {
    pub headings: Vec<HeadingItem>,
    pub links: Vec<Located<'a>>,
    pub references: Vec<Located<'a>>,
    pub definitions: Vec<&'a Node>,
}

/// Walk a document tree, collecting headings, links, references and
/// definitions in document order.
pub fn walk(root: &Node) -> Walk<'_> {
    let mut walk = Walk::default();
    let mut stack = HeaderStack::new();
    let mut pending: Vec<&Node> = vec![root];

    while let Some(node) = pending.pop() {
        match node {
            Node::Heading { depth, .. } => {
                let text = node.rendered();
                stack = stack.advance(*depth, text.clone());
                walk.headings.push(HeadingItem {
                    depth: *depth,
                    text,
                    path: stack.path(),
                });
            }
            Node::Link { .. } => walk.links.push(Located {
                node,
                header: stack.path(),
            }),
            Node::Reference { .. } => walk.references.push(Located {
                node,
                header: stack.path(),
            }),
            Node::Definition { .. } => walk.definitions.push(node),
            Node::Generic { .. } => {}
        }

        // Children go on in reverse so the leftmost is visited next
        pending.extend(node.children().iter().rev());
    }

    walk
}
