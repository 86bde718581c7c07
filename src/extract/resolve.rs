//! Reference resolution and aggregation.
//!
//! Definitions are gathered in full before any reference is looked at, so a
//! reference resolves no matter where its definition sits in the document.

use std::collections::HashMap;

use super::walker::Walk;
use crate::model::{Node, TargetIndex};

/// Target and optional title declared by a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionTarget<'a> {
    pub url: &'a str,
    pub title: Option<&'a str>,
}

/// Lookup table from definition identifier to target.
#[derive(Debug, Default)]
pub struct Definitions<'a> {
    by_identifier: HashMap<&'a str, DefinitionTarget<'a>>,
}

impl<'a> Definitions<'a> {
    /// Index every definition. A later definition of the same identifier
    /// replaces an earlier one.
    pub fn collect(definitions: &[&'a Node]) -> Self {
        let mut by_identifier = HashMap::with_capacity(definitions.len());
        for &node in definitions {
            if let Node::Definition {
                identifier,
                url,
                title,
            } = node
            {
                by_identifier.insert(
                    identifier.as_str(),
                    DefinitionTarget {
                        url,
                        title: title.as_deref(),
                    },
                );
            }
        }
        Self { by_identifier }
    }

    pub fn get(&self, identifier: &str) -> Option<DefinitionTarget<'a>> {
        self.by_identifier.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.by_identifier.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_identifier.is_empty()
    }
}

/// Resolved link occurrences and orphan references.
#[derive(Debug, Default)]
pub struct Resolved {
    pub links: TargetIndex,
    pub orphans: TargetIndex,
}

/// Aggregate the walked links and references into target indexes.
pub fn resolve(walk: &Walk<'_>) -> Resolved {
    let definitions = Definitions::collect(&walk.definitions);
    let mut resolved = Resolved::default();

    for located in &walk.links {
        if let Node::Link { url, title, .. } = located.node {
            let content = located.node.rendered();
            resolved.links.insert(
                url,
                [title.as_deref().unwrap_or(""), content.as_str()],
                located.header.clone(),
            );
        }
    }

    for located in &walk.references {
        let Node::Reference {
            identifier, label, ..
        } = located.node
        else {
            continue;
        };
        let content = located.node.rendered();

        match definitions.get(identifier) {
            Some(target) => resolved.links.insert(
                target.url,
                [content.as_str(), label.as_str(), target.title.unwrap_or("")],
                located.header.clone(),
            ),
            None => resolved.orphans.insert(
                identifier,
                [content.as_str(), label.as_str()],
                located.header.clone(),
            ),
        }
    }

    resolved
}
