//! Extraction of the link index from a document tree.
//!
//! - [`walker`]: pre-order walk producing heading, link, reference and
//!   definition streams with heading context attached
//! - [`resolve`]: two-phase reference resolution and aggregation by target
//!
//! [`transform`] runs both and packages the result as a
//! [`TransformedDocument`].

pub mod resolve;
pub mod walker;

use tracing::debug;

use crate::model::{Node, TransformedDocument};

pub use resolve::{DefinitionTarget, Definitions, Resolved, resolve};
pub use walker::{HeadingItem, Located, Walk, walk};

/// Extract the link index and heading outline of one document.
///
/// `filename` is the source document's name (with extension); it is kept on
/// the result for root-heading reconciliation at compile time.
///
/// # Example
///
/// ```
/// use wikimeta::{Node, transform};
///
/// let tree = Node::root(vec![
///     Node::heading(1, "Notes"),
///     Node::link("./other.md", None, "Other"),
/// ]);
/// let doc = transform(&tree, "notes.md");
///
/// assert_eq!(doc.links_to("other.md").len(), 1);
/// assert_eq!(doc.links_to("other.md")[0].header.segments(), &["Notes"]);
/// ```
pub fn transform(root: &Node, filename: &str) -> TransformedDocument {
    let walk = walk(root);
    debug!(
        filename,
        headings = walk.headings.len(),
        links = walk.links.len(),
        references = walk.references.len(),
        definitions = walk.definitions.len(),
        "walked document"
    );

    let Resolved { links, orphans } = resolve(&walk);
    debug!(
        filename,
        targets = links.len(),
        orphans = orphans.len(),
        "aggregated links"
    );

    TransformedDocument {
        filename: filename.to_string(),
        headers: walk.headings.into_iter().map(|h| h.path).collect(),
        links,
        orphans,
    }
}
