//! Core data model for link indexing.
//!
//! This module contains:
//! - Document tree nodes as handed over by the host parser
//! - Heading stack and header paths
//! - Per-target aggregation of link occurrences
//! - The transformed document produced by extraction

mod document;
mod header;
mod index;
#[cfg(feature = "json")]
mod mdast;
mod node;

// Re-export tree types
pub use node::{Node, Texts};

// Re-export heading types
pub use header::{HeaderFrame, HeaderPath, HeaderStack};

// Re-export aggregation types
pub use index::{AggregatedEntry, TargetIndex, normalize_target};

// Re-export document
pub use document::TransformedDocument;
pub(crate) use document::file_stem;
