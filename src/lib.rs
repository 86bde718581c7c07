//! # wikimeta
//!
//! Link, reference and heading-outline index extraction for parsed Markdown
//! documents.
//!
//! ## Features
//!
//! - Collect every link and reference together with the headings it sits under
//! - Resolve reference-style links against definitions anywhere in the document
//! - Group occurrences by target and report references with no definition
//! - Reconcile the top-level heading with the document's filename
//! - Render the result as a flat, grep-friendly line index (or JSON)
//!
//! ## Quick Start
//!
//! ```
//! use wikimeta::{Node, compile, transform};
//!
//! let tree = Node::root(vec![
//!     Node::heading(1, "Recipes"),
//!     Node::heading(2, "Bread"),
//!     Node::link("./flour.md", Some("Flour"), "flour"),
//!     Node::reference("yeast", "yeast", "Yeast"),
//! ]);
//!
//! let doc = transform(&tree, "recipes.md");
//! assert_eq!(doc.links_to("flour.md").len(), 1);
//! assert_eq!(doc.orphan_identifiers().collect::<Vec<_>>(), ["yeast"]);
//!
//! let compiled = compile(&doc);
//! assert!(compiled.text.contains(":Recipes ::Bread :::Flour ::::flour.md"));
//! ```
//!
//! ## Stages
//!
//! [`transform`] walks the tree once and produces a [`TransformedDocument`].
//! [`compile`] reconciles header paths against the filename and serializes
//! the result; warnings about mismatched root headings are returned
//! alongside the text rather than raised.

pub mod compile;
pub mod error;
pub mod extract;
pub mod model;
pub mod slugify;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use compile::{
    BadHeadingWarning, CompileConfig, Compiled, OutputFormat, compile, compile_with,
};
pub use error::{Error, Result};
pub use extract::transform;
pub use model::{AggregatedEntry, HeaderPath, Node, TargetIndex, TransformedDocument};
pub use slugify::{Canonicalize, slugify};
