//! Compilation of a transformed document into its flat index.
//!
//! Compilation runs in two steps:
//! - reconciliation: make every header path's root agree with the filename
//!   ([`reconcile_document`])
//! - serialization: render the reconciled document as text ([`render_lines`])
//!
//! # Example
//!
//! ```
//! use wikimeta::{Node, compile, transform};
//!
//! let tree = Node::root(vec![
//!     Node::heading(1, "Foo"),
//!     Node::link("./bar.md", None, "Bar"),
//! ]);
//! let compiled = compile(&transform(&tree, "foo.md"));
//!
//! assert_eq!(compiled.text, ":Foo ::Bar :::bar.md\n:Foo");
//! assert!(compiled.warnings.is_empty());
//! ```

mod reconcile;
mod serialize;

pub use reconcile::{BadHeadingWarning, Reconciler, reconcile_document};
#[cfg(feature = "json")]
pub use serialize::render_json;
pub use serialize::{encode_path, render_lines};

use crate::error::Result;
use crate::model::TransformedDocument;
use crate::slugify::{Canonicalize, slugify};

/// Default path marker.
pub const DEFAULT_MARKER: char = ':';

/// Output format for [`compile_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Hierarchical path lines.
    #[default]
    Lines,
    /// Pretty-printed JSON of the reconciled document.
    #[cfg(feature = "json")]
    Json,
}

/// Configuration for compilation.
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Character repeated before each path token.
    pub marker: char,
    /// Rendering of the reconciled document.
    pub format: OutputFormat,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
            format: OutputFormat::default(),
        }
    }
}

impl CompileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Rendered index plus any warnings raised while reconciling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub text: String,
    pub warnings: Vec<BadHeadingWarning>,
}

impl Compiled {
    /// Warning lines for the host, one per warning.
    pub fn warning_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.warnings.iter().map(ToString::to_string)
    }
}

/// Compile with default configuration and [`slugify`] as canonicalizer.
pub fn compile(doc: &TransformedDocument) -> Compiled {
    let (reconciled, warning) = reconcile_document(doc, &slugify);
    Compiled {
        text: render_lines(&reconciled, DEFAULT_MARKER),
        warnings: warning.into_iter().collect(),
    }
}

/// Compile with explicit configuration and canonicalizer.
///
/// Only JSON rendering can fail.
pub fn compile_with<C: Canonicalize + ?Sized>(
    doc: &TransformedDocument,
    config: &CompileConfig,
    canonicalizer: &C,
) -> Result<Compiled> {
    let (reconciled, warning) = reconcile_document(doc, canonicalizer);

    let text = match config.format {
        OutputFormat::Lines => render_lines(&reconciled, config.marker),
        #[cfg(feature = "json")]
        OutputFormat::Json => render_json(&reconciled)?,
    };

    Ok(Compiled {
        text,
        warnings: warning.into_iter().collect(),
    })
}
