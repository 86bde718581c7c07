//! Root heading reconciliation.
//!
//! A wiki page's top-level heading is expected to canonicalize to the page's
//! filename. When it does not (or there is no heading), the filename takes the
//! heading's place as root of every header path, and the discarded text is
//! reported once.

use std::fmt;

use tracing::warn;

use crate::model::{HeaderPath, TransformedDocument, file_stem};
use crate::slugify::Canonicalize;

/// A document whose root heading did not match its filename.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct BadHeadingWarning {
    pub filename: String,
    /// Discarded root texts, in first-seen order.
    pub headings: Vec<String>,
}

impl fmt::Display for BadHeadingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WARNING: FILE: {}: BAD HEADING: {}",
            self.filename,
            self.headings.join(", ")
        )
    }
}

/// Rewrites header path roots that disagree with the filename.
pub struct Reconciler<'a, C: ?Sized> {
    filename: &'a str,
    stem: &'a str,
    canonicalizer: &'a C,
    discarded: Vec<String>,
}

impl<'a, C: Canonicalize + ?Sized> Reconciler<'a, C> {
    pub fn new(filename: &'a str, canonicalizer: &'a C) -> Self {
        Self {
            filename,
            stem: file_stem(filename),
            canonicalizer,
            discarded: Vec::new(),
        }
    }

    /// Return `path` with a valid root, recording the original if replaced.
    pub fn reconcile(&mut self, path: &HeaderPath) -> HeaderPath {
        let root = path.root().unwrap_or("");
        if !root.is_empty() && self.canonicalizer.canonicalize(root) == self.stem {
            return path.clone();
        }

        if !self.discarded.iter().any(|d| d == root) {
            warn!(
                filename = self.filename,
                heading = root,
                "root heading does not match filename"
            );
            self.discarded.push(root.to_string());
        }
        path.with_root(self.stem)
    }

    /// Warning for everything replaced so far, if anything was.
    pub fn finish(self) -> Option<BadHeadingWarning> {
        if self.discarded.is_empty() {
            return None;
        }
        Some(BadHeadingWarning {
            filename: self.filename.to_string(),
            headings: self.discarded,
        })
    }
}

/// Apply root reconciliation to the outline and every entry of a document.
///
/// Returns the rewritten document and the warning, if any root was replaced.
pub fn reconcile_document<C: Canonicalize + ?Sized>(
    doc: &TransformedDocument,
    canonicalizer: &C,
) -> (TransformedDocument, Option<BadHeadingWarning>) {
    let mut reconciler = Reconciler::new(&doc.filename, canonicalizer);

    let links = doc.links.map_headers(|path| reconciler.reconcile(path));
    let headers = doc
        .headers
        .iter()
        .map(|path| reconciler.reconcile(path))
        .collect();
    let orphans = doc.orphans.map_headers(|path| reconciler.reconcile(path));

    let reconciled = TransformedDocument {
        filename: doc.filename.clone(),
        headers,
        links,
        orphans,
    };
    (reconciled, reconciler.finish())
}
