//! The extracted index of a single document.

use super::header::HeaderPath;
use super::index::{AggregatedEntry, TargetIndex};

/// Links, orphan references and heading outline of one document.
///
/// Produced by [`crate::transform`] and consumed by [`crate::compile`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct TransformedDocument {
    /// Source filename, including extension.
    pub filename: String,
    /// One path per heading, in document order.
    pub headers: Vec<HeaderPath>,
    /// Occurrences of resolved links, keyed by URL.
    pub links: TargetIndex,
    /// References whose identifier has no definition, keyed by identifier.
    pub orphans: TargetIndex,
}

impl TransformedDocument {
    /// Occurrences of links pointing at `url` (a leading `./` is ignored).
    pub fn links_to(&self, url: &str) -> &[AggregatedEntry] {
        self.links.get(url)
    }

    /// Identifiers of references that never resolved.
    pub fn orphan_identifiers(&self) -> impl Iterator<Item = &str> {
        self.orphans.keys()
    }

    /// Heading outline: one ancestry path per heading.
    pub fn outline(&self) -> &[HeaderPath] {
        &self.headers
    }

    /// Filename with its final extension removed.
    pub fn stem(&self) -> &str {
        file_stem(&self.filename)
    }
}

/// Final path component of `filename` with the last extension removed.
pub(crate) fn file_stem(filename: &str) -> &str {
    let name = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(dot) => &name[..dot],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_directory_and_last_extension() {
        assert_eq!(file_stem("foo.md"), "foo");
        assert_eq!(file_stem("notes/foo.md"), "foo");
        assert_eq!(file_stem("archive.tar.gz"), "archive.tar");
        assert_eq!(file_stem("README"), "README");
        assert_eq!(file_stem(".hidden"), ".hidden");
    }

    #[test]
    fn links_to_normalizes_lookup_key() {
        let mut doc = TransformedDocument::default();
        doc.links.insert("page.md", ["Page"], HeaderPath::default());
        assert_eq!(doc.links_to("./page.md").len(), 1);
        assert!(doc.links_to("other.md").is_empty());
    }
}
