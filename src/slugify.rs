//! Canonical names for heading text.
//!
//! Root-heading reconciliation compares a document's top heading against its
//! filename through a [`Canonicalize`] implementation supplied by the host.
//! [`slugify`] is the default: GitHub-style slugs, the same scheme wiki
//! filenames are usually derived with.

/// Derives a filesystem-safe name from arbitrary heading text.
pub trait Canonicalize {
    fn canonicalize(&self, text: &str) -> String;
}

impl<F> Canonicalize for F
where
    F: Fn(&str) -> String,
{
    fn canonicalize(&self, text: &str) -> String {
        self(text)
    }
}

/// Generate a GitHub-style slug from text.
///
/// Converts text to lowercase, replaces spaces and separators with hyphens,
/// drops other punctuation, and removes consecutive/leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use wikimeta::slugify;
///
/// assert_eq!(slugify("Chapter One"), "chapter-one");
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
