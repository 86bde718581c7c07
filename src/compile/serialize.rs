//! Flat rendering of a transformed document.
//!
//! Each line is a hierarchical path: the token at 1-based position `i` is
//! prefixed with `i` copies of the marker, so a line's structure survives
//! line-based sorting and grepping without the surrounding tree.
//!
//! ```text
//! :Page ::Section :::alias text ::::target.md
//! ```

use crate::model::{TargetIndex, TransformedDocument};

/// Encode an ordered list of path elements as one line.
///
/// # Examples
///
/// ```
/// use wikimeta::compile::encode_path;
///
/// assert_eq!(encode_path(["A", "B", "C", "D"], ':'), ":A ::B :::C ::::D");
/// ```
pub fn encode_path<I, S>(elements: I, marker: char) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.extend(std::iter::repeat_n(marker, i + 1));
        line.push_str(element.as_ref());
    }
    line
}

/// One line per (entry, alias) pair: header path, alias, then target.
fn index_lines(index: &TargetIndex, marker: char, lines: &mut Vec<String>) {
    for (target, entries) in index.iter() {
        for entry in entries {
            for alias in &entry.aliases {
                let elements = entry
                    .header
                    .segments()
                    .iter()
                    .map(String::as_str)
                    .chain([alias.as_str(), target]);
                lines.push(encode_path(elements, marker));
            }
        }
    }
}

/// Render links, then the heading outline, then orphan references.
pub fn render_lines(doc: &TransformedDocument, marker: char) -> String {
    let mut lines = Vec::new();
    index_lines(&doc.links, marker, &mut lines);
    for path in &doc.headers {
        lines.push(encode_path(path.segments(), marker));
    }
    index_lines(&doc.orphans, marker, &mut lines);
    lines.join("\n")
}

/// Render the document as pretty-printed JSON.
#[cfg(feature = "json")]
pub fn render_json(doc: &TransformedDocument) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(doc)?)
}
