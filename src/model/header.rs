//! Heading ancestry tracking.
//!
//! As the walker moves through a document it threads a [`HeaderStack`]
//! forward: each heading closes every open section at or below its own depth
//! and then opens its own. The texts of the open sections form the
//! [`HeaderPath`] attached to links found at that point.

/// One open section on the heading stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFrame {
    /// Heading depth as written in the source (1-6 for Markdown).
    pub depth: u8,
    /// Rendered heading text.
    pub text: String,
}

/// Stack of open sections, outermost first.
///
/// Depths strictly increase from bottom to top, though not necessarily by one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderStack {
    frames: Vec<HeaderFrame>,
}

impl HeaderStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stack that results from encountering a heading.
    ///
    /// Pops every frame whose depth is `>= depth` (siblings and their
    /// descendants), then pushes the new frame. `self` is left untouched.
    pub fn advance(&self, depth: u8, text: impl Into<String>) -> HeaderStack {
        let keep = self
            .frames
            .iter()
            .position(|frame| frame.depth >= depth)
            .unwrap_or(self.frames.len());

        let mut frames = Vec::with_capacity(keep + 1);
        frames.extend_from_slice(&self.frames[..keep]);
        frames.push(HeaderFrame {
            depth,
            text: text.into(),
        });
        HeaderStack { frames }
    }

    /// Open frames, outermost first.
    pub fn frames(&self) -> &[HeaderFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the open section texts.
    pub fn path(&self) -> HeaderPath {
        HeaderPath(self.frames.iter().map(|f| f.text.clone()).collect())
    }
}

/// Ancestor heading texts active at a point in the document, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct HeaderPath(pub Vec<String>);

impl HeaderPath {
    pub fn new(segments: Vec<String>) -> Self {
        HeaderPath(segments)
    }

    /// Outermost heading text, if any heading is open.
    pub fn root(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this path with the root segment replaced (or inserted, when
    /// the path is empty).
    pub fn with_root(&self, root: &str) -> HeaderPath {
        let mut segments = self.0.clone();
        match segments.first_mut() {
            Some(first) => *first = root.to_string(),
            None => segments.push(root.to_string()),
        }
        HeaderPath(segments)
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        HeaderPath(iter.into_iter().map(Into::into).collect())
    }
}
