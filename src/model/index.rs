//! Per-target aggregation of link occurrences.

use indexmap::IndexMap;

use super::header::HeaderPath;

/// One link or reference occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AggregatedEntry {
    /// Distinct, trimmed, non-empty alias texts in first-seen order.
    #[cfg_attr(feature = "json", serde(rename = "text"))]
    pub aliases: Vec<String>,
    /// Heading ancestry at the occurrence.
    #[cfg_attr(feature = "json", serde(rename = "header"))]
    pub header: HeaderPath,
}

impl AggregatedEntry {
    /// Build an entry, normalizing the alias candidates.
    pub fn new<I, S>(aliases: I, header: HeaderPath) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.as_ref().trim();
            if !alias.is_empty() && !distinct.iter().any(|a| a == alias) {
                distinct.push(alias.to_string());
            }
        }
        Self {
            aliases: distinct,
            header,
        }
    }
}

/// Strip a single leading `./` from a link target.
pub fn normalize_target(target: &str) -> &str {
    target.strip_prefix("./").unwrap_or(target)
}

/// Link occurrences grouped by target, in first-insertion order of targets.
///
/// Used both for resolved links (keyed by URL) and for orphan references
/// (keyed by identifier).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(transparent))]
pub struct TargetIndex {
    entries: IndexMap<String, Vec<AggregatedEntry>>,
}

impl TargetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `target`.
    ///
    /// Every call appends a new entry; occurrences are never merged.
    pub fn insert<I, S>(&mut self, target: &str, aliases: I, header: HeaderPath)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key = normalize_target(target);
        let entry = AggregatedEntry::new(aliases, header);
        match self.entries.get_mut(key) {
            Some(list) => list.push(entry),
            None => {
                self.entries.insert(key.to_string(), vec![entry]);
            }
        }
    }

    /// Occurrences recorded for a target. The key is normalized first.
    pub fn get(&self, target: &str) -> &[AggregatedEntry] {
        self.entries
            .get(normalize_target(target))
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, target: &str) -> bool {
        self.entries.contains_key(normalize_target(target))
    }

    /// Targets in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AggregatedEntry])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Count how often each alias was used for a target across occurrences.
    pub fn alias_counts(&self, target: &str) -> IndexMap<&str, usize> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for entry in self.get(target) {
            for alias in &entry.aliases {
                *counts.entry(alias.as_str()).or_default() += 1;
            }
        }
        counts
    }

    /// Apply `f` to every entry's header path.
    pub(crate) fn map_headers(&self, mut f: impl FnMut(&HeaderPath) -> HeaderPath) -> TargetIndex {
        let entries = self
            .entries
            .iter()
            .map(|(key, list)| {
                let list = list
                    .iter()
                    .map(|entry| AggregatedEntry {
                        aliases: entry.aliases.clone(),
                        header: f(&entry.header),
                    })
                    .collect();
                (key.clone(), list)
            })
            .collect();
        TargetIndex { entries }
    }

    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all targets.
    pub fn occurrences(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}
