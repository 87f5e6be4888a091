//! Public suffix list.
//!
//! Suffix entries come in three categories, following the Mozilla public
//! suffix list rules:
//! - `Exact` (`com`, `co.uk`) - the entry itself is a public suffix
//! - `Under` (`*.kawasaki.jp`) - every name directly beneath the entry is a public suffix
//! - `Excluded` (`!city.kawasaki.jp`) - exceptions to an `Under` rule
//!
//! Domain matching sees a single flattened set: exact entries first, then
//! under entries, then excluded entries, each stored without its `*.`/`!` marker.
//!
//! ## Example
//!
//! ```
//! use domain_helpers::suffix::{SuffixCategory, SuffixList};
//!
//! let list = SuffixList::parse("com\n*.kawasaki.jp\n!city.kawasaki.jp\n").unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.category("kawasaki.jp"), Some(SuffixCategory::Under));
//! assert!(list.contains("CITY.kawasaki.jp"));
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{HelperError, Result};

/// Suffix list shipped with the crate, in public suffix list text format.
const EMBEDDED_LIST: &str = include_str!("../../data/public_suffix.dat");

/// A single suffix entry: lowercase punycode labels separated by dots.
static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9_](?:[a-z0-9_-]*[a-z0-9_])?(?:\.[a-z0-9_](?:[a-z0-9_-]*[a-z0-9_])?)*$")
        .expect("ENTRY_PATTERN: hardcoded regex is invalid")
});

static GLOBAL: Lazy<SuffixList> = Lazy::new(|| {
    SuffixList::parse(EMBEDDED_LIST).expect("embedded public suffix list is invalid")
});

/// Category a suffix entry was declared in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixCategory {
    /// Literal public suffix
    Exact,
    /// Wildcard rule: one extra label beneath the entry is also public
    Under,
    /// Exception overriding a wildcard rule
    Excluded,
}

/// Immutable public suffix table
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    /// Flattened entries in category order (exact, under, excluded)
    entries: Vec<String>,
    /// Entry -> category, for O(1) lookups during the label walk
    categories: HashMap<String, SuffixCategory>,
}

impl SuffixList {
    /// Build a suffix list from its three partitions.
    ///
    /// Entries are lowercased, and any `*.`/`!` markers are stripped. An entry
    /// that appears more than once keeps the category it was first seen in.
    pub fn new(exact: &[String], under: &[String], excluded: &[String]) -> Self {
        let capacity = exact.len() + under.len() + excluded.len();
        let mut list = Self {
            entries: Vec::with_capacity(capacity),
            categories: HashMap::with_capacity(capacity),
        };

        let partitions = [
            (exact, SuffixCategory::Exact),
            (under, SuffixCategory::Under),
            (excluded, SuffixCategory::Excluded),
        ];
        for (entries, category) in partitions {
            for entry in entries {
                list.insert(strip_marker(&entry.to_ascii_lowercase()), category);
            }
        }

        list
    }

    fn insert(&mut self, entry: &str, category: SuffixCategory) {
        if entry.is_empty() || self.categories.contains_key(entry) {
            return;
        }
        self.categories.insert(entry.to_string(), category);
        self.entries.push(entry.to_string());
    }

    /// Parse a suffix list in public suffix list text format.
    ///
    /// Lines starting with `//` are comments; only the first whitespace
    /// delimited token of a line is read. `*.` marks an `Under` rule and `!`
    /// an `Excluded` rule.
    pub fn parse(text: &str) -> Result<Self> {
        let mut exact = Vec::new();
        let mut under = Vec::new();
        let mut excluded = Vec::new();

        for (line_num, line) in text.lines().enumerate() {
            let line_num = line_num + 1; // 1-based line numbers

            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let token = match line.split_whitespace().next() {
                Some(token) => token.to_ascii_lowercase(),
                None => continue,
            };

            let (name, bucket) = if let Some(name) = token.strip_prefix("*.") {
                (name, &mut under)
            } else if let Some(name) = token.strip_prefix('!') {
                (name, &mut excluded)
            } else {
                (token.as_str(), &mut exact)
            };

            if !ENTRY_PATTERN.is_match(name) {
                return Err(HelperError::InvalidSuffixEntry {
                    line: line_num,
                    message: format!("'{}' is not a valid suffix", token),
                });
            }
            bucket.push(name.to_string());
        }

        let list = Self::new(&exact, &under, &excluded);
        log::debug!(
            "built suffix list: {} entries ({} exact, {} under, {} excluded)",
            list.len(),
            list.count(SuffixCategory::Exact),
            list.count(SuffixCategory::Under),
            list.count(SuffixCategory::Excluded)
        );
        Ok(list)
    }

    /// Read and parse a suffix list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        log::debug!("loading suffix list from {}", path.display());
        Self::parse(&text)
    }

    /// The process-wide suffix list built from the embedded data.
    ///
    /// Built on first access; concurrent first callers block until the single
    /// build completes and all observe the same instance.
    pub fn global() -> &'static SuffixList {
        &GLOBAL
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `suffix` is an entry of any category (case-insensitive).
    pub fn contains(&self, suffix: &str) -> bool {
        self.category(suffix).is_some()
    }

    /// Category of an entry, if present (case-insensitive).
    pub fn category(&self, suffix: &str) -> Option<SuffixCategory> {
        self.categories
            .get(suffix.to_ascii_lowercase().as_str())
            .copied()
    }

    /// Lookup for an already lowercased name.
    pub(crate) fn contains_lowered(&self, suffix: &str) -> bool {
        self.categories.contains_key(suffix)
    }

    /// Number of entries in a category.
    pub fn count(&self, category: SuffixCategory) -> usize {
        self.categories.values().filter(|c| **c == category).count()
    }

    /// Flattened entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

fn strip_marker(entry: &str) -> &str {
    entry
        .strip_prefix("*.")
        .or_else(|| entry.strip_prefix('!'))
        .unwrap_or(entry)
}
