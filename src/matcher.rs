//! Ignore-set assembly and the per-entry ignore decision.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::path::Path;

/// Collects ignore patterns from every source before traversal starts.
#[derive(Debug, Default, Clone)]
pub struct IgnoreSetBuilder {
    patterns: BTreeSet<String>,
}

impl IgnoreSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pattern. Empty patterns are dropped; duplicates collapse.
    pub fn add(&mut self, pattern: impl Into<String>) -> &mut Self {
        let pattern = pattern.into();
        if !pattern.is_empty() {
            self.patterns.insert(pattern);
        }
        self
    }

    pub fn extend<I, S>(&mut self, patterns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for p in patterns {
            self.add(p);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compile the collected patterns. Patterns that are not valid globs
    /// are reported and kept for exact-name matching only.
    pub fn build(&self) -> IgnoreSet {
        let mut builder = GlobSetBuilder::new();
        let mut invalid = Vec::new();
        for pattern in &self.patterns {
            // fnmatch-style: `*` crosses `/`, backslash is a literal.
            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .backslash_escape(false)
                .build();
            match glob {
                Ok(g) => {
                    builder.add(g);
                }
                Err(_) => invalid.push(pattern.as_str()),
            }
        }
        if !invalid.is_empty() {
            tracing::warn!(
                patterns = ?invalid,
                "invalid glob pattern(s), matched by exact name only"
            );
        }
        let globs = builder.build().unwrap_or_else(|e| {
            tracing::warn!("failed to build ignore set: {e}");
            GlobSet::empty()
        });
        IgnoreSet {
            patterns: self.patterns.clone(),
            globs,
        }
    }
}

/// Immutable, compiled set of ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: BTreeSet<String>,
    globs: GlobSet,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl IgnoreSet {
    pub fn empty() -> Self {
        Self {
            patterns: BTreeSet::new(),
            globs: GlobSet::empty(),
        }
    }

    /// Shorthand for building a set straight from a list of patterns.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IgnoreSetBuilder::new().extend(patterns).build()
    }

    pub fn patterns(&self) -> &BTreeSet<String> {
        &self.patterns
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains(pattern)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any pattern matches the bare name as a glob, equals it
    /// exactly, or matches the full path as a glob.
    pub fn is_match(&self, name: &str, full_path: &Path) -> bool {
        self.globs.is_match(name) || self.patterns.contains(name) || self.globs.is_match(full_path)
    }
}

/// Decide whether an entry is left out of the tree. Hidden entries go first,
/// before any pattern is consulted.
pub fn should_ignore(
    name: &str,
    full_path: &Path,
    is_hidden: bool,
    rules: &IgnoreSet,
    show_hidden: bool,
) -> bool {
    if !show_hidden && is_hidden {
        return true;
    }
    rules.is_match(name, full_path)
}
