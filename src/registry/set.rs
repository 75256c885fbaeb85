//! Hash-backed suffix registry.
//!
//! One map lookup per candidate suffix; the value records which list section
//! the suffix came from.

use std::collections::HashMap;

use super::SuffixRegistry;
use crate::parser::simple_lowercase;
use crate::types::SuffixKind;

/// Set of known public suffixes
#[derive(Debug, Clone, Default)]
pub struct SuffixSet {
    /// suffix -> section it was listed in
    suffixes: HashMap<String, SuffixKind>,
}

impl SuffixSet {
    /// Create a suffix set from ICANN and private suffix lists.
    ///
    /// Entries are lowercased and a single leading dot is dropped. A suffix
    /// listed in both sections keeps the ICANN kind. Empty entries are ignored.
    pub fn new(icann: &[String], private: &[String]) -> Self {
        let mut builder = SuffixSetBuilder::with_capacity(icann.len() + private.len());
        for suffix in icann {
            builder.insert(suffix, SuffixKind::Icann);
        }
        for suffix in private {
            builder.insert(suffix, SuffixKind::Private);
        }
        builder.build()
    }

    /// Start building a suffix set
    pub fn builder() -> SuffixSetBuilder {
        SuffixSetBuilder::default()
    }

    /// Section the suffix was listed in.
    /// Assumes `suffix` is already lowercased.
    pub fn kind(&self, suffix: &str) -> Option<SuffixKind> {
        self.suffixes.get(suffix).copied()
    }

    /// Number of known suffixes
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Iterate over all suffixes and their kinds, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, SuffixKind)> {
        self.suffixes.iter().map(|(s, k)| (s.as_str(), *k))
    }
}

impl SuffixRegistry for SuffixSet {
    fn is_known_suffix(&self, suffix: &str) -> bool {
        self.suffixes.contains_key(suffix)
    }

    fn is_private_suffix(&self, suffix: &str) -> bool {
        self.kind(suffix).is_some_and(|k| k.is_private())
    }
}

/// Incremental builder for [`SuffixSet`]
#[derive(Debug, Default)]
pub struct SuffixSetBuilder {
    suffixes: HashMap<String, SuffixKind>,
}

impl SuffixSetBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            suffixes: HashMap::with_capacity(capacity),
        }
    }

    /// Add ICANN suffixes
    pub fn with_icann<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for suffix in suffixes {
            self.insert(suffix.as_ref(), SuffixKind::Icann);
        }
        self
    }

    /// Add private suffixes
    pub fn with_private<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for suffix in suffixes {
            self.insert(suffix.as_ref(), SuffixKind::Private);
        }
        self
    }

    /// Insert a single suffix. Returns false if it was already present
    /// (the existing kind is kept) or the entry is empty.
    pub fn insert(&mut self, suffix: &str, kind: SuffixKind) -> bool {
        let lower = simple_lowercase(suffix);
        let lower = lower.strip_prefix('.').unwrap_or(&lower);
        if lower.is_empty() || self.suffixes.contains_key(lower) {
            return false;
        }
        self.suffixes.insert(lower.to_string(), kind);
        true
    }

    /// Finish building
    pub fn build(self) -> SuffixSet {
        SuffixSet {
            suffixes: self.suffixes,
        }
    }
}
