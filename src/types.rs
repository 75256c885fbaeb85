use std::fmt;

use serde::{Deserialize, Serialize};

/// Section of the public suffix list a suffix belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixKind {
    /// ICANN-delegated suffix (e.g. "com", "co.uk")
    Icann,
    /// Suffix contributed by an organization for its own namespace (e.g. "github.io")
    Private,
}

impl SuffixKind {
    /// Check if this is a private suffix
    pub fn is_private(&self) -> bool {
        matches!(self, SuffixKind::Private)
    }
}

/// Structural parts of a domain name.
///
/// When `suffix` is empty the whole normalized input is carried in `domain`
/// (IP literals, bare suffixes, single labels).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDomain {
    /// Labels left of the registrable domain, joined by dots
    pub subdomain: String,
    /// Registrable label, or the whole input when no split applies
    pub domain: String,
    /// Matched public suffix
    pub suffix: String,
    /// Whether the matched suffix is a private suffix
    pub is_private: bool,
}

impl ParsedDomain {
    /// Result for input that is not split into parts
    pub(crate) fn opaque(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Check if a suffix was found (known or fallback)
    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// Registrable domain, e.g. "bbc.co.uk" for "forums.bbc.co.uk".
    ///
    /// Returns `None` when the input was not split.
    pub fn registrable_domain(&self) -> Option<String> {
        if self.has_suffix() {
            Some(format!("{}.{}", self.domain, self.suffix))
        } else {
            None
        }
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for ParsedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.subdomain.is_empty() {
            write!(f, "{}.", self.subdomain)?;
        }
        f.write_str(&self.domain)?;
        if !self.suffix.is_empty() {
            write!(f, ".{}", self.suffix)?;
        }
        Ok(())
    }
}
