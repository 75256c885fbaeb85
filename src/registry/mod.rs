//! Public suffix registries.
//!
//! A registry answers two questions about an exact, lowercased suffix string:
//! is it a known public suffix, and is it a private one.
//!
//! ## Example
//!
//! ```
//! use domain_parser::registry::{SuffixRegistry, SuffixSet};
//!
//! let set = SuffixSet::builder()
//!     .with_icann(["com", "co.uk"])
//!     .with_private(["github.io"])
//!     .build();
//!
//! assert!(set.is_known_suffix("co.uk"));
//! assert!(set.is_private_suffix("github.io"));
//! assert!(!set.is_known_suffix("uk"));
//! ```

pub mod list;
mod set;

pub use list::{load_list_file, parse_list, ListOptions};
pub use set::{SuffixSet, SuffixSetBuilder};

use once_cell::sync::Lazy;
use tracing::debug;

/// Built-in list, embedded at compile time
const BUILTIN_LIST: &str = include_str!("../../data/public_suffix_list.dat");

static BUILTIN: Lazy<SuffixSet> = Lazy::new(|| {
    let set = parse_list(BUILTIN_LIST, &ListOptions::default())
        .expect("BUILTIN_LIST: embedded suffix list is malformed");
    debug!(suffixes = set.len(), "built-in suffix registry initialized");
    set
});

/// Trait for suffix lookups
pub trait SuffixRegistry: Send + Sync {
    /// Check if the exact suffix is a known public suffix
    fn is_known_suffix(&self, suffix: &str) -> bool;

    /// Check if the exact suffix is a private suffix.
    /// Only meaningful when `is_known_suffix` is true.
    fn is_private_suffix(&self, suffix: &str) -> bool;
}

impl<R: SuffixRegistry + ?Sized> SuffixRegistry for &R {
    fn is_known_suffix(&self, suffix: &str) -> bool {
        (**self).is_known_suffix(suffix)
    }

    fn is_private_suffix(&self, suffix: &str) -> bool {
        (**self).is_private_suffix(suffix)
    }
}

impl<R: SuffixRegistry + ?Sized> SuffixRegistry for std::sync::Arc<R> {
    fn is_known_suffix(&self, suffix: &str) -> bool {
        (**self).is_known_suffix(suffix)
    }

    fn is_private_suffix(&self, suffix: &str) -> bool {
        (**self).is_private_suffix(suffix)
    }
}

/// Registry that knows no suffixes
#[derive(Debug, Clone, Copy, Default)]
pub struct NilRegistry;

impl SuffixRegistry for NilRegistry {
    fn is_known_suffix(&self, _suffix: &str) -> bool {
        false
    }

    fn is_private_suffix(&self, _suffix: &str) -> bool {
        false
    }
}

/// Process-wide built-in registry, parsed once on first access
pub fn builtin() -> &'static SuffixSet {
    &BUILTIN
}
