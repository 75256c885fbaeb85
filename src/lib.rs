//! Domain Parser - split domain names into their structural parts
//!
//! This library parses a host name into:
//! - Subdomain (`forums` in `forums.bbc.co.uk`)
//! - Registrable domain label (`bbc`)
//! - Public suffix (`co.uk`)
//! - Whether the suffix is a private suffix (`github.io`)
//!
//! Suffixes are matched against a public suffix registry. A built-in list is
//! embedded in the crate; custom registries can be built from Public Suffix
//! List files or in code.
//!
//! # Example
//!
//! ```rust
//! use domain_parser::parse;
//!
//! let parsed = parse("forums.bbc.co.uk").unwrap();
//! assert_eq!(parsed.subdomain, "forums");
//! assert_eq!(parsed.domain, "bbc");
//! assert_eq!(parsed.suffix, "co.uk");
//! assert!(!parsed.is_private);
//!
//! let parsed = parse("my-project.github.io").unwrap();
//! assert!(parsed.is_private);
//!
//! assert!(parse("").is_none());
//! ```
//!
//! # Parse Rules
//!
//! | Input | Subdomain | Domain | Suffix |
//! |-------|-----------|--------|--------|
//! | `www.google.com` | `www` | `google` | `com` |
//! | `forums.bbc.co.uk` | `forums` | `bbc` | `co.uk` |
//! | `co.uk` | | `co.uk` | |
//! | `192.168.1.1` | | `192.168.1.1` | |
//! | `localhost` | | `localhost` | |
//! | `foo.unknowntld` | | `foo` | `unknowntld` |
//!
//! Only literal list entries are supported; wildcard and exception rules
//! are ignored.
//!
//! # Custom Registries
//!
//! ```rust
//! use domain_parser::{parse_with, SuffixSet};
//!
//! let registry = SuffixSet::builder()
//!     .with_icann(["com", "internal"])
//!     .with_private(["apps.internal"])
//!     .build();
//!
//! let parsed = parse_with("billing.apps.internal", &registry).unwrap();
//! assert_eq!(parsed.domain, "billing");
//! assert!(parsed.is_private);
//! ```

pub mod cache;
pub mod error;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedParser, DEFAULT_CACHE_SIZE};
pub use error::{ListErrorKind, ParserError, Result};
pub use parser::{parse, parse_with};
pub use registry::{
    builtin, load_list_file, parse_list, ListOptions, NilRegistry, SuffixRegistry, SuffixSet,
    SuffixSetBuilder,
};
pub use types::{ParsedDomain, SuffixKind};
