use std::net::IpAddr;

use tracing::trace;

use crate::registry::{self, SuffixRegistry};
use crate::types::ParsedDomain;

/// Lowercase one character at a time.
///
/// Each character maps to exactly one character: `İ` becomes `i` without a
/// combining dot, and `Σ` is always `σ` regardless of its position.
pub(crate) fn simple_lowercase(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Parse a domain against the built-in suffix registry.
///
/// Returns `None` for empty input. Every other input produces a result.
pub fn parse<T: AsRef<str>>(domain: T) -> Option<ParsedDomain> {
    parse_with(domain, registry::builtin())
}

/// Parse a domain against the given suffix registry.
///
/// The input is lowercased, then split into labels on `.`. The longest
/// dot-joined tail of the labels known to the registry becomes the suffix,
/// the label before it the domain, and the rest the subdomain. IP literals,
/// single labels and bare suffixes are returned whole in `domain`. When no
/// suffix is known, the last label is taken as the suffix.
pub fn parse_with<T, R>(domain: T, registry: &R) -> Option<ParsedDomain>
where
    T: AsRef<str>,
    R: SuffixRegistry + ?Sized,
{
    let domain = domain.as_ref();
    if domain.is_empty() {
        return None;
    }

    let normalized = simple_lowercase(domain);

    // IP literals are never suffix-matched
    if normalized.parse::<IpAddr>().is_ok() {
        trace!(domain = %normalized, "ip literal");
        return Some(ParsedDomain::opaque(normalized));
    }

    let labels: Vec<&str> = normalized.split('.').collect();

    // Scanning from the left tries the longest candidate first
    let matched = (0..labels.len()).find_map(|i| {
        let candidate = labels[i..].join(".");
        registry.is_known_suffix(&candidate).then_some((i, candidate))
    });

    let Some((split, suffix)) = matched else {
        if labels.len() < 2 {
            return Some(ParsedDomain::opaque(normalized));
        }
        let last = labels.len() - 1;
        trace!(domain = %normalized, "no known suffix, using last label");
        return Some(ParsedDomain {
            subdomain: labels[..last - 1].join("."),
            domain: labels[last - 1].to_string(),
            suffix: labels[last].to_string(),
            is_private: false,
        });
    };

    // The whole input is itself a suffix, e.g. "co.uk"
    if split == 0 {
        return Some(ParsedDomain::opaque(normalized));
    }

    let domain_index = split - 1;
    let is_private = registry.is_private_suffix(&suffix);
    trace!(domain = %normalized, suffix = %suffix, is_private, "matched suffix");

    Some(ParsedDomain {
        subdomain: labels[..domain_index].join("."),
        domain: labels[domain_index].to_string(),
        suffix,
        is_private,
    })
}
