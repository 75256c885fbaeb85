//! Reader for the Public Suffix List text format.
//!
//! ```text
//! // ===BEGIN ICANN DOMAINS===
//! com
//! co.uk
//! // ===END ICANN DOMAINS===
//! // ===BEGIN PRIVATE DOMAINS===
//! github.io
//! // ===END PRIVATE DOMAINS===
//! ```
//!
//! Only literal rules are loaded. Wildcard (`*.ck`) and exception
//! (`!www.ck`) rules are skipped.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::set::{SuffixSet, SuffixSetBuilder};
use crate::error::{ListErrorKind, ParserError, Result};
use crate::types::SuffixKind;

/// Section marker comment, e.g. `// ===BEGIN PRIVATE DOMAINS===`
static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^//\s*===(BEGIN|END) (ICANN|PRIVATE) DOMAINS===\s*$")
        .expect("SECTION_PATTERN: hardcoded regex is invalid")
});

/// Options for loading a suffix list
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Load entries from the PRIVATE section
    pub include_private: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            include_private: true,
        }
    }
}

impl ListOptions {
    /// Create default list options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include or drop the PRIVATE section.
    pub fn with_private_domains(mut self, include: bool) -> Self {
        self.include_private = include;
        self
    }
}

/// A parsed section marker
enum Marker {
    Begin(SuffixKind),
    End(SuffixKind),
}

fn parse_marker(line: &str) -> Option<Marker> {
    let captures = SECTION_PATTERN.captures(line)?;
    let kind = match &captures[2] {
        "PRIVATE" => SuffixKind::Private,
        _ => SuffixKind::Icann,
    };
    match &captures[1] {
        "BEGIN" => Some(Marker::Begin(kind)),
        _ => Some(Marker::End(kind)),
    }
}

fn section_name(kind: SuffixKind) -> &'static str {
    match kind {
        SuffixKind::Icann => "ICANN",
        SuffixKind::Private => "PRIVATE",
    }
}

/// Parse a suffix list from text.
pub fn parse_list(text: &str, options: &ListOptions) -> Result<SuffixSet> {
    let mut builder = SuffixSetBuilder::default();
    let mut section: Option<(SuffixKind, usize)> = None;
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with("//") {
            match parse_marker(line) {
                Some(Marker::Begin(kind)) => {
                    if let Some((open, open_line)) = section {
                        return Err(section_error(
                            line_num,
                            format!(
                                "BEGIN {} inside {} section opened at line {}",
                                section_name(kind),
                                section_name(open),
                                open_line
                            ),
                        ));
                    }
                    section = Some((kind, line_num));
                }
                Some(Marker::End(kind)) => match section {
                    Some((open, _)) if open == kind => section = None,
                    Some((open, open_line)) => {
                        return Err(section_error(
                            line_num,
                            format!(
                                "END {} closes {} section opened at line {}",
                                section_name(kind),
                                section_name(open),
                                open_line
                            ),
                        ));
                    }
                    None => {
                        return Err(section_error(
                            line_num,
                            format!("END {} without BEGIN", section_name(kind)),
                        ));
                    }
                },
                None => {}
            }
            continue;
        }

        // Rules end at the first whitespace
        let rule = line.split_whitespace().next().unwrap_or(line);

        if rule.starts_with('!') || rule.contains('*') {
            debug!(line = line_num, rule, "skipping wildcard/exception rule");
            skipped += 1;
            continue;
        }

        let kind = section.map(|(kind, _)| kind).unwrap_or(SuffixKind::Icann);
        if kind.is_private() && !options.include_private {
            continue;
        }

        builder.insert(rule, kind);
    }

    if let Some((open, open_line)) = section {
        return Err(ParserError::ListError {
            kind: ListErrorKind::InvalidSection,
            message: format!(
                "{} section opened at line {} is never closed",
                section_name(open),
                open_line
            ),
        });
    }

    let set = builder.build();
    debug!(suffixes = set.len(), skipped, "loaded suffix list");
    Ok(set)
}

/// Load a suffix list from a local file.
pub fn load_list_file(path: impl AsRef<Path>, options: &ListOptions) -> Result<SuffixSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ParserError::ListError {
        kind: ListErrorKind::FileError,
        message: format!("Failed to read list file '{}': {}", path.display(), e),
    })?;
    parse_list(&text, options)
}

fn section_error(line: usize, message: String) -> ParserError {
    ParserError::ListErrorAtLine {
        kind: ListErrorKind::InvalidSection,
        line,
        message,
    }
}
