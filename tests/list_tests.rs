//! Integration tests for loading suffix lists from files.

use std::fs;
use std::path::PathBuf;

use domain_parser::{
    builtin, load_list_file, parse_list, parse_with, ListErrorKind, ListOptions, ParserError,
    SuffixKind, SuffixRegistry,
};

const LIST: &str = "\
// ===BEGIN ICANN DOMAINS===
com
net
uk
co.uk
jp
*.kawasaki.jp
!city.kawasaki.jp
// ===END ICANN DOMAINS===

// ===BEGIN PRIVATE DOMAINS===
// Example hosting
pages.example.net
// ===END PRIVATE DOMAINS===
";

fn write_temp_list(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("domain_parser_list_tests");
    let _ = fs::create_dir_all(&dir);
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

mod file_loading_tests {
    use super::*;

    #[test]
    fn test_load_and_parse() {
        let path = write_temp_list("load_and_parse.dat", LIST);
        let registry = load_list_file(&path, &ListOptions::default()).unwrap();

        assert_eq!(registry.len(), 6);
        assert_eq!(registry.kind("pages.example.net"), Some(SuffixKind::Private));

        let parsed = parse_with("docs.team.pages.example.net", &registry).unwrap();
        assert_eq!(parsed.subdomain, "docs");
        assert_eq!(parsed.domain, "team");
        assert_eq!(parsed.suffix, "pages.example.net");
        assert!(parsed.is_private);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_without_private_section() {
        let path = write_temp_list("no_private.dat", LIST);
        let options = ListOptions::new().with_private_domains(false);
        let registry = load_list_file(&path, &options).unwrap();

        assert!(!registry.is_known_suffix("pages.example.net"));

        // Falls back to the ICANN "net" entry
        let parsed = parse_with("team.pages.example.net", &registry).unwrap();
        assert_eq!(parsed.subdomain, "team.pages");
        assert_eq!(parsed.domain, "example");
        assert_eq!(parsed.suffix, "net");
        assert!(!parsed.is_private);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_wildcard_and_exception_ignored() {
        let path = write_temp_list("wildcards.dat", LIST);
        let registry = load_list_file(&path, &ListOptions::default()).unwrap();

        let parsed = parse_with("www.city.kawasaki.jp", &registry).unwrap();
        assert_eq!(parsed.subdomain, "www.city");
        assert_eq!(parsed.domain, "kawasaki");
        assert_eq!(parsed.suffix, "jp");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let result = load_list_file(
            "/nonexistent/path/public_suffix_list.dat",
            &ListOptions::default(),
        );
        match result {
            Err(err) => assert_eq!(err.kind(), ListErrorKind::FileError),
            Ok(_) => panic!("expected an error for a missing file"),
        }
    }

    #[test]
    fn test_malformed_file_reports_line() {
        let path = write_temp_list(
            "malformed.dat",
            "com\n// ===BEGIN ICANN DOMAINS===\nnet\n// ===END PRIVATE DOMAINS===\n",
        );
        let err = load_list_file(&path, &ListOptions::default()).unwrap_err();
        match err {
            ParserError::ListErrorAtLine { kind, line, .. } => {
                assert_eq!(kind, ListErrorKind::InvalidSection);
                assert_eq!(line, 4);
            }
            other => panic!("expected ListErrorAtLine, got {:?}", other),
        }

        let _ = fs::remove_file(&path);
    }
}

mod builtin_list_tests {
    use super::*;

    #[test]
    fn test_builtin_sections() {
        let registry = builtin();
        assert_eq!(registry.kind("com"), Some(SuffixKind::Icann));
        assert_eq!(registry.kind("co.uk"), Some(SuffixKind::Icann));
        assert_eq!(registry.kind("github.io"), Some(SuffixKind::Private));
        assert_eq!(registry.kind("vercel.app"), Some(SuffixKind::Private));
    }

    #[test]
    fn test_builtin_has_no_rule_syntax() {
        for (suffix, _) in builtin().iter() {
            assert!(!suffix.is_empty());
            assert!(!suffix.contains('*'), "wildcard leaked: {}", suffix);
            assert!(!suffix.starts_with('!'), "exception leaked: {}", suffix);
            assert_eq!(suffix, suffix.to_lowercase());
        }
    }

    #[test]
    fn test_reparse_matches_builtin() {
        let text = include_str!("../data/public_suffix_list.dat");
        let registry = parse_list(text, &ListOptions::default()).unwrap();
        assert_eq!(registry.len(), builtin().len());
    }
}
