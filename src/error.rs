use thiserror::Error;

/// Classifies suffix list loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
    /// File open/read failure
    FileError,
    /// Section markers are unbalanced or mismatched
    InvalidSection,
}

/// Domain parser error types.
///
/// Parsing a domain never fails; these only come out of building a suffix
/// registry from list data.
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("List error at line {line}: {message}")]
    ListErrorAtLine {
        kind: ListErrorKind,
        line: usize,
        message: String,
    },

    #[error("List error: {message}")]
    ListError {
        kind: ListErrorKind,
        message: String,
    },
}

impl ParserError {
    /// Error kind
    pub fn kind(&self) -> ListErrorKind {
        match self {
            ParserError::ListErrorAtLine { kind, .. } | ParserError::ListError { kind, .. } => *kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_error_kind_is_matchable() {
        let err = ParserError::ListErrorAtLine {
            kind: ListErrorKind::InvalidSection,
            line: 12,
            message: "END without BEGIN".into(),
        };
        match &err {
            ParserError::ListErrorAtLine { kind, line, .. } => {
                assert!(matches!(kind, ListErrorKind::InvalidSection));
                assert_eq!(*line, 12);
            }
            _ => panic!("expected ListErrorAtLine"),
        }
        assert_eq!(err.kind(), ListErrorKind::InvalidSection);
    }

    #[test]
    fn test_list_error_display_includes_line() {
        let err = ParserError::ListErrorAtLine {
            kind: ListErrorKind::InvalidSection,
            line: 7,
            message: "nested section".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 7"), "got: {}", display);
        assert!(display.contains("nested section"), "got: {}", display);
    }

    #[test]
    fn test_file_error_kind() {
        let err = ParserError::ListError {
            kind: ListErrorKind::FileError,
            message: "Failed to read list file".into(),
        };
        assert_eq!(err.kind(), ListErrorKind::FileError);
    }
}
