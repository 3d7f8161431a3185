//! Error types for parsing, configuration and line processing

use std::path::PathBuf;
use thiserror::Error;

/// Configuration failures, raised before any input line is processed
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Known-verbs file could not be read
    #[error("failed to read known-verbs file {path}: {source}")]
    KnownVerbs {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Settings file could not be read
    #[error("failed to read settings file {path}: {source}")]
    SettingsRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Settings file is not valid TOML for the expected schema
    #[error("invalid settings file {path}: {reason}")]
    SettingsFormat {
        /// Path that was parsed
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A label supplied for the ignore-set is unusable
    #[error("invalid ignore label {0:?}")]
    InvalidLabel(String),
}

/// What went wrong while decoding one field of an annotated line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An entity was opened while another one was still open
    #[error("entity <{inner}> opened inside unclosed entity <{outer}>")]
    NestedEntity {
        /// Label of the entity that is still open
        outer: String,
        /// Label of the entity being opened
        inner: String,
    },

    /// A close tag appeared with no entity open
    #[error("closing tag </{label}> without a matching opening tag")]
    UnexpectedClose {
        /// Label named by the close tag
        label: String,
    },

    /// A close tag names a different label than the open entity
    #[error("closing tag </{found}> does not match open entity <{expected}>")]
    MismatchedClose {
        /// Label of the open entity
        expected: String,
        /// Label named by the close tag
        found: String,
    },

    /// The line ended while an entity was still open
    #[error("entity <{label}> is never closed")]
    UnclosedEntity {
        /// Label of the entity left open
        label: String,
    },

    /// A field carries annotation but no word text
    #[error("field has no word text")]
    EmptyWord,

    /// Text follows a close tag inside the same field
    #[error("unexpected text after closing tag")]
    TrailingText,

    /// A slash-tagged field has no label part
    #[error("field has no /LABEL suffix")]
    MissingLabel,
}

/// A line could not be decoded into (word, label) pairs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("field {field_index} ({field:?}): {kind}")]
pub struct ParseError {
    /// 1-based position of the offending field within the line
    pub field_index: usize,
    /// The offending field, verbatim
    pub field: String,
    /// Reason the field was rejected
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Create a parse error for the given field
    pub fn new(field_index: usize, field: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            field_index,
            field: field.into(),
            kind,
        }
    }
}

/// Errors surfaced while streaming lines through the pipeline
#[derive(Error, Debug)]
pub enum FusionError {
    /// A line could not be parsed
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number in the input stream
        line: usize,
        /// The parse failure
        source: ParseError,
    },

    /// A line is not valid UTF-8
    #[error("line {line}: {source}")]
    Decode {
        /// 1-based line number in the input stream
        line: usize,
        /// The decoding failure
        source: std::str::Utf8Error,
    },

    /// Reading the input stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FusionError {
    /// Line number of the failure, if it is tied to a line
    pub fn line(&self) -> Option<usize> {
        match self {
            FusionError::Parse { line, .. } | FusionError::Decode { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, FusionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(
            3,
            "Bob</ORGANIZATION>",
            ParseErrorKind::MismatchedClose {
                expected: "PERSON".to_string(),
                found: "ORGANIZATION".to_string(),
            },
        );
        assert_eq!(
            error.to_string(),
            "field 3 (\"Bob</ORGANIZATION>\"): closing tag </ORGANIZATION> does not match open entity <PERSON>"
        );
    }

    #[test]
    fn test_fusion_error_carries_line() {
        let error = FusionError::Parse {
            line: 7,
            source: ParseError::new(
                1,
                "<PERSON>Bob",
                ParseErrorKind::UnclosedEntity {
                    label: "PERSON".to_string(),
                },
            ),
        };
        assert_eq!(error.line(), Some(7));
        assert!(error.to_string().starts_with("line 7: field 1"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidLabel("  ".to_string());
        assert_eq!(error.to_string(), "invalid ignore label \"  \"");

        let io = FusionError::from(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "eof",
        ));
        assert_eq!(io.line(), None);
        assert!(io.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_decode_error_carries_line() {
        let source = std::str::from_utf8(b"bad \xff").unwrap_err();
        let error = FusionError::Decode { line: 2, source };
        assert_eq!(error.line(), Some(2));
        assert!(error.to_string().starts_with("line 2: invalid utf-8"));
    }
}
