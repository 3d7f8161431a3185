//! Stanford NER `slashTags` output: `word/LABEL` per field, `O` outside entities

use super::LineParser;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::TaggedToken;

/// Label the tagger writes for words outside any entity
pub const OUTSIDE_LABEL: &str = "O";

/// Parser for slash-tagged fields
#[derive(Debug, Default, Clone, Copy)]
pub struct SlashTagsParser;

impl SlashTagsParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

impl LineParser for SlashTagsParser {
    fn parse_line(&self, line: &str) -> Result<Vec<TaggedToken>, ParseError> {
        line.split_ascii_whitespace()
            .enumerate()
            .map(|(i, field)| {
                let fail = |kind| ParseError::new(i + 1, field, kind);
                // Words may contain '/', so the label follows the last one
                let (word, label) = field
                    .rsplit_once('/')
                    .ok_or_else(|| fail(ParseErrorKind::MissingLabel))?;
                if label.is_empty() {
                    return Err(fail(ParseErrorKind::MissingLabel));
                }
                if word.is_empty() {
                    return Err(fail(ParseErrorKind::EmptyWord));
                }
                Ok(if label == OUTSIDE_LABEL {
                    TaggedToken::plain(word)
                } else {
                    TaggedToken::labeled(word, label)
                })
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "slash-tags"
    }
}
