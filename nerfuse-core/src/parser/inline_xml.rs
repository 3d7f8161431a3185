//! Stanford NER `inlineXML` output
//!
//! ```text
//! This is a <ORGANIZATION>US Dept of Defense</ORGANIZATION> example .
//! ```
//!
//! The open tag is glued to the first word of an entity and the close tag to
//! its last word. Every word in between carries the entity's label.

use super::LineParser;
use crate::error::{ParseError, ParseErrorKind};
use crate::types::TaggedToken;
use regex::Regex;
use std::sync::OnceLock;

static OPEN_TAG: OnceLock<Regex> = OnceLock::new();
static CLOSE_TAG: OnceLock<Regex> = OnceLock::new();

fn open_tag() -> &'static Regex {
    OPEN_TAG.get_or_init(|| {
        Regex::new(r"^<([A-Za-z][A-Za-z0-9_-]*)>").expect("open tag pattern is valid")
    })
}

fn close_tag() -> &'static Regex {
    CLOSE_TAG.get_or_init(|| {
        Regex::new(r"</([A-Za-z][A-Za-z0-9_-]*)>").expect("close tag pattern is valid")
    })
}

/// Parser for inline XML entity tags
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineXmlParser;

impl InlineXmlParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }
}

/// Entity that has been opened but not yet closed
struct OpenEntity {
    label: String,
    field_index: usize,
    field: String,
}

impl LineParser for InlineXmlParser {
    fn parse_line(&self, line: &str) -> Result<Vec<TaggedToken>, ParseError> {
        let mut tokens = Vec::new();
        let mut open: Option<OpenEntity> = None;

        for (i, field) in line.split_ascii_whitespace().enumerate() {
            let field_index = i + 1;
            let fail = |kind| ParseError::new(field_index, field, kind);
            let mut rest = field;

            if let Some(caps) = open_tag().captures(rest) {
                let label = caps[1].to_string();
                if let Some(outer) = &open {
                    return Err(fail(ParseErrorKind::NestedEntity {
                        outer: outer.label.clone(),
                        inner: label,
                    }));
                }
                rest = &rest[caps[0].len()..];
                open = Some(OpenEntity {
                    label,
                    field_index,
                    field: field.to_string(),
                });
            }

            match close_tag().captures(rest) {
                Some(caps) => {
                    let whole = caps.get(0).expect("group 0 always matches");
                    if whole.end() != rest.len() {
                        return Err(fail(ParseErrorKind::TrailingText));
                    }
                    let found = &caps[1];
                    let entity = match open.take() {
                        Some(entity) => entity,
                        None => {
                            return Err(fail(ParseErrorKind::UnexpectedClose {
                                label: found.to_string(),
                            }))
                        }
                    };
                    if entity.label != found {
                        return Err(fail(ParseErrorKind::MismatchedClose {
                            expected: entity.label,
                            found: found.to_string(),
                        }));
                    }
                    let word = &rest[..whole.start()];
                    if word.is_empty() {
                        return Err(fail(ParseErrorKind::EmptyWord));
                    }
                    tokens.push(TaggedToken::labeled(word, entity.label));
                }
                None => {
                    if rest.is_empty() {
                        return Err(fail(ParseErrorKind::EmptyWord));
                    }
                    let label = open.as_ref().map(|entity| entity.label.clone());
                    tokens.push(TaggedToken {
                        word: rest.to_string(),
                        label,
                    });
                }
            }
        }

        if let Some(entity) = open {
            return Err(ParseError::new(
                entity.field_index,
                entity.field,
                ParseErrorKind::UnclosedEntity {
                    label: entity.label,
                },
            ));
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "inline-xml"
    }
}
