//! Decoding annotated tagger output into tagged tokens
//!
//! Each supported tagger output convention has its own [`LineParser`]
//! implementation. Parsers only turn a line into `(word, label)` pairs;
//! they know nothing about fusion.

mod inline_xml;
mod slash_tags;

pub use inline_xml::InlineXmlParser;
pub use slash_tags::SlashTagsParser;

use crate::error::ParseError;
use crate::types::TaggedToken;
use serde::Deserialize;
use std::fmt;

/// Decodes one line of annotated text into tagged tokens
pub trait LineParser: Send + Sync {
    /// Parse a line of fields separated by ASCII whitespace.
    ///
    /// Blank lines yield an empty vector. Any field that violates the
    /// annotation convention fails the whole line.
    fn parse_line(&self, line: &str) -> Result<Vec<TaggedToken>, ParseError>;

    /// Short name of the annotation convention
    fn name(&self) -> &'static str;
}

/// Annotation conventions understood by the parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputFormat {
    /// `<LABEL>first ... last</LABEL>` tags glued to words
    #[default]
    InlineXml,
    /// `word/LABEL` per field, `O` for no entity
    SlashTags,
}

impl InputFormat {
    /// All supported formats
    pub const ALL: [InputFormat; 2] = [InputFormat::InlineXml, InputFormat::SlashTags];

    /// Parser for this format
    pub fn parser(self) -> Box<dyn LineParser> {
        match self {
            InputFormat::InlineXml => Box::new(InlineXmlParser::new()),
            InputFormat::SlashTags => Box::new(SlashTagsParser::new()),
        }
    }

    /// Name used in settings files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::InlineXml => "inline-xml",
            InputFormat::SlashTags => "slash-tags",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
