//! Named-entity span fusion for NER tagger output
//!
//! Turns annotated lines such as
//!
//! ```text
//! This is a <ORGANIZATION>US Dept of Defense</ORGANIZATION> example .
//! ```
//!
//! into lines where each entity is one atomic token:
//!
//! ```text
//! This is a US_Dept_of_Defense_ORGANIZATION example .
//! ```
//!
//! Parsing ([`parser`]) and fusion ([`fusion`]) are separate stages so the
//! engine can be driven with synthetic token lists.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fusion;
pub mod parser;
pub mod pipeline;
pub mod splitters;
pub mod types;

pub use config::{FusionConfig, FusionConfigBuilder, Settings, MONEY_LABEL};
pub use error::{ConfigError, FusionError, ParseError, ParseErrorKind, Result};
pub use fusion::FusionEngine;
pub use parser::{InlineXmlParser, InputFormat, LineParser, SlashTagsParser};
pub use pipeline::{FusedLines, FusionPipeline, FusionStats};
pub use splitters::{HeuristicSplitters, PUNCTUATION_SPLITTERS};
pub use types::{render_tokens, FusedLine, OutputToken, TaggedToken};

/// Parse and fuse a single line with the default configuration.
///
/// Returns `None` for blank lines.
pub fn fuse_line(line: &str) -> std::result::Result<Option<String>, ParseError> {
    let pipeline = FusionPipeline::default();
    Ok(pipeline.fuse_line(1, line)?.map(|fused| fused.text()))
}
