//! Line-at-a-time pipeline: parse, fuse, and track statistics
//!
//! Each line is parsed and fused completely before the next one is read, so
//! output can be flushed per line when streaming through a pipe.

use crate::config::FusionConfig;
use crate::error::{FusionError, ParseError, Result};
use crate::fusion::FusionEngine;
use crate::parser::{InputFormat, LineParser};
use crate::types::{FusedLine, OutputToken};
use std::io::BufRead;

/// Counters accumulated while processing a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FusionStats {
    /// Lines read from the input
    pub lines_read: usize,
    /// Lines that produced output
    pub lines_emitted: usize,
    /// Blank or whitespace-only lines skipped
    pub blank_lines: usize,
    /// Runs fused into single tokens
    pub entities_fused: usize,
    /// Runs left unfused because their label is ignored
    pub ignored_runs: usize,
    /// Unlabeled words passed through
    pub plain_words: usize,
}

impl std::ops::AddAssign for FusionStats {
    fn add_assign(&mut self, other: Self) {
        self.lines_read += other.lines_read;
        self.lines_emitted += other.lines_emitted;
        self.blank_lines += other.blank_lines;
        self.entities_fused += other.entities_fused;
        self.ignored_runs += other.ignored_runs;
        self.plain_words += other.plain_words;
    }
}

impl FusionStats {
    fn record(&mut self, line: &FusedLine) {
        self.lines_emitted += 1;
        for token in &line.tokens {
            match token {
                OutputToken::Word { .. } => self.plain_words += 1,
                OutputToken::Entity { .. } => self.entities_fused += 1,
                OutputToken::Ignored { .. } => self.ignored_runs += 1,
            }
        }
    }
}

/// Parser and fusion engine bound together
pub struct FusionPipeline {
    parser: Box<dyn LineParser>,
    engine: FusionEngine,
}

impl std::fmt::Debug for FusionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FusionPipeline")
            .field("parser", &self.parser.name())
            .field("engine", &self.engine)
            .finish()
    }
}

impl Default for FusionPipeline {
    fn default() -> Self {
        Self::new(InputFormat::default(), FusionConfig::default())
    }
}

impl FusionPipeline {
    /// Pipeline for a known input format
    pub fn new(format: InputFormat, config: FusionConfig) -> Self {
        Self::with_parser(format.parser(), FusionEngine::new(config))
    }

    /// Pipeline with a custom parser
    pub fn with_parser(parser: Box<dyn LineParser>, engine: FusionEngine) -> Self {
        Self { parser, engine }
    }

    /// Fusion engine in use
    pub fn engine(&self) -> &FusionEngine {
        &self.engine
    }

    /// Name of the annotation convention being parsed
    pub fn parser_name(&self) -> &'static str {
        self.parser.name()
    }

    /// Parse and fuse one line. Blank lines yield `None`.
    pub fn fuse_line(
        &self,
        line_number: usize,
        line: &str,
    ) -> std::result::Result<Option<FusedLine>, ParseError> {
        if line.trim_ascii().is_empty() {
            return Ok(None);
        }
        let tokens = self.parser.parse_line(line)?;
        Ok(Some(FusedLine {
            line_number,
            tokens: self.engine.fuse(&tokens),
        }))
    }

    /// Iterate over the fused lines of a reader
    pub fn lines<R: BufRead>(&self, reader: R) -> FusedLines<'_, R> {
        FusedLines {
            pipeline: self,
            reader,
            buffer: Vec::new(),
            line_number: 0,
            stats: FusionStats::default(),
            failed: false,
        }
    }
}

/// Iterator over fused lines; stops after the first error
pub struct FusedLines<'p, R> {
    pipeline: &'p FusionPipeline,
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    stats: FusionStats,
    failed: bool,
}

impl<R> FusedLines<'_, R> {
    /// Statistics so far
    pub fn stats(&self) -> FusionStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for FusedLines<'_, R> {
    type Item = Result<FusedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    self.failed = true;
                    return Some(Err(FusionError::Io(e)));
                }
            }
            self.line_number += 1;
            self.stats.lines_read += 1;

            let text = match std::str::from_utf8(&self.buffer) {
                Ok(text) => text,
                Err(source) => {
                    log::debug!("Invalid UTF-8 on line {}: {}", self.line_number, source);
                    self.failed = true;
                    return Some(Err(FusionError::Decode {
                        line: self.line_number,
                        source,
                    }));
                }
            };

            match self.pipeline.fuse_line(self.line_number, text) {
                Ok(Some(line)) => {
                    self.stats.record(&line);
                    return Some(Ok(line));
                }
                Ok(None) => self.stats.blank_lines += 1,
                Err(source) => {
                    log::debug!("Parse failure on line {}: {}", self.line_number, source);
                    self.failed = true;
                    return Some(Err(FusionError::Parse {
                        line: self.line_number,
                        source,
                    }));
                }
            }
        }
    }
}
