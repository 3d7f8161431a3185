//! JSON Lines output formatter

use super::OutputFormatter;
use anyhow::Result;
use nerfuse_core::{FusedLine, OutputToken};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - one JSON object per fused line
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Data structure for one JSON output record
#[derive(Debug, Serialize)]
pub struct LineRecord<'a> {
    /// 1-based input line number
    pub line: usize,
    /// Rendered output line
    pub text: String,
    /// Structured output tokens
    pub tokens: &'a [OutputToken],
}

impl<'a> From<&'a FusedLine> for LineRecord<'a> {
    fn from(line: &'a FusedLine) -> Self {
        Self {
            line: line.line_number,
            text: line.text(),
            tokens: &line.tokens,
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_line(&mut self, line: &FusedLine) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &LineRecord::from(line))?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
