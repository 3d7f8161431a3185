//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use nerfuse_core::FusedLine;
use std::io::Write;

/// Plain text formatter - one space-joined line per input line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_line(&mut self, line: &FusedLine) -> Result<()> {
        writeln!(self.writer, "{}", line.text())?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nerfuse_core::OutputToken;

    #[test]
    fn test_text_lines() {
        let mut formatter = TextFormatter::new(Vec::new());
        let line = FusedLine {
            line_number: 1,
            tokens: vec![
                OutputToken::Word {
                    word: "met".to_string(),
                },
                OutputToken::Entity {
                    words: vec!["Bob".to_string(), "Jones".to_string()],
                    label: "PERSON".to_string(),
                },
            ],
        };
        formatter.format_line(&line).unwrap();
        formatter.format_line(&line).unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(written, "met Bob_Jones_PERSON\nmet Bob_Jones_PERSON\n");
    }
}
