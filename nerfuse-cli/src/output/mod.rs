//! Output formatting module

use anyhow::Result;
use nerfuse_core::FusedLine;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one fused line
    fn format_line(&mut self, line: &FusedLine) -> Result<()>;

    /// Flush anything still buffered
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
