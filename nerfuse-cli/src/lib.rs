//! nerfuse CLI library
//!
//! This library provides the command-line interface for fusing
//! named-entity spans in NER tagger output.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
