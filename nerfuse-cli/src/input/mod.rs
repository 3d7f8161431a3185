//! Input handling module

pub mod glob_resolver;
pub mod source;

pub use glob_resolver::resolve_patterns;
pub use source::InputSource;
