//! Heuristic splitter set: known verbs plus sentence punctuation
//!
//! The set is built up front and exposed read-only. Fusion does not consult
//! it; it is carried for boundary heuristics layered on top of the engine.

use crate::error::ConfigError;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Punctuation that always counts as a splitter
pub const PUNCTUATION_SPLITTERS: [&str; 6] = [",", "'", "\"", ".", "?", "!"];

/// Union of known verbs and [`PUNCTUATION_SPLITTERS`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeuristicSplitters {
    known_verbs: BTreeSet<String>,
    splitters: BTreeSet<String>,
}

impl Default for HeuristicSplitters {
    fn default() -> Self {
        Self::from_known_verbs(std::iter::empty::<String>())
    }
}

impl HeuristicSplitters {
    /// Build from an in-memory list of verbs. Entries are trimmed; blank ones are skipped.
    pub fn from_known_verbs<I, S>(verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let known_verbs: BTreeSet<String> = verbs
            .into_iter()
            .map(|v| v.as_ref().trim().to_string())
            .filter(|v| !v.is_empty())
            .collect();

        let splitters = known_verbs
            .iter()
            .cloned()
            .chain(PUNCTUATION_SPLITTERS.iter().map(|p| p.to_string()))
            .collect();

        Self {
            known_verbs,
            splitters,
        }
    }

    /// Load newline-separated known verbs from a file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::KnownVerbs {
            path: path.to_path_buf(),
            source,
        })?;
        let splitters = Self::from_known_verbs(content.lines());
        log::debug!(
            "Loaded {} known verbs from {}",
            splitters.known_verbs.len(),
            path.display()
        );
        Ok(splitters)
    }

    /// Whether `word` is a splitter
    pub fn contains(&self, word: &str) -> bool {
        self.splitters.contains(word)
    }

    /// Whether `word` is a known verb
    pub fn is_known_verb(&self, word: &str) -> bool {
        self.known_verbs.contains(word)
    }

    /// Known verbs in sorted order
    pub fn known_verbs(&self) -> impl Iterator<Item = &str> {
        self.known_verbs.iter().map(String::as_str)
    }

    /// Number of known verbs
    pub fn known_verb_count(&self) -> usize {
        self.known_verbs.len()
    }

    /// Total number of splitters
    pub fn len(&self) -> usize {
        self.splitters.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.splitters.is_empty()
    }

    /// Splitters in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.splitters.iter().map(String::as_str)
    }
}
