//! Token types flowing in and out of the fusion engine

use serde::Serialize;
use std::fmt;

/// A word paired with the entity label the tagger assigned to it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedToken {
    /// Surface form of the word
    pub word: String,
    /// Entity label, or `None` outside any entity span
    pub label: Option<String>,
}

impl TaggedToken {
    /// Token outside any entity span
    pub fn plain(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            label: None,
        }
    }

    /// Token inside an entity span with the given label
    pub fn labeled(word: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            label: Some(label.into()),
        }
    }

    /// Label as a string slice
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// One unit of fused output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutputToken {
    /// Unlabeled word, passed through verbatim
    Word {
        /// The word
        word: String,
    },
    /// A run fused into one atomic token
    Entity {
        /// Words of the run, in order
        words: Vec<String>,
        /// Label shared by the run
        label: String,
    },
    /// A run whose label is in the ignore-set; kept as separate words
    Ignored {
        /// Words of the run, in order
        words: Vec<String>,
        /// Label shared by the run, dropped from the rendering
        label: String,
    },
}

impl OutputToken {
    /// Separator placed between fused words and before the label
    pub const FUSION_SEPARATOR: &'static str = "_";

    /// Rendered text of this token
    pub fn render(&self) -> String {
        match self {
            OutputToken::Word { word } => word.clone(),
            OutputToken::Entity { words, label } => {
                let mut fused = words.join(Self::FUSION_SEPARATOR);
                fused.push_str(Self::FUSION_SEPARATOR);
                fused.push_str(label);
                fused
            }
            OutputToken::Ignored { words, .. } => words.join(" "),
        }
    }

    /// Original words covered by this token
    pub fn words(&self) -> &[String] {
        match self {
            OutputToken::Word { word } => std::slice::from_ref(word),
            OutputToken::Entity { words, .. } | OutputToken::Ignored { words, .. } => words,
        }
    }

    /// Label of the run this token came from, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            OutputToken::Word { .. } => None,
            OutputToken::Entity { label, .. } | OutputToken::Ignored { label, .. } => Some(label),
        }
    }
}

impl fmt::Display for OutputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The fused output for one non-blank input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusedLine {
    /// 1-based line number in the input stream
    pub line_number: usize,
    /// Output tokens in input order
    pub tokens: Vec<OutputToken>,
}

impl FusedLine {
    /// Output line: rendered tokens joined by single spaces
    pub fn text(&self) -> String {
        render_tokens(&self.tokens)
    }
}

/// Join rendered tokens with single spaces
pub fn render_tokens(tokens: &[OutputToken]) -> String {
    tokens
        .iter()
        .map(OutputToken::render)
        .collect::<Vec<_>>()
        .join(" ")
}
