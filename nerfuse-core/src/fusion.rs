//! Token fusion engine
//!
//! A single forward pass groups maximal runs of consecutive tokens that share
//! a label. Each run becomes one [`OutputToken`]: an underscore-joined entity,
//! or, for labels in the ignore-set, the plain words. Unlabeled tokens pass
//! through untouched and relative order is always preserved.

use crate::config::FusionConfig;
use crate::types::{OutputToken, TaggedToken};

/// Consecutive tokens sharing one label. Never empty once opened.
#[derive(Debug)]
struct TokenRun<'a> {
    label: &'a str,
    words: Vec<&'a str>,
}

impl<'a> TokenRun<'a> {
    fn open(token: &'a TaggedToken, label: &'a str) -> Self {
        Self {
            label,
            words: vec![token.word.as_str()],
        }
    }

    fn push(&mut self, token: &'a TaggedToken) {
        self.words.push(token.word.as_str());
    }
}

/// Fuses same-label runs according to a [`FusionConfig`]
#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    config: FusionConfig,
}

impl FusionEngine {
    /// Create an engine with the given configuration
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Fuse a token sequence into output tokens
    pub fn fuse(&self, tokens: &[TaggedToken]) -> Vec<OutputToken> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut current: Option<TokenRun<'_>> = None;

        for token in tokens {
            match token.label() {
                Some(label) => {
                    if let Some(run) = current.as_mut().filter(|run| run.label == label) {
                        run.push(token);
                        continue;
                    }
                    if let Some(run) = current.take() {
                        output.push(self.flush(run));
                    }
                    current = Some(TokenRun::open(token, label));
                }
                None => {
                    if let Some(run) = current.take() {
                        output.push(self.flush(run));
                    }
                    output.push(OutputToken::Word {
                        word: token.word.clone(),
                    });
                }
            }
        }

        if let Some(run) = current.take() {
            output.push(self.flush(run));
        }

        output
    }

    /// Fuse a token sequence and render each output token
    pub fn fuse_words(&self, tokens: &[TaggedToken]) -> Vec<String> {
        self.fuse(tokens).iter().map(OutputToken::render).collect()
    }

    fn flush(&self, run: TokenRun<'_>) -> OutputToken {
        assert!(
            !run.words.is_empty(),
            "flushed an empty run for label {}",
            run.label
        );

        let words = run.words.into_iter().map(str::to_string).collect();
        let label = run.label.to_string();
        if self.config.is_ignored(run.label) {
            OutputToken::Ignored { words, label }
        } else {
            OutputToken::Entity { words, label }
        }
    }
}
