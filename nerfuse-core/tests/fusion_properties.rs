//! Property tests for the fusion engine and pipeline

use nerfuse_core::{
    FusionConfig, FusionEngine, FusionPipeline, InlineXmlParser, LineParser, OutputToken,
    TaggedToken,
};
use proptest::prelude::*;

const LABELS: [&str; 4] = ["PERSON", "ORGANIZATION", "LOCATION", "MONEY"];

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9.,?!'-]{1,8}"
}

fn tagged_token() -> impl Strategy<Value = TaggedToken> {
    (word(), proptest::option::of(proptest::sample::select(LABELS.to_vec()))).prop_map(
        |(word, label)| TaggedToken {
            word,
            label: label.map(str::to_string),
        },
    )
}

fn token_seq() -> impl Strategy<Value = Vec<TaggedToken>> {
    proptest::collection::vec(tagged_token(), 0..40)
}

proptest! {
    #[test]
    fn unlabeled_lines_pass_through(words in proptest::collection::vec(word(), 1..30)) {
        let tokens: Vec<_> = words.iter().map(|w| TaggedToken::plain(w.as_str())).collect();
        let fused = FusionEngine::default().fuse_words(&tokens);
        prop_assert_eq!(fused.join(" "), words.join(" "));
    }

    #[test]
    fn fused_entities_are_atomic_and_keep_label(tokens in token_seq()) {
        let config = FusionConfig::default();
        for token in FusionEngine::new(config.clone()).fuse(&tokens) {
            if let OutputToken::Entity { label, .. } = &token {
                let rendered = token.render();
                prop_assert!(!rendered.contains(' '));
                prop_assert!(!config.is_ignored(label));
                let suffix = format!("_{}", label);
                prop_assert!(rendered.ends_with(&suffix));
            }
        }
    }

    #[test]
    fn word_order_is_preserved(tokens in token_seq()) {
        let output = FusionEngine::default().fuse(&tokens);
        let recovered: Vec<&str> = output
            .iter()
            .flat_map(|t| t.words().iter().map(String::as_str))
            .collect();
        let original: Vec<&str> = tokens.iter().map(|t| t.word.as_str()).collect();
        prop_assert_eq!(recovered, original);
    }

    #[test]
    fn ignored_runs_are_never_fused(tokens in token_seq()) {
        let engine = FusionEngine::default();
        for token in engine.fuse(&tokens) {
            if let OutputToken::Ignored { words, label } = &token {
                prop_assert!(engine.config().is_ignored(label));
                prop_assert_eq!(token.render(), words.join(" "));
                prop_assert!(!token.render().contains('_'));
            }
        }
    }

    #[test]
    fn runs_are_maximal(tokens in token_seq()) {
        let output = FusionEngine::default().fuse(&tokens);
        for pair in output.windows(2) {
            if let (Some(a), Some(b)) = (pair[0].label(), pair[1].label()) {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn blank_lines_produce_nothing(line in "[ \t]{0,10}") {
        prop_assert_eq!(FusionPipeline::default().fuse_line(1, &line).unwrap(), None);
    }

    #[test]
    fn inline_xml_tags_decode_to_tokens(tokens in token_seq()) {
        let line = tokens
            .iter()
            .map(|t| match &t.label {
                Some(label) => format!("<{label}>{}</{label}>", t.word),
                None => t.word.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(InlineXmlParser::new().parse_line(&line).unwrap(), tokens);
    }
}
