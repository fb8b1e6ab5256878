//! Property-based tests for the classifier and the translator
//!
//! These properties pin down the guarantees the rest of the pipeline leans
//! on: comment- and string-free text is only ever code or whitespace, line
//! comments never leak scanner state across lines, and synthesized braces
//! always balance.

use proptest::prelude::*;

use kava::kava::pipeline::{self, Options};
use kava::kava::resolving::IndentPolicy;
use kava::kava::scanning::{classify_line, CharClass, ScanState};

proptest! {
    #[test]
    fn plain_text_tags_code_and_whitespace_only(line in "[a-zA-Z0-9;=+(), .]{0,60}") {
        let chars: Vec<char> = line.chars().collect();
        let (classes, _) = classify_line(&chars, ScanState::default());
        for (ch, class) in chars.iter().zip(classes.iter()) {
            if ch.is_whitespace() {
                prop_assert_eq!(*class, CharClass::Whitespace);
            } else {
                prop_assert_eq!(*class, CharClass::Code);
            }
        }
    }

    #[test]
    fn line_comment_state_never_crosses_lines(line in "[ -~]{0,60}") {
        let chars: Vec<char> = line.chars().collect();
        let (_, state) = classify_line(&chars, ScanState::default());
        prop_assert_ne!(state, ScanState::InLineComment);
    }

    #[test]
    fn classification_is_deterministic(line in "[ -~]{0,60}") {
        let chars: Vec<char> = line.chars().collect();
        let first = classify_line(&chars, ScanState::default());
        let second = classify_line(&chars, ScanState::default());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn synthesized_braces_balance(steps in proptest::collection::vec(0usize..6, 0..12)) {
        let mut source = String::new();
        let mut level = 0usize;
        for (ii, &step) in steps.iter().enumerate() {
            level = if ii == 0 { 0 } else { step.min(level + 1) };
            source.push_str(&"    ".repeat(level));
            source.push_str("x();\n");
        }

        let translation = pipeline::translate(&source, &Options::default())
            .expect("clean block programs always translate");
        let text = translation.text();
        prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
    }

    #[test]
    fn strict_policy_accepts_clean_block_programs(steps in proptest::collection::vec(0usize..6, 0..12)) {
        let mut source = String::new();
        let mut level = 0usize;
        for (ii, &step) in steps.iter().enumerate() {
            level = if ii == 0 { 0 } else { step.min(level + 1) };
            source.push_str(&"    ".repeat(level));
            source.push_str("x();\n");
        }

        let options = Options {
            policy: IndentPolicy::Strict,
            ..Options::default()
        };
        prop_assert!(pipeline::translate(&source, &options).is_ok());
    }
}
