//! Translation pipeline
//!
//! Orchestrates the fixed stage order: classify, resolve indentation,
//! rewrite keywords, synthesize braces. Classification must run to
//! completion before resolution, resolution before rewriting, and within
//! brace synthesis the opening pass before the closing pass; the stage
//! functions are typed so the order cannot be scrambled.
//!
//! A translation either completes or fails outright; on failure no partial
//! output is produced. Warnings are collected and returned alongside a
//! successful result, never printed by the library itself.

use std::fmt;

use crate::kava::document::Document;
use crate::kava::resolving::{self, IndentPolicy};
use crate::kava::rewriting::{self, keywords};
use crate::kava::synthesis::{self, OutputLine};

/// Configuration for one translation run.
#[derive(Debug, Clone)]
pub struct Options {
    /// When enabled, a closure's closing brace carries a `)();` suffix and
    /// its opener gains a leading parenthesis, turning the rewritten block
    /// into an immediately-invoked function. When disabled the closure is a
    /// plain function expression.
    pub invocation_tail: bool,

    /// How to react to indentation anomalies.
    pub policy: IndentPolicy,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            invocation_tail: true,
            policy: IndentPolicy::Lenient,
        }
    }
}

/// A non-fatal diagnostic tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Warning {
    pub line_number: usize,
    pub text: String,
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.message)
    }
}

/// Errors that abort a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// A content-bearing line's indentation jumps more than one level
    /// beyond the enclosing block.
    IndentationTooDeep { line_number: usize, text: String },

    /// Indentation that is neither a clean level change nor a recognizable
    /// continuation.
    ConfusingIndentation { line_number: usize, text: String },

    /// The first content-bearing line of a document must start at the left
    /// margin.
    FirstLineIndented { line_number: usize, text: String },

    /// No earlier line establishes the level a closing brace terminates; an
    /// internal consistency failure.
    MissingParent { level: usize, line_number: usize },
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::IndentationTooDeep { line_number, text } => {
                write!(f, "line {}: indentation too deep: {}", line_number, text)
            }
            TranslateError::ConfusingIndentation { line_number, text } => {
                write!(f, "line {}: confusing indentation: {}", line_number, text)
            }
            TranslateError::FirstLineIndented { line_number, text } => {
                write!(
                    f,
                    "line {}: the first line of code must not be indented: {}",
                    line_number, text
                )
            }
            TranslateError::MissingParent { level, line_number } => {
                write!(
                    f,
                    "no parent line at level {} for the block closing after line {}",
                    level, line_number
                )
            }
        }
    }
}

impl std::error::Error for TranslateError {}

/// The result of a successful translation.
#[derive(Debug, Clone)]
pub struct Translation {
    /// The output lines, in order: rewritten source lines plus synthesized
    /// closing-brace lines.
    pub lines: Vec<OutputLine>,

    /// Non-fatal diagnostics collected during resolution.
    pub warnings: Vec<Warning>,
}

impl Translation {
    /// The translated source, lines joined with `\n`.
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.lines.iter().map(|line| line.text.as_str()).collect();
        texts.join("\n")
    }
}

/// Translate a kava source blob into brace-delimited JavaScript.
pub fn translate(source: &str, options: &Options) -> Result<Translation, TranslateError> {
    let mut doc = Document::read(source);
    let warnings = resolving::resolve(&mut doc, options.policy)?;

    let mut drafts = rewriting::prepare(&doc);
    for draft in drafts.iter_mut().filter(|d| d.is_content_bearing()) {
        keywords::rewrite_keyword(draft, options.invocation_tail);
    }

    let lines = synthesis::synthesize(drafts, options.invocation_tail)?;
    Ok(Translation { lines, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_block_end_to_end() {
        let translation = translate("a\n    b\n", &Options::default()).expect("translate");
        assert_eq!(translation.text(), "a {\n    b\n}\n");
        assert!(translation.warnings.is_empty());
    }

    #[test]
    fn test_colon_stripped_when_brace_attached() {
        let translation = translate("if (x):\n    y();\n", &Options::default()).expect("translate");
        assert_eq!(translation.text(), "if (x) {\n    y();\n}\n");
    }

    #[test]
    fn test_closure_round_trip_with_tails() {
        let translation =
            translate("var f = closure:\n    g();\n", &Options::default()).expect("translate");
        assert_eq!(translation.text(), "var f = (function () {\n    g();\n})();\n");
    }

    #[test]
    fn test_closure_round_trip_without_tails() {
        let options = Options {
            invocation_tail: false,
            ..Options::default()
        };
        let translation = translate("var f = closure:\n    g();\n", &options).expect("translate");
        assert_eq!(translation.text(), "var f = function () {\n    g();\n}\n");
    }

    #[test]
    fn test_keyword_inside_string_survives() {
        let source = "var s = \"closure\";\n";
        let translation = translate(source, &Options::default()).expect("translate");
        assert_eq!(translation.text(), source);
    }

    #[test]
    fn test_failure_produces_no_output() {
        let options = Options {
            policy: IndentPolicy::Strict,
            ..Options::default()
        };
        let err = translate("a;\n      b;\n", &options).unwrap_err();
        assert!(matches!(err, TranslateError::ConfusingIndentation { .. }));
    }

    #[test]
    fn test_warnings_surface_with_output() {
        let translation =
            translate("a;\n            b;\n", &Options::default()).expect("translate");
        assert_eq!(translation.warnings.len(), 1);
        assert_eq!(translation.warnings[0].line_number, 2);
        // The over-deep line was clamped; no structure was created.
        assert_eq!(translation.text(), "a;\n            b;\n");
    }

    #[test]
    fn test_empty_source() {
        let translation = translate("", &Options::default()).expect("translate");
        assert_eq!(translation.text(), "");
    }

    #[test]
    fn test_error_messages_name_the_line() {
        let err = translate("    a;\n", &Options::default()).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"line 1: the first line of code must not be indented:     a;"
        );
    }
}
