//! Indentation resolution
//!
//! Walks the content-bearing lines of a classified document in order and
//! converts each one's leading-whitespace width into a discrete indentation
//! level, relative to the previous content-bearing line. Lines without
//! content are left unresolved and ignored by every downstream step.
//!
//! Only indentation that is *exactly* one level deeper than the last good
//! level is structural; source code may continue an expression onto the next
//! physical line without starting a new block, which is what the lenient
//! policy's continuation handling is for.

use crate::kava::document::Document;
use crate::kava::pipeline::{TranslateError, Warning};

/// Width of one indentation level, in spaces.
pub const INDENT_WIDTH: usize = 4;

/// How to react to indentation that is not a clean increment, decrement, or
/// same-level line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndentPolicy {
    /// Indentation must sit on the four-space grid and may grow by at most
    /// one level at a time; anything else aborts the translation.
    Strict,

    /// Off-grid indentation is treated as a continuation of the previous
    /// content-bearing line; over-deep or ambiguous indentation is clamped
    /// to the last good level with a warning.
    #[default]
    Lenient,
}

/// Assign an indentation level to every content-bearing line.
///
/// Returns the warnings collected along the way (always empty under the
/// strict policy, which turns every anomaly into an error).
pub fn resolve(doc: &mut Document, policy: IndentPolicy) -> Result<Vec<Warning>, TranslateError> {
    let mut warnings = Vec::new();
    let mut last_good = 0usize;
    let mut saw_content = false;

    for line in doc.lines_mut() {
        if !line.is_content_bearing() {
            continue;
        }
        let spaces = line.leading_whitespace();

        match policy {
            IndentPolicy::Strict => {
                if spaces % INDENT_WIDTH != 0 {
                    return Err(TranslateError::ConfusingIndentation {
                        line_number: line.number(),
                        text: line.text(),
                    });
                }
                let candidate = spaces / INDENT_WIDTH;
                if candidate > last_good + 1 {
                    return Err(TranslateError::IndentationTooDeep {
                        line_number: line.number(),
                        text: line.text(),
                    });
                }
                if !saw_content && candidate > 0 {
                    return Err(TranslateError::FirstLineIndented {
                        line_number: line.number(),
                        text: line.text(),
                    });
                }
                line.set_indent(candidate);
                last_good = candidate;
            }
            IndentPolicy::Lenient => {
                if spaces % INDENT_WIDTH == 0 {
                    let candidate = spaces / INDENT_WIDTH;
                    if candidate <= last_good + 1 {
                        if !saw_content && candidate > 0 {
                            return Err(TranslateError::FirstLineIndented {
                                line_number: line.number(),
                                text: line.text(),
                            });
                        }
                        line.set_indent(candidate);
                        last_good = candidate;
                    } else {
                        warnings.push(Warning {
                            line_number: line.number(),
                            text: line.text(),
                            message: format!(
                                "indentation jumps from level {} to level {}; treating as a continuation",
                                last_good, candidate
                            ),
                        });
                        line.set_indent(last_good);
                    }
                } else if spaces >= last_good * INDENT_WIDTH {
                    // Continuation of the previous content-bearing line.
                    line.set_indent(last_good);
                } else {
                    warnings.push(Warning {
                        line_number: line.number(),
                        text: line.text(),
                        message: format!(
                            "confusing indentation ({} spaces below level {}); keeping level {}",
                            spaces, last_good, last_good
                        ),
                    });
                    line.set_indent(last_good);
                }
            }
        }

        saw_content = true;
    }

    Ok(warnings)
}
