//! The per-character scanner
//!
//! One [`ScanState`] value threads through the whole document in line order,
//! character order. Each transition rule may both close a prior mode and open
//! a new one on the same character: closing takes effect for the *following*
//! character (the closer itself still belongs to the mode it closes), while
//! opening takes effect starting with the current character.
//!
//! # Transition rules, in precedence order
//!
//! 1. `/` followed by `*` while outside comments/strings opens a block
//!    comment; `/` preceded by `*` while inside one schedules a return to
//!    outside for the next character.
//! 2. An unescaped `'` toggles the single-quoted string mode; likewise `"`
//!    for the double-quoted mode. Opening quotes are only recognized outside
//!    comments/strings.
//! 3. A non-whitespace character outside any mode is code; a whitespace
//!    character after code returns to outside.
//! 4. `/` followed by `/` while outside comments/strings opens a line
//!    comment, which always ends at the physical end of the line.
//!
//! All modes except the line comment persist across the line boundary.

use crate::kava::scanning::classes::CharClass;

/// The scanner mode, persisted from the last character of one line to the
/// first character of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// Between tokens: whitespace outside any comment or string.
    #[default]
    Outside,
    /// Inside a run of code characters.
    Code,
    /// Inside a `//` comment; reset to `Outside` at end of line.
    InLineComment,
    /// Inside a `/* */` comment.
    InBlockComment,
    /// Inside a single-quoted string literal.
    InSingleString,
    /// Inside a double-quoted string literal.
    InDoubleString,
}

impl ScanState {
    /// The class tagged onto a character scanned in this state.
    fn class(self) -> CharClass {
        match self {
            ScanState::Outside => CharClass::Whitespace,
            ScanState::Code => CharClass::Code,
            ScanState::InLineComment => CharClass::LineComment,
            ScanState::InBlockComment => CharClass::BlockComment,
            ScanState::InSingleString => CharClass::SingleString,
            ScanState::InDoubleString => CharClass::DoubleString,
        }
    }

    /// Outside every comment and string literal: plain whitespace or code.
    /// Only from here may a comment or string open.
    fn is_plain(self) -> bool {
        matches!(self, ScanState::Outside | ScanState::Code)
    }
}

/// Classify one physical line, given the state left behind by the previous
/// line. Returns one class per character plus the state to carry into the
/// next line.
pub fn classify_line(text: &[char], mut state: ScanState) -> (Vec<CharClass>, ScanState) {
    let mut classes = Vec::with_capacity(text.len());

    for (ii, &ch) in text.iter().enumerate() {
        let prev = ii.checked_sub(1).map(|p| text[p]);
        let next = text.get(ii + 1).copied();
        // A mode scheduled to end keeps this character; the new mode starts
        // on the next one.
        let mut after: Option<ScanState> = None;

        // block comment
        if ch == '/' && next == Some('*') && state.is_plain() {
            state = ScanState::InBlockComment;
        } else if prev == Some('*') && ch == '/' && state == ScanState::InBlockComment {
            after = Some(ScanState::Outside);
        }

        // single-quoted string
        if ch == '\'' && state.is_plain() {
            state = ScanState::InSingleString;
        } else if ch == '\'' && prev != Some('\\') && state == ScanState::InSingleString {
            after = Some(ScanState::Outside);
        }

        // double-quoted string
        if ch == '"' && state.is_plain() {
            state = ScanState::InDoubleString;
        } else if ch == '"' && prev != Some('\\') && state == ScanState::InDoubleString {
            after = Some(ScanState::Outside);
        }

        // whitespace / code
        if !ch.is_whitespace() && state == ScanState::Outside {
            state = ScanState::Code;
        }
        if ch.is_whitespace() && state == ScanState::Code {
            state = ScanState::Outside;
        }

        // line comment
        if ch == '/' && next == Some('/') && state.is_plain() {
            state = ScanState::InLineComment;
        }

        classes.push(state.class());
        if let Some(next_state) = after {
            state = next_state;
        }
    }

    // Line comments never span lines.
    if state == ScanState::InLineComment {
        state = ScanState::Outside;
    }

    (classes, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legend(text: &str, state: ScanState) -> (String, ScanState) {
        let chars: Vec<char> = text.chars().collect();
        let (classes, out) = classify_line(&chars, state);
        (classes.iter().map(|c| c.legend()).collect(), out)
    }

    #[test]
    fn test_plain_code_and_whitespace() {
        let (tags, state) = legend("var x = 1;", ScanState::default());
        assert_eq!(tags, "xxx-x-x-xx");
        assert_eq!(state, ScanState::Code);
    }

    #[test]
    fn test_line_comment_runs_to_end_of_line() {
        let (tags, state) = legend("x; // note", ScanState::default());
        assert_eq!(tags, "xx-ccccccc");
        assert_eq!(state, ScanState::Outside, "line comments never span lines");
    }

    #[test]
    fn test_line_comment_inside_string_is_string() {
        let (tags, _) = legend("\"a // b\"", ScanState::default());
        assert_eq!(tags, "\"\"\"\"\"\"\"\"");
    }

    #[test]
    fn test_block_comment_within_one_line() {
        let (tags, state) = legend("a /* b */ c", ScanState::default());
        assert_eq!(tags, "x-CCCCCCC-x");
        assert_eq!(state, ScanState::Code);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let (tags, state) = legend("a /* b", ScanState::default());
        assert_eq!(tags, "x-CCCC");
        assert_eq!(state, ScanState::InBlockComment);

        let (tags, state) = legend("still */ x", state);
        assert_eq!(tags, "CCCCCCCC-x");
        assert_eq!(state, ScanState::Code);
    }

    #[test]
    fn test_single_quoted_string() {
        let (tags, state) = legend("a = 'b c';", ScanState::default());
        assert_eq!(tags, "x-x-'''''x");
        assert_eq!(state, ScanState::Code);
    }

    #[test]
    fn test_escaped_quote_does_not_close_string() {
        let (tags, _) = legend(r#""he\"llo""#, ScanState::default());
        assert_eq!(tags, "\"\"\"\"\"\"\"\"\"");
    }

    #[test]
    fn test_mixed_quotes_stay_in_outer_string() {
        // A double quote inside a single-quoted string is string text.
        let (tags, _) = legend(r#"'a "b" c'"#, ScanState::default());
        assert_eq!(tags, "'''''''''");
    }

    #[test]
    fn test_quote_inside_comment_is_comment() {
        let (tags, state) = legend("// it's fine", ScanState::default());
        assert_eq!(tags, "cccccccccccc");
        assert_eq!(state, ScanState::Outside);
    }

    #[test]
    fn test_division_slash_is_code() {
        let (tags, _) = legend("a / b", ScanState::default());
        assert_eq!(tags, "x-x-x");
    }

    #[test]
    fn test_classification_is_deterministic() {
        let line: Vec<char> = "x = '/*' + y; // trailing".chars().collect();
        let first = classify_line(&line, ScanState::default());
        let second = classify_line(&line, ScanState::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_line() {
        let (tags, state) = legend("", ScanState::default());
        assert_eq!(tags, "");
        assert_eq!(state, ScanState::Outside);
    }
}
