//! Document model
//!
//! A [`Document`] is an ordered sequence of classified [`Line`] records,
//! created once per translation from a raw text blob. Construction splits the
//! blob on any universal line-ending convention and classifies every
//! character immediately, threading one scanner state across the whole
//! document; there is no such thing as an unclassified `Document`.
//!
//! A line's original text and classification are read-only from here on; the
//! rewriting stages work on their own copies (see
//! [`rewriting`](crate::kava::rewriting)).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::kava::scanning::{classify_line, CharClass, ScanState};

/// Splits a source blob into physical lines on any line-ending convention.
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

/// One physical line of the source, with its per-character classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: usize,
    chars: Vec<char>,
    classes: Vec<CharClass>,
    indent: Option<usize>,
}

impl Line {
    /// 1-based physical line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The original text of the line.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// The original characters of the line.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// One class per character, same length as [`chars`](Line::chars).
    pub fn classes(&self) -> &[CharClass] {
        &self.classes
    }

    /// The resolved indentation level, or `None` for lines that carry no
    /// content (and for content lines before resolution has run).
    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    pub(crate) fn set_indent(&mut self, level: usize) {
        self.indent = Some(level);
    }

    /// Does this line contain any code or string content? Otherwise it is
    /// comments and/or whitespace only and takes no part in block structure.
    pub fn is_content_bearing(&self) -> bool {
        self.classes.iter().any(|class| class.is_content())
    }

    /// Count of leading characters classified as whitespace.
    pub fn leading_whitespace(&self) -> usize {
        self.classes
            .iter()
            .take_while(|class| **class == CharClass::Whitespace)
            .count()
    }

    /// The classification rendered as one legend character per character.
    pub fn legend(&self) -> String {
        self.classes.iter().map(|class| class.legend()).collect()
    }
}

/// An ordered sequence of classified lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Read a source blob: split it into physical lines and classify every
    /// character, scanner state carried from each line into the next.
    pub fn read(source: &str) -> Document {
        let mut state = ScanState::default();
        let mut lines = Vec::new();

        for (index, text) in LINE_BREAK.split(source).enumerate() {
            let chars: Vec<char> = text.chars().collect();
            let (classes, next_state) = classify_line(&chars, state);
            state = next_state;
            lines.push(Line {
                number: index + 1,
                chars,
                classes,
                indent: None,
            });
        }

        Document { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
