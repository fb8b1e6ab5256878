//! Character classes produced by the scanner
//!
//! Every character of every line carries exactly one class at any point in
//! the pipeline. The classes distinguish the text the translator may touch
//! (code, and code it inserted itself) from the text it must leave alone
//! (comments and string literals).

use std::fmt;

/// The classification of a single source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CharClass {
    /// Whitespace outside any comment or string literal.
    Whitespace,

    /// Real code text.
    Code,

    /// Text inside a `//` comment.
    LineComment,

    /// Text inside a `/* */` comment.
    BlockComment,

    /// Text inside a single-quoted string literal, quotes included.
    SingleString,

    /// Text inside a double-quoted string literal, quotes included.
    DoubleString,

    /// Code text the translator inserted itself.
    Synthetic,
}

impl CharClass {
    /// True for classes that count as real code: the only places where the
    /// keyword rewrite, colon removal, and brace attachment may act.
    pub fn is_code(self) -> bool {
        matches!(self, CharClass::Code | CharClass::Synthetic)
    }

    /// True for classes that make a line content-bearing: code, synthetic
    /// code, or string content. Lines with none of these are comments and/or
    /// whitespace only and take no part in block structure.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            CharClass::Code
                | CharClass::Synthetic
                | CharClass::SingleString
                | CharClass::DoubleString
        )
    }

    /// The one-character legend used by the annotated dump.
    pub fn legend(self) -> char {
        match self {
            CharClass::Whitespace => '-',
            CharClass::Code => 'x',
            CharClass::LineComment => 'c',
            CharClass::BlockComment => 'C',
            CharClass::SingleString => '\'',
            CharClass::DoubleString => '"',
            CharClass::Synthetic => 's',
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.legend())
    }
}
