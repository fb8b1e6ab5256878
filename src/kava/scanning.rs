//! Lexical classification
//!
//! This module assigns one [`CharClass`] to every character of the source, so
//! that later stages never mistake text inside a comment or string for code
//! structure. Classification is a per-character state machine: the scanner
//! walks each line left to right, carrying a single [`ScanState`] value from
//! the last character of one line into the first character of the next. That
//! persistence is what lets a `/*` comment opened on one line swallow the
//! lines that follow, while `//` comments always end with their line.
//!
//! Classification is a deterministic pure function of the ordered text:
//! classifying the same text twice yields the same tags.

pub mod classes;
pub mod scanner;

pub use classes::CharClass;
pub use scanner::{classify_line, ScanState};
