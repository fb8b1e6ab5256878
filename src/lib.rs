//! # kava
//!
//! A translator for kava: an indentation-significant, brace-free dialect of
//! JavaScript. The library classifies every character of the input, infers
//! block structure from leading whitespace, and emits standard brace-delimited
//! source text, rewriting the `closure` pseudo-keyword into an anonymous
//! function along the way.
//!
//! The entry point for most callers is [`kava::pipeline::translate`].

pub mod kava;
