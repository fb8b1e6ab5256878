//! The `closure` keyword rewrite
//!
//! kava introduces anonymous functions with the reserved token `closure`.
//! The rewriter substitutes the first occurrence on a line that sits in real
//! code. Occurrences inside strings or comments are never touched, and
//! later occurrences on the same line are left as they are.

use crate::kava::rewriting::DraftLine;
use crate::kava::scanning::CharClass;

/// The reserved token that introduces an anonymous function block.
pub const CLOSURE_KEYWORD: &str = "closure";

/// Opener emitted when invocation tails are enabled. The leading parenthesis
/// pairs with the `)();` suffix on the block's closing line.
pub const OPENER_INVOKED: &str = "(function ()";

/// Opener emitted when invocation tails are disabled.
pub const OPENER_PLAIN: &str = "function ()";

/// Replace the first code occurrence of [`CLOSURE_KEYWORD`] on the line with
/// the anonymous-function opener, marking every inserted character as
/// synthetic code and flagging the line as opening a closure. Returns
/// whether a rewrite happened.
pub fn rewrite_keyword(line: &mut DraftLine, invocation_tail: bool) -> bool {
    let keyword: Vec<char> = CLOSURE_KEYWORD.chars().collect();
    let opener = if invocation_tail {
        OPENER_INVOKED
    } else {
        OPENER_PLAIN
    };

    // Non-overlapping forward scan for the token text.
    let mut ii = 0;
    while ii + keyword.len() <= line.chars.len() {
        if line.chars[ii..ii + keyword.len()] == keyword[..] {
            if line.classes[ii].is_code() {
                line.chars
                    .splice(ii..ii + keyword.len(), opener.chars());
                line.classes.splice(
                    ii..ii + keyword.len(),
                    opener.chars().map(|_| CharClass::Synthetic),
                );
                line.opens_closure = true;
                return true;
            }
            ii += keyword.len();
        } else {
            ii += 1;
        }
    }

    false
}
