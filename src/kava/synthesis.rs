//! Brace synthesis
//!
//! The structural core of the translator. Given the prepared lines with
//! resolved indentation levels, two passes turn level changes into braces:
//!
//! - The opening pass walks adjacent content-bearing pairs forward and, when
//!   the next content line is one level deeper, strips the earlier line's
//!   trailing colon and attaches an opening brace after its rightmost
//!   content character (trailing comments shift right).
//! - The closing pass walks the same pairs with a level-0 sentinel at the
//!   end and, when the level drops, splices in one synthesized closing line
//!   per closed level, innermost first. Each closed level's brace carries a
//!   `)();` invocation tail iff the line that opened the level is a closure
//!   and invocation tails are enabled.
//!
//! The opening pass must fully complete before the closing pass begins: the
//! closing pass's parent lookup reads closure flags the rewriter set earlier
//! and level layout the opening pass must not disturb. The closing pass
//! never mutates the list it walks; it appends into a fresh output sequence.

use crate::kava::pipeline::TranslateError;
use crate::kava::resolving::INDENT_WIDTH;
use crate::kava::rewriting::trailing_colon::remove_trailing_colon;
use crate::kava::rewriting::DraftLine;
use crate::kava::scanning::CharClass;

/// One line of the translated output.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutputLine {
    /// Source line number, or `None` for synthesized lines.
    pub number: Option<usize>,

    /// The final text of the line.
    pub text: String,

    /// One legend character per character of `text` (see
    /// [`CharClass::legend`]).
    pub classes: String,
}

impl OutputLine {
    fn from_draft(draft: &DraftLine) -> OutputLine {
        OutputLine {
            number: Some(draft.number()),
            text: draft.text(),
            classes: draft
                .classes
                .iter()
                .map(|class| class.legend())
                .collect(),
        }
    }

    /// A synthesized closing-brace line at the given level, with an
    /// invocation tail when the closed block is an invoked closure.
    fn closer(level: usize, invoked: bool) -> OutputLine {
        let body = if invoked { "})();" } else { "}" };
        let mut chars = vec![' '; level * INDENT_WIDTH];
        let mut classes = vec![CharClass::Whitespace; level * INDENT_WIDTH];
        chars.extend(body.chars());
        classes.extend(body.chars().map(|_| CharClass::Synthetic));
        OutputLine {
            number: None,
            text: chars.into_iter().collect(),
            classes: classes.iter().map(|class| class.legend()).collect(),
        }
    }
}

/// Attach an opening brace to a line whose block is about to begin: drop the
/// optional trailing colon, then insert ` {` right after the rightmost
/// content character, pushing any trailing comment one position right.
fn attach_opening_brace(line: &mut DraftLine) {
    remove_trailing_colon(line);
    let at = match line.rightmost_content() {
        Some(ii) => ii + 1,
        // Content-bearing lines always have a rightmost content character.
        None => return,
    };
    line.chars.splice(at..at, [' ', '{']);
    line.classes
        .splice(at..at, [CharClass::Whitespace, CharClass::Synthetic]);
}

/// Run both passes over the prepared lines and build the output sequence.
///
/// Lines without a resolved level (comments, blanks) are carried through
/// verbatim in their original positions; synthesized closers land
/// immediately after the content line that ends their block.
pub fn synthesize(
    mut drafts: Vec<DraftLine>,
    invocation_tail: bool,
) -> Result<Vec<OutputLine>, TranslateError> {
    // Positions and levels of the content-bearing lines, in order.
    let content: Vec<(usize, usize)> = drafts
        .iter()
        .enumerate()
        .filter_map(|(ii, draft)| draft.indent().map(|level| (ii, level)))
        .collect();

    // Opening pass.
    for pair in content.windows(2) {
        let ((a, level_a), (_, level_b)) = (pair[0], pair[1]);
        if level_b > level_a {
            attach_opening_brace(&mut drafts[a]);
        }
    }

    // Closing pass, against a level-0 sentinel after the last content line.
    let mut output = Vec::with_capacity(drafts.len());
    let mut cursor = 0;
    for (ii, draft) in drafts.iter().enumerate() {
        output.push(OutputLine::from_draft(draft));

        if cursor < content.len() && content[cursor].0 == ii {
            let level = content[cursor].1;
            let following = content
                .get(cursor + 1)
                .map(|&(_, next_level)| next_level)
                .unwrap_or(0);
            if level > following {
                // Close the innermost level first, working outward.
                for closed in (following..level).rev() {
                    let parent = find_parent(&content, cursor, closed).ok_or(
                        TranslateError::MissingParent {
                            level: closed,
                            line_number: draft.number(),
                        },
                    )?;
                    let invoked = drafts[parent].opens_closure() && invocation_tail;
                    output.push(OutputLine::closer(closed, invoked));
                }
            }
            cursor += 1;
        }
    }

    Ok(output)
}

/// Find the line that opened the level being closed: the nearest content
/// line before position `from` (an index into `content`) whose level is
/// exactly `level`. Returns an index into the draft list.
fn find_parent(content: &[(usize, usize)], from: usize, level: usize) -> Option<usize> {
    content[..from]
        .iter()
        .rev()
        .find(|&&(_, l)| l == level)
        .map(|&(ii, _)| ii)
}
