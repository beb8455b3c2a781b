//! Rewrite passes of the HTML render pipeline.

use regex::{Captures, Regex};

use crate::patterns::{
    ADDITION, COMMENT, DELETION, HIGHLIGHT, SUBSTITUTION, any, attached_comments,
    check_substitution, group,
};
use crate::replace::{Replaced, replace_comments, replace_matches};

/// Separator between paragraphs inside a change.
const PARAGRAPH_BREAK: &str = "\n\n";

/// Rendered marker for an inserted paragraph break.
const BREAK_MARKER: &str =
    "\n\n<span style=\"display:none\"></span><ins class=\"crit criticbreak\">&nbsp;</ins>\n\n";

/// Rendered deletion of a bare paragraph break.
const DELETED_BREAK: &str = "<del>&nbsp;</del>";

/// The render pipeline, in application order.
///
/// Additions run twice: the second run picks up additions that only become
/// well-formed once the first run and the comment/highlight passes have
/// rewritten the text around them (e.g. `{++{++x++}++}`).
pub(crate) const PIPELINE: [Pass; 7] = [
    Pass::AttachedComment,
    Pass::Deletion,
    Pass::Addition,
    Pass::Comment,
    Pass::Highlight,
    Pass::Addition,
    Pass::Substitution,
];

/// A single rewrite over the whole working buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Pass {
    /// Comment right after a closing delimiter, rendered as a dagger tooltip.
    AttachedComment,
    /// `{--value--}`.
    Deletion,
    /// `{++value++}`.
    Addition,
    /// Any remaining `{>>comment<<}`, rendered inline.
    Comment,
    /// `{==value==}`.
    Highlight,
    /// `{~~original~>new~~}`.
    Substitution,
}

/// Per-call counter for substitution identifiers (`sub1`, `sub2`, ...).
#[derive(Debug, Default)]
pub(crate) struct SubstitutionCounter {
    value: usize,
}

impl SubstitutionCounter {
    /// Advance and return the new value.
    pub(crate) fn next(&mut self) -> usize {
        self.value += 1;
        self.value
    }
}

impl Pass {
    /// Short name used in log events.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::AttachedComment => "attached_comment",
            Self::Deletion => "deletion",
            Self::Addition => "addition",
            Self::Comment => "comment",
            Self::Highlight => "highlight",
            Self::Substitution => "substitution",
        }
    }

    /// Apply the pass to `text`.
    pub(crate) fn apply(self, text: &str, counter: &mut SubstitutionCounter) -> Replaced {
        match self {
            Self::AttachedComment => replace_comments(text, &attached_comments(text), |body| {
                format!(
                    "<span class=\"critic criticcomment inline\" data-comment=\"{}\">&dagger;</span>",
                    flatten(body)
                )
            }),
            Self::Deletion => rewrite(&DELETION, text, |caps| {
                render_deletion(group(caps, "value"))
            }),
            Self::Addition => rewrite(&ADDITION, text, |caps| {
                render_addition(group(caps, "value"))
            }),
            Self::Comment => rewrite(&COMMENT, text, |caps| {
                format!(
                    "<span class=\"critic criticcomment\">{}</span>",
                    flatten(group(caps, "value"))
                )
            }),
            Self::Highlight => rewrite(&HIGHLIGHT, text, |caps| {
                format!("<mark class=\"crit\">{}</mark>", group(caps, "value"))
            }),
            Self::Substitution => {
                replace_matches(&SUBSTITUTION, text, check_substitution, |caps| {
                    let id = counter.next();
                    format!(
                        "<del class=\"crit\" data-subout=\"sub{id}\">{}</del><ins class=\"crit\" id=\"sub{id}\">{}</ins>",
                        group(caps, "original"),
                        group(caps, "new")
                    )
                })
            }
        }
    }
}

/// Replace every match of `pattern`, with no extra acceptance check.
fn rewrite<F>(pattern: &Regex, text: &str, render: F) -> Replaced
where
    F: FnMut(&Captures<'_>) -> String,
{
    replace_matches(pattern, text, any, render)
}

/// Comments render on one line.
fn flatten(comment: &str) -> String {
    comment.replace('\n', " ")
}

/// Wrap each paragraph of `value` in its own `open`/`close` pair.
fn wrap_paragraphs(value: &str, open: &str, close: &str) -> String {
    value
        .split(PARAGRAPH_BREAK)
        .map(|paragraph| format!("{open}{paragraph}{close}"))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK)
}

fn render_deletion(value: &str) -> String {
    if value == PARAGRAPH_BREAK {
        DELETED_BREAK.to_owned()
    } else {
        wrap_paragraphs(value, "<del class=\"crit\">", "</del>")
    }
}

/// A leading or trailing break is dropped before wrapping: no empty
/// `<ins class="crit"></ins>` is emitted next to the break marker.
fn render_addition(value: &str) -> String {
    const OPEN: &str = "<ins class=\"crit\">";
    const CLOSE: &str = "</ins>";

    if value == PARAGRAPH_BREAK {
        BREAK_MARKER.to_owned()
    } else if let Some(rest) = value.strip_prefix(PARAGRAPH_BREAK) {
        format!("{BREAK_MARKER}{}", wrap_paragraphs(rest, OPEN, CLOSE))
    } else if let Some(rest) = value.strip_suffix(PARAGRAPH_BREAK) {
        format!("{}{BREAK_MARKER}", wrap_paragraphs(rest, OPEN, CLOSE))
    } else {
        wrap_paragraphs(value, OPEN, CLOSE)
    }
}
