//! Accepting or rejecting every change in a document.

use crate::patterns::{
    ADDITION, COMMENT, DELETION, HIGHLIGHT, SUBSTITUTION, any, attached_comments,
    check_substitution, group,
};
use crate::replace::{replace_comments, replace_matches};

/// Which side of each change to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Keep additions and the new side of substitutions.
    Accept,
    /// Keep deletions and the original side of substitutions.
    Reject,
}

/// Strip CriticMarkup from `input`, keeping one side of every change.
///
/// Comments are removed, including blanks that attach a comment to the
/// change before it, and highlights are reduced to their text.
///
/// # Example
///
/// ```
/// use critic_renderer::{Resolution, resolve};
///
/// let text = "Hello {~~world~>there~~}{>>tone<<}!";
/// assert_eq!(resolve(text, Resolution::Accept), "Hello there!");
/// assert_eq!(resolve(text, Resolution::Reject), "Hello world!");
/// ```
#[must_use]
pub fn resolve(input: &str, resolution: Resolution) -> String {
    let accept = resolution == Resolution::Accept;

    let text = replace_comments(input, &attached_comments(input), |_| String::new());
    let text = replace_matches(&COMMENT, &text.text, any, |_| String::new());
    let text = replace_matches(&DELETION, &text.text, any, |caps| {
        if accept {
            String::new()
        } else {
            group(caps, "value").to_owned()
        }
    });
    let text = replace_matches(&ADDITION, &text.text, any, |caps| {
        if accept {
            group(caps, "value").to_owned()
        } else {
            String::new()
        }
    });
    let text = replace_matches(&HIGHLIGHT, &text.text, any, |caps| {
        group(caps, "value").to_owned()
    });
    let text = replace_matches(&SUBSTITUTION, &text.text, check_substitution, |caps| {
        let side = if accept { "new" } else { "original" };
        group(caps, side).to_owned()
    });

    tracing::trace!(?resolution, "Resolved CriticMarkup");
    text.text
}
