//! Fixed CriticMarkup patterns.
//!
//! The `regex` crate has no lookaround. Attached comments (which need a
//! lookbehind on the closing delimiter) are found by [`attached_comments`],
//! a scan that only tries positions right after a delimiter. The `~~}`
//! lookahead of a substitution is checked by [`check_substitution`].

use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::replace::Candidate;

/// `{++value++}` with optional `[meta]` before the closing brace.
pub(crate) static ADDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{\+\+(?<value>.*?)\+\+[ \t]*(?:\[(?<meta>.*?)\])?[ \t]*\}").unwrap()
});

/// `{--value--}` with optional `[meta]` before the closing brace.
pub(crate) static DELETION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{--(?<value>.*?)--[ \t]*(?:\[(?<meta>.*?)\])?[ \t]*\}").unwrap()
});

/// `{~~original~>new~~}`.
///
/// `original` cannot contain `>`, so it always ends at the first `~>`.
/// Candidates must go through [`check_substitution`].
pub(crate) static SUBSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\{~~(?<original>[^>]+)~>(?<new>.+?)~~\}").unwrap()
});

/// `{>>comment<<}`.
pub(crate) static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{>>(?<value>.*?)<<\}").unwrap());

/// `{==value==}`.
pub(crate) static HIGHLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{==(?<value>.*?)==\}").unwrap());

/// Bytes that, followed by `}`, close a CriticMarkup construct.
const CLOSING_MARKS: &[u8] = b"-+=~<";

const COMMENT_OPEN: &str = "{>>";
const COMMENT_CLOSE: &str = "<<}";

/// A comment attached to the change before it.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct AttachedComment<'t> {
    /// Blanks before the comment plus the comment itself.
    pub range: Range<usize>,
    /// Text between `{>>` and `<<}`.
    pub body: &'t str,
}

/// Text of a named group, empty when the group did not participate.
pub(crate) fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// Accept every candidate.
pub(crate) fn any(_caps: &Captures<'_>) -> Candidate {
    Candidate::Accept
}

/// Find every `{>>comment<<}` that sits right after `-}`, `+}`, `=}`, `~}`
/// or `<}`, with only spaces or tabs in between.
///
/// Delimiters are looked up in `text` as given, so a comment following
/// another comment's `<<}` is attached too. Matches never overlap. Only
/// positions after a delimiter are tried, and the closing `<<}` search
/// never goes over the same bytes twice, so the scan is linear.
pub(crate) fn attached_comments(text: &str) -> Vec<AttachedComment<'_>> {
    let bytes = text.as_bytes();
    let mut comments = Vec::new();
    let mut next_close: Option<usize> = None;
    let mut resume = 0;

    for (brace, _) in text.match_indices('}') {
        let start = brace + 1;
        if start < resume || brace == 0 || !CLOSING_MARKS.contains(&bytes[brace - 1]) {
            continue;
        }

        let blanks = bytes[start..]
            .iter()
            .take_while(|b| matches!(b, b' ' | b'\t'))
            .count();
        let open = start + blanks;
        if !text[open..].starts_with(COMMENT_OPEN) {
            continue;
        }

        let body_start = open + COMMENT_OPEN.len();
        if next_close.is_none_or(|close| close < body_start) {
            next_close = text[body_start..]
                .find(COMMENT_CLOSE)
                .map(|offset| body_start + offset);
        }
        // No `<<}` from here on: no later comment can close either.
        let Some(close) = next_close else {
            break;
        };

        resume = close + COMMENT_CLOSE.len();
        comments.push(AttachedComment {
            range: start..resume,
            body: &text[body_start..close],
        });
    }

    comments
}

/// Reject a substitution whose `new` part would begin with a closing `~~}`.
///
/// `new` must end at the first `~~}`; the lazy `.+?` skips one that starts
/// right after the divider, which leaves it as a prefix of the capture.
/// Every opener before that divider shares it and fails the same way, so
/// the search resumes where `new` starts.
pub(crate) fn check_substitution(caps: &Captures<'_>) -> Candidate {
    match caps.name("new") {
        Some(new) if new.as_str().starts_with("~~}") => Candidate::SkipTo(new.start()),
        _ => Candidate::Accept,
    }
}
