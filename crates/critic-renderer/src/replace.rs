//! Whole-buffer match replacement shared by every pass.

use regex::{Captures, Regex};

use crate::patterns::AttachedComment;

/// Output of one replacement run.
#[derive(Debug)]
pub(crate) struct Replaced {
    /// Rebuilt text.
    pub text: String,
    /// Number of matches that were replaced.
    pub count: usize,
}

/// Verdict on a regex candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Candidate {
    /// Replace the match.
    Accept,
    /// Keep the text and search again from this byte offset.
    SkipTo(usize),
}

/// Rebuild `text`, replacing every accepted match of `pattern`.
///
/// Matches are taken leftmost first and never overlap. Text between matches
/// is copied verbatim. A skipped candidate resumes the search at the offset
/// it names, or one character on if that would not advance.
pub(crate) fn replace_matches<C, F>(pattern: &Regex, text: &str, check: C, mut render: F) -> Replaced
where
    C: Fn(&Captures<'_>) -> Candidate,
    F: FnMut(&Captures<'_>) -> String,
{
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;
    let mut count = 0;

    while let Some(caps) = pattern.captures_at(text, search) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        match check(&caps) {
            Candidate::Accept => {
                output.push_str(&text[copied..whole.start()]);
                output.push_str(&render(&caps));
                copied = whole.end();
                search = whole.end();
                count += 1;
            }
            Candidate::SkipTo(offset) => {
                let width = text[whole.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                search = offset.max(whole.start() + width);
            }
        }
    }

    output.push_str(&text[copied..]);
    Replaced {
        text: output,
        count,
    }
}

/// Rebuild `text`, replacing each attached comment with `render(body)`.
///
/// `comments` must be ordered and non-overlapping, as
/// [`attached_comments`](crate::patterns::attached_comments) returns them.
pub(crate) fn replace_comments<F>(text: &str, comments: &[AttachedComment<'_>], mut render: F) -> Replaced
where
    F: FnMut(&str) -> String,
{
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;

    for comment in comments {
        output.push_str(&text[copied..comment.range.start]);
        output.push_str(&render(comment.body));
        copied = comment.range.end;
    }

    output.push_str(&text[copied..]);
    Replaced {
        text: output,
        count: comments.len(),
    }
}
