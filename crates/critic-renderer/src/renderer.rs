//! CriticMarkup to HTML rendering.

use crate::pass::{PIPELINE, Pass, SubstitutionCounter};

/// Result of rendering CriticMarkup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered HTML fragment.
    pub html: String,
    /// Number of constructs rendered by kind.
    pub stats: MarkupStats,
}

/// Counts of rendered CriticMarkup constructs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarkupStats {
    /// `{++ ++}` additions, including those caught by the second addition pass.
    pub insertions: usize,
    /// `{-- --}` deletions.
    pub deletions: usize,
    /// `{~~ ~> ~~}` substitutions.
    pub substitutions: usize,
    /// `{>> <<}` comments, attached or standalone.
    pub comments: usize,
    /// `{== ==}` highlights.
    pub highlights: usize,
}

impl MarkupStats {
    /// Total number of rendered constructs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.insertions + self.deletions + self.substitutions + self.comments + self.highlights
    }

    fn record(&mut self, pass: Pass, count: usize) {
        let slot = match pass {
            Pass::AttachedComment | Pass::Comment => &mut self.comments,
            Pass::Deletion => &mut self.deletions,
            Pass::Addition => &mut self.insertions,
            Pass::Highlight => &mut self.highlights,
            Pass::Substitution => &mut self.substitutions,
        };
        *slot += count;
    }
}

/// Render CriticMarkup in `input` to HTML.
///
/// Text outside CriticMarkup is copied unchanged, and markup that does not
/// match (e.g. an unterminated `{++`) is left as literal text. Content inside
/// the markup is inserted without escaping.
///
/// # Example
///
/// ```
/// use critic_renderer::render;
///
/// assert_eq!(render("{++hello++}"), "<ins class=\"crit\">hello</ins>");
/// assert_eq!(
///     render("{~~old~>new~~}"),
///     "<del class=\"crit\" data-subout=\"sub1\">old</del><ins class=\"crit\" id=\"sub1\">new</ins>"
/// );
/// ```
#[must_use]
pub fn render(input: &str) -> String {
    render_with_stats(input).html
}

/// Render CriticMarkup in `input` and report what was rendered.
///
/// Substitution identifiers start from `sub1` on every call.
///
/// # Example
///
/// ```
/// use critic_renderer::render_with_stats;
///
/// let result = render_with_stats("{--a--} {--b--} {==c==}");
/// assert_eq!(result.stats.deletions, 2);
/// assert_eq!(result.stats.highlights, 1);
/// ```
#[must_use]
pub fn render_with_stats(input: &str) -> RenderResult {
    let mut counter = SubstitutionCounter::default();
    let mut stats = MarkupStats::default();
    let mut html = input.to_owned();

    for pass in PIPELINE {
        let replaced = pass.apply(&html, &mut counter);
        if replaced.count > 0 {
            tracing::debug!(pass = pass.name(), matches = replaced.count, "Applied pass");
            html = replaced.text;
        }
        stats.record(pass, replaced.count);
    }

    tracing::trace!(
        total = stats.total(),
        input_len = input.len(),
        output_len = html.len(),
        "Rendered CriticMarkup"
    );

    RenderResult { html, stats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BREAK_MARKER: &str =
        "\n\n<span style=\"display:none\"></span><ins class=\"crit criticbreak\">&nbsp;</ins>\n\n";

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Plain text with {braces}, ++pluses++, --dashes-- and <b>tags</b>.\n\nÜnïcødé ✓";
        assert_eq!(render(text), text);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_addition() {
        assert_eq!(render("{++hello++}"), "<ins class=\"crit\">hello</ins>");
    }

    #[test]
    fn test_deletion() {
        assert_eq!(render("{--goodbye--}"), "<del class=\"crit\">goodbye</del>");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(render("{==note==}"), "<mark class=\"crit\">note</mark>");
    }

    #[test]
    fn test_comment() {
        assert_eq!(
            render("{>>a comment<<}"),
            "<span class=\"critic criticcomment\">a comment</span>"
        );
    }

    #[test]
    fn test_substitution() {
        assert_eq!(
            render("{~~old~>new~~}"),
            "<del class=\"crit\" data-subout=\"sub1\">old</del><ins class=\"crit\" id=\"sub1\">new</ins>"
        );
    }

    #[test]
    fn test_substitutions_numbered_left_to_right() {
        assert_eq!(
            render("{~~a~>b~~} and {~~c~>d~~}"),
            "<del class=\"crit\" data-subout=\"sub1\">a</del><ins class=\"crit\" id=\"sub1\">b</ins> and \
             <del class=\"crit\" data-subout=\"sub2\">c</del><ins class=\"crit\" id=\"sub2\">d</ins>"
        );
    }

    #[test]
    fn test_counter_fresh_per_call() {
        let first = render("{~~a~>b~~}");
        let second = render("{~~a~>b~~}");
        assert_eq!(first, second);
        assert!(second.contains("sub1"));
        assert!(!second.contains("sub2"));
    }

    #[test]
    fn test_substitution_spans_lines() {
        assert_eq!(
            render("{~~one\ntwo~>three~~}"),
            "<del class=\"crit\" data-subout=\"sub1\">one\ntwo</del><ins class=\"crit\" id=\"sub1\">three</ins>"
        );
    }

    #[test]
    fn test_substitution_with_angle_bracket_in_original_is_literal() {
        assert_eq!(render("{~~a>b~>c~~}"), "{~~a>b~>c~~}");
    }

    #[test]
    fn test_addition_of_paragraph_break() {
        assert_eq!(render("{++\n\n++}"), BREAK_MARKER);
    }

    #[test]
    fn test_addition_across_paragraphs() {
        assert_eq!(
            render("{++one\n\ntwo++}"),
            "<ins class=\"crit\">one</ins>\n\n<ins class=\"crit\">two</ins>"
        );
    }

    #[test]
    fn test_addition_with_meta() {
        assert_eq!(
            render("{++text++[by:editor]}"),
            "<ins class=\"crit\">text</ins>"
        );
        assert_eq!(
            render("{--text-- [by:editor] }"),
            "<del class=\"crit\">text</del>"
        );
    }

    #[test]
    fn test_deletion_across_paragraphs() {
        assert_eq!(
            render("{--first\n\nsecond--}"),
            "<del class=\"crit\">first</del>\n\n<del class=\"crit\">second</del>"
        );
    }

    #[test]
    fn test_deletion_of_paragraph_break() {
        assert_eq!(render("end.{--\n\n--}Start"), "end.<del>&nbsp;</del>Start");
    }

    #[test]
    fn test_comment_after_addition_is_attached() {
        assert_eq!(
            render("{++added++}{>>why<<}"),
            "<ins class=\"crit\">added</ins>\
             <span class=\"critic criticcomment inline\" data-comment=\"why\">&dagger;</span>"
        );
    }

    #[test]
    fn test_comment_after_deletion_with_space_is_attached() {
        assert_eq!(
            render("{--gone--} {>>multi\nline<<}"),
            "<del class=\"crit\">gone</del>\
             <span class=\"critic criticcomment inline\" data-comment=\"multi line\">&dagger;</span>"
        );
    }

    #[test]
    fn test_comment_after_substitution_is_attached() {
        assert_eq!(
            render("{~~a~>b~~}{>>c<<}"),
            "<del class=\"crit\" data-subout=\"sub1\">a</del><ins class=\"crit\" id=\"sub1\">b</ins>\
             <span class=\"critic criticcomment inline\" data-comment=\"c\">&dagger;</span>"
        );
    }

    #[test]
    fn test_comment_after_highlight_is_attached() {
        assert_eq!(
            render("{==key==}{>>check<<}"),
            "<mark class=\"crit\">key</mark>\
             <span class=\"critic criticcomment inline\" data-comment=\"check\">&dagger;</span>"
        );
    }

    #[test]
    fn test_comment_after_text_is_standalone() {
        assert_eq!(
            render("Some text {>>note<<}"),
            "Some text <span class=\"critic criticcomment\">note</span>"
        );
    }

    #[test]
    fn test_many_comment_openers_render_linearly() {
        let input = format!("{}<<}}", "x{>>".repeat(20_000));
        let started = std::time::Instant::now();

        let html = render(&input);

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(
            html,
            format!(
                "x<span class=\"critic criticcomment\">{}</span>",
                &input[4..input.len() - 3]
            )
        );
    }

    #[test]
    fn test_many_delimiters_before_unclosed_comments() {
        let input = "{++a++}{>>".repeat(5_000);
        let started = std::time::Instant::now();

        let html = render(&input);

        assert!(started.elapsed() < std::time::Duration::from_secs(5));
        assert_eq!(html.matches("<ins class=\"crit\">a</ins>").count(), 5_000);
        assert!(!html.contains("&dagger;"));
    }

    #[test]
    fn test_nested_addition_needs_second_pass() {
        assert_eq!(
            render("{++{++x++}++}"),
            "<ins class=\"crit\"><ins class=\"crit\">x</ins></ins>"
        );
    }

    #[test]
    fn test_unterminated_markup_is_literal() {
        for text in ["{++open", "{--open", "{==open", "{>>open", "{~~a~>b", "{~~a~~}"] {
            assert_eq!(render(text), text);
        }
    }

    #[test]
    fn test_content_not_escaped() {
        assert_eq!(
            render("{++<b>&amp;</b>++}"),
            "<ins class=\"crit\"><b>&amp;</b></ins>"
        );
    }

    #[test]
    fn test_mixed_document() {
        let input = "The {~~quick~>slow~~} fox {++really ++}jumps {--high--}.\n\n{==Note==}{>>check this<<}";
        let expected = "The <del class=\"crit\" data-subout=\"sub1\">quick</del>\
                        <ins class=\"crit\" id=\"sub1\">slow</ins> fox \
                        <ins class=\"crit\">really </ins>jumps <del class=\"crit\">high</del>.\n\n\
                        <mark class=\"crit\">Note</mark>\
                        <span class=\"critic criticcomment inline\" data-comment=\"check this\">&dagger;</span>";
        assert_eq!(render(input), expected);
    }

    #[test]
    fn test_stats() {
        let result =
            render_with_stats("{++a++}{>>x<<} {--b--} {~~c~>d~~} {~~e~>f~~} {==g==} {>>y<<}");
        assert_eq!(
            result.stats,
            MarkupStats {
                insertions: 1,
                deletions: 1,
                substitutions: 2,
                comments: 2,
                highlights: 1,
            }
        );
        assert_eq!(result.stats.total(), 7);
    }

    #[test]
    fn test_stats_count_second_addition_pass() {
        let result = render_with_stats("{++{++x++}++}");
        assert_eq!(result.stats.insertions, 2);
    }

    #[test]
    fn test_stats_empty_for_plain_text() {
        let result = render_with_stats("nothing to see");
        assert_eq!(result.stats, MarkupStats::default());
        assert_eq!(result.html, "nothing to see");
    }
}
