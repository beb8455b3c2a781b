//! Markdown to HTML conversion of rendered documents.

use pulldown_cmark::{Options, Parser, html};

/// Convert Markdown to HTML.
///
/// CriticMarkup is rendered first, so its tags reach the parser as inline
/// HTML and pass through unchanged.
pub(crate) fn markdown_to_html(markdown: &str, gfm: bool) -> String {
    let options = if gfm {
        Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM
    } else {
        Options::empty()
    };

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, Parser::new_ext(markdown, options));
    output
}
