//! Colored stderr reporting.
//!
//! Rendered documents may go to stdout, so every message here goes to stderr.

use console::{Style, Term};
use critic_renderer::MarkupStats;

/// Terminal reporter for command progress and results.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Report a document written to a file (green).
    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.green.apply_to(msg).to_string());
    }

    /// Report a failure (red).
    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.red.apply_to(msg).to_string());
    }

    /// Report counts of rendered markup, or a warning when there was none.
    pub(crate) fn stats(&self, stats: &MarkupStats) {
        if stats.total() == 0 {
            self.line(&self.yellow.apply_to("No CriticMarkup found").to_string());
            return;
        }

        let heading = format!("Rendered {} changes", stats.total());
        self.line(&self.cyan_bold.apply_to(heading).to_string());
        for (label, count) in stats_lines(stats) {
            self.line(&format!("  {label:<14}{count}"));
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }
}

fn stats_lines(stats: &MarkupStats) -> [(&'static str, usize); 5] {
    [
        ("insertions", stats.insertions),
        ("deletions", stats.deletions),
        ("substitutions", stats.substitutions),
        ("comments", stats.comments),
        ("highlights", stats.highlights),
    ]
}
