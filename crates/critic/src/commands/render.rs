//! `critic render` command implementation.

use std::path::PathBuf;

use clap::Args;
use critic_config::{CliSettings, Config};
use critic_renderer::{RenderResult, render_with_stats};

use crate::error::CliError;
use crate::io::{is_file, read_input, write_output};
use crate::markdown::markdown_to_html;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Input document (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Convert Markdown to HTML after rendering (overrides config).
    #[arg(long, conflicts_with = "no_markdown")]
    markdown: bool,

    /// Leave the rendered result as Markdown (overrides config).
    #[arg(long)]
    no_markdown: bool,

    /// Print counts of rendered markup to stderr.
    #[arg(long)]
    stats: bool,

    /// Path to configuration file (default: auto-discover critic.toml).
    #[arg(short, long, env = "CRITIC_CONFIG")]
    config: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), Some(&self.cli_settings()))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }

        let source = read_input(self.input.as_deref())?;
        let RenderResult { html, stats } = render_with_stats(&source);
        let html = if config.render.markdown {
            markdown_to_html(&html, config.render.gfm)
        } else {
            html
        };

        write_output(self.output.as_deref(), &html)?;

        if config.output.stats {
            output.stats(&stats);
        }
        if let Some(path) = self.output.as_deref()
            && is_file(path)
        {
            output.success(&format!("Rendered to {}", path.display()));
        }
        Ok(())
    }

    fn cli_settings(&self) -> CliSettings {
        let markdown = if self.markdown {
            Some(true)
        } else if self.no_markdown {
            Some(false)
        } else {
            None
        };
        CliSettings {
            markdown,
            stats: self.stats.then_some(true),
        }
    }
}
