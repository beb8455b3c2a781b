//! `critic accept` and `critic reject` command implementation.

use std::path::PathBuf;

use clap::Args;
use critic_renderer::Mode;

use crate::error::CliError;
use crate::io::{is_file, read_input, write_output};
use crate::output::Output;

/// Arguments for the accept and reject commands.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Input document (default: stdin).
    input: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ResolveArgs {
    pub(crate) fn execute(self, mode: Mode) -> Result<(), CliError> {
        let output = Output::new();

        let source = read_input(self.input.as_deref())?;
        let resolved = mode.apply(&source);
        tracing::info!(
            %mode,
            input_len = source.len(),
            output_len = resolved.len(),
            "Resolved changes"
        );

        write_output(self.output.as_deref(), &resolved)?;

        if let Some(path) = self.output.as_deref()
            && is_file(path)
        {
            output.success(&format!("Resolved ({mode}) to {}", path.display()));
        }
        Ok(())
    }
}
