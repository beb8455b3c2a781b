//! critic CLI - CriticMarkup renderer.
//!
//! Provides commands for:
//! - `render`: Render CriticMarkup to HTML
//! - `accept`: Keep every proposed change and strip the markup
//! - `reject`: Discard every proposed change and strip the markup

mod commands;
mod error;
mod io;
mod markdown;
mod output;

use clap::{Parser, Subcommand};
use critic_renderer::Mode;
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, ResolveArgs};
use output::Output;

/// critic - CriticMarkup renderer.
#[derive(Parser)]
#[command(name = "critic", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render CriticMarkup to HTML.
    Render(RenderArgs),
    /// Accept all changes and output plain text.
    Accept(ResolveArgs),
    /// Reject all changes and output plain text.
    Reject(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Accept(args) => args.execute(Mode::Accept),
        Commands::Reject(args) => args.execute(Mode::Reject),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
