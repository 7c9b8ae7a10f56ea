//! Development tasks for the feudal catalog
//!
//! This binary provides catalog inspection and validation using the
//! cargo-xtask pattern. Run with: `cargo xtask <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{CheckStats, CheckTransition, Lint, List, Transitions};

/// Development tasks for the feudal catalog
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Catalog tools for feudal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List species, classes, genders or vocations
    List(List),

    /// Build the catalog and report data problems
    Lint(Lint),

    /// Check a stat vector against a species/class pair
    CheckStats(CheckStats),

    /// Check a single class transition
    CheckTransition(CheckTransition),

    /// Show where a class can go next and how it was reached
    Transitions(Transitions),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for FEUDAL_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Lint(cmd) => cmd.execute(),
        Command::CheckStats(cmd) => cmd.execute(),
        Command::CheckTransition(cmd) => cmd.execute(),
        Command::Transitions(cmd) => cmd.execute(),
    }
}
