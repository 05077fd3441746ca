//! Shelf CLI - sidebar navigation resolver.
//!
//! Provides commands for:
//! - `sidebar`: Resolve the sidebar and write the site manifest as JSON
//! - `check`: Resolve the sidebar and report its shape

mod commands;
mod error;
mod manifest;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, SidebarArgs};
use output::Output;

/// Shelf - sidebar navigation resolver for documentation sites.
#[derive(Parser)]
#[command(name = "shelf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the sidebar and write the site manifest as JSON.
    Sidebar(SidebarArgs),
    /// Resolve the sidebar and report sections, links and depth.
    Check(CheckArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::Sidebar(args) => args.resolve.verbose,
            Self::Check(args) => args.resolve.verbose,
        }
    }
}

/// Log level used when neither `--verbose` nor a valid `RUST_LOG` is given.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the log filter.
///
/// `--verbose` enables INFO level, otherwise use `RUST_LOG` or default to WARN
/// so skipped pages and unreadable front matter are always reported.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.command.verbose(), rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Sidebar(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
