//! nvdoc command-line interface.

mod commands;

use clap::{Parser, Subcommand};
use commands::ScanArgs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nvdoc", version, about = "Collect PHP class metadata for documentation")]
struct Cli {
    /// Project root containing composer.json
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print metadata for every class under DIR as JSON
    Scan {
        #[command(flatten)]
        scan: ScanArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List the classes resolved under DIR
    Classes {
        #[command(flatten)]
        scan: ScanArgs,
        /// Output as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Show the PSR-4 namespace map
    Namespaces {
        /// Include autoload-dev namespaces
        #[arg(long)]
        dev: bool,
    },
    /// Print the project's package version
    Version,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan { scan, pretty } => commands::cmd_scan(&cli.root, &scan, pretty),
        Command::Classes { scan, json } => commands::cmd_classes(&cli.root, &scan, json),
        Command::Namespaces { dev } => commands::cmd_namespaces(&cli.root, dev),
        Command::Version => commands::cmd_version(&cli.root),
    }
}
