//! Visconde CLI - Literate Programming Tangler

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use visconde::commands::{self, TangleOptions};
use visconde::interface::Context;

#[derive(Parser)]
#[command(name = "visconde")]
#[command(author, version, about = "Literate programming tangler", long_about = None)]
struct Cli {
    /// Literate source document
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides the configuration file)
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,

    /// Dry run - show what would be written without writing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only print warnings
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the banner and progress lines
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config_dir = cli
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let config = match cli.config {
        Some(ref path) => visconde::config::read_config_file(path),
        None => visconde::config::read_config(&base_dir.join(config_dir)),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(directory) = cli.directory {
        config.output_dir = Some(directory);
    }

    let ctx = Context::new(config, base_dir);
    let options = TangleOptions {
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    };

    match commands::tangle(&ctx, &cli.file, &options) {
        Ok(report) => {
            tracing::debug!(
                "Wrote {} files, {} unresolved references",
                report.written.len(),
                report.missing.len()
            );
            if let Some(chunk) = report.unterminated {
                tracing::debug!(
                    "Dropped {} lines of unterminated chunk `{}`",
                    chunk.dropped_lines,
                    chunk.name
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
