//! Monomap CLI - Command line interface for Monomap
//!
//! Summarizes a monorepo mapping plan: categories, overall statistics,
//! proposed directory structure and phase 1 migrations.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use monomap_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::ReportArgs;

/// Monomap: report on a monorepo mapping plan
#[derive(Parser, Debug)]
#[command(name = "monomap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    report: ReportArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing; stdout carries the report
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(cli.report.plan.clone(), cli.report.no_emoji)?;

    if cli.verbose {
        tracing::info!(
            plan_path = ?config.report.plan_path,
            emoji = config.report.emoji,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("monomap {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Config) => {
            commands::config::show(&config);
        }
        None => {
            let ok = cli.report.execute(cli.verbose, &config);
            if !ok && cli.report.strict {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
