//! Report command - summarize a monorepo mapping plan

use std::path::PathBuf;

use clap::Args;
use monomap_core::Config;

/// Arguments for the report (the default command)
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Plan file (defaults to monorepo-mapping-plan.json next to the executable)
    #[arg(long, global = true, env = "MONOMAP_PLAN")]
    pub plan: Option<PathBuf>,

    /// Plain section headings without emoji
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Exit with a non-zero status when the report fails
    #[arg(long)]
    pub strict: bool,
}

impl ReportArgs {
    /// Execute the report, returning whether it completed
    pub fn execute(&self, verbose: bool, config: &Config) -> bool {
        let reporter = config.reporter();

        if verbose {
            tracing::info!(
                plan = %reporter.plan_path().display(),
                emoji = reporter.style().emoji,
                strict = self.strict,
                "Starting mapping plan report"
            );
        }

        let ok = reporter.run();

        if verbose && !ok {
            tracing::info!("Report failed; see error output");
        }

        ok
    }
}
