//! Plan reporter: load, tally, print

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::plan::{default_plan_path, load_plan};
use crate::report::{render, render_banner, render_failure, Style, Summary};
use crate::Result;

/// Produces the mapping plan report for one plan file
#[derive(Debug, Clone)]
pub struct Reporter {
    plan_path: PathBuf,
    style: Style,
}

impl Reporter {
    pub fn new(plan_path: impl Into<PathBuf>) -> Self {
        Self {
            plan_path: plan_path.into(),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn plan_path(&self) -> &Path {
        &self.plan_path
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Report to the process stdout and stderr
    pub fn run(&self) -> bool {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_to(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Report to the given sinks
    ///
    /// Returns `true` on success. On failure exactly one line is written to
    /// `err` and `false` is returned; whatever already reached `out` stays.
    pub fn run_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> bool {
        match self.try_run(out) {
            Ok(summary) => {
                info!(
                    plan = %self.plan_path.display(),
                    repositories = summary.total_repositories,
                    "Mapping plan report complete"
                );
                true
            }
            Err(e) => {
                debug!(plan = %self.plan_path.display(), error = ?e, "Mapping plan report failed");
                // Nowhere left to report a failing error sink.
                let _ = render_failure(&e, &self.style, err);
                false
            }
        }
    }

    fn try_run<O: Write>(&self, out: &mut O) -> Result<Summary> {
        render_banner(&self.style, out)?;

        let plan = load_plan(&self.plan_path)?;
        let summary = Summary::from_plan(&plan);
        render(&plan, &summary, &self.style, out)?;
        out.flush()?;

        Ok(summary)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(default_plan_path())
    }
}

/// Report on the plan stored next to the executable
///
/// Returns whether the report completed; failures are printed, never raised.
pub fn run() -> bool {
    Reporter::default().run()
}
