//! Text rendering of the plan report

use std::io::Write;

use super::{Summary, Tally};
use crate::plan::{MappingPlan, DIRECTORY_STRUCTURE_KEY};
use crate::{Error, Result};

/// Presentation options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Prefix section headings with pictographs
    pub emoji: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self { emoji: true }
    }
}

impl Style {
    pub fn plain() -> Self {
        Self { emoji: false }
    }

    fn heading(&self, icon: &str, text: &str) -> String {
        if self.emoji {
            format!("{} {}", icon, text)
        } else {
            text.to_string()
        }
    }
}

/// Title line printed before the plan is loaded
pub fn render_banner<W: Write>(style: &Style, out: &mut W) -> Result<()> {
    writeln!(out, "{}", style.heading("🔍", "Monorepo Mapping Plan Validator"))?;
    writeln!(out)?;
    Ok(())
}

/// Write every report section after the banner
///
/// A plan without a directory structure fails after the heading of that
/// section; the sections before it stay written.
pub fn render<W: Write>(
    plan: &MappingPlan,
    summary: &Summary,
    style: &Style,
    out: &mut W,
) -> Result<()> {
    render_categories(plan, style, out)?;
    render_statistics(summary, style, out)?;
    render_directory_structure(plan, style, out)?;
    render_high_priority(plan, style, out)?;

    writeln!(
        out,
        "{}",
        style.heading("✅", "Validation Complete - Plan is ready for implementation!")
    )?;
    writeln!(out)?;
    Ok(())
}

/// The single failure line
pub fn render_failure<W: Write>(
    message: &impl std::fmt::Display,
    style: &Style,
    err: &mut W,
) -> Result<()> {
    writeln!(err, "{} {}", style.heading("❌", "Validation failed:"), message)?;
    Ok(())
}

fn render_categories<W: Write>(plan: &MappingPlan, style: &Style, out: &mut W) -> Result<()> {
    writeln!(out, "{}", style.heading("📊", "Summary by Category:"))?;
    writeln!(out)?;

    for category in plan.categories() {
        writeln!(out, "{}:", category.heading())?;
        if let Some(description) = &category.category_description {
            writeln!(out, "  Description: {}", description)?;
        }
        writeln!(out, "  Repositories: {}", category.repositories.len())?;
        if let Some(subset) = &category.recommended_subset {
            writeln!(out, "  Recommended subset: {}", subset.join(", "))?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn render_statistics<W: Write>(summary: &Summary, style: &Style, out: &mut W) -> Result<()> {
    writeln!(out, "{}", style.heading("📈", "Overall Statistics:"))?;
    writeln!(out)?;
    writeln!(out, "Total Repositories: {}", summary.total_repositories)?;
    writeln!(out)?;

    render_tally("Migration Methods:", &summary.methods, out)?;
    render_tally("Priority Distribution:", &summary.priorities, out)?;
    render_tally("Language Distribution:", &summary.languages, out)?;
    Ok(())
}

fn render_tally<W: Write>(title: &str, tally: &Tally, out: &mut W) -> Result<()> {
    writeln!(out, "{}", title)?;
    for (key, count) in tally.iter() {
        writeln!(out, "  {}: {}", key, count)?;
    }
    writeln!(out)?;
    Ok(())
}

fn render_directory_structure<W: Write>(
    plan: &MappingPlan,
    style: &Style,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", style.heading("🏗️", "Proposed Directory Structure:"))?;
    writeln!(out)?;

    let structure = plan
        .directory_structure()
        .ok_or_else(|| Error::Plan(format!("missing `{}` entry", DIRECTORY_STRUCTURE_KEY)))?;

    for (dir, items) in structure {
        writeln!(out, "{}", dir)?;
        for item in items {
            writeln!(out, "  ├── {}/", item)?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn render_high_priority<W: Write>(plan: &MappingPlan, style: &Style, out: &mut W) -> Result<()> {
    writeln!(out, "{}", style.heading("🎯", "High Priority Migrations (Phase 1):"))?;
    writeln!(out)?;

    for category in plan.categories() {
        let mut repos = category.high_priority().peekable();
        if repos.peek().is_none() {
            continue;
        }

        writeln!(out, "{}:", category.heading())?;
        for repo in repos {
            writeln!(
                out,
                "  - {} → {} ({})",
                repo.repo_name(),
                repo.destination_path(),
                repo.migration_method()
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}
