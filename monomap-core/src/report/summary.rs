//! Aggregate counts over a plan

use serde::Serialize;

use super::Tally;
use crate::plan::MappingPlan;

/// Overall statistics for a mapping plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Repositories across all categories
    pub total_repositories: usize,
    /// Counts per migration method, first-seen order
    pub methods: Tally,
    /// Counts per priority, fixed buckets first
    pub priorities: Tally,
    /// Counts per language, first-seen order
    pub languages: Tally,
}

impl Summary {
    /// Tally every repository of every category in a single pass
    pub fn from_plan(plan: &MappingPlan) -> Self {
        let mut summary = Self {
            total_repositories: 0,
            methods: Tally::new(),
            priorities: Tally::priorities(),
            languages: Tally::new(),
        };

        for repo in plan.categories().iter().flat_map(|c| &c.repositories) {
            summary.total_repositories += 1;
            summary.methods.increment(repo.migration_method());
            summary.priorities.increment(repo.priority());
            summary.languages.increment(repo.language());
        }

        summary
    }
}
