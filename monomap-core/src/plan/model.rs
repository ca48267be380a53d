//! Typed mapping plan

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Priority buckets that always appear in the priority distribution, in order
pub const PRIORITY_BUCKETS: [&str; 4] = ["high", "medium", "low", "archive"];

/// Priority value selected for the phase 1 migration list
pub const HIGH_PRIORITY: &str = "high";

/// Rendered in place of a repository field the plan leaves out
pub const UNSPECIFIED: &str = "(unspecified)";

/// A repository mapped into the monorepo
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Name of the source repository
    pub repo_name: Option<String>,
    /// Target path in the new layout
    pub destination_path: Option<String>,
    /// Migration strategy label (e.g. "copy", "rewrite")
    pub migration_method: Option<String>,
    /// Expected to be one of [`PRIORITY_BUCKETS`], not enforced
    pub priority: Option<String>,
    /// Source language label
    pub language: Option<String>,
}

impl RepoEntry {
    pub fn repo_name(&self) -> &str {
        self.repo_name.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn destination_path(&self) -> &str {
        self.destination_path.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn migration_method(&self) -> &str {
        self.migration_method.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn priority(&self) -> &str {
        self.priority.as_deref().unwrap_or(UNSPECIFIED)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(UNSPECIFIED)
    }

    /// Whether this repository belongs in the phase 1 list
    pub fn is_high_priority(&self) -> bool {
        self.priority.as_deref() == Some(HIGH_PRIORITY)
    }
}

/// A plan entry carrying a `repositories` list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Key of the entry in the plan document
    #[serde(skip)]
    pub key: String,
    /// Free-text description
    pub category_description: Option<String>,
    /// Repositories in document order
    pub repositories: Vec<RepoEntry>,
    /// Suggested subset to migrate first
    pub recommended_subset: Option<Vec<String>>,
}

impl Category {
    /// Display heading: underscores become spaces, upper-cased
    ///
    /// `core_services` renders as `CORE SERVICES`.
    pub fn heading(&self) -> String {
        self.key.replace('_', " ").to_uppercase()
    }

    /// Repositories whose priority is exactly `high`, in document order
    pub fn high_priority(&self) -> impl Iterator<Item = &RepoEntry> {
        self.repositories.iter().filter(|repo| repo.is_high_priority())
    }
}

/// A loaded mapping plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingPlan {
    pub(crate) categories: Vec<Category>,
    pub(crate) directory_structure: Option<IndexMap<String, Vec<String>>>,
    pub(crate) metadata_keys: Vec<String>,
}

impl MappingPlan {
    /// Categories in document order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Proposed directory layout: directory to sub-items, in document order
    ///
    /// `None` when the plan has no `directory_structure` entry.
    pub fn directory_structure(&self) -> Option<&IndexMap<String, Vec<String>>> {
        self.directory_structure.as_ref()
    }

    /// Keys of entries that are neither categories nor the directory structure
    pub fn metadata_keys(&self) -> &[String] {
        &self.metadata_keys
    }

    /// Sum of repository counts across all categories
    pub fn total_repositories(&self) -> usize {
        self.categories.iter().map(|c| c.repositories.len()).sum()
    }
}
