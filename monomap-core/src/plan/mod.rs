//! Mapping plan model and loading
//!
//! This module handles reading the `monorepo-mapping-plan.json` document
//! that describes how existing repositories map into the monorepo layout.

mod loader;
mod model;

pub use loader::{default_plan_path, load_plan, parse_plan, DIRECTORY_STRUCTURE_KEY, PLAN_FILE_NAME};
pub use model::{Category, MappingPlan, RepoEntry, HIGH_PRIORITY, PRIORITY_BUCKETS, UNSPECIFIED};
