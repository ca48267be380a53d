//! Mapping plan loader

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::model::{Category, MappingPlan};
use crate::{Error, Result};

/// File name of the plan, looked up next to the running executable
pub const PLAN_FILE_NAME: &str = "monorepo-mapping-plan.json";

/// Plan entry holding the proposed directory layout
pub const DIRECTORY_STRUCTURE_KEY: &str = "directory_structure";

#[derive(Debug, Deserialize)]
struct PlanDocument {
    monorepo_mapping_plan: IndexMap<String, Value>,
}

/// Default plan location: alongside the executable
///
/// Falls back to a path relative to the current directory when the
/// executable location is unavailable.
pub fn default_plan_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(PLAN_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(PLAN_FILE_NAME))
}

/// Read and parse a plan file
pub fn load_plan(path: &Path) -> Result<MappingPlan> {
    debug!(path = %path.display(), "Loading mapping plan");

    let content = std::fs::read_to_string(path).map_err(|source| Error::ReadPlan {
        path: path.to_path_buf(),
        source,
    })?;

    parse_plan(&content)
}

/// Parse plan JSON
///
/// An entry is a category when it is an object whose `repositories` field
/// is set to something other than `null`, `false`, `0` or `""`. A missing
/// `directory_structure` is left for the renderer to report.
pub fn parse_plan(content: &str) -> Result<MappingPlan> {
    let document: PlanDocument = serde_json::from_str(content)?;

    let mut plan = MappingPlan::default();
    let mut directory_structure: Option<IndexMap<String, Vec<String>>> = None;

    for (key, value) in document.monorepo_mapping_plan {
        if is_category(&value) {
            let mut category: Category = serde_json::from_value(value)
                .map_err(|e| Error::Plan(format!("category `{}`: {}", key, e)))?;
            category.key = key;
            plan.categories.push(category);
        } else if key == DIRECTORY_STRUCTURE_KEY {
            directory_structure = Some(
                serde_json::from_value(value)
                    .map_err(|e| Error::Plan(format!("`{}`: {}", DIRECTORY_STRUCTURE_KEY, e)))?,
            );
        } else {
            plan.metadata_keys.push(key);
        }
    }

    plan.directory_structure = directory_structure;

    debug!(
        categories = plan.categories.len(),
        directories = plan.directory_structure.as_ref().map(|d| d.len()),
        metadata = ?plan.metadata_keys,
        "Parsed mapping plan"
    );

    Ok(plan)
}

fn is_category(value: &Value) -> bool {
    match value.get("repositories") {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
