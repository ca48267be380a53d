//! Monomap Core - Core library for monorepo mapping plan reports
//!
//! This crate loads a mapping plan describing how existing repositories
//! move into a monorepo, tallies it, and prints a summary report.

pub mod config;
pub mod error;
pub mod plan;
pub mod report;
mod reporter;

pub use config::{Config, ReportConfig};
pub use error::{Error, Result};
pub use plan::{load_plan, parse_plan, MappingPlan};
pub use report::{Style, Summary, Tally};
pub use reporter::{run, Reporter};
