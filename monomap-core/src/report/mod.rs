//! Plan aggregation and report rendering

mod render;
mod summary;
mod tally;

pub use render::{render, render_banner, render_failure, Style};
pub use summary::Summary;
pub use tally::Tally;
