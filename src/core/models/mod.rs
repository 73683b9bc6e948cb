//! Model listing: fetch, sort, free-tier heuristic, and report.

mod error;
mod fetch;
mod info;
mod report;

pub use error::ListError;
pub use fetch::fetch_models;
pub use report::render_report;
