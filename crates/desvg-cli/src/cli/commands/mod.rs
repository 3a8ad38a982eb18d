//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod extract;
mod scan;

pub use completions::run_completions;
pub use extract::run_extract;
pub use scan::run_scan;
