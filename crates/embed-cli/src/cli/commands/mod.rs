//! CLI command handlers. Each command is in its own file for clarity.

mod completions;
mod load;
mod resources;
mod snippet;
mod validate;

pub use completions::run_completions;
pub use load::run_load;
pub use resources::run_resources;
pub use snippet::run_snippet;
pub use validate::run_validate;
