//! CLI command handlers, one file per subcommand.

mod analyze;
mod batch;
mod breakdown;
mod build;
mod compare;
mod completions;

pub use analyze::run_analyze;
pub use batch::run_batch;
pub use breakdown::run_breakdown;
pub use build::run_build;
pub use compare::run_compare;
pub use completions::run_completions;
