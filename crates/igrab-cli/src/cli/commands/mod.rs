//! CLI command handlers. Each command is in its own file for clarity.

mod check;
mod grab;
mod resolve;

pub use check::run_check;
pub use grab::run_grab;
pub use resolve::run_resolve;
