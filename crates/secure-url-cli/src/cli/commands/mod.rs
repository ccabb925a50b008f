//! CLI command handlers, one per file.

mod origin;
mod resolve;
mod sanitize;

pub use origin::run_origin;
pub use resolve::run_resolve;
pub use sanitize::run_sanitize;
