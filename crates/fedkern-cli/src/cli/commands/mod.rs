//! CLI command handlers.

mod urls;
mod versions;

pub use urls::run_urls;
pub use versions::run_versions;
