pub mod config;
pub mod logging;

pub mod cache;
pub mod error;
pub mod fetch;
pub mod listing;
pub mod report;
pub mod version;

pub use error::{Error, Result};
