//! Failure kinds surfaced by the fetch-and-report pipeline.
//!
//! Each variant names the stage that failed so callers can decide whether a
//! single version's failure should abort the run or be skipped.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Curl reported an error (DNS, connect, timeout, TLS, ...).
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    Http { url: String, status: u32 },

    /// Cache directory or file could not be created, written, or read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a URL to the output stream failed.
    #[error("writing output failed: {0}")]
    Output(#[source] std::io::Error),

    /// A string matched from the index is not three dot-separated numbers.
    #[error("invalid version {raw:?}: expected MAJOR.MINOR.PATCH")]
    InvalidVersion { raw: String },

    /// A per-version listing has no anchor with an href.
    #[error("no anchors in listing {}", path.display())]
    NoAnchors { path: PathBuf },

    /// Listing URL could not be built from the base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
