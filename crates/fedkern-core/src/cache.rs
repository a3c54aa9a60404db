//! Create-if-absent file cache for listing pages.
//!
//! A file's presence at its path is the only validity signal: there is no
//! expiry, no hashing and no revalidation. Downloads land in a `.part` file
//! that is renamed into place once complete.

use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Cache file for the top-level kernel listing.
pub const INDEX_FILE: &str = "index.html";

/// Ensures `local_path` holds the body of `url` and returns the path.
///
/// If a file already exists at `local_path` the fetcher is not called.
pub fn acquire<F: Fetcher>(fetcher: &F, url: &str, local_path: &Path) -> Result<PathBuf> {
    if local_path.exists() {
        tracing::debug!(path = %local_path.display(), "cache hit");
        return Ok(local_path.to_path_buf());
    }

    tracing::debug!(url, path = %local_path.display(), "cache miss, fetching");
    let body = fetcher.get(url)?;

    let tp = temp_path(local_path);
    fs::write(&tp, &body).map_err(|e| Error::io(&tp, e))?;
    fs::rename(&tp, local_path).map_err(|e| Error::io(local_path, e))?;
    Ok(local_path.to_path_buf())
}

/// Reads a cached listing as text. Invalid UTF-8 is replaced, not rejected.
pub fn read_listing(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Per-version cache location: `<root>/<version>/<version>index.html`.
pub fn version_listing_path(root: &Path, version: &str) -> PathBuf {
    root.join(version).join(format!("{version}{INDEX_FILE}"))
}
