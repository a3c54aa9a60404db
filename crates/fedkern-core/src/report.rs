//! Fetch-and-report pipeline.
//!
//! Lists kernel versions from the top-level Koji index, then for each version
//! reads its per-version index and derives the `kernel-core` RPM URL from the
//! last listed release.

use crate::cache::{self, INDEX_FILE};
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::listing;
use crate::version::{self, KernelVersion};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use url::Url;

/// Koji package index for the Fedora kernel.
pub const KOJI_KERNEL_URL: &str = "https://kojipkgs.fedoraproject.org/packages/kernel/";

/// Substring marking a Fedora release tag (e.g. `200.fc38`).
pub const FEDORA_MARKER: &str = ".fc";

const ARCH: &str = "x86_64";
const PACKAGE: &str = "kernel-core";

/// Builds the RPM URL for `version` and a release descriptor, verbatim.
///
/// No normalization is applied: the descriptor is used both as a path segment
/// and inside the file name.
pub fn rpm_url(base: &str, version: &str, descriptor: &str) -> String {
    let release_version = format!("{version}-{descriptor}");
    format!("{base}{version}/{descriptor}/{ARCH}/{PACKAGE}-{release_version}.{ARCH}.rpm")
}

/// Outcome of a `run`: URLs printed and versions that failed (keep-going only).
#[derive(Debug, Default)]
pub struct RunSummary {
    pub emitted: usize,
    pub skipped: usize,
    pub failed: Vec<(String, Error)>,
}

/// Pipeline over an explicit cache root and fetcher.
pub struct Pipeline<F> {
    fetcher: F,
    cache_root: PathBuf,
    base_url: Url,
}

impl<F: Fetcher> Pipeline<F> {
    /// Pipeline against the Koji kernel index.
    pub fn new(fetcher: F, cache_root: impl Into<PathBuf>) -> Result<Self> {
        Self::with_base_url(fetcher, cache_root, KOJI_KERNEL_URL)
    }

    /// Pipeline against another index root (a mirror or a local test server).
    /// A missing trailing `/` on `base_url` is added.
    pub fn with_base_url(
        fetcher: F,
        cache_root: impl Into<PathBuf>,
        base_url: &str,
    ) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            fetcher,
            cache_root: cache_root.into(),
            base_url,
        })
    }

    /// All versions referenced by the top-level index, ascending.
    pub fn list_versions(&self) -> Result<Vec<KernelVersion>> {
        fs::create_dir_all(&self.cache_root).map_err(|e| Error::io(&self.cache_root, e))?;
        let path = self.cache_root.join(INDEX_FILE);
        cache::acquire(&self.fetcher, self.base_url.as_str(), &path)?;
        let html = cache::read_listing(&path)?;
        let versions = version::sort_versions(listing::extract_versions(&html))?;
        tracing::debug!(count = versions.len(), "listed kernel versions");
        Ok(versions)
    }

    /// RPM URL for `version`, or `None` when its last release is not a Fedora build.
    pub fn process(&self, version: &KernelVersion) -> Result<Option<String>> {
        let version = version.as_str();
        let dir = self.cache_root.join(version);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let path = cache::version_listing_path(&self.cache_root, version);
        let url = self.base_url.join(&format!("{version}/"))?;
        cache::acquire(&self.fetcher, url.as_str(), &path)?;

        let html = cache::read_listing(&path)?;
        let descriptor =
            listing::release_descriptor(&html).ok_or_else(|| Error::NoAnchors { path })?;

        if !descriptor.contains(FEDORA_MARKER) {
            tracing::debug!(version, descriptor = %descriptor, "no Fedora release, skipping");
            return Ok(None);
        }
        Ok(Some(rpm_url(self.base_url.as_str(), version, &descriptor)))
    }

    /// Processes every version in ascending order, writing one URL per line to `out`.
    ///
    /// Without `keep_going` the first failure is returned; lines already
    /// written stay written. With it, failures are collected in the summary.
    pub fn run<W: Write>(&self, out: &mut W, keep_going: bool) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for version in self.list_versions()? {
            match self.process(&version) {
                Ok(Some(url)) => {
                    writeln!(out, "{url}")
                        .and_then(|()| out.flush())
                        .map_err(Error::Output)?;
                    summary.emitted += 1;
                }
                Ok(None) => summary.skipped += 1,
                Err(e) if keep_going => {
                    tracing::warn!(version = %version, error = %e, "version failed, continuing");
                    summary.failed.push((version.to_string(), e));
                }
                Err(e) => return Err(e),
            }
        }
        tracing::info!(
            emitted = summary.emitted,
            skipped = summary.skipped,
            failed = summary.failed.len(),
            "run finished"
        );
        Ok(summary)
    }
}
