//! Kernel version ordering.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// A kernel version as matched from the index, with its parsed precedence key.
///
/// `raw` is kept verbatim because it becomes a path and URL segment.
/// Equality and ordering use the numeric key only, so `6.05.3` equals `6.5.3`.
#[derive(Debug, Clone)]
pub struct KernelVersion {
    raw: String,
    key: semver::Version,
}

impl KernelVersion {
    /// Accepts three dot-separated runs of ASCII digits. Leading zeros are
    /// allowed and ignored for ordering.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = || Error::InvalidVersion {
            raw: raw.to_string(),
        };
        let mut parts = raw.split('.').map(|p| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            p.parse::<u64>().ok()
        });
        let (major, minor, patch) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Some(major)), Some(Some(minor)), Some(Some(patch)), None) => (major, minor, patch),
            _ => return Err(invalid()),
        };
        let key = semver::Version::new(major, minor, patch);
        Ok(Self {
            raw: raw.to_string(),
            key,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for KernelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for KernelVersion {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for KernelVersion {}

impl Ord for KernelVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for KernelVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parses and sorts ascending by version precedence. Stable; duplicates kept.
pub fn sort_versions<I, S>(raws: I) -> Result<Vec<KernelVersion>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut versions = raws
        .into_iter()
        .map(|r| KernelVersion::parse(r.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    versions.sort();
    Ok(versions)
}
