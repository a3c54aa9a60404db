//! Blocking HTTP GET of directory listings.
//!
//! Uses the curl crate (libcurl) easy interface. The `Fetcher` trait is the
//! seam the cache and pipeline talk to, so tests can count or fake requests.

use crate::error::{Error, Result};
use std::time::Duration;

/// Fetches the full body of a URL.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>>;
}

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct CurlOptions {
    pub connect_timeout: Duration,
    /// Overall transfer timeout; `None` lets a request run indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for CurlOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
        }
    }
}

/// libcurl-backed fetcher. A fresh easy handle is used per request.
#[derive(Debug, Clone, Default)]
pub struct CurlFetcher {
    opts: CurlOptions,
}

impl CurlFetcher {
    pub fn new(opts: CurlOptions) -> Self {
        Self { opts }
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<Vec<u8>> {
        let network = |source: curl::Error| Error::Network {
            url: url.to_string(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(network)?;
        easy.follow_location(true).map_err(network)?;
        easy.max_redirections(10).map_err(network)?;
        easy.connect_timeout(self.opts.connect_timeout)
            .map_err(network)?;
        if let Some(t) = self.opts.timeout {
            easy.timeout(t).map_err(network)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(network)?;
            transfer.perform().map_err(network)?;
        }

        let status = easy.response_code().map_err(network)?;
        if !(200..300).contains(&status) {
            return Err(Error::Http {
                url: url.to_string(),
                status,
            });
        }
        tracing::debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
