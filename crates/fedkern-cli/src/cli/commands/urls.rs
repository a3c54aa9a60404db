//! `fedkern urls` – print kernel-core RPM URLs.

use anyhow::Result;
use fedkern_core::fetch::Fetcher;
use fedkern_core::report::Pipeline;
use std::io::Write;

pub fn run_urls<F: Fetcher, W: Write>(
    pipeline: &Pipeline<F>,
    out: &mut W,
    keep_going: bool,
) -> Result<()> {
    let summary = pipeline.run(out, keep_going)?;

    for (version, err) in &summary.failed {
        eprintln!("skipping {}: {}", version, err);
    }
    if !summary.failed.is_empty() {
        anyhow::bail!("{} version(s) failed", summary.failed.len());
    }
    Ok(())
}
