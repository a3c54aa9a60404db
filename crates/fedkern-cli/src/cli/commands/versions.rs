//! `fedkern versions` – print the sorted version list.

use anyhow::{Context, Result};
use fedkern_core::fetch::Fetcher;
use fedkern_core::report::Pipeline;
use std::io::Write;

pub fn run_versions<F: Fetcher, W: Write>(pipeline: &Pipeline<F>, out: &mut W) -> Result<()> {
    for v in pipeline.list_versions()? {
        writeln!(out, "{}", v).context("writing output")?;
    }
    Ok(())
}
