//! `urlpeek build --host <host> ...` – assemble a URL from parts.

use anyhow::Result;
use urlpeek_core::url_model::UrlParts;

pub fn run_build(parts: UrlParts) -> Result<()> {
    let url = parts.build()?;
    println!("{url}");
    Ok(())
}
