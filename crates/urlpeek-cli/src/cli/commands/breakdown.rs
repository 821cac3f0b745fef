//! `urlpeek breakdown <url>` – show URL components.

use anyhow::{Context, Result};
use urlpeek_core::url_model::breakdown;

pub fn run_breakdown(url: &str) -> Result<()> {
    let components = breakdown(url).with_context(|| {
        format!("invalid URL {url:?}; enter a full URL with protocol (e.g. https://example.com)")
    })?;
    for (label, value) in components.rows() {
        println!("  {:<13} {}", label, value);
    }
    Ok(())
}
