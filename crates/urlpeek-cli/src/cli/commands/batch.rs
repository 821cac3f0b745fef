//! `urlpeek batch [file]` – summarize one URL per line.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use std::io::Read;
use urlpeek_core::batch::{summarize_lines, BatchSummary};
use urlpeek_core::export;

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading URLs from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {p}")),
    }
}

fn print_summaries(summaries: &[BatchSummary]) {
    println!(
        "  {:<8}  {:<30}  {:>6}  {:<12}  {}",
        "PROTOCOL", "HOSTNAME", "PARAMS", "STATUS", "URL"
    );
    for s in summaries {
        println!(
            "  {:<8}  {:<30}  {:>6}  {:<12}  {}",
            s.protocol,
            s.hostname,
            s.param_count,
            s.status(),
            s.url
        );
    }
    let valid = summaries.iter().filter(|s| s.is_valid()).count();
    let params: usize = summaries.iter().map(|s| s.param_count).sum();
    println!(
        "{} URL(s), {} valid, {} invalid, {} parameter(s) total",
        summaries.len(),
        valid,
        summaries.len() - valid,
        params
    );
}

pub fn run_batch(path: Option<&str>, format: OutputFormat) -> Result<()> {
    let input = read_input(path)?;
    let summaries = summarize_lines(&input);
    tracing::debug!(count = summaries.len(), "batch summarized");
    match format {
        OutputFormat::Text => print_summaries(&summaries),
        OutputFormat::Json => println!("{}", export::to_json(&summaries)?),
        OutputFormat::Csv => print!("{}", export::batch_csv(&summaries)?),
    }
    Ok(())
}
