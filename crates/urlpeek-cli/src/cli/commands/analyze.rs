//! `urlpeek analyze <url>` – unwrap, resolve and list query parameters.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use urlpeek_core::cancel::CancelToken;
use urlpeek_core::config::UrlpeekConfig;
use urlpeek_core::export;
use urlpeek_core::{AnalysisResult, Analyzer};

/// Runs one analysis on the blocking pool. Ctrl-C cancels the redirect fetch;
/// the analysis still completes with what it has.
pub(crate) async fn analyze_blocking(cfg: &UrlpeekConfig, url: &str) -> Result<AnalysisResult> {
    let cancel = CancelToken::new();
    let watcher = tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupt received, cancelling redirect fetch");
                cancel.cancel();
            }
        }
    });

    let analyzer = Analyzer::from_config(cfg);
    let url = url.to_string();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze_with_cancel(&url, &cancel))
        .await
        .context("analysis task join");
    watcher.abort();
    Ok(result??)
}

pub(crate) fn print_analysis(result: &AnalysisResult) {
    println!("Original URL: {}", result.original_url);
    println!("Final URL:    {}", result.final_url);
    println!(
        "Wrapped:      {}",
        if result.was_wrapped { "yes (URL Defense)" } else { "no" }
    );

    if result.query_parameters.is_empty() {
        println!("No query parameters found.");
        return;
    }

    let width = result
        .query_parameters
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    println!();
    println!("  {:<width$}  {}", "NAME", "VALUE");
    for p in &result.query_parameters {
        let marker = if p.is_url { "  [URL]" } else { "" };
        println!("  {:<width$}  {}{}", p.name, p.value, marker);
    }
    println!("\n{} parameter(s)", result.query_parameters.len());
}

pub async fn run_analyze(cfg: &UrlpeekConfig, url: &str, format: OutputFormat) -> Result<()> {
    let result = analyze_blocking(cfg, url).await?;
    match format {
        OutputFormat::Text => print_analysis(&result),
        OutputFormat::Json => println!("{}", export::to_json(&result)?),
        OutputFormat::Csv => print!("{}", export::analysis_csv(&result)?),
    }
    Ok(())
}
