//! `urlpeek compare <first> <second>` – component and parameter comparison.

use super::analyze::analyze_blocking;
use anyhow::{Context, Result};
use urlpeek_core::config::UrlpeekConfig;
use urlpeek_core::url_model::{compare_str, diff_parameters, Comparison, ParameterDiff};

fn print_components(c: &Comparison) {
    println!("  {:<14}  {:<30}  {:<30}  {}", "COMPONENT", "FIRST", "SECOND", "MATCH");
    for row in &c.rows {
        println!(
            "  {:<14}  {:<30}  {:<30}  {}",
            row.component,
            row.left,
            row.right,
            if row.matches { "yes" } else { "NO" }
        );
    }
    println!("{} of {} components match", c.match_count(), c.rows.len());
}

fn print_parameters(diffs: &[ParameterDiff]) {
    if diffs.is_empty() {
        println!("Neither URL has query parameters.");
        return;
    }
    let show = |values: &[String]| {
        if values.is_empty() {
            "(absent)".to_string()
        } else {
            values.join(", ")
        }
    };
    println!("  {:<20}  {:<30}  {:<30}  {}", "PARAMETER", "FIRST", "SECOND", "MATCH");
    for d in diffs {
        println!(
            "  {:<20}  {:<30}  {:<30}  {}",
            d.name,
            show(&d.left),
            show(&d.right),
            if d.matches() { "yes" } else { "NO" }
        );
    }
}

pub async fn run_compare(cfg: &UrlpeekConfig, first: &str, second: &str) -> Result<()> {
    let comparison = compare_str(first, second).context(
        "invalid URL(s); enter full URLs with protocol (e.g. https://example.com)",
    )?;

    let (a, b) = tokio::try_join!(analyze_blocking(cfg, first), analyze_blocking(cfg, second))?;

    println!("Components");
    print_components(&comparison);
    println!();
    println!("Final URLs");
    println!("  first:  {}", a.final_url);
    println!("  second: {}", b.final_url);
    println!();
    println!("Query parameters");
    print_parameters(&diff_parameters(&a.query_parameters, &b.query_parameters));
    Ok(())
}
