//! JSON and CSV renderings of analysis and batch results.

use crate::batch::BatchSummary;
use crate::model::AnalysisResult;
use anyhow::{Context, Result};
use serde::Serialize;

/// Pretty-printed JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing JSON")
}

/// `Name,Value,Is URL` rows, one per query parameter.
pub fn analysis_csv(result: &AnalysisResult) -> Result<String> {
    let mut writer = csv_writer();
    writer.write_record(["Name", "Value", "Is URL"])?;
    for p in &result.query_parameters {
        writer.write_record([p.name.as_str(), p.value.as_str(), yes_no(p.is_url)])?;
    }
    finish(writer)
}

/// `URL,Protocol,Hostname,Parameter Count,Status` rows.
pub fn batch_csv(summaries: &[BatchSummary]) -> Result<String> {
    let mut writer = csv_writer();
    writer.write_record(["URL", "Protocol", "Hostname", "Parameter Count", "Status"])?;
    for s in summaries {
        let count = s.param_count.to_string();
        writer.write_record([
            s.url.as_str(),
            s.protocol.as_str(),
            s.hostname.as_str(),
            count.as_str(),
            s.status(),
        ])?;
    }
    finish(writer)
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "Yes"
    } else {
        "No"
    }
}
