//! Batch mode: quick structural summaries for many URLs.
//!
//! No unwrapping or redirect following here, only parsing. Lines that fail
//! to parse still get a row so the output lines up with the input.

use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub url: String,
    /// Scheme without colon, or `N/A`.
    pub protocol: String,
    /// Host, or `Invalid`.
    pub hostname: String,
    /// Number of query pairs, duplicates included.
    pub param_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchSummary {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// `Valid`, or the error text.
    pub fn status(&self) -> &str {
        self.error.as_deref().unwrap_or("Valid")
    }
}

/// Summarizes one URL.
pub fn summarize(url: &str) -> BatchSummary {
    match Url::parse(url) {
        Ok(parsed) => BatchSummary {
            url: url.to_string(),
            protocol: parsed.scheme().to_string(),
            hostname: parsed.host_str().unwrap_or_default().to_string(),
            param_count: parsed.query_pairs().count(),
            error: None,
        },
        Err(e) => {
            tracing::debug!(url, "batch line does not parse: {}", e);
            BatchSummary {
                url: url.to_string(),
                protocol: "N/A".to_string(),
                hostname: "Invalid".to_string(),
                param_count: 0,
                error: Some("Invalid URL".to_string()),
            }
        }
    }
}

/// Summarizes every non-blank line of `text`, trimmed, in order.
pub fn summarize_lines(text: &str) -> Vec<BatchSummary> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(summarize)
        .collect()
}
