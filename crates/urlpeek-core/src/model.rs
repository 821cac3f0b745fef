//! Analysis result types.
//!
//! Serialized with camelCase field names so exported JSON matches what
//! browser-side tooling expects.

use serde::{Deserialize, Serialize};

/// One `name=value` pair from a query string, value fully decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParameter {
    pub name: String,
    pub value: String,
    /// True if `value` starts with `http://` or `https://`.
    pub is_url: bool,
}

impl QueryParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        let is_url = looks_like_url(&value);
        Self {
            name: name.into(),
            value,
            is_url,
        }
    }
}

pub(crate) fn looks_like_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Outcome of one analysis request. Built once, never mutated or stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_url: String,
    pub final_url: String,
    pub query_parameters: Vec<QueryParameter>,
    pub was_wrapped: bool,
}

impl AnalysisResult {
    /// Parameters whose decoded value is itself a URL.
    pub fn embedded_urls(&self) -> impl Iterator<Item = &str> {
        self.query_parameters
            .iter()
            .filter(|p| p.is_url)
            .map(|p| p.value.as_str())
    }

    /// True if the final URL differs from what was submitted.
    pub fn was_redirected_or_unwrapped(&self) -> bool {
        self.final_url != self.original_url
    }
}
