//! Side-by-side comparison of two URLs.

use super::breakdown::{hash, protocol, search};
use crate::model::QueryParameter;
use serde::Serialize;
use url::Url;

const EMPTY: &str = "(empty)";

/// One compared component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub component: &'static str,
    pub left: String,
    pub right: String,
    #[serde(rename = "match")]
    pub matches: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    pub fn match_count(&self) -> usize {
        self.rows.iter().filter(|r| r.matches).count()
    }

    pub fn is_identical(&self) -> bool {
        self.match_count() == self.rows.len()
    }
}

/// Compares protocol, hostname, port, path, query, hash and origin.
pub fn compare(left: &Url, right: &Url) -> Comparison {
    let components: [(&'static str, fn(&Url) -> String); 7] = [
        ("Protocol", protocol),
        ("Hostname", |u| u.host_str().unwrap_or_default().to_string()),
        ("Port", |u| u.port().map(|p| p.to_string()).unwrap_or_default()),
        ("Path", |u| u.path().to_string()),
        ("Query String", search),
        ("Hash", hash),
        ("Origin", |u| u.origin().ascii_serialization()),
    ];

    let rows = components
        .into_iter()
        .map(|(label, get)| {
            let l = or_empty(get(left));
            let r = or_empty(get(right));
            ComparisonRow {
                component: label,
                matches: l == r,
                left: l,
                right: r,
            }
        })
        .collect();

    Comparison { rows }
}

/// Parses both inputs, then compares them.
pub fn compare_str(left: &str, right: &str) -> Result<Comparison, url::ParseError> {
    Ok(compare(&Url::parse(left)?, &Url::parse(right)?))
}

fn or_empty(value: String) -> String {
    if value.is_empty() {
        EMPTY.to_string()
    } else {
        value
    }
}

/// Values one parameter name takes on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterDiff {
    pub name: String,
    pub left: Vec<String>,
    pub right: Vec<String>,
}

impl ParameterDiff {
    pub fn matches(&self) -> bool {
        self.left == self.right
    }
}

/// Groups parameters by name (first-seen order across left then right).
pub fn diff_parameters(left: &[QueryParameter], right: &[QueryParameter]) -> Vec<ParameterDiff> {
    let mut diffs: Vec<ParameterDiff> = Vec::new();
    for p in left.iter().chain(right) {
        if !diffs.iter().any(|d| d.name == p.name) {
            diffs.push(ParameterDiff {
                name: p.name.clone(),
                left: values_for(left, &p.name),
                right: values_for(right, &p.name),
            });
        }
    }
    diffs
}

fn values_for(params: &[QueryParameter], name: &str) -> Vec<String> {
    params
        .iter()
        .filter(|p| p.name == name)
        .map(|p| p.value.clone())
        .collect()
}
