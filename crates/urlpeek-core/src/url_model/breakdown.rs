//! Component breakdown of a single URL.

use serde::Serialize;
use url::Url;

/// Display-ready components of a parsed URL, named the way browsers name them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,
    pub hostname: String,
    /// Explicit port, or `(default)`.
    pub port: String,
    pub pathname: String,
    /// `?query`, or empty.
    pub search: String,
    /// `#fragment`, or empty.
    pub hash: String,
    pub origin: String,
    pub href: String,
    /// Username, or `(none)`.
    pub username: String,
    /// `***` when a password is present, otherwise `(none)`.
    pub password: String,
}

impl UrlComponents {
    pub fn from_url(url: &Url) -> Self {
        Self {
            protocol: protocol(url),
            hostname: url.host_str().unwrap_or_default().to_string(),
            port: url
                .port()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "(default)".to_string()),
            pathname: url.path().to_string(),
            search: search(url),
            hash: hash(url),
            origin: url.origin().ascii_serialization(),
            href: url.as_str().to_string(),
            username: non_empty_or(url.username(), "(none)"),
            password: match url.password() {
                Some(_) => "***".to_string(),
                None => "(none)".to_string(),
            },
        }
    }

    /// Labelled rows in display order.
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Protocol", self.protocol.as_str()),
            ("Hostname", self.hostname.as_str()),
            ("Port", self.port.as_str()),
            ("Path", self.pathname.as_str()),
            ("Query String", self.search.as_str()),
            ("Hash", self.hash.as_str()),
            ("Origin", self.origin.as_str()),
            ("Full URL", self.href.as_str()),
            ("Username", self.username.as_str()),
            ("Password", self.password.as_str()),
        ]
    }
}

/// Parses `input` and breaks it into components.
pub fn breakdown(input: &str) -> Result<UrlComponents, url::ParseError> {
    Url::parse(input).map(|u| UrlComponents::from_url(&u))
}

pub(crate) fn protocol(url: &Url) -> String {
    format!("{}:", url.scheme())
}

pub(crate) fn search(url: &Url) -> String {
    match url.query() {
        Some(q) if !q.is_empty() => format!("?{q}"),
        _ => String::new(),
    }
}

pub(crate) fn hash(url: &Url) -> String {
    match url.fragment() {
        Some(f) if !f.is_empty() => format!("#{f}"),
        _ => String::new(),
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
