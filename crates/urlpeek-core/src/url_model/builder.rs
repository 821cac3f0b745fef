//! Assemble a URL from parts.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

/// Characters left unescaped in query keys and values (same set as `encodeURIComponent`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("hostname is required")]
    MissingHost,
    #[error("built URL does not parse: {0}")]
    Invalid(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    pub path: String,
    /// Pairs with an empty key or value are skipped.
    pub params: Vec<(String, String)>,
    pub fragment: String,
}

impl Default for UrlParts {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            host: String::new(),
            port: None,
            path: String::new(),
            params: Vec::new(),
            fragment: String::new(),
        }
    }
}

impl UrlParts {
    /// Builds the URL string and checks that it parses.
    pub fn build(&self) -> Result<String, BuildError> {
        if self.host.trim().is_empty() {
            return Err(BuildError::MissingHost);
        }

        let mut out = format!("{}://{}", self.scheme, self.host.trim());
        if let Some(port) = self.port {
            out.push_str(&format!(":{port}"));
        }
        if !self.path.is_empty() {
            if !self.path.starts_with('/') {
                out.push('/');
            }
            out.push_str(&self.path);
        }

        let query: Vec<String> = self
            .params
            .iter()
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, COMPONENT),
                    utf8_percent_encode(v, COMPONENT)
                )
            })
            .collect();
        if !query.is_empty() {
            out.push('?');
            out.push_str(&query.join("&"));
        }

        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }

        url::Url::parse(&out)?;
        Ok(out)
    }
}
