//! HTTP collaborator used for redirect resolution.
//!
//! The pipeline only needs one thing from the network: "GET this URL, follow
//! redirects, tell me where you ended up". `Fetcher` is that seam; `CurlFetcher`
//! is the libcurl implementation and tests plug in their own.

mod easy;
mod error;

pub use easy::CurlFetcher;
pub use error::{FetchError, FetchFailureKind};

use crate::cancel::CancelToken;
use crate::config::{HttpConfig, UrlpeekConfig};
use std::time::Duration;

/// Request settings for a redirect-following GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_redirects: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        let http = HttpConfig::default();
        Self {
            user_agent: http.user_agent,
            accept: http.accept,
            accept_language: http.accept_language,
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
            max_redirects: 10,
        }
    }
}

impl From<&UrlpeekConfig> for FetchOptions {
    fn from(cfg: &UrlpeekConfig) -> Self {
        let http = cfg.http.clone().unwrap_or_default();
        Self {
            user_agent: http.user_agent,
            accept: http.accept,
            accept_language: http.accept_language,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirects: cfg.max_redirects,
        }
    }
}

impl FetchOptions {
    /// Header lines sent with every request, in "Name: value" form.
    pub fn header_lines(&self) -> Vec<String> {
        vec![
            format!("User-Agent: {}", self.user_agent.trim()),
            format!("Accept: {}", self.accept.trim()),
            format!("Accept-Language: {}", self.accept_language.trim()),
        ]
    }
}

/// What the collaborator reports after the last hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// URL of the final response after all redirects.
    pub effective_url: String,
    /// HTTP status of the final response.
    pub status: u32,
}

/// True when `url` parses with an `http` or `https` scheme. Nothing else is fetched.
pub fn is_http_url(url: &str) -> bool {
    url::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// GET `url` with redirect following. Blocking.
pub trait Fetcher {
    fn fetch(
        &self,
        url: &str,
        options: &FetchOptions,
        cancel: &CancelToken,
    ) -> Result<FetchResponse, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_headers_look_like_a_browser() {
        let lines = FetchOptions::default().header_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("User-Agent: Mozilla/5.0"));
        assert!(lines[1].starts_with("Accept: text/html"));
        assert_eq!(lines[2], "Accept-Language: en-US,en;q=0.5");
    }

    #[test]
    fn options_follow_config() {
        let mut cfg = UrlpeekConfig::default();
        cfg.connect_timeout_secs = 3;
        cfg.timeout_secs = 7;
        cfg.max_redirects = 2;
        cfg.http = Some(HttpConfig {
            user_agent: "probe/1.0".to_string(),
            ..HttpConfig::default()
        });
        let opts = FetchOptions::from(&cfg);
        assert_eq!(opts.connect_timeout, Duration::from_secs(3));
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.max_redirects, 2);
        assert_eq!(opts.user_agent, "probe/1.0");
    }

    #[test]
    fn only_http_schemes_are_fetchable() {
        assert!(is_http_url("https://a.com/x?y=1"));
        assert!(is_http_url("HTTP://a.com/"));
        assert!(!is_http_url("file:///etc/passwd"));
        assert!(!is_http_url("ftp://files.example.com/a"));
        assert!(!is_http_url("gopher://127.0.0.1:70/"));
        assert!(!is_http_url("not a url"));
    }
}
