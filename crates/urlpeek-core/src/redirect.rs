//! Best-effort redirect resolution.
//!
//! Many campaign links only resolve from inside a mail client, behind an IP
//! allow-list or before a token expires. A failed fetch is therefore normal:
//! it is logged and the input URL is returned as-is.

use crate::cancel::CancelToken;
use crate::fetch::{is_http_url, FetchOptions, Fetcher};

/// Follows redirects through a `Fetcher` and reports the final URL.
#[derive(Debug, Clone)]
pub struct RedirectResolver<F> {
    fetcher: F,
    options: FetchOptions,
}

impl<F: Fetcher> RedirectResolver<F> {
    pub fn new(fetcher: F, options: FetchOptions) -> Self {
        Self { fetcher, options }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Returns the effective URL after redirects, or `url` unchanged on any failure.
    ///
    /// Only http(s) URLs are handed to the fetcher. An effective URL that does
    /// not parse, or is not http(s), is not adopted.
    pub fn resolve(&self, url: &str, cancel: &CancelToken) -> String {
        if !is_http_url(url) {
            tracing::debug!(url, "not an http(s) URL, skipping redirect fetch");
            return url.to_string();
        }
        match self.fetcher.fetch(url, &self.options, cancel) {
            Ok(resp) => {
                if resp.effective_url == url {
                    tracing::debug!(url, status = resp.status, "no redirect");
                    return url.to_string();
                }
                if !is_http_url(&resp.effective_url) {
                    tracing::warn!(
                        url,
                        effective = %resp.effective_url,
                        "ignoring unparseable or non-http redirect target"
                    );
                    return url.to_string();
                }
                tracing::info!(from = url, to = %resp.effective_url, status = resp.status, "redirect found");
                resp.effective_url
            }
            Err(e) => {
                tracing::warn!(url, kind = ?e.kind(), "fetch failed, keeping URL: {}", e);
                url.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{FetchError, FetchResponse};
    use std::sync::Mutex;

    struct Fixed(Result<FetchResponse, ()>, Mutex<Vec<String>>);

    impl Fetcher for Fixed {
        fn fetch(
            &self,
            url: &str,
            _options: &FetchOptions,
            _cancel: &CancelToken,
        ) -> Result<FetchResponse, FetchError> {
            self.1.lock().unwrap().push(url.to_string());
            match &self.0 {
                Ok(r) => Ok(r.clone()),
                Err(()) => Err(FetchError::Curl(curl::Error::new(6))),
            }
        }
    }

    fn resolver(result: Result<FetchResponse, ()>) -> RedirectResolver<Fixed> {
        RedirectResolver::new(Fixed(result, Mutex::default()), FetchOptions::default())
    }

    #[test]
    fn follows_to_effective_url() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "https://dest.example.com/landing?utm_source=mail".to_string(),
            status: 200,
        }));
        assert_eq!(
            r.resolve("https://t.co/abc", &CancelToken::new()),
            "https://dest.example.com/landing?utm_source=mail"
        );
    }

    #[test]
    fn same_url_is_identity() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "https://a.com/".to_string(),
            status: 200,
        }));
        assert_eq!(r.resolve("https://a.com/", &CancelToken::new()), "https://a.com/");
    }

    #[test]
    fn failure_returns_input() {
        let r = resolver(Err(()));
        assert_eq!(
            r.resolve("https://expired.example.com/?t=1", &CancelToken::new()),
            "https://expired.example.com/?t=1"
        );
    }

    #[test]
    fn error_status_still_reports_effective_url() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "https://dest.example.com/gone".to_string(),
            status: 404,
        }));
        assert_eq!(
            r.resolve("https://short.example/x", &CancelToken::new()),
            "https://dest.example.com/gone"
        );
    }

    #[test]
    fn unparseable_target_ignored() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "::garbage::".to_string(),
            status: 200,
        }));
        assert_eq!(r.resolve("https://a.com/", &CancelToken::new()), "https://a.com/");
    }

    #[test]
    fn non_http_input_never_reaches_fetcher() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "https://elsewhere.example/".to_string(),
            status: 200,
        }));
        for url in ["file:///etc/passwd", "ftp://files.example.com/a?x=1", "telnet://10.0.0.1/"] {
            assert_eq!(r.resolve(url, &CancelToken::new()), url);
        }
        assert!(r.fetcher().1.lock().unwrap().is_empty());
    }

    #[test]
    fn non_http_redirect_target_ignored() {
        let r = resolver(Ok(FetchResponse {
            effective_url: "file:///etc/passwd".to_string(),
            status: 0,
        }));
        assert_eq!(r.resolve("https://a.com/", &CancelToken::new()), "https://a.com/");
        assert_eq!(*r.fetcher().1.lock().unwrap(), vec!["https://a.com/"]);
    }
}
