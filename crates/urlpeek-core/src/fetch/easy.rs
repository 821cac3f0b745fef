//! libcurl-backed fetcher (one `Easy` handle per request).

use super::{is_http_url, FetchError, FetchOptions, FetchResponse, Fetcher};
use crate::cancel::CancelToken;

/// Redirect-following GET via the curl crate. The response body is discarded.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlFetcher;

impl CurlFetcher {
    pub fn new() -> Self {
        Self
    }
}

impl Fetcher for CurlFetcher {
    fn fetch(
        &self,
        url: &str,
        options: &FetchOptions,
        cancel: &CancelToken,
    ) -> Result<FetchResponse, FetchError> {
        if !is_http_url(url) {
            return Err(FetchError::UnsupportedScheme(url.to_string()));
        }
        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(options.max_redirects)?;
        easy.connect_timeout(options.connect_timeout)?;
        easy.timeout(options.timeout)?;
        // Needed for the progress callback (cancel checks) to fire.
        easy.progress(true)?;

        let mut list = curl::easy::List::new();
        for line in options.header_lines() {
            list.append(&line)?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.progress_function(|_, _, _, _| !cancel.is_cancelled())?;
            if let Err(e) = transfer.perform() {
                if e.is_aborted_by_callback() {
                    return Err(FetchError::Cancelled);
                }
                return Err(FetchError::Curl(e));
            }
        }

        let status = easy.response_code()?;
        let effective_url = easy
            .effective_url()?
            .map(str::to_string)
            .ok_or(FetchError::NoEffectiveUrl)?;

        Ok(FetchResponse {
            effective_url,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_before_start() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = CurlFetcher::new()
            .fetch("http://127.0.0.1:9/", &FetchOptions::default(), &cancel)
            .unwrap_err();
        assert!(matches!(err, FetchError::Cancelled));
    }

    #[test]
    fn non_http_schemes_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let secret = dir.path().join("secret.txt");
        std::fs::write(&secret, "token=abc").unwrap();
        let file_url = format!("file://{}", secret.display());

        for url in [
            file_url.as_str(),
            "dict://127.0.0.1:2628/d:x",
            "gopher://127.0.0.1:70/",
            "notaprotocol://example.com/",
        ] {
            let err = CurlFetcher::new()
                .fetch(url, &FetchOptions::default(), &CancelToken::new())
                .unwrap_err();
            assert!(
                matches!(err, FetchError::UnsupportedScheme(ref u) if u == url),
                "{url}: {err:?}"
            );
        }
    }
}
