//! Fetch failures and their coarse classification for logging.

use thiserror::Error;

/// Why a redirect-following GET did not produce an effective URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl rejected the request or the transfer failed.
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Only http and https URLs are fetched.
    #[error("refusing to fetch non-HTTP URL {0:?}")]
    UnsupportedScheme(String),
    /// The caller set the cancel token while the transfer was running.
    #[error("request cancelled")]
    Cancelled,
    /// Transfer finished but curl reported no effective URL.
    #[error("no effective URL reported")]
    NoEffectiveUrl,
}

/// Coarse failure buckets; tracking links fail in predictable ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    Timeout,
    Dns,
    Connection,
    Cancelled,
    Other,
}

impl FetchError {
    pub fn kind(&self) -> FetchFailureKind {
        match self {
            FetchError::Curl(e) => classify_curl_error(e),
            FetchError::Cancelled => FetchFailureKind::Cancelled,
            FetchError::UnsupportedScheme(_) | FetchError::NoEffectiveUrl => {
                FetchFailureKind::Other
            }
        }
    }
}

fn classify_curl_error(e: &curl::Error) -> FetchFailureKind {
    if e.is_operation_timedout() {
        return FetchFailureKind::Timeout;
    }
    if e.is_couldnt_resolve_host() || e.is_couldnt_resolve_proxy() {
        return FetchFailureKind::Dns;
    }
    if e.is_aborted_by_callback() {
        return FetchFailureKind::Cancelled;
    }
    if e.is_couldnt_connect()
        || e.is_ssl_connect_error()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FetchFailureKind::Connection;
    }
    FetchFailureKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_curl_codes() {
        // CURLE_COULDNT_RESOLVE_HOST = 6, CURLE_COULDNT_CONNECT = 7, CURLE_OPERATION_TIMEDOUT = 28
        assert_eq!(FetchError::Curl(curl::Error::new(6)).kind(), FetchFailureKind::Dns);
        assert_eq!(
            FetchError::Curl(curl::Error::new(7)).kind(),
            FetchFailureKind::Connection
        );
        assert_eq!(
            FetchError::Curl(curl::Error::new(28)).kind(),
            FetchFailureKind::Timeout
        );
    }

    #[test]
    fn cancelled_and_missing_url() {
        assert_eq!(FetchError::Cancelled.kind(), FetchFailureKind::Cancelled);
        assert_eq!(FetchError::NoEffectiveUrl.kind(), FetchFailureKind::Other);
        assert_eq!(FetchError::Cancelled.to_string(), "request cancelled");
    }
}
