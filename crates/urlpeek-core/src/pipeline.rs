//! End-to-end analysis: unwrap, resolve, extract, fall back.
//!
//! `Analyzer` holds no per-request state, so one instance can serve any
//! number of concurrent analyses.

use crate::cancel::CancelToken;
use crate::config::UrlpeekConfig;
use crate::error::AnalyzeError;
use crate::fetch::{CurlFetcher, FetchOptions, Fetcher};
use crate::model::AnalysisResult;
use crate::params;
use crate::redirect::RedirectResolver;
use crate::wrapper::{self, WrapperOutcome};
use url::Url;

pub struct Analyzer<F> {
    resolver: RedirectResolver<F>,
    follow_redirects: bool,
}

impl Analyzer<CurlFetcher> {
    /// Analyzer backed by libcurl, with request settings from `cfg`.
    pub fn from_config(cfg: &UrlpeekConfig) -> Self {
        Self::new(CurlFetcher::new(), FetchOptions::from(cfg))
            .follow_redirects(cfg.follow_redirects)
    }
}

impl<F: Fetcher> Analyzer<F> {
    pub fn new(fetcher: F, options: FetchOptions) -> Self {
        Self {
            resolver: RedirectResolver::new(fetcher, options),
            follow_redirects: true,
        }
    }

    /// Enable or skip the redirect stage.
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    pub fn analyze(&self, input: &str) -> Result<AnalysisResult, AnalyzeError> {
        self.analyze_with_cancel(input, &CancelToken::new())
    }

    /// Runs the pipeline. Only an empty or unparseable `input` is an error.
    ///
    /// Setting `cancel` aborts the redirect fetch; the analysis then finishes
    /// with the pre-redirect URL.
    pub fn analyze_with_cancel(
        &self,
        input: &str,
        cancel: &CancelToken,
    ) -> Result<AnalysisResult, AnalyzeError> {
        if input.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }
        Url::parse(input).map_err(|source| AnalyzeError::InvalidUrl {
            input: input.to_string(),
            source,
        })?;

        let outcome = wrapper::extract(input);
        let was_wrapped = outcome.is_wrapped();
        let mut working = match outcome {
            WrapperOutcome::Extracted(embedded) if Url::parse(&embedded).is_ok() => embedded,
            WrapperOutcome::Extracted(embedded) => {
                tracing::warn!(input, embedded = %embedded, "unwrapped URL does not parse, keeping input");
                input.to_string()
            }
            WrapperOutcome::NotWrapped => input.to_string(),
        };

        if self.follow_redirects {
            working = self.resolver.resolve(&working, cancel);
        }

        let mut query_parameters = params::extract(&working);
        tracing::debug!(url = %working, count = query_parameters.len(), "extracted query parameters");

        // TODO: narrow this to fetch failures once we know whether a successful
        // redirect to a parameterless URL should still report the input's params.
        if query_parameters.is_empty() && working != input {
            query_parameters = params::extract(input);
            if !query_parameters.is_empty() {
                tracing::info!(input, count = query_parameters.len(), "using parameters from original URL");
            }
        }

        Ok(AnalysisResult {
            original_url: input.to_string(),
            final_url: working,
            query_parameters,
            was_wrapped,
        })
    }
}
