//! Errors surfaced to callers of the analysis pipeline.
//!
//! Only the submitted URL itself can fail an analysis; every later stage
//! degrades to the best value it has.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("URL is required")]
    EmptyInput,
    #[error("invalid URL {input:?}: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
