//! Structural URL tools: breakdown, comparison and building.
//!
//! These work on raw URL structure only. None of them unwrap, decode or
//! follow redirects; that is the pipeline's job.

mod breakdown;
mod builder;
mod compare;

pub use breakdown::{breakdown, UrlComponents};
pub use builder::{BuildError, UrlParts};
pub use compare::{compare, compare_str, diff_parameters, Comparison, ComparisonRow, ParameterDiff};
