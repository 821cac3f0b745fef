pub mod config;
pub mod logging;

// Analysis pipeline, leaf-first
pub mod decode;
pub mod wrapper;
pub mod cancel;
pub mod fetch;
pub mod redirect;
pub mod params;
pub mod model;
pub mod error;
pub mod pipeline;

// Structural tools and output
pub mod batch;
pub mod export;
pub mod url_model;

pub use error::AnalyzeError;
pub use model::{AnalysisResult, QueryParameter};
pub use pipeline::Analyzer;
