pub mod pipeline;

pub use pipeline::{parse_repository_url, AnalysisOrchestrator, AnalysisRequest};
