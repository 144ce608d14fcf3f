pub mod analyzer;
pub mod config;
pub mod error;
pub mod explorer;
pub mod gap;
pub mod github;
pub mod models;
pub mod orchestrator;
pub mod taxonomy;

pub use analyzer::TechnologyAnalyzer;
pub use config::Config;
pub use error::{Error, Result};
pub use explorer::RepositoryExplorer;
pub use gap::GapAnalysisEngine;
pub use github::{GitHubClient, RepositoryHost};
pub use orchestrator::{AnalysisOrchestrator, AnalysisRequest};
