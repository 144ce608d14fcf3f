use std::sync::Arc;

use chrono::Utc;

use crate::analyzer::TechnologyAnalyzer;
use crate::error::{Error, Result};
use crate::explorer::RepositoryExplorer;
use crate::gap::GapAnalysisEngine;
use crate::github::RepositoryHost;
use crate::models::{
    AnalysisDepth, AnalysisMetadata, AnalysisSummary, ExplorationSummary, FinalReport, Priority,
    TechnologySummary,
};

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub repository_url: String,
    pub user_id: String,
    pub analysis_depth: AnalysisDepth,
    pub focus_areas: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(repository_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            user_id: user_id.into(),
            analysis_depth: AnalysisDepth::default(),
            focus_areas: Vec::new(),
        }
    }
}

/// Sole entry point of the pipeline: runs explorer, analyzer and gap engine
/// in order and assembles the final report. No stage is retried; the first
/// failure aborts the run.
pub struct AnalysisOrchestrator {
    host: Arc<dyn RepositoryHost>,
    max_files: usize,
}

impl AnalysisOrchestrator {
    pub fn new(host: impl RepositoryHost + 'static) -> Self {
        Self {
            host: Arc::new(host),
            max_files: crate::explorer::MAX_PRIORITIZED_FILES,
        }
    }

    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Runs the three stages. Every failure surfaces as a single
    /// [`Error::Orchestration`] with a human-readable message.
    pub async fn orchestrate(&self, request: AnalysisRequest) -> Result<FinalReport> {
        self.run(request)
            .await
            .map_err(|e| Error::Orchestration(e.to_string()))
    }

    async fn run(&self, request: AnalysisRequest) -> Result<FinalReport> {
        // URL validation happens before any network traffic.
        let (owner, repo) = parse_repository_url(&request.repository_url)?;
        let started_at = Utc::now();

        tracing::info!("Stage 1/3: exploring repository {}/{}", owner, repo);
        let explorer = RepositoryExplorer::new(self.host.clone(), owner, repo)
            .with_max_files(self.max_files);
        let exploration = explorer.explore().await?;

        tracing::info!(
            "Stage 2/3: analyzing technologies across {} fetched files",
            exploration.files.len()
        );
        let stack = TechnologyAnalyzer::new().analyze(&exploration);

        tracing::info!("Stage 3/3: running gap analysis");
        let enhanced = GapAnalysisEngine::new().analyze(&stack);

        // Counts describe detected technologies, before the synthetic
        // GAP entries are folded in.
        let total_technologies = stack.technologies.total();
        let gap_categories = enhanced
            .gap_analysis
            .values()
            .filter(|a| !a.identified_gaps.is_empty())
            .count();
        let high_priority_recommendations = enhanced
            .recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .count();

        Ok(FinalReport {
            analysis_metadata: AnalysisMetadata {
                repository_url: request.repository_url,
                user_id: request.user_id,
                analysis_depth: request.analysis_depth,
                focus_areas: request.focus_areas,
                started_at,
                completed_at: Utc::now(),
            },
            stage_1_exploration: ExplorationSummary {
                repository: exploration.repository_info.full_name.clone(),
                primary_language: exploration.repository_info.language.clone(),
                files_fetched: exploration.files.len(),
                total_files_scanned: exploration.total_files_scanned,
                directories: exploration.directory_structure.len(),
            },
            stage_2_technology_analysis: TechnologySummary {
                total_dependencies: stack.dependencies.len(),
                frameworks: stack.frameworks.clone(),
                languages: stack.languages.clone(),
                package_managers: stack.package_managers.clone(),
            },
            stage_3_gap_analysis: enhanced.gap_analysis.clone(),
            enhanced_tech_stack: enhanced,
            summary: AnalysisSummary {
                total_technologies,
                gap_categories,
                high_priority_recommendations,
                analysis_success: true,
            },
        })
    }
}

/// Extracts `{owner, repo}` from a GitHub repository URL by stripping the
/// `https://github.com/` prefix and a `.git` suffix, then splitting on `/`.
pub fn parse_repository_url(url: &str) -> Result<(String, String)> {
    let trimmed = url.trim();
    let path = trimmed
        .strip_prefix("https://github.com/")
        .unwrap_or(trimmed)
        .trim_end_matches(".git");

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() < 2 {
        return Err(Error::InvalidRepositoryUrl(url.to_string()));
    }

    Ok((segments[0].to_string(), segments[1].to_string()))
}
