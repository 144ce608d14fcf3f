use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::gap::{CategoryGapAnalysis, EnhancedTechStack};

/// Requested analysis depth. Recorded in report metadata; the pipeline
/// itself currently treats every depth the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisDepth {
    Basic,
    #[default]
    Standard,
    Comprehensive,
}

impl FromStr for AnalysisDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(AnalysisDepth::Basic),
            "standard" => Ok(AnalysisDepth::Standard),
            "comprehensive" => Ok(AnalysisDepth::Comprehensive),
            other => Err(format!(
                "unknown analysis depth '{other}' (expected basic, standard or comprehensive)"
            )),
        }
    }
}

impl std::fmt::Display for AnalysisDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisDepth::Basic => write!(f, "basic"),
            AnalysisDepth::Standard => write!(f, "standard"),
            AnalysisDepth::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub repository_url: String,
    pub user_id: String,
    pub analysis_depth: AnalysisDepth,
    pub focus_areas: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

/// Trimmed view of the exploration stage for the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationSummary {
    pub repository: String,
    pub primary_language: Option<String>,
    pub files_fetched: usize,
    pub total_files_scanned: usize,
    pub directories: usize,
}

/// Trimmed view of the technology-analysis stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnologySummary {
    pub total_dependencies: usize,
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub package_managers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_technologies: usize,
    pub gap_categories: usize,
    pub high_priority_recommendations: usize,
    pub analysis_success: bool,
}

/// The orchestrator's output; the contract with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub analysis_metadata: AnalysisMetadata,
    pub stage_1_exploration: ExplorationSummary,
    pub stage_2_technology_analysis: TechnologySummary,
    pub stage_3_gap_analysis: BTreeMap<String, CategoryGapAnalysis>,
    pub enhanced_tech_stack: EnhancedTechStack,
    pub summary: AnalysisSummary,
}
