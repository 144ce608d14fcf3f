use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stack::StructuredTechStack;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Gap findings for a single technology category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGapAnalysis {
    pub current_technologies: Vec<String>,
    pub identified_gaps: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategicRecommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub timeline: String,
    pub impact: String,
}

/// The analyzer's stack plus everything the gap engine derived from it.
/// `technologies` inside the flattened stack carries the synthetic
/// `"GAP: ..."` entries for categories with findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnhancedTechStack {
    #[serde(flatten)]
    pub stack: StructuredTechStack,
    pub gap_analysis: BTreeMap<String, CategoryGapAnalysis>,
    pub key_decisions: Vec<String>,
    pub migration_notes: Vec<String>,
    pub recommendations: Vec<StrategicRecommendation>,
}
