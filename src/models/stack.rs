use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repository::RepositoryInfo;

/// Flat name -> version-specifier map merged from every manifest found.
/// Last writer wins when the same name appears in more than one manifest.
pub type DependencyMap = BTreeMap<String, String>;

/// The eight fixed technology buckets. Entries are `"<Name>-<version>"` or a
/// bare `"<Name>"` when no version is resolvable; insertion order follows the
/// detection-rule order, not alphabetical order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologyCategories {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub infrastructure: Vec<String>,
    pub platforms: Vec<String>,
    pub ai: Vec<String>,
    pub development: Vec<String>,
    pub integrations: Vec<String>,
}

impl TechnologyCategories {
    pub const NAMES: [&'static str; 8] = [
        "frontend",
        "backend",
        "database",
        "infrastructure",
        "platforms",
        "ai",
        "development",
        "integrations",
    ];

    pub fn get(&self, category: &str) -> Option<&Vec<String>> {
        match category {
            "frontend" => Some(&self.frontend),
            "backend" => Some(&self.backend),
            "database" => Some(&self.database),
            "infrastructure" => Some(&self.infrastructure),
            "platforms" => Some(&self.platforms),
            "ai" => Some(&self.ai),
            "development" => Some(&self.development),
            "integrations" => Some(&self.integrations),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, category: &str) -> Option<&mut Vec<String>> {
        match category {
            "frontend" => Some(&mut self.frontend),
            "backend" => Some(&mut self.backend),
            "database" => Some(&mut self.database),
            "infrastructure" => Some(&mut self.infrastructure),
            "platforms" => Some(&mut self.platforms),
            "ai" => Some(&mut self.ai),
            "development" => Some(&mut self.development),
            "integrations" => Some(&mut self.integrations),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Vec<String>)> + '_ {
        Self::NAMES
            .iter()
            .map(move |name| (*name, self.get(name).expect("fixed category name")))
    }

    /// Total tags across all eight buckets.
    pub fn total(&self) -> usize {
        self.iter().map(|(_, tags)| tags.len()).sum()
    }
}

/// Presence record for one known configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigFileInfo {
    pub exists: bool,
    pub size: u64,
    pub content_preview: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureView {
    pub containerized: bool,
    pub ci_cd: Vec<String>,
    pub hosting: Vec<String>,
    pub monitoring: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseView {
    pub providers: Vec<String>,
    pub orms: Vec<String>,
    pub has_migrations: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiIntegrationsView {
    pub providers: Vec<String>,
    pub orchestration: Vec<String>,
    pub vector_stores: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackMetadata {
    pub analyzed_at: DateTime<Utc>,
    pub files_analyzed: usize,
    pub total_dependencies: usize,
}

/// The analyzer's sole output and the gap engine's sole input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredTechStack {
    pub repository_info: RepositoryInfo,
    pub technologies: TechnologyCategories,
    pub frameworks: Vec<String>,
    pub languages: Vec<String>,
    pub package_managers: Vec<String>,
    pub development_tools: Vec<String>,
    pub dependencies: DependencyMap,
    pub configurations: BTreeMap<String, ConfigFileInfo>,
    pub infrastructure: InfrastructureView,
    pub database: DatabaseView,
    pub ai_integrations: AiIntegrationsView,
    pub analysis_metadata: StackMetadata,
}
