pub mod categories;
pub mod configurations;
pub mod dependencies;
pub mod frameworks;
pub mod tooling;

use chrono::Utc;

use crate::models::{ExplorationResult, StackMetadata, StructuredTechStack};

pub use dependencies::extract_dependencies;

/// Stage 2: turns an [`ExplorationResult`] into a [`StructuredTechStack`].
/// Pure computation over already-fetched file contents; performs no I/O, so
/// every field except the timestamp is a deterministic function of the input.
pub struct TechnologyAnalyzer;

impl TechnologyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, exploration: &ExplorationResult) -> StructuredTechStack {
        let files = &exploration.files;

        let dependencies = dependencies::extract_dependencies(files);
        tracing::info!("Merged {} dependencies from manifests", dependencies.len());

        let configurations = configurations::analyze_configurations(files);
        let frameworks = frameworks::detect_frameworks(&dependencies, &configurations);
        let technologies =
            categories::categorize_technologies(&dependencies, &configurations, files);

        let infrastructure =
            tooling::analyze_infrastructure(&dependencies, &configurations, files);
        let database = tooling::analyze_database(&dependencies, files);
        let ai_integrations = tooling::analyze_ai_integrations(&dependencies);

        let languages = tooling::detect_languages(files);
        let package_managers = tooling::detect_package_managers(files);
        let development_tools = tooling::detect_development_tools(&dependencies);

        StructuredTechStack {
            repository_info: exploration.repository_info.clone(),
            technologies,
            frameworks,
            languages,
            package_managers,
            development_tools,
            analysis_metadata: StackMetadata {
                analyzed_at: Utc::now(),
                files_analyzed: files.len(),
                total_dependencies: dependencies.len(),
            },
            dependencies,
            configurations,
            infrastructure,
            database,
            ai_integrations,
        }
    }
}

impl Default for TechnologyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    use crate::models::{FileRecord, RepositoryInfo};

    fn exploration(files: Vec<FileRecord>) -> ExplorationResult {
        ExplorationResult {
            repository_info: RepositoryInfo {
                name: "web".to_string(),
                full_name: "acme/web".to_string(),
                description: None,
                language: Some("TypeScript".to_string()),
                size: 2048,
                updated_at: Utc::now(),
                default_branch: "main".to_string(),
            },
            total_files_scanned: files.len(),
            files,
            directory_structure: Vec::new(),
            analysis_timestamp: Utc::now(),
        }
    }

    fn record(path: &str, content: &str) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            content: content.to_string(),
            size: content.len() as u64,
            file_type: None,
        }
    }

    #[test]
    fn package_json_drives_expected_categories() {
        let manifest = r#"{"dependencies":{"next":"^14.0.0","react":"^18.2.0","@supabase/supabase-js":"^2.0.0"}}"#;
        let input = exploration(vec![record("package.json", manifest)]);

        let stack = TechnologyAnalyzer::new().analyze(&input);

        assert!(stack.technologies.frontend.contains(&"Next.js-14.0.0".to_string()));
        assert!(stack.technologies.frontend.contains(&"React-18.2.0".to_string()));
        assert!(stack.technologies.backend.contains(&"Supabase-2.0.0".to_string()));
        assert!(stack.technologies.database.contains(&"PostgreSQL".to_string()));
        assert!(stack.technologies.database.contains(&"Supabase".to_string()));
        assert_eq!(stack.analysis_metadata.total_dependencies, 3);
    }

    #[test]
    fn analysis_is_deterministic_for_identical_input() {
        let manifest = r#"{"dependencies":{"next":"^14.0.0","eslint":"^8.50.0"}}"#;
        let input = exploration(vec![
            record("package.json", manifest),
            record("src/index.ts", "export {}"),
        ]);

        let analyzer = TechnologyAnalyzer::new();
        let first = analyzer.analyze(&input);
        let second = analyzer.analyze(&input);

        assert_eq!(first.technologies, second.technologies);
        assert_eq!(first.dependencies, second.dependencies);
        assert_eq!(first.frameworks, second.frameworks);
        assert_eq!(first.languages, second.languages);
        assert_eq!(first.configurations, second.configurations);
        assert_eq!(first.development_tools, second.development_tools);
    }

    #[test]
    fn no_manifests_yields_empty_stack() {
        let input = exploration(vec![record("README.md", "# hello")]);
        let stack = TechnologyAnalyzer::new().analyze(&input);

        assert!(stack.dependencies.is_empty());
        assert_eq!(stack.technologies.total(), 0);
        assert!(stack.frameworks.is_empty());
        assert_eq!(stack.languages, vec!["Markdown"]);
    }
}
