pub mod categories;
pub mod narrative;

use std::collections::BTreeMap;

use crate::models::{CategoryGapAnalysis, EnhancedTechStack, StructuredTechStack};

use categories::{
    analyze_ai_gaps, analyze_backend_gaps, analyze_database_gaps, analyze_development_gaps,
    analyze_frontend_gaps, analyze_infrastructure_gaps, analyze_integration_gaps,
    analyze_platform_gaps,
};
use narrative::{
    enhance_technologies, generate_key_decisions, generate_migration_notes,
    generate_strategic_recommendations,
};

/// Stage 3: rule-based gap analysis over a [`StructuredTechStack`]. Pure
/// computation; any malformed-input panic is a logic bug upstream, not a
/// recoverable condition.
pub struct GapAnalysisEngine;

impl GapAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, stack: &StructuredTechStack) -> EnhancedTechStack {
        let technologies = &stack.technologies;
        let description = stack.repository_info.description.as_deref().unwrap_or("");

        let mut gap_analysis: BTreeMap<String, CategoryGapAnalysis> = BTreeMap::new();
        gap_analysis.insert(
            "frontend".to_string(),
            analyze_frontend_gaps(&technologies.frontend),
        );
        gap_analysis.insert(
            "backend".to_string(),
            analyze_backend_gaps(&technologies.backend),
        );
        gap_analysis.insert(
            "database".to_string(),
            analyze_database_gaps(&technologies.database),
        );
        gap_analysis.insert(
            "infrastructure".to_string(),
            analyze_infrastructure_gaps(&technologies.infrastructure),
        );
        gap_analysis.insert(
            "platforms".to_string(),
            analyze_platform_gaps(&technologies.platforms),
        );
        gap_analysis.insert(
            "ai".to_string(),
            analyze_ai_gaps(&technologies.ai, description),
        );
        gap_analysis.insert(
            "development".to_string(),
            analyze_development_gaps(&technologies.development),
        );
        gap_analysis.insert(
            "integrations".to_string(),
            analyze_integration_gaps(&technologies.integrations),
        );

        let total_gaps: usize = gap_analysis
            .values()
            .map(|a| a.identified_gaps.len())
            .sum();
        tracing::info!("Identified {} gaps across {} categories", total_gaps, gap_analysis.len());

        let key_decisions = generate_key_decisions(technologies);
        let migration_notes = generate_migration_notes(technologies);
        let recommendations = generate_strategic_recommendations(&gap_analysis);

        let mut enhanced = stack.clone();
        enhance_technologies(&mut enhanced.technologies, &gap_analysis);

        EnhancedTechStack {
            stack: enhanced,
            gap_analysis,
            key_decisions,
            migration_notes,
            recommendations,
        }
    }
}

impl Default for GapAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;

    use crate::models::{
        AiIntegrationsView, DatabaseView, InfrastructureView, Priority, RepositoryInfo,
        StackMetadata, TechnologyCategories,
    };

    fn stack(technologies: TechnologyCategories, description: &str) -> StructuredTechStack {
        StructuredTechStack {
            repository_info: RepositoryInfo {
                name: "web".to_string(),
                full_name: "acme/web".to_string(),
                description: Some(description.to_string()),
                language: Some("TypeScript".to_string()),
                size: 2048,
                updated_at: Utc::now(),
                default_branch: "main".to_string(),
            },
            technologies,
            frameworks: Vec::new(),
            languages: Vec::new(),
            package_managers: Vec::new(),
            development_tools: Vec::new(),
            dependencies: Default::default(),
            configurations: Default::default(),
            infrastructure: InfrastructureView::default(),
            database: DatabaseView::default(),
            ai_integrations: AiIntegrationsView::default(),
            analysis_metadata: StackMetadata {
                analyzed_at: Utc::now(),
                files_analyzed: 0,
                total_dependencies: 0,
            },
        }
    }

    #[test]
    fn covers_all_eight_categories() {
        let enhanced = GapAnalysisEngine::new().analyze(&stack(Default::default(), ""));
        assert_eq!(enhanced.gap_analysis.len(), 8);
        for name in TechnologyCategories::NAMES {
            assert!(enhanced.gap_analysis.contains_key(name));
        }
    }

    #[test]
    fn gap_entries_surface_in_enhanced_technologies() {
        let mut technologies = TechnologyCategories::default();
        technologies.frontend.push("React-18.2.0".to_string());

        let enhanced = GapAnalysisEngine::new().analyze(&stack(technologies, ""));

        let frontend = &enhanced.stack.technologies.frontend;
        assert_eq!(frontend[0], "React-18.2.0");
        assert!(frontend.last().unwrap().starts_with("GAP: "));
    }

    #[test]
    fn strategic_recommendations_cover_high_priority_categories() {
        let enhanced = GapAnalysisEngine::new().analyze(&stack(Default::default(), ""));

        let high_categories: Vec<_> = enhanced
            .gap_analysis
            .iter()
            .filter(|(_, a)| a.priority == Priority::High)
            .map(|(c, _)| c.clone())
            .collect();

        for category in &high_categories {
            assert!(
                enhanced.recommendations.iter().any(|r| &r.category == category),
                "missing strategic recommendation for {category}"
            );
        }
        assert!(enhanced
            .recommendations
            .iter()
            .any(|r| r.title == "Microservices Consideration"));
    }

    #[test]
    fn analysis_is_idempotent() {
        let mut technologies = TechnologyCategories::default();
        technologies.frontend.push("Next.js-14.0.0".to_string());
        let input = stack(technologies, "ai assistant");

        let engine = GapAnalysisEngine::new();
        let first = engine.analyze(&input);
        let second = engine.analyze(&input);

        assert_eq!(first.gap_analysis, second.gap_analysis);
        assert_eq!(first.key_decisions, second.key_decisions);
        assert_eq!(first.migration_notes, second.migration_notes);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.stack.technologies, second.stack.technologies);
    }
}
