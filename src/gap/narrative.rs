use std::collections::BTreeMap;

use crate::models::{
    CategoryGapAnalysis, Priority, StrategicRecommendation, TechnologyCategories,
};

fn has_tech(current: &[String], name: &str) -> bool {
    current
        .iter()
        .any(|tag| tag == name || tag.starts_with(&format!("{}-", name)))
}

/// Templated rationale sentences, each emitted when the matching technology
/// is present. Illustrative narrative for the report, not something inferred
/// from actual decision records.
pub fn generate_key_decisions(technologies: &TechnologyCategories) -> Vec<String> {
    let mut decisions = Vec::new();

    if has_tech(&technologies.frontend, "Next.js") {
        decisions.push(
            "Chose Next.js over a bare React SPA for server-side rendering and file-based routing"
                .to_string(),
        );
    }
    if has_tech(&technologies.backend, "Supabase") {
        decisions.push(
            "Chose Supabase over self-hosted PostgreSQL for managed auth, storage and realtime APIs"
                .to_string(),
        );
    }
    if has_tech(&technologies.frontend, "TypeScript") {
        decisions.push(
            "Adopted TypeScript across the codebase to move type errors to compile time".to_string(),
        );
    }
    if has_tech(&technologies.frontend, "Tailwind CSS") {
        decisions.push(
            "Standardized on Tailwind CSS rather than hand-rolled component stylesheets".to_string(),
        );
    }
    if has_tech(&technologies.database, "Prisma") {
        decisions
            .push("Selected Prisma as the single typed gateway to the database schema".to_string());
    }
    if has_tech(&technologies.platforms, "Vercel") {
        decisions.push(
            "Deployed on Vercel to keep hosting aligned with the framework's build pipeline"
                .to_string(),
        );
    }

    decisions
}

/// Leading major version of a technology tag, if one is present.
fn tag_major(current: &[String], name: &str) -> Option<u32> {
    let prefix = format!("{}-", name);
    current
        .iter()
        .find_map(|tag| tag.strip_prefix(&prefix))
        .and_then(|version| version.split('.').next())
        .and_then(|major| major.parse().ok())
}

/// Conditional upgrade suggestions plus two always-on hygiene notes.
pub fn generate_migration_notes(technologies: &TechnologyCategories) -> Vec<String> {
    let mut notes = Vec::new();

    if tag_major(&technologies.frontend, "React").is_some_and(|major| major < 18) {
        notes.push("Upgrade React to 18 for concurrent rendering and automatic batching".to_string());
    }
    if tag_major(&technologies.frontend, "Next.js").is_some_and(|major| major < 13) {
        notes.push("Migrate Next.js to the app router introduced in 13".to_string());
    }
    if tag_major(&technologies.frontend, "Vue.js").is_some_and(|major| major < 3) {
        notes.push("Upgrade Vue to 3 for the composition API".to_string());
    }

    notes.push("Audit dependency lockfiles for unpatched security advisories".to_string());
    notes.push("Document required environment variables in .env.example".to_string());

    notes
}

/// One strategic recommendation per high-priority category, plus an
/// always-included medium-priority microservices entry.
pub fn generate_strategic_recommendations(
    gap_analysis: &BTreeMap<String, CategoryGapAnalysis>,
) -> Vec<StrategicRecommendation> {
    let mut recommendations = Vec::new();

    for (category, analysis) in gap_analysis {
        if analysis.priority != Priority::High {
            continue;
        }

        let title = match category.as_str() {
            "frontend" => "Strengthen Frontend Foundations",
            "backend" => "Harden Backend Architecture",
            "database" => "Close Data Layer Gaps",
            "infrastructure" => "Invest in Delivery Infrastructure",
            "development" => "Raise Developer Tooling Baseline",
            "ai" => "Build Out AI Capabilities",
            _ => "Close Category Gaps",
        };

        recommendations.push(StrategicRecommendation {
            category: category.clone(),
            title: title.to_string(),
            description: analysis.recommendations.join("; "),
            priority: Priority::High,
            timeline: "1-2 quarters".to_string(),
            impact: format!("Addresses {} identified gaps", analysis.identified_gaps.len()),
        });
    }

    recommendations.push(StrategicRecommendation {
        category: "architecture".to_string(),
        title: "Microservices Consideration".to_string(),
        description: "Evaluate splitting high-churn domains into separately deployable services \
                      once team size and traffic justify the operational overhead"
            .to_string(),
        priority: Priority::Medium,
        timeline: "6-12 months".to_string(),
        impact: "Keeps scaling options open without committing to premature decomposition"
            .to_string(),
    });

    recommendations
}

/// Surfaces gap findings inside the technology lists: one synthetic
/// `"GAP: ..."` entry per category with findings.
pub fn enhance_technologies(
    technologies: &mut TechnologyCategories,
    gap_analysis: &BTreeMap<String, CategoryGapAnalysis>,
) {
    for (category, analysis) in gap_analysis {
        if analysis.identified_gaps.is_empty() {
            continue;
        }
        if let Some(bucket) = technologies.get_mut(category) {
            bucket.push(format!("GAP: {}", analysis.recommendations.join("; ")));
        }
    }
}
