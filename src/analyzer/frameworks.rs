use std::collections::BTreeMap;

use crate::models::{ConfigFileInfo, DependencyMap};

use super::configurations::config_exists;

/// Flat dependency-presence checks for framework markers, with two
/// configuration-file fallbacks that only fire when the dependency check
/// did not already add the entry.
pub fn detect_frameworks(
    dependencies: &DependencyMap,
    configurations: &BTreeMap<String, ConfigFileInfo>,
) -> Vec<String> {
    const CHECKS: &[(&str, &str)] = &[
        // Frontend
        ("next", "Next.js"),
        ("react", "React"),
        ("vue", "Vue.js"),
        ("@angular/core", "Angular"),
        ("svelte", "Svelte"),
        // Backend
        ("express", "Express"),
        ("fastify", "Fastify"),
        ("@nestjs/core", "NestJS"),
        ("django", "Django"),
        ("flask", "Flask"),
        ("fastapi", "FastAPI"),
        ("rails", "Ruby on Rails"),
        ("axum", "Axum"),
        ("actix-web", "Actix Web"),
        // CSS
        ("tailwindcss", "Tailwind CSS"),
        ("bootstrap", "Bootstrap"),
        // Testing
        ("jest", "Jest"),
        ("vitest", "Vitest"),
        ("cypress", "Cypress"),
        ("@playwright/test", "Playwright"),
        // Build
        ("webpack", "Webpack"),
        ("vite", "Vite"),
        // ORM
        ("@prisma/client", "Prisma"),
        ("drizzle-orm", "Drizzle"),
        ("sequelize", "Sequelize"),
        ("typeorm", "TypeORM"),
        ("mongoose", "Mongoose"),
    ];

    let mut frameworks = Vec::new();

    for (dependency, name) in CHECKS {
        if dependencies.contains_key(*dependency) {
            frameworks.push((*name).to_string());
        }
    }

    // Configuration fallbacks for projects whose manifest was missing or
    // unparseable but whose config files still give the framework away.
    if !frameworks.iter().any(|f| f == "Next.js")
        && (config_exists(configurations, "next.config.js")
            || config_exists(configurations, "next.config.mjs"))
    {
        frameworks.push("Next.js".to_string());
    }

    if !frameworks.iter().any(|f| f == "Tailwind CSS")
        && (config_exists(configurations, "tailwind.config.js")
            || config_exists(configurations, "tailwind.config.ts"))
    {
        frameworks.push("Tailwind CSS".to_string());
    }

    frameworks
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::analyzer::configurations::analyze_configurations;
    use crate::models::FileRecord;

    fn deps(pairs: &[(&str, &str)]) -> DependencyMap {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn dependency_checks_fire_in_order() {
        let dependencies = deps(&[("react", "^18.2.0"), ("next", "^14.0.0"), ("jest", "^29.0.0")]);
        let frameworks = detect_frameworks(&dependencies, &analyze_configurations(&[]));
        assert_eq!(frameworks, vec!["Next.js", "React", "Jest"]);
    }

    #[test]
    fn config_fallback_fires_only_without_dependency() {
        let files = vec![FileRecord {
            path: "next.config.js".to_string(),
            content: "module.exports = {}".to_string(),
            size: 19,
            file_type: Some("JavaScript".to_string()),
        }];
        let configurations = analyze_configurations(&files);

        let from_config = detect_frameworks(&DependencyMap::new(), &configurations);
        assert_eq!(from_config, vec!["Next.js"]);

        let from_dependency = detect_frameworks(&deps(&[("next", "^14.0.0")]), &configurations);
        assert_eq!(
            from_dependency.iter().filter(|f| *f == "Next.js").count(),
            1
        );
    }
}
