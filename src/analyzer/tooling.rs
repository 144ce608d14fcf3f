use std::collections::BTreeMap;

use crate::models::{
    AiIntegrationsView, ConfigFileInfo, DatabaseView, DependencyMap, FileRecord,
    InfrastructureView,
};
use crate::taxonomy::detect_language;

use super::configurations::config_exists;

/// Languages present among the fetched files, first-seen order. Scans the
/// fetched subset only; languages confined to unfetched files go unreported.
pub fn detect_languages(files: &[FileRecord]) -> Vec<String> {
    let mut languages: Vec<String> = Vec::new();

    for file in files {
        if let Some(language) = detect_language(&file.path) {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
    }

    languages
}

/// Package managers inferred from lockfile presence among fetched files.
pub fn detect_package_managers(files: &[FileRecord]) -> Vec<String> {
    const LOCKFILES: &[(&str, &str)] = &[
        ("package-lock.json", "npm"),
        ("yarn.lock", "Yarn"),
        ("pnpm-lock.yaml", "pnpm"),
        ("Cargo.lock", "Cargo"),
        ("Gemfile.lock", "Bundler"),
        ("poetry.lock", "Poetry"),
        ("composer.lock", "Composer"),
        ("go.sum", "Go Modules"),
    ];

    let mut managers = Vec::new();
    for (lockfile, manager) in LOCKFILES {
        if files.iter().any(|f| f.file_name() == *lockfile) {
            managers.push((*manager).to_string());
        }
    }
    managers
}

/// Development tools from a fixed dependency-presence list.
pub fn detect_development_tools(dependencies: &DependencyMap) -> Vec<String> {
    const TOOLS: &[(&str, &str)] = &[
        ("eslint", "ESLint"),
        ("prettier", "Prettier"),
        ("typescript", "TypeScript Compiler"),
        ("husky", "Husky"),
        ("lint-staged", "lint-staged"),
        ("nodemon", "Nodemon"),
        ("turbo", "Turborepo"),
        ("jest", "Jest"),
        ("vitest", "Vitest"),
    ];

    let mut tools = Vec::new();
    for (dependency, tool) in TOOLS {
        if dependencies.contains_key(*dependency) {
            tools.push((*tool).to_string());
        }
    }
    tools
}

/// Structured infrastructure view over dependency and file evidence.
pub fn analyze_infrastructure(
    dependencies: &DependencyMap,
    configurations: &BTreeMap<String, ConfigFileInfo>,
    files: &[FileRecord],
) -> InfrastructureView {
    let containerized = config_exists(configurations, "Dockerfile")
        || config_exists(configurations, "docker-compose.yml");

    let mut ci_cd = Vec::new();
    if files.iter().any(|f| f.path.starts_with(".github/workflows/")) {
        ci_cd.push("GitHub Actions".to_string());
    }

    let mut hosting = Vec::new();
    if config_exists(configurations, "vercel.json") {
        hosting.push("Vercel".to_string());
    }
    if config_exists(configurations, "netlify.toml") {
        hosting.push("Netlify".to_string());
    }
    if dependencies.contains_key("aws-sdk") || dependencies.contains_key("@aws-sdk/client-s3") {
        hosting.push("AWS".to_string());
    }

    let mut monitoring = Vec::new();
    if dependencies.contains_key("@sentry/nextjs") || dependencies.contains_key("@sentry/node") {
        monitoring.push("Sentry".to_string());
    }

    InfrastructureView {
        containerized,
        ci_cd,
        hosting,
        monitoring,
    }
}

/// Structured database view over dependency and file evidence.
pub fn analyze_database(dependencies: &DependencyMap, files: &[FileRecord]) -> DatabaseView {
    const PROVIDERS: &[(&str, &str)] = &[
        ("@supabase/supabase-js", "PostgreSQL (Supabase)"),
        ("pg", "PostgreSQL"),
        ("mysql2", "MySQL"),
        ("mongodb", "MongoDB"),
        ("sqlite3", "SQLite"),
        ("redis", "Redis"),
        ("ioredis", "Redis"),
    ];
    const ORMS: &[(&str, &str)] = &[
        ("@prisma/client", "Prisma"),
        ("drizzle-orm", "Drizzle"),
        ("mongoose", "Mongoose"),
        ("sequelize", "Sequelize"),
        ("typeorm", "TypeORM"),
    ];

    let mut providers = Vec::new();
    for (dependency, provider) in PROVIDERS {
        if dependencies.contains_key(*dependency) && !providers.contains(&provider.to_string()) {
            providers.push((*provider).to_string());
        }
    }

    let mut orms = Vec::new();
    for (dependency, orm) in ORMS {
        if dependencies.contains_key(*dependency) {
            orms.push((*orm).to_string());
        }
    }

    let has_migrations = files.iter().any(|f| f.path.contains("migrations/"));

    DatabaseView {
        providers,
        orms,
        has_migrations,
    }
}

/// Structured AI-integration view over dependency evidence.
pub fn analyze_ai_integrations(dependencies: &DependencyMap) -> AiIntegrationsView {
    const PROVIDERS: &[(&str, &str)] = &[
        ("openai", "OpenAI"),
        ("@anthropic-ai/sdk", "Anthropic"),
        ("@huggingface/inference", "Hugging Face"),
        ("replicate", "Replicate"),
    ];
    const ORCHESTRATION: &[(&str, &str)] = &[("langchain", "LangChain")];
    const VECTOR_STORES: &[(&str, &str)] = &[("@pinecone-database/pinecone", "Pinecone")];

    let collect = |table: &[(&str, &str)]| -> Vec<String> {
        table
            .iter()
            .filter(|(dependency, _)| dependencies.contains_key(*dependency))
            .map(|(_, name)| name.to_string())
            .collect()
    };

    AiIntegrationsView {
        providers: collect(PROVIDERS),
        orchestration: collect(ORCHESTRATION),
        vector_stores: collect(VECTOR_STORES),
    }
}
