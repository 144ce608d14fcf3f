use std::collections::BTreeMap;

use crate::models::{ConfigFileInfo, DependencyMap, FileRecord, TechnologyCategories};

use super::configurations::config_exists;

/// Builds a `"<Name>-<version>"` tag, stripping the range prefix from the
/// manifest's version specifier. Falls back to the bare name when the
/// version is unresolvable.
fn tech_tag(name: &str, version: &str) -> String {
    let version = version.trim().trim_start_matches(['^', '~']).trim();
    if version.is_empty() || version == "*" || version == "latest" {
        name.to_string()
    } else {
        format!("{}-{}", name, version)
    }
}

/// Pushes a versioned tag when the dependency is present.
fn push_if_present(
    bucket: &mut Vec<String>,
    dependencies: &DependencyMap,
    dependency: &str,
    name: &str,
) {
    if let Some(version) = dependencies.get(dependency) {
        bucket.push(tech_tag(name, version));
    }
}

/// Populates the eight fixed buckets from dependency evidence, with a few
/// configuration-file checks for technologies that have no manifest entry
/// (Docker, hosting platforms, CI). Rule order is fixed; insertion order in
/// each bucket follows it.
pub fn categorize_technologies(
    dependencies: &DependencyMap,
    configurations: &BTreeMap<String, ConfigFileInfo>,
    files: &[FileRecord],
) -> TechnologyCategories {
    let mut tech = TechnologyCategories::default();

    // Frontend
    push_if_present(&mut tech.frontend, dependencies, "next", "Next.js");
    push_if_present(&mut tech.frontend, dependencies, "react", "React");
    push_if_present(&mut tech.frontend, dependencies, "vue", "Vue.js");
    push_if_present(&mut tech.frontend, dependencies, "@angular/core", "Angular");
    push_if_present(&mut tech.frontend, dependencies, "svelte", "Svelte");
    push_if_present(&mut tech.frontend, dependencies, "typescript", "TypeScript");
    push_if_present(&mut tech.frontend, dependencies, "tailwindcss", "Tailwind CSS");
    push_if_present(&mut tech.frontend, dependencies, "bootstrap", "Bootstrap");
    push_if_present(&mut tech.frontend, dependencies, "@reduxjs/toolkit", "Redux");
    push_if_present(&mut tech.frontend, dependencies, "zustand", "Zustand");
    push_if_present(&mut tech.frontend, dependencies, "mobx", "MobX");

    // Backend
    push_if_present(&mut tech.backend, dependencies, "express", "Express");
    push_if_present(&mut tech.backend, dependencies, "fastify", "Fastify");
    push_if_present(&mut tech.backend, dependencies, "@nestjs/core", "NestJS");
    push_if_present(&mut tech.backend, dependencies, "@supabase/supabase-js", "Supabase");
    push_if_present(&mut tech.backend, dependencies, "firebase-admin", "Firebase Admin");
    push_if_present(&mut tech.backend, dependencies, "next-auth", "NextAuth");
    push_if_present(&mut tech.backend, dependencies, "bullmq", "BullMQ");
    push_if_present(&mut tech.backend, dependencies, "django", "Django");
    push_if_present(&mut tech.backend, dependencies, "flask", "Flask");
    push_if_present(&mut tech.backend, dependencies, "fastapi", "FastAPI");
    push_if_present(&mut tech.backend, dependencies, "rails", "Ruby on Rails");
    push_if_present(&mut tech.backend, dependencies, "axum", "Axum");
    push_if_present(&mut tech.backend, dependencies, "actix-web", "Actix Web");
    push_if_present(&mut tech.backend, dependencies, "github.com/gin-gonic/gin", "Gin");

    // Database. Supabase implies a managed PostgreSQL, so it contributes
    // here as well as to the backend bucket, without version tags.
    if dependencies.contains_key("@supabase/supabase-js") {
        tech.database.push("PostgreSQL".to_string());
        tech.database.push("Supabase".to_string());
    }
    push_if_present(&mut tech.database, dependencies, "pg", "PostgreSQL");
    push_if_present(&mut tech.database, dependencies, "mysql2", "MySQL");
    push_if_present(&mut tech.database, dependencies, "mongodb", "MongoDB");
    push_if_present(&mut tech.database, dependencies, "sqlite3", "SQLite");
    push_if_present(&mut tech.database, dependencies, "redis", "Redis");
    push_if_present(&mut tech.database, dependencies, "ioredis", "Redis");
    push_if_present(&mut tech.database, dependencies, "@prisma/client", "Prisma");
    push_if_present(&mut tech.database, dependencies, "drizzle-orm", "Drizzle");
    push_if_present(&mut tech.database, dependencies, "mongoose", "Mongoose");
    push_if_present(&mut tech.database, dependencies, "sequelize", "Sequelize");
    push_if_present(&mut tech.database, dependencies, "typeorm", "TypeORM");

    // Infrastructure
    if config_exists(configurations, "Dockerfile")
        || config_exists(configurations, "docker-compose.yml")
    {
        tech.infrastructure.push("Docker".to_string());
    }
    if files.iter().any(|f| f.path.starts_with(".github/workflows/")) {
        tech.infrastructure.push("GitHub Actions".to_string());
    }
    push_if_present(&mut tech.infrastructure, dependencies, "aws-sdk", "AWS");
    push_if_present(&mut tech.infrastructure, dependencies, "@aws-sdk/client-s3", "AWS S3");
    push_if_present(&mut tech.infrastructure, dependencies, "@sentry/nextjs", "Sentry");
    push_if_present(&mut tech.infrastructure, dependencies, "@sentry/node", "Sentry");

    // Platforms
    if config_exists(configurations, "vercel.json") {
        tech.platforms.push("Vercel".to_string());
    }
    if config_exists(configurations, "netlify.toml") {
        tech.platforms.push("Netlify".to_string());
    }
    push_if_present(&mut tech.platforms, dependencies, "firebase", "Firebase");
    push_if_present(&mut tech.platforms, dependencies, "expo", "Expo");
    push_if_present(&mut tech.platforms, dependencies, "wrangler", "Cloudflare Workers");

    // AI
    push_if_present(&mut tech.ai, dependencies, "openai", "OpenAI");
    push_if_present(&mut tech.ai, dependencies, "@anthropic-ai/sdk", "Anthropic");
    push_if_present(&mut tech.ai, dependencies, "langchain", "LangChain");
    push_if_present(&mut tech.ai, dependencies, "@huggingface/inference", "Hugging Face");
    push_if_present(&mut tech.ai, dependencies, "replicate", "Replicate");
    push_if_present(&mut tech.ai, dependencies, "@pinecone-database/pinecone", "Pinecone");

    // Development
    push_if_present(&mut tech.development, dependencies, "eslint", "ESLint");
    push_if_present(&mut tech.development, dependencies, "prettier", "Prettier");
    push_if_present(&mut tech.development, dependencies, "jest", "Jest");
    push_if_present(&mut tech.development, dependencies, "vitest", "Vitest");
    push_if_present(&mut tech.development, dependencies, "cypress", "Cypress");
    push_if_present(&mut tech.development, dependencies, "@playwright/test", "Playwright");
    push_if_present(&mut tech.development, dependencies, "husky", "Husky");
    push_if_present(&mut tech.development, dependencies, "turbo", "Turborepo");

    // Integrations
    push_if_present(&mut tech.integrations, dependencies, "stripe", "Stripe");
    push_if_present(&mut tech.integrations, dependencies, "twilio", "Twilio");
    push_if_present(&mut tech.integrations, dependencies, "@sendgrid/mail", "SendGrid");
    push_if_present(&mut tech.integrations, dependencies, "resend", "Resend");
    push_if_present(&mut tech.integrations, dependencies, "@slack/web-api", "Slack");
    push_if_present(&mut tech.integrations, dependencies, "googleapis", "Google APIs");

    tech
}
