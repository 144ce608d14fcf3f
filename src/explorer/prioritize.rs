use std::collections::HashSet;

use crate::models::TreeEntry;

/// Hard cap on content fetches per run. One exploration never issues more
/// than this many `contents` requests, whatever the repository size.
pub const MAX_PRIORITIZED_FILES: usize = 50;

/// Files included unconditionally whenever present: dependency manifests,
/// lockfiles, build and framework configs, infra files, docs, CI workflows.
const CRITICAL_FILES: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "requirements.txt",
    "poetry.lock",
    "Gemfile",
    "Gemfile.lock",
    "composer.json",
    "composer.lock",
    "go.mod",
    "go.sum",
    "Cargo.toml",
    "Cargo.lock",
    "tsconfig.json",
    "next.config.js",
    "next.config.mjs",
    "tailwind.config.js",
    "tailwind.config.ts",
    "postcss.config.js",
    "vite.config.ts",
    "webpack.config.js",
    "babel.config.js",
    ".eslintrc.json",
    "prettier.config.js",
    "jest.config.js",
    "vitest.config.ts",
    "Dockerfile",
    "docker-compose.yml",
    "vercel.json",
    "netlify.toml",
    ".env.example",
    "README.md",
    "supabase/config.toml",
    ".github/workflows/ci.yml",
    ".github/workflows/deploy.yml",
];

/// Selects at most `limit` blob paths: the critical allow-list first, then
/// pattern-matched source files in tree order until the cap is reached.
/// Pure selection over the tree listing; no network involved.
pub fn prioritize_files(entries: &[TreeEntry], limit: usize) -> Vec<String> {
    let limit = limit.min(MAX_PRIORITIZED_FILES);
    let mut selected = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    let available: HashSet<&str> = entries.iter().map(|e| e.path.as_str()).collect();

    for critical in CRITICAL_FILES {
        if selected.len() >= limit {
            return selected;
        }
        if available.contains(critical) && seen.insert(*critical) {
            selected.push((*critical).to_string());
        }
    }

    for entry in entries {
        if selected.len() >= limit {
            break;
        }
        if matches_source_pattern(&entry.path) && seen.insert(entry.path.as_str()) {
            selected.push(entry.path.clone());
        }
    }

    selected
}

/// Path patterns for supplementary source files: application code under the
/// usual web-project roots plus database migrations.
fn matches_source_pattern(path: &str) -> bool {
    let source_roots = ["src/", "app/", "pages/", "components/", "lib/"];
    let source_exts = [".ts", ".tsx", ".js", ".jsx"];

    if source_roots.iter().any(|root| path.starts_with(root))
        && source_exts.iter().any(|ext| path.ends_with(ext))
    {
        return true;
    }

    if path.starts_with("supabase/migrations/") && path.ends_with(".sql") {
        return true;
    }

    path.starts_with("supabase/functions/") && path.ends_with(".ts")
}
