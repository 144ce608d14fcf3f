use std::collections::BTreeMap;

use crate::models::{ConfigFileInfo, FileRecord};

const PREVIEW_LENGTH: usize = 200;

/// Configuration files the analyzer reports on. Presence is recorded for
/// every name so absence is visible downstream.
pub const KNOWN_CONFIG_FILES: &[&str] = &[
    "next.config.js",
    "next.config.mjs",
    "tailwind.config.js",
    "tailwind.config.ts",
    "postcss.config.js",
    "tsconfig.json",
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
    "supabase/config.toml",
];

/// Records presence, size and a short content preview for each known
/// configuration file.
pub fn analyze_configurations(files: &[FileRecord]) -> BTreeMap<String, ConfigFileInfo> {
    let mut configurations = BTreeMap::new();

    for name in KNOWN_CONFIG_FILES {
        let info = match files.iter().find(|f| f.path == *name) {
            Some(file) => ConfigFileInfo {
                exists: true,
                size: file.size,
                content_preview: Some(preview(&file.content)),
            },
            None => ConfigFileInfo {
                exists: false,
                size: 0,
                content_preview: None,
            },
        };
        configurations.insert((*name).to_string(), info);
    }

    configurations
}

fn preview(content: &str) -> String {
    content.chars().take(PREVIEW_LENGTH).collect()
}

pub fn config_exists(configurations: &BTreeMap<String, ConfigFileInfo>, name: &str) -> bool {
    configurations.get(name).is_some_and(|c| c.exists)
}
