use serde_json::Value;

use crate::models::{DependencyMap, FileRecord};

/// Merges every recognized dependency manifest into one flat name -> version
/// map. Manifests merge in fetch order with last-writer-wins on name
/// collisions across ecosystems. A manifest that fails to parse is logged
/// and contributes nothing; the others still merge.
pub fn extract_dependencies(files: &[FileRecord]) -> DependencyMap {
    let mut dependencies = DependencyMap::new();

    for file in files {
        let parsed = match file.file_name() {
            "package.json" => parse_package_json(&file.content),
            "requirements.txt" => Ok(parse_requirements(&file.content)),
            "Gemfile" => Ok(parse_gemfile(&file.content)),
            "composer.json" => parse_composer_json(&file.content),
            "go.mod" => Ok(parse_go_mod(&file.content)),
            "Cargo.toml" => Ok(parse_cargo_toml(&file.content)),
            _ => continue,
        };

        match parsed {
            Ok(entries) => dependencies.extend(entries),
            Err(e) => tracing::warn!("Skipping manifest {}: {}", file.path, e),
        }
    }

    dependencies
}

/// package.json: dependencies merged first, then devDependencies.
fn parse_package_json(content: &str) -> crate::error::Result<Vec<(String, String)>> {
    let json: Value = serde_json::from_str(content)?;
    let mut entries = Vec::new();

    for section in ["dependencies", "devDependencies"] {
        if let Some(deps) = json.get(section).and_then(|v| v.as_object()) {
            for (name, version) in deps {
                entries.push((
                    name.clone(),
                    version.as_str().unwrap_or_default().to_string(),
                ));
            }
        }
    }

    Ok(entries)
}

/// requirements.txt: only pinned `name==version` lines contribute.
fn parse_requirements(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (name, version) = line.split_once("==")?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), version.trim().to_string()))
        })
        .collect()
}

/// Gemfile: `gem 'name'` or `gem 'name', 'version constraint'` lines.
fn parse_gemfile(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("gem "))
        .filter_map(|line| {
            let mut quoted = quoted_tokens(line);
            let name = quoted.next()?;
            let version = quoted.next().unwrap_or_default();
            Some((name, version))
        })
        .collect()
}

fn quoted_tokens(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c| c == '\'' || c == '"')
        .skip(1)
        .step_by(2)
        .map(|s| s.to_string())
}

/// composer.json: require merged first, then require-dev.
fn parse_composer_json(content: &str) -> crate::error::Result<Vec<(String, String)>> {
    let json: Value = serde_json::from_str(content)?;
    let mut entries = Vec::new();

    for section in ["require", "require-dev"] {
        if let Some(deps) = json.get(section).and_then(|v| v.as_object()) {
            for (name, version) in deps {
                entries.push((
                    name.clone(),
                    version.as_str().unwrap_or_default().to_string(),
                ));
            }
        }
    }

    Ok(entries)
}

/// go.mod: `module version` pairs inside `require ( ... )` blocks plus
/// single-line `require module version` statements.
fn parse_go_mod(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut in_require_block = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with("require (") {
            in_require_block = true;
            continue;
        }
        if in_require_block && line == ")" {
            in_require_block = false;
            continue;
        }

        let spec = if in_require_block {
            line
        } else if let Some(rest) = line.strip_prefix("require ") {
            rest
        } else {
            continue;
        };

        let mut parts = spec.split_whitespace();
        if let (Some(module), Some(version)) = (parts.next(), parts.next()) {
            if module.contains('.') {
                entries.push((module.to_string(), version.to_string()));
            }
        }
    }

    entries
}

/// Cargo.toml: key = value lines inside the `[dependencies]` section only.
/// Inline tables contribute their `version` field.
fn parse_cargo_toml(content: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut in_dependencies = false;

    for line in content.lines() {
        let line = line.trim();

        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((name, value)) = line.split_once('=') else {
            continue;
        };
        let name = name.trim();
        let value = value.trim();

        let version = if value.starts_with('{') {
            value
                .split_once("version")
                .and_then(|(_, rest)| rest.split('"').nth(1))
                .unwrap_or_default()
        } else {
            value.trim_matches('"')
        };

        entries.push((name.to_string(), version.to_string()));
    }

    entries
}
