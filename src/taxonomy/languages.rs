/// Maps a file path to a language tag by extension, with a handful of
/// special-cased filenames that carry no useful extension.
pub fn detect_language(path: &str) -> Option<String> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let lower = file_name.to_lowercase();

    if lower == "dockerfile" || lower.starts_with("dockerfile.") {
        return Some("Dockerfile".to_string());
    }
    if lower == "makefile" || lower == "gnumakefile" {
        return Some("Makefile".to_string());
    }
    if lower == "gemfile" || lower == "rakefile" {
        return Some("Ruby".to_string());
    }
    if lower.ends_with(".d.ts") {
        return Some("TypeScript".to_string());
    }

    let extension = lower.rsplit('.').next()?;

    let language = match extension {
        "rs" => "Rust",
        "py" | "pyw" => "Python",
        "js" | "mjs" | "cjs" | "jsx" => "JavaScript",
        "ts" | "tsx" => "TypeScript",
        "go" => "Go",
        "java" => "Java",
        "kt" | "kts" => "Kotlin",
        "scala" => "Scala",
        "c" | "h" => "C",
        "cpp" | "cc" | "cxx" | "hpp" => "C++",
        "cs" => "C#",
        "swift" => "Swift",
        "rb" | "rake" | "gemspec" => "Ruby",
        "php" => "PHP",
        "ex" | "exs" => "Elixir",
        "erl" => "Erlang",
        "hs" => "Haskell",
        "sh" | "bash" | "zsh" => "Shell",
        "ps1" => "PowerShell",
        "html" | "htm" => "HTML",
        "css" => "CSS",
        "scss" | "sass" => "SCSS",
        "vue" => "Vue",
        "svelte" => "Svelte",
        "sql" => "SQL",
        "graphql" | "gql" => "GraphQL",
        "json" => "JSON",
        "yaml" | "yml" => "YAML",
        "toml" => "TOML",
        "xml" => "XML",
        "md" | "markdown" => "Markdown",
        "lua" => "Lua",
        "r" => "R",
        "pl" | "pm" => "Perl",
        "dart" => "Dart",
        "zig" => "Zig",
        "proto" => "Protocol Buffers",
        "tf" | "tfvars" => "Terraform",
        _ => return None,
    };

    Some(language.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(detect_language("src/main.rs"), Some("Rust".to_string()));
        assert_eq!(detect_language("app.py"), Some("Python".to_string()));
        assert_eq!(detect_language("pages/index.tsx"), Some("TypeScript".to_string()));
        assert_eq!(detect_language("Dockerfile"), Some("Dockerfile".to_string()));
        assert_eq!(detect_language("types.d.ts"), Some("TypeScript".to_string()));
        assert_eq!(detect_language("Gemfile"), Some("Ruby".to_string()));
        assert_eq!(detect_language("LICENSE"), None);
    }

    #[test]
    fn test_nested_paths_use_file_name() {
        assert_eq!(
            detect_language("supabase/migrations/0001_init.sql"),
            Some("SQL".to_string())
        );
    }
}
