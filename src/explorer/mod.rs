pub mod prioritize;

pub use prioritize::MAX_PRIORITIZED_FILES;

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;
use crate::github::RepositoryHost;
use crate::models::{ExplorationResult, FileRecord, TreeEntry};
use crate::taxonomy::detect_language;
use prioritize::prioritize_files;

/// Stage 1: fetches repository metadata and a bounded, prioritized subset of
/// file contents. The only component with network access in the pipeline.
pub struct RepositoryExplorer {
    host: Arc<dyn RepositoryHost>,
    owner: String,
    repo: String,
    max_files: usize,
}

impl RepositoryExplorer {
    pub fn new(
        host: Arc<dyn RepositoryHost>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            host,
            owner: owner.into(),
            repo: repo.into(),
            max_files: MAX_PRIORITIZED_FILES,
        }
    }

    /// Lowers the per-run file budget; the hard cap still applies.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files.min(MAX_PRIORITIZED_FILES);
        self
    }

    /// Runs the exploration stage: metadata, tree listing, prioritized
    /// content fetches, directory structure. Metadata and tree failures are
    /// fatal; individual content fetches fail soft.
    pub async fn explore(&self) -> Result<ExplorationResult> {
        let repository_info = self.host.get_repository(&self.owner, &self.repo).await?;
        tracing::info!(
            "Exploring {} ({} KB, primary language {:?})",
            repository_info.full_name,
            repository_info.size,
            repository_info.language
        );

        let branch = self.default_branch();
        let tree = self.host.get_tree(&self.owner, &self.repo, branch).await?;
        let blobs: Vec<TreeEntry> = tree.into_iter().filter(TreeEntry::is_blob).collect();
        tracing::info!("Tree contains {} files", blobs.len());

        let prioritized = prioritize_files(&blobs, self.max_files);
        tracing::info!("Prioritized {} files for content fetch", prioritized.len());

        let files = self.fetch_file_contents(&prioritized).await;
        let directory_structure = build_directory_structure(&blobs);

        Ok(ExplorationResult {
            repository_info,
            total_files_scanned: blobs.len(),
            files,
            directory_structure,
            analysis_timestamp: Utc::now(),
        })
    }

    // TODO: read the branch off repository metadata instead of assuming
    // "main"; repositories with a different default branch fail the tree
    // fetch today.
    fn default_branch(&self) -> &'static str {
        "main"
    }

    /// Sequentially fetches each prioritized path. A failed fetch is logged
    /// and skipped, so the returned list may be shorter than the input.
    async fn fetch_file_contents(&self, paths: &[String]) -> Vec<FileRecord> {
        let pb = ProgressBar::new(paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut files = Vec::new();

        for path in paths {
            match self.host.get_file_content(&self.owner, &self.repo, path).await {
                Ok(content) => {
                    files.push(FileRecord {
                        path: path.clone(),
                        size: content.len() as u64,
                        file_type: detect_language(path),
                        content,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path, e);
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        files
    }
}

/// Sorted unique set of ancestor directories across the full tree listing,
/// not just the prioritized subset.
pub fn build_directory_structure(entries: &[TreeEntry]) -> Vec<String> {
    let mut directories = BTreeSet::new();

    for entry in entries {
        let mut index = 0;
        while let Some(sep) = entry.path[index..].find('/') {
            index += sep;
            directories.insert(entry.path[..index].to_string());
            index += 1;
        }
    }

    directories.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;
    use chrono::Utc;

    use crate::error::Error;
    use crate::models::RepositoryInfo;

    struct FakeHost {
        files: HashMap<String, String>,
    }

    impl FakeHost {
        fn new(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl RepositoryHost for FakeHost {
        async fn get_repository(&self, _owner: &str, repo: &str) -> crate::error::Result<RepositoryInfo> {
            Ok(RepositoryInfo {
                name: repo.to_string(),
                full_name: format!("acme/{repo}"),
                description: Some("sample project".to_string()),
                language: Some("TypeScript".to_string()),
                size: 1024,
                updated_at: Utc::now(),
                default_branch: "main".to_string(),
            })
        }

        async fn get_tree(
            &self,
            _owner: &str,
            _repo: &str,
            _branch: &str,
        ) -> crate::error::Result<Vec<TreeEntry>> {
            Ok(self
                .files
                .keys()
                .map(|path| TreeEntry {
                    path: path.clone(),
                    entry_type: "blob".to_string(),
                    size: Some(10),
                })
                .collect())
        }

        async fn get_file_content(
            &self,
            _owner: &str,
            _repo: &str,
            path: &str,
        ) -> crate::error::Result<String> {
            self.files
                .get(path)
                .filter(|c| !c.is_empty())
                .cloned()
                .ok_or_else(|| Error::GitHubApi(format!("failed to fetch {}: 404 Not Found", path)))
        }
    }

    #[tokio::test]
    async fn explore_collects_prioritized_files() {
        let host = FakeHost::new(&[
            ("package.json", "{\"dependencies\":{}}"),
            ("src/index.ts", "export {}"),
            ("assets/logo.png", "binary"),
        ]);
        let explorer = RepositoryExplorer::new(Arc::new(host), "acme", "web");

        let result = explorer.explore().await.unwrap();

        assert_eq!(result.total_files_scanned, 3);
        assert_eq!(result.files.len(), 2);
        let paths: Vec<_> = result.files.iter().map(|f| f.path.as_str()).collect();
        assert!(paths.contains(&"package.json"));
        assert!(paths.contains(&"src/index.ts"));
    }

    #[tokio::test]
    async fn single_fetch_failure_is_not_fatal() {
        // Empty content makes the fake host return a 404-style error.
        let host = FakeHost::new(&[
            ("package.json", "{}"),
            ("src/index.ts", ""),
            ("src/app.ts", "export {}"),
        ]);
        let explorer = RepositoryExplorer::new(Arc::new(host), "acme", "web");

        let result = explorer.explore().await.unwrap();

        assert_eq!(result.files.len(), 2);
        assert!(result.files.iter().all(|f| f.path != "src/index.ts"));
        assert!(result.files.len() <= result.total_files_scanned);
    }

    #[tokio::test]
    async fn file_records_carry_language_tags() {
        let host = FakeHost::new(&[("src/index.ts", "export {}")]);
        let explorer = RepositoryExplorer::new(Arc::new(host), "acme", "web");

        let result = explorer.explore().await.unwrap();
        assert_eq!(result.files[0].file_type.as_deref(), Some("TypeScript"));
    }

    #[test]
    fn directory_structure_is_sorted_and_unique() {
        let entries = vec![
            TreeEntry {
                path: "src/components/Button.tsx".to_string(),
                entry_type: "blob".to_string(),
                size: None,
            },
            TreeEntry {
                path: "src/lib/util.ts".to_string(),
                entry_type: "blob".to_string(),
                size: None,
            },
            TreeEntry {
                path: "src/components/Input.tsx".to_string(),
                entry_type: "blob".to_string(),
                size: None,
            },
        ];

        let dirs = build_directory_structure(&entries);
        assert_eq!(dirs, vec!["src", "src/components", "src/lib"]);
    }

    #[test]
    fn root_files_produce_no_directories() {
        let entries = vec![TreeEntry {
            path: "README.md".to_string(),
            entry_type: "blob".to_string(),
            size: None,
        }];
        assert!(build_directory_structure(&entries).is_empty());
    }
}
