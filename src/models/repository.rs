use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only repository snapshot from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub size: u64,
    pub updated_at: DateTime<Utc>,
    pub default_branch: String,
}

/// One entry of a recursive git tree response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub size: Option<u64>,
}

impl TreeEntry {
    pub fn is_blob(&self) -> bool {
        self.entry_type == "blob"
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}` for a file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentResponse {
    pub content: String,
    pub encoding: String,
    pub size: u64,
}

/// A fetched and decoded repository file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub content: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

impl FileRecord {
    /// Final path component, used to match manifests and config files.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// Sole handoff artifact from the explorer to the analyzer.
///
/// `files` holds only paths that were both prioritized and successfully
/// fetched; every path is unique and `files.len() <= total_files_scanned`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorationResult {
    pub repository_info: RepositoryInfo,
    pub files: Vec<FileRecord>,
    pub directory_structure: Vec<String>,
    pub total_files_scanned: usize,
    pub analysis_timestamp: DateTime<Utc>,
}
