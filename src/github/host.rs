use async_trait::async_trait;

use crate::error::Result;
use crate::models::{RepositoryInfo, TreeEntry};

/// Read-only view of a repository host. The production implementation is
/// [`GitHubClient`](crate::github::GitHubClient); tests drive the explorer
/// with an in-memory fake instead of the network.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Repository metadata snapshot. Fatal on any non-2xx status.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo>;

    /// Full recursive tree for one branch, blobs and trees alike.
    /// Fatal on any non-2xx status.
    async fn get_tree(&self, owner: &str, repo: &str, branch: &str) -> Result<Vec<TreeEntry>>;

    /// Decoded text content of a single file.
    async fn get_file_content(&self, owner: &str, repo: &str, path: &str) -> Result<String>;
}
