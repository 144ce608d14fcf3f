use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::host::RepositoryHost;
use crate::github::rate_limiter::RateLimiter;
use crate::models::{ContentResponse, RepositoryInfo, TreeEntry, TreeResponse};

pub struct GitHubClient {
    client: Client,
    rate_limiter: RateLimiter,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("stackscan/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(),
            base_url: "https://api.github.com".to_string(),
        })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        let response = self.client.get(url).send().await?;
        self.rate_limiter.update_from_response(&response).await;
        Ok(response)
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryInfo> {
        let url = format!("{}/repos/{}/{}", self.base_url, owner, repo);
        tracing::info!("Fetching repository metadata: {}/{}", owner, repo);

        let response = self.get(&url).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::RepoNotFound(format!("{}/{}", owner, repo)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "failed to fetch repository {}/{}: {} - {}",
                owner, repo, status, body
            )));
        }

        Ok(response.json().await?)
    }

    async fn get_tree(&self, owner: &str, repo: &str, branch: &str) -> Result<Vec<TreeEntry>> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.base_url, owner, repo, branch
        );
        tracing::info!("Fetching file tree for branch: {}", branch);

        let response = self.get(&url).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "failed to fetch tree {}/{}@{}: {} - {}",
                owner, repo, branch, status, body
            )));
        }

        let tree: TreeResponse = response.json().await?;
        if tree.truncated {
            tracing::warn!("Tree listing for {}/{} was truncated by the API", owner, repo);
        }

        Ok(tree.tree)
    }

    async fn get_file_content(&self, owner: &str, repo: &str, path: &str) -> Result<String> {
        let url = format!("{}/repos/{}/{}/contents/{}", self.base_url, owner, repo, path);
        tracing::debug!("Fetching file: {}", path);

        let response = self.get(&url).await?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Error::GitHubApi(format!(
                "failed to fetch {}: {}",
                path, status
            )));
        }

        let content: ContentResponse = response.json().await?;
        if content.encoding != "base64" {
            return Err(Error::GitHubApi(format!(
                "unsupported content encoding '{}' for {}",
                content.encoding, path
            )));
        }

        // The contents API wraps base64 payloads with newlines.
        let decoded = BASE64.decode(content.content.replace('\n', ""))?;
        Ok(String::from_utf8_lossy(&decoded).into_owned())
    }
}
