//! Per-repository lookups: metadata, default branch, README.

use super::GithubClient;
use super::models::{GithubBranch, GithubReadme, GithubRepo};
use crate::error::{ForgeError, ForgeResult};
use crate::http::HttpBackend;

impl<B: HttpBackend> GithubClient<B> {
    /// `GET /repos/{owner}/{repo}`
    pub(crate) async fn fetch_repo(&self, username: &str, repo: &str) -> ForgeResult<GithubRepo> {
        let url = self.endpoint(&format!(
            "/repos/{}/{}",
            urlencoding::encode(username),
            urlencoding::encode(repo)
        ))?;
        self.api_get(&url).await?.json()
    }

    /// `GET /repos/{owner}/{repo}/branches/{branch}`
    pub(crate) async fn fetch_branch(
        &self,
        username: &str,
        repo: &str,
        branch: &str,
    ) -> ForgeResult<GithubBranch> {
        let url = self.endpoint(&format!(
            "/repos/{}/{}/branches/{}",
            urlencoding::encode(username),
            urlencoding::encode(repo),
            urlencoding::encode(branch)
        ))?;
        self.api_get(&url).await?.json()
    }

    /// README text: metadata lookup for the download URL, then a raw fetch.
    pub(crate) async fn fetch_readme(&self, username: &str, repo: &str) -> ForgeResult<String> {
        let url = self.endpoint(&format!(
            "/repos/{}/{}/readme",
            urlencoding::encode(username),
            urlencoding::encode(repo)
        ))?;
        let readme: GithubReadme = self.api_get(&url).await?.json()?;

        let download_url = readme
            .download_url
            .ok_or_else(|| ForgeError::InvalidResponse {
                status: 200,
                message: format!("README of {username}/{repo} has no download_url"),
            })?;
        self.fetch_text(&download_url).await
    }
}
