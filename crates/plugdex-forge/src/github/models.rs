//! GitHub REST wire types.
//!
//! Only the fields the pipeline reads. Counters default to zero and nullable
//! strings to `None` so a sparse response still decodes.

use serde::Deserialize;

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    pub default_branch: String,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub subscribers_count: u64,
    #[serde(default)]
    pub network_count: u64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /repos/{owner}/{repo}/branches/{branch}`
#[derive(Debug, Clone, Deserialize)]
pub struct GithubBranch {
    pub commit: BranchCommit,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BranchCommit {
    pub commit: CommitDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    #[serde(default)]
    pub committer: Option<Signature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub date: Option<String>,
}

impl GithubBranch {
    /// Committer date of the branch head, empty when GitHub omits it.
    pub fn last_commit_date(&self) -> String {
        self.commit
            .commit
            .committer
            .as_ref()
            .and_then(|c| c.date.clone())
            .unwrap_or_default()
    }
}

/// `GET /repos/{owner}/{repo}/readme`
#[derive(Debug, Clone, Deserialize)]
pub struct GithubReadme {
    #[serde(default)]
    pub download_url: Option<String>,
}

/// One page of `GET /search/repositories`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubSearchPage {
    #[serde(default)]
    pub items: Vec<GithubSearchItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GithubSearchItem {
    pub full_name: String,
    #[serde(default)]
    pub topics: Vec<String>,
}
