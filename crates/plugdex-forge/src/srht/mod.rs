//! SourceHut client: one GraphQL query per repository plus a README fallback.

mod models;

use serde_json::json;
use tracing::{debug, info};
use url::Url;

use crate::config::SrhtClientConfig;
use crate::error::{ForgeError, ForgeResult};
use crate::http::{HttpBackend, ReqwestBackend};

use models::GraphqlResponse;
pub use models::SrhtRepo;

/// Default SourceHut client using the reqwest HTTP backend.
pub type DefaultSrhtClient = SrhtClient<ReqwestBackend>;

/// README file names tried in order when the API has no rendered README.
const README_CANDIDATES: [&str; 3] = ["README.md", "README.markdown", "README"];

/// Branch assumed for an empty repository with no HEAD.
const FALLBACK_BRANCH: &str = "main";

const REPOSITORY_QUERY: &str = "query($username: String!, $repo: String!) {
  user(username: $username) {
    repository(name: $repo) {
      id
      name
      created
      updated
      readme
      description
      HEAD { name }
    }
  }
}";

/// Everything fetched for one SourceHut repository.
#[derive(Debug, Clone)]
pub struct SrhtData {
    pub repo: SrhtRepo,
    pub branch: String,
    pub readme: String,
}

pub struct SrhtClient<B: HttpBackend> {
    pub(crate) backend: B,
    base_url: Url,
    auth: String,
}

impl DefaultSrhtClient {
    pub fn new(config: &SrhtClientConfig) -> ForgeResult<Self> {
        let backend = ReqwestBackend::new(&config.user_agent, config.timeout)?;
        Self::with_backend(config, backend)
    }
}

impl<B: HttpBackend> SrhtClient<B> {
    pub(crate) fn with_backend(config: &SrhtClientConfig, backend: B) -> ForgeResult<Self> {
        Ok(Self {
            backend,
            base_url: Url::parse(&config.base_url)?,
            auth: config.bearer_auth(),
        })
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Browser URL of a repository: `https://git.sr.ht/~user/repo`.
    pub(crate) fn repo_link(&self, username: &str, repo: &str) -> String {
        format!("{}/~{username}/{repo}", self.base())
    }

    /// Repository metadata, branch and README.
    ///
    /// Only the GraphQL query can fail; README lookups fall back to an empty
    /// string.
    pub(crate) async fn fetch_repo_data(&self, username: &str, repo: &str) -> ForgeResult<SrhtData> {
        let url = Url::parse(&format!("{}/query", self.base()))?;
        let body = json!({
            "query": REPOSITORY_QUERY,
            "variables": {"username": username, "repo": repo},
        });

        debug!(url = %url, id = %format!("{username}/{repo}"), "Fetching");
        let response = self.backend.post_json(&url, Some(&self.auth), &body).await?;
        let status = response.status;
        let payload: GraphqlResponse = response.json()?;

        if !payload.errors.is_empty() && payload.data.is_none() {
            let message = payload
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ForgeError::InvalidResponse { status, message });
        }

        let data = payload
            .data
            .and_then(|d| d.user)
            .and_then(|u| u.repository)
            .ok_or_else(|| ForgeError::RepositoryNotFound {
                id: format!("{username}/{repo}"),
            })?;

        let branch = data.branch().unwrap_or(FALLBACK_BRANCH).to_string();
        let readme = match data.readme.as_deref() {
            Some(readme) if !readme.is_empty() => readme.to_string(),
            _ => self.fetch_readme(username, repo, &branch).await,
        };

        Ok(SrhtData {
            repo: data,
            branch,
            readme,
        })
    }

    /// First README candidate answering 200 from the blob endpoint, or empty.
    async fn fetch_readme(&self, username: &str, repo: &str, branch: &str) -> String {
        for file in README_CANDIDATES {
            let url = format!("{}/~{username}/{repo}/blob/{branch}/{file}", self.base());
            match self.fetch_blob(&url).await {
                Ok(readme) => return readme,
                Err(e) => info!(url = %url, error = %e, "README candidate unavailable"),
            }
        }
        String::new()
    }

    async fn fetch_blob(&self, url: &str) -> ForgeResult<String> {
        let url = Url::parse(url)?;
        debug!(url = %url, "Fetching");
        self.backend.get(&url, None).await?.text()
    }
}
