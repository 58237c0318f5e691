//! GitHub REST client.
//!
//! Generic over the HTTP backend so tests can run against canned responses.
//! External code uses [`DefaultGithubClient`] through the core port traits.

mod models;
mod repos;
mod search;

use std::sync::Arc;

use tracing::debug;
use url::Url;

use crate::config::GithubClientConfig;
use crate::error::ForgeResult;
use crate::http::{HttpBackend, HttpResponse, ReqwestBackend};
use crate::rate_limit::{Clock, RateLimitGovernor, SystemClock};

pub use models::{GithubRepo, GithubSearchItem};

/// Default GitHub client using the reqwest HTTP backend and the system clock.
pub type DefaultGithubClient = GithubClient<ReqwestBackend>;

pub struct GithubClient<B: HttpBackend> {
    pub(crate) backend: B,
    api_url: Url,
    auth: String,
    governor: RateLimitGovernor,
}

impl DefaultGithubClient {
    /// Create a client from configuration.
    ///
    /// Fails only if the API URL does not parse or the HTTP client cannot be
    /// built; credentials are not checked.
    pub fn new(config: &GithubClientConfig) -> ForgeResult<Self> {
        let backend = ReqwestBackend::new(&config.user_agent, config.timeout)?;
        Self::with_backend(config, backend, Arc::new(SystemClock))
    }
}

impl<B: HttpBackend> GithubClient<B> {
    pub(crate) fn with_backend(
        config: &GithubClientConfig,
        backend: B,
        clock: Arc<dyn Clock>,
    ) -> ForgeResult<Self> {
        Ok(Self {
            backend,
            api_url: Url::parse(&config.api_url)?,
            auth: config.basic_auth(),
            governor: RateLimitGovernor::new(clock, config.reset_buffer),
        })
    }

    /// Absolute URL for an API path such as `/repos/owner/name`.
    fn endpoint(&self, path: &str) -> ForgeResult<Url> {
        let base = self.api_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Authenticated GET against the API, honoring the rate limit.
    async fn api_get(&self, url: &Url) -> ForgeResult<HttpResponse> {
        debug!(url = %url, "Fetching");
        let response = self.backend.get(url, Some(&self.auth)).await?;
        self.governor.observe(&response).await;
        Ok(response)
    }

    /// Unauthenticated GET of a plain-text document (raw README, curated list).
    pub(crate) async fn fetch_text(&self, url: &str) -> ForgeResult<String> {
        let url = Url::parse(url)?;
        debug!(url = %url, "Fetching");
        self.backend.get(&url, None).await?.text()
    }
}
