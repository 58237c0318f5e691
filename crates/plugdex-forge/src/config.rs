//! Public configuration for the forge clients.
//!
//! Built once from [`ForgeCredentials`] in the composition root and handed to
//! the client constructors. Request code never reads the environment.

use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use plugdex_core::ForgeCredentials;

const DEFAULT_USER_AGENT: &str = concat!("plugdex/", env!("CARGO_PKG_VERSION"));

/// Time added to the rate-limit reset instant before requests resume.
pub const DEFAULT_RESET_BUFFER: Duration = Duration::from_millis(500);

/// Configuration for the GitHub client.
///
/// # Example
///
/// ```
/// use plugdex_forge::GithubClientConfig;
/// use std::time::Duration;
///
/// let config = GithubClientConfig::new()
///     .with_credentials("octocat", "ghp_token")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Clone)]
pub struct GithubClientConfig {
    /// Base URL of the REST API
    pub(crate) api_url: String,
    /// User agent string for HTTP requests (GitHub rejects requests without one)
    pub(crate) user_agent: String,
    /// Optional request timeout; requests may hang forever without one
    pub(crate) timeout: Option<Duration>,
    pub(crate) username: String,
    pub(crate) token: String,
    /// Added to the reset instant when waiting out the rate limit
    pub(crate) reset_buffer: Duration,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            username: String::new(),
            token: String::new(),
            reset_buffer: DEFAULT_RESET_BUFFER,
        }
    }
}

// Token stays out of logs.
impl std::fmt::Debug for GithubClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClientConfig")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("reset_buffer", &self.reset_buffer)
            .finish_non_exhaustive()
    }
}

impl GithubClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings with the GitHub half of the pipeline credentials.
    #[must_use]
    pub fn from_credentials(credentials: &ForgeCredentials) -> Self {
        Self::default().with_credentials(
            credentials.github_username.clone(),
            credentials.github_token.clone(),
        )
    }

    /// Set the REST API base URL.
    ///
    /// Defaults to `https://api.github.com`.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout. There is none by default.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the account name and personal access token sent as Basic auth.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.token = token.into();
        self
    }

    /// Set the buffer added to the rate-limit reset time.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_reset_buffer(mut self, buffer: Duration) -> Self {
        self.reset_buffer = buffer;
        self
    }

    /// `Authorization` header value: `Basic base64(username:token)`.
    pub(crate) fn basic_auth(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.token));
        format!("Basic {encoded}")
    }
}

/// Configuration for the SourceHut client.
#[derive(Clone)]
pub struct SrhtClientConfig {
    /// Base URL of git.sr.ht; serves both `/query` and the blob endpoint
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Option<Duration>,
    pub(crate) token: String,
}

impl Default for SrhtClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://git.sr.ht".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            token: String::new(),
        }
    }
}

impl std::fmt::Debug for SrhtClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SrhtClientConfig")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SrhtClientConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_credentials(credentials: &ForgeCredentials) -> Self {
        Self::default().with_token(credentials.srht_token.clone())
    }

    /// Set the git.sr.ht base URL.
    ///
    /// Defaults to `https://git.sr.ht`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the OAuth token sent as a Bearer credential.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub(crate) fn bearer_auth(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_github_config() {
        let config = GithubClientConfig::new();
        assert_eq!(config.api_url, "https://api.github.com");
        assert!(config.user_agent.starts_with("plugdex/"));
        assert!(config.timeout.is_none());
        assert_eq!(config.reset_buffer, Duration::from_millis(500));
    }

    #[test]
    fn test_basic_auth_is_pre_encoded() {
        let config = GithubClientConfig::new().with_credentials("octocat", "secret");
        // base64("octocat:secret")
        assert_eq!(config.basic_auth(), "Basic b2N0b2NhdDpzZWNyZXQ=");
    }

    #[test]
    fn test_empty_credentials_still_encode() {
        assert_eq!(GithubClientConfig::new().basic_auth(), "Basic Og==");
    }

    #[test]
    fn test_from_credentials() {
        let credentials = ForgeCredentials {
            github_username: "octocat".to_string(),
            github_token: "gh".to_string(),
            srht_token: "srht".to_string(),
        };

        let github = GithubClientConfig::from_credentials(&credentials);
        assert_eq!(github.username, "octocat");
        assert_eq!(github.token, "gh");

        let srht = SrhtClientConfig::from_credentials(&credentials);
        assert_eq!(srht.bearer_auth(), "Bearer srht");
        assert_eq!(srht.base_url, "https://git.sr.ht");
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = GithubClientConfig::new().with_credentials("octocat", "ghp_secret");
        assert!(!format!("{config:?}").contains("ghp_secret"));

        let config = SrhtClientConfig::new().with_token("srht_secret");
        assert!(!format!("{config:?}").contains("srht_secret"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SrhtClientConfig::new()
            .with_base_url("http://localhost:8080")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
