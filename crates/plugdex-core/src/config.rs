//! Pipeline configuration.
//!
//! Built once at process start and handed to every forge client constructor.
//! Nothing below the composition root reads the environment.

use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the GitHub personal access token.
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_ACCESS_TOKEN";
/// Environment variable holding the GitHub account name the token belongs to.
pub const ENV_GITHUB_USERNAME: &str = "GITHUB_USERNAME";
/// Environment variable holding the SourceHut OAuth token.
pub const ENV_SRHT_TOKEN: &str = "SRHT_ACCESS_TOKEN";
/// Environment variable overriding the snapshot directory.
pub const ENV_DATA_DIR: &str = "PLUGDEX_DATA_DIR";

/// Default snapshot directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Forge credentials.
///
/// Missing values are empty strings, not errors: a forge call made with an
/// empty credential simply fails through the normal failure path.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ForgeCredentials {
    pub github_username: String,
    pub github_token: String,
    pub srht_token: String,
}

// Tokens stay out of logs.
impl fmt::Debug for ForgeCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForgeCredentials")
            .field("github_username", &self.github_username)
            .field("github_token", &redact(&self.github_token))
            .field("srht_token", &redact(&self.srht_token))
            .finish()
    }
}

const fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<empty>" } else { "<redacted>" }
}

impl ForgeCredentials {
    /// Read credentials through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            github_username: lookup(ENV_GITHUB_USERNAME).unwrap_or_default(),
            github_token: lookup(ENV_GITHUB_TOKEN).unwrap_or_default(),
            srht_token: lookup(ENV_SRHT_TOKEN).unwrap_or_default(),
        }
    }
}

/// Process-wide pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub credentials: ForgeCredentials,
    /// Directory holding every snapshot file.
    pub data_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            credentials: ForgeCredentials::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl PipelineConfig {
    /// Build from a variable lookup function (usually `std::env::var`).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup(ENV_DATA_DIR)
            .filter(|dir| !dir.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        Self {
            credentials: ForgeCredentials::from_lookup(lookup),
            data_dir,
        }
    }

    /// Override the snapshot directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}
