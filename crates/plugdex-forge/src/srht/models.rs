//! SourceHut GraphQL wire types.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<QueryData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryData {
    #[serde(default)]
    pub user: Option<SrhtUser>,
}

#[derive(Debug, Deserialize)]
pub struct SrhtUser {
    #[serde(default)]
    pub repository: Option<SrhtRepo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SrhtRepo {
    pub name: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    /// Rendered README override; usually null.
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Null for an empty repository.
    #[serde(rename = "HEAD", default)]
    pub head: Option<SrhtRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SrhtRef {
    pub name: String,
}

impl SrhtRepo {
    /// Last segment of the HEAD ref: `refs/heads/main` is `main`.
    pub fn branch(&self) -> Option<&str> {
        self.head
            .as_ref()
            .and_then(|head| head.name.rsplit('/').next())
            .filter(|branch| !branch.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_from_head_ref() {
        let repo: SrhtRepo = serde_json::from_value(json!({
            "id": 42,
            "name": "aerc",
            "created": "2019-01-01T00:00:00Z",
            "updated": "2024-01-01T00:00:00Z",
            "readme": null,
            "description": "email client",
            "HEAD": {"name": "refs/heads/master"}
        }))
        .unwrap();
        assert_eq!(repo.branch(), Some("master"));
    }

    #[test]
    fn test_empty_repo_has_no_branch() {
        let repo: SrhtRepo =
            serde_json::from_value(json!({"name": "empty", "HEAD": null})).unwrap();
        assert_eq!(repo.branch(), None);
    }
}
