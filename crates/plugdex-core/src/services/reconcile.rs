//! Resource list reconciliation.

use crate::domain::{MalformedResourceError, Resource, ResourceMap, sort_resources};

/// Merge scraped and manually curated resources into one canonical list.
///
/// Scraped entries are inserted first, then manual entries, each insertion
/// replacing whatever was stored under the same identity key. A manual entry
/// therefore wins as a whole, tag list included. The result is sorted by
/// `(username, repo)`.
///
/// Fails fast on the first resource with an empty username or repo.
pub fn reconcile(
    scraped: &[Resource],
    manual: &[Resource],
) -> Result<Vec<Resource>, MalformedResourceError> {
    merge_resources(scraped.iter().chain(manual).cloned())
}

/// Collapse resources by identity key, later entries winning, and sort them.
pub fn merge_resources<I>(resources: I) -> Result<Vec<Resource>, MalformedResourceError>
where
    I: IntoIterator<Item = Resource>,
{
    let mut db = ResourceMap::new();
    for resource in resources {
        resource.validate()?;
        db.insert(resource.key(), resource);
    }

    let mut merged: Vec<Resource> = db.into_values().collect();
    sort_resources(&mut merged);
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ForgeType;

    fn gh(username: &str, repo: &str, tags: &[&str]) -> Resource {
        Resource::new(ForgeType::GitHub, username, repo).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_manual_entry_wins_whole_record() {
        let scraped = vec![gh("user", "repo", &["a"])];
        let manual = vec![
            Resource::new(ForgeType::SourceHut, "user", "repo").with_tags(["b", "c"]),
        ];

        let merged = reconcile(&scraped, &manual).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].tags, vec!["b", "c"]);
        assert_eq!(merged[0].forge, ForgeType::SourceHut);
    }

    #[test]
    fn test_output_sorted_by_username_then_repo() {
        let scraped = vec![gh("zed", "a", &[]), gh("amy", "z", &[]), gh("amy", "b", &[])];
        let manual = vec![gh("bob", "x", &[])];

        let merged = reconcile(&scraped, &manual).unwrap();
        let keys: Vec<_> = merged.iter().map(Resource::key).collect();

        assert_eq!(keys, vec!["amy/b", "amy/z", "bob/x", "zed/a"]);
    }

    #[test]
    fn test_empty_inputs_give_empty_output() {
        assert!(reconcile(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_scraped_entries_collapse() {
        let scraped = vec![gh("a", "b", &["first"]), gh("a", "b", &["second"])];
        let merged = reconcile(&scraped, &[]).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].tags, vec!["second"]);
    }

    #[test]
    fn test_is_idempotent() {
        let scraped = vec![gh("b", "x", &["1"]), gh("a", "y", &["2"]), gh("a", "x", &["3"])];
        let manual = vec![gh("a", "y", &["m"]), gh("c", "c", &[])];

        let first = serde_json::to_string(&reconcile(&scraped, &manual).unwrap()).unwrap();
        let second = serde_json::to_string(&reconcile(&scraped, &manual).unwrap()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_malformed_resource() {
        let scraped = vec![gh("a", "b", &[])];
        let manual = vec![gh("", "orphan", &[])];

        let err = reconcile(&scraped, &manual).unwrap_err();
        assert_eq!(err.key, "/orphan");
    }
}
