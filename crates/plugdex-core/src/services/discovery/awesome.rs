//! Curated "awesome list" Markdown parsing.
//!
//! An awesome list is a README where each heading names a category and each
//! top-level list item below it starts with a link to a repository:
//!
//! ```markdown
//! ## Fuzzy Finder
//!
//! - [nvim-telescope/telescope.nvim](https://github.com/nvim-telescope/telescope.nvim) - Extendable fuzzy finder.
//! ```
//!
//! The heading becomes the resource's tag.

use pulldown_cmark::{Event, Parser, Tag as MdTag, TagEnd};

use crate::domain::{ForgeType, Resource};

/// Headings whose items are not resources (tables of contents, non-Neovim sections).
const IGNORED_HEADINGS: &[&str] = &["contents", "vim"];

/// Hosts that serve repository pages.
const GITHUB_HOSTS: &[&str] = &["github.com", "www.github.com"];

/// Headings with hand-picked tag names.
const TAG_OVERRIDES: &[(&str, &str)] = &[
    ("(requires neovim 0.5)", "neovim-0.5"),
    ("treesitter supported colorschemes", "treesitter-colorschemes"),
];

/// Turn a heading into a tag: lower-case, whitespace replaced by `-`.
pub fn sanitize_tag(heading: &str) -> String {
    let lowered = heading.to_lowercase();
    if let Some((_, tag)) = TAG_OVERRIDES.iter().find(|(from, _)| *from == lowered) {
        return (*tag).to_string();
    }
    lowered
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Extract `(username, repo)` from a github.com repository link.
///
/// Returns `None` for links to other hosts (subdomains such as
/// `gist.github.com` included) or without both path segments. Fragments and
/// query strings are dropped from the repo name.
pub fn github_repo_from_link(link: &str) -> Option<(String, String)> {
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"))?;
    let (host, path) = rest.split_once('/')?;
    if !GITHUB_HOSTS.contains(&host.to_ascii_lowercase().as_str()) {
        return None;
    }
    let mut segments = path.split('/');
    let username = segments.next()?;
    let repo = segments.next()?.split(['#', '?']).next()?;

    if username.is_empty() || repo.is_empty() {
        return None;
    }
    Some((username.to_string(), repo.to_string()))
}

/// Parse an awesome list into GitHub resources, in document order.
///
/// Only the first element of each top-level list item is considered, and
/// only if it is a github.com link.
pub fn parse_awesome_list(markdown: &str) -> Vec<Resource> {
    let mut resources = Vec::new();

    let mut heading = String::new();
    let mut in_heading = false;
    let mut list_depth = 0usize;
    let mut awaiting_first_inline = false;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(MdTag::Heading { .. }) => {
                in_heading = true;
                heading.clear();
            }
            Event::End(TagEnd::Heading(_)) => {
                in_heading = false;
                heading = heading.trim().to_lowercase();
            }
            Event::Text(text) | Event::Code(text) if in_heading => heading.push_str(&text),

            Event::Start(MdTag::List(_)) => list_depth += 1,
            Event::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),

            Event::Start(MdTag::Item) => awaiting_first_inline = list_depth == 1,
            // Loose list items wrap their content in a paragraph.
            Event::Start(MdTag::Paragraph) => {}

            Event::Start(MdTag::Link { dest_url, .. }) if awaiting_first_inline => {
                awaiting_first_inline = false;
                if IGNORED_HEADINGS.contains(&heading.as_str()) {
                    continue;
                }
                if let Some((username, repo)) = github_repo_from_link(&dest_url) {
                    resources.push(
                        Resource::new(ForgeType::GitHub, username, repo)
                            .with_tags([sanitize_tag(&heading)]),
                    );
                }
            }
            _ => awaiting_first_inline = false,
        }
    }

    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "\
# Awesome Neovim

## Contents

- [LSP](#lsp)
- [Fuzzy Finder](#fuzzy-finder)

## LSP

- [neovim/nvim-lspconfig](https://github.com/neovim/nvim-lspconfig) - Quickstart configurations.
- [glepnir/lspsaga.nvim](https://github.com/glepnir/lspsaga.nvim#readme) - UI for LSP.
  - [nested/ignored](https://github.com/nested/ignored) - Nested items are skipped.
- Not a link first [x/y](https://github.com/x/y).
- [elsewhere](https://gitlab.com/someone/thing) - Not on GitHub.

## Fuzzy Finder

- [nvim-telescope/telescope.nvim](https://github.com/nvim-telescope/telescope.nvim/tree/master) - Finder.

## (requires Neovim 0.5)

- [old/plugin](https://github.com/old/plugin)

## Vim

- [vim/only](https://github.com/vim/only)
";

    #[test]
    fn test_parses_resources_with_heading_tags() {
        let resources = parse_awesome_list(LIST);
        let found: Vec<_> = resources
            .iter()
            .map(|r| (r.key(), r.tags[0].as_str()))
            .collect();

        assert_eq!(
            found,
            vec![
                ("neovim/nvim-lspconfig".to_string(), "lsp"),
                ("glepnir/lspsaga.nvim".to_string(), "lsp"),
                ("nvim-telescope/telescope.nvim".to_string(), "fuzzy-finder"),
                ("old/plugin".to_string(), "neovim-0.5"),
            ]
        );
        assert!(resources.iter().all(|r| r.forge == ForgeType::GitHub));
    }

    #[test]
    fn test_loose_list_items_are_parsed() {
        let markdown = "## Colorscheme\n\n- [a/b](https://github.com/a/b)\n\n- [c/d](https://github.com/c/d)\n";
        let keys: Vec<_> = parse_awesome_list(markdown).iter().map(Resource::key).collect();
        assert_eq!(keys, vec!["a/b", "c/d"]);
    }

    #[test]
    fn test_sanitize_tag() {
        assert_eq!(sanitize_tag("Fuzzy Finder"), "fuzzy-finder");
        assert_eq!(sanitize_tag("(requires neovim 0.5)"), "neovim-0.5");
        assert_eq!(
            sanitize_tag("Treesitter Supported Colorschemes"),
            "treesitter-colorschemes"
        );
    }

    #[test]
    fn test_github_repo_from_link() {
        assert_eq!(
            github_repo_from_link("http://github.com/a/b#install"),
            Some(("a".to_string(), "b".to_string()))
        );
        assert_eq!(github_repo_from_link("https://github.com/a"), None);
        assert_eq!(github_repo_from_link("https://example.com/a/b"), None);
        assert_eq!(
            github_repo_from_link("https://www.github.com/a/b"),
            Some(("a".to_string(), "b".to_string()))
        );
    }

    #[test]
    fn test_github_lookalike_hosts_are_rejected() {
        assert_eq!(github_repo_from_link("https://gist.github.com/user/abc123"), None);
        assert_eq!(github_repo_from_link("https://github.com.evil.io/a/b"), None);
        assert_eq!(github_repo_from_link("https://notgithub.com/a/b"), None);
        assert_eq!(github_repo_from_link("github.com/a/b"), None);

        let markdown = "## Misc\n\n- [gist](https://gist.github.com/user/abc123)\n- [a/b](https://github.com/a/b)\n";
        let keys: Vec<_> = parse_awesome_list(markdown).iter().map(Resource::key).collect();
        assert_eq!(keys, vec!["a/b"]);
    }
}
