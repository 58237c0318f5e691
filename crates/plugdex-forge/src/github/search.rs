//! Topic search with `Link` header pagination.

use tracing::debug;
use url::Url;

use super::GithubClient;
use super::models::{GithubSearchItem, GithubSearchPage};
use crate::error::ForgeResult;
use crate::http::HttpBackend;

/// The search API's maximum page size.
const PER_PAGE: u32 = 100;

impl<B: HttpBackend> GithubClient<B> {
    /// Every repository tagged with `topic`, all pages accumulated in order.
    pub(crate) async fn fetch_topics(&self, topic: &str) -> ForgeResult<Vec<GithubSearchItem>> {
        let mut url = self.endpoint(&format!(
            "/search/repositories?q=topic:{}&per_page={PER_PAGE}",
            urlencoding::encode(topic)
        ))?;
        let mut repos = Vec::new();

        loop {
            let response = self.api_get(&url).await?;
            let page: GithubSearchPage = response.json()?;
            repos.extend(page.items);

            match response.next_link() {
                Some(next) => url = Url::parse(&next)?,
                None => break,
            }
        }

        debug!(topic, count = repos.len(), "Topic search exhausted");
        Ok(repos)
    }
}
