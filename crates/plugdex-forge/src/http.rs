//! HTTP backend abstraction for the forge clients.
//!
//! The clients never talk to reqwest directly: they go through [`HttpBackend`],
//! which hands back a fully-read [`HttpResponse`]. Tests swap in
//! [`testing::FakeBackend`] with canned responses.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ForgeError, ForgeResult};

// ============================================================================
// Response
// ============================================================================

/// A fully-read HTTP response.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Header names are lowercase.
    pub headers: HashMap<String, String>,
    pub body: String,
    /// The URL that was requested, for error messages.
    pub url: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Decode the body as JSON.
    ///
    /// The body is parsed before the status is checked, so an error page that
    /// isn't JSON reports as a parse failure carrying the status.
    pub fn json<T: DeserializeOwned>(&self) -> ForgeResult<T> {
        let value: serde_json::Value =
            serde_json::from_str(&self.body).map_err(|source| self.parse_error(source))?;

        if !self.is_success() {
            return Err(self.status_error());
        }

        serde_json::from_value(value).map_err(|source| self.parse_error(source))
    }

    /// The body as text, or an error for a non-2xx status.
    pub fn text(self) -> ForgeResult<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(self.status_error())
        }
    }

    /// Target of the `rel="next"` entry of the `Link` header, if any.
    pub fn next_link(&self) -> Option<String> {
        self.header("link").and_then(parse_next_link)
    }

    fn status_error(&self) -> ForgeError {
        ForgeError::ApiRequestFailed {
            status: self.status,
            url: self.url.clone(),
        }
    }

    fn parse_error(&self, source: serde_json::Error) -> ForgeError {
        ForgeError::JsonParse {
            status: self.status,
            url: self.url.clone(),
            source,
        }
    }
}

/// Extract the `rel="next"` URL from a `Link` header value.
///
/// `<https://api.github.com/search?page=2>; rel="next", <...>; rel="last"`
fn parse_next_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';').map(str::trim);
        let target = parts.next()?;
        let is_next = parts.any(|param| param == r#"rel="next""# || param == "rel=next");
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(ToString::to_string)
    })
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends the forge clients send requests through.
///
/// `auth` is the complete `Authorization` header value, or `None` for
/// unauthenticated fetches such as raw README downloads.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn get(&self, url: &Url, auth: Option<&str>) -> ForgeResult<HttpResponse>;

    async fn post_json(
        &self,
        url: &Url,
        auth: Option<&str>,
        body: &serde_json::Value,
    ) -> ForgeResult<HttpResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// No retries: a failed request is reported once and the caller decides what
/// to skip.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> ForgeResult<Self> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> ForgeResult<HttpResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get(&self, url: &Url, auth: Option<&str>) -> ForgeResult<HttpResponse> {
        let mut request = self.client.get(url.as_str());
        if let Some(auth) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        self.send(request, url).await
    }

    async fn post_json(
        &self,
        url: &Url,
        auth: Option<&str>,
        body: &serde_json::Value,
    ) -> ForgeResult<HttpResponse> {
        let mut request = self.client.post(url.as_str()).json(body);
        if let Some(auth) = auth {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        self.send(request, url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned response for the fake backend.
    #[derive(Clone, Default)]
    pub struct CannedResponse {
        pub status: u16,
        pub headers: Vec<(String, String)>,
        pub body: String,
    }

    impl CannedResponse {
        pub fn json(value: &serde_json::Value) -> Self {
            Self {
                status: 200,
                headers: Vec::new(),
                body: value.to_string(),
            }
        }

        pub fn text(body: &str) -> Self {
            Self {
                status: 200,
                headers: Vec::new(),
                body: body.to_string(),
            }
        }

        pub fn status(status: u16, body: &str) -> Self {
            Self {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }
        }

        pub fn with_header(mut self, name: &str, value: &str) -> Self {
            self.headers
                .push((name.to_ascii_lowercase(), value.to_string()));
            self
        }
    }

    /// A request the fake backend received.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub url: String,
        pub auth: Option<String>,
        pub body: Option<serde_json::Value>,
    }

    /// A fake HTTP backend that returns canned responses.
    ///
    /// Responses are matched by substring of the URL; the longest matching
    /// pattern wins, so `README` does not shadow `README.md`. Unmatched URLs
    /// get a 404.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        responses: Arc<Mutex<Vec<(String, CannedResponse)>>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for a URL pattern.
        pub fn with_response(self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .push((url_contains.to_string(), response));
            self
        }

        /// Every request received so far, in order.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// URLs of every request received so far, in order.
        pub fn urls(&self) -> Vec<String> {
            self.requests().into_iter().map(|r| r.url).collect()
        }

        fn respond(&self, request: RecordedRequest) -> HttpResponse {
            let canned = {
                let responses = self.responses.lock().unwrap();
                responses
                    .iter()
                    .filter(|(pattern, _)| request.url.contains(pattern.as_str()))
                    .max_by_key(|(pattern, _)| pattern.len())
                    .map(|(_, response)| response.clone())
            };
            let canned = canned.unwrap_or_else(|| CannedResponse::status(404, "Not Found"));

            let url = request.url.clone();
            self.requests.lock().unwrap().push(request);
            HttpResponse {
                status: canned.status,
                headers: canned.headers.into_iter().collect(),
                body: canned.body,
                url,
            }
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get(&self, url: &Url, auth: Option<&str>) -> ForgeResult<HttpResponse> {
            Ok(self.respond(RecordedRequest {
                method: "GET",
                url: url.to_string(),
                auth: auth.map(ToString::to_string),
                body: None,
            }))
        }

        async fn post_json(
            &self,
            url: &Url,
            auth: Option<&str>,
            body: &serde_json::Value,
        ) -> ForgeResult<HttpResponse> {
            Ok(self.respond(RecordedRequest {
                method: "POST",
                url: url.to_string(),
                auth: auth.map(ToString::to_string),
                body: Some(body.clone()),
            }))
        }
    }
}
