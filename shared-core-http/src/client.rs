use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{HttpError, Result};

/// Timeout applied by [`Client::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const APPLICATION_JSON: &str = "application/json";

/// Thin JSON-oriented wrapper around [`reqwest::Client`] bound to a base URL.
///
/// Responses are handed back untouched: non-2xx statuses are not errors.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl Client {
    /// Create a client with the default 30 second timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            timeout,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn get(
        &self,
        endpoint: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Response> {
        self.send(Method::GET, endpoint, None, headers).await
    }

    /// POST `body` as JSON. `None` sends an empty body without a
    /// `Content-Type`.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Response> {
        let body = body.map(encode).transpose()?;
        self.send(Method::POST, endpoint, body, headers).await
    }

    /// PUT `body` as JSON. `None` sends an empty body without a
    /// `Content-Type`.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Response> {
        let body = body.map(encode).transpose()?;
        self.send(Method::PUT, endpoint, body, headers).await
    }

    pub async fn delete(
        &self,
        endpoint: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Response> {
        self.send(Method::DELETE, endpoint, None, headers).await
    }

    /// Resolve `endpoint` against the base URL.
    ///
    /// - empty base: `endpoint` as given;
    /// - base that does not parse as an absolute URL: `endpoint` as given;
    /// - endpoint that cannot be resolved: base and endpoint concatenated;
    /// - otherwise standard reference resolution, so `/users` replaces the
    ///   base path while `users` is appended to its last directory.
    pub fn build_url(&self, endpoint: &str) -> String {
        if self.base_url.is_empty() {
            return endpoint.to_string();
        }
        let Ok(base) = Url::parse(&self.base_url) else {
            return endpoint.to_string();
        };
        match base.join(endpoint) {
            Ok(url) => url.into(),
            Err(_) => format!("{}{}", self.base_url, endpoint),
        }
    }

    async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Vec<u8>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<Response> {
        let url = self.build_url(endpoint);
        let mut request = self.client.request(method.clone(), &url);

        let mut header_map = HeaderMap::new();
        if let Some(body) = body {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
            request = request.body(body);
        }
        // Caller headers win over the defaults above.
        for (name, value) in headers.into_iter().flatten() {
            let (name, value) = header_pair(name, value)?;
            header_map.insert(name, value);
        }

        debug!(%method, %url, "sending request");
        let response = request.headers(header_map).send().await?;
        debug!(%method, %url, status = response.status().as_u16(), "received response");
        Ok(response)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(HttpError::Encode)
}

fn header_pair(name: &str, value: &str) -> Result<(HeaderName, HeaderValue)> {
    let invalid = |reason: String| HttpError::InvalidHeader {
        name: name.to_string(),
        reason,
    };
    let header_name =
        HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid(e.to_string()))?;
    let header_value = HeaderValue::from_str(value).map_err(|e| invalid(e.to_string()))?;
    Ok((header_name, header_value))
}

/// Read the whole body of `response` and decode it as JSON.
pub async fn parse_json_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(HttpError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Client {
        Client::new(base).unwrap()
    }

    #[test]
    fn url_building() {
        assert_eq!(client("").build_url("/test"), "/test");
        assert_eq!(
            client("https://api.example.com").build_url("/users"),
            "https://api.example.com/users"
        );
        assert_eq!(
            client("https://api.example.com/v1/").build_url("users"),
            "https://api.example.com/v1/users"
        );
        assert_eq!(
            client("https://api.example.com/v1").build_url("/users?page=2"),
            "https://api.example.com/users?page=2"
        );
        assert_eq!(
            client("https://api.example.com").build_url("https://other.example.org/x"),
            "https://other.example.org/x"
        );
        assert_eq!(client("not a url").build_url("/test"), "/test");
    }

    #[test]
    fn invalid_headers_are_rejected() {
        let err = header_pair("bad header", "v").unwrap_err();
        assert!(matches!(err, HttpError::InvalidHeader { ref name, .. } if name == "bad header"));
        assert!(header_pair("X-Ok", "line\nbreak").is_err());
        assert!(header_pair("Authorization", "Bearer token").is_ok());
    }
}
