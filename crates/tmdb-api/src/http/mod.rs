//! `HttpClient` - reqwest-based transport for the TMDB API.

mod plugin;
mod rate_limiter;

use std::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use crate::error::{Error, Result};

pub use plugin::{AcceptJsonHeader, ApiTokenPlugin, AuthScheme, RequestPlugin};
pub(crate) use rate_limiter::{DEFAULT_MIN_INTERVAL, RateLimiter};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Maximum number of retries for HTTP 429 responses.
pub const MAX_RETRIES: u32 = 3;

/// Backoff step between retries (multiplied by the retry count).
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Characters kept as-is in a path segment (RFC 3986 unreserved).
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes `raw` as a single URL path segment.
///
/// `/`, `?` and `#` are encoded, so the result cannot leave its segment
/// when joined onto the base URL.
///
/// # Errors
///
/// Returns [`Error::Payload`] for an empty, `.` or `..` segment, which URL
/// resolution would drop or collapse.
pub fn path_segment(raw: &str) -> Result<String> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(Error::Payload {
            expected: "a non-empty path segment",
        });
    }
    Ok(utf8_percent_encode(raw, SEGMENT_ENCODE_SET).to_string())
}

/// TMDB error response body.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    status_code: u32,
    status_message: String,
}

/// HTTP transport: base URL, extra headers, plugins and pacing.
#[derive(Debug)]
pub struct HttpClient {
    /// Underlying HTTP client.
    inner: reqwest::Client,
    /// Base URL request paths are joined onto.
    base_url: Url,
    /// Extra headers sent with every request.
    headers: HeaderMap,
    /// Request plugins, applied in registration order.
    plugins: Vec<Box<dyn RequestPlugin>>,
    /// Request pacing.
    rate_limiter: Mutex<RateLimiter>,
}

impl HttpClient {
    /// Creates a transport without plugins.
    #[must_use]
    pub fn new(inner: reqwest::Client, base_url: Url, min_interval: Duration) -> Self {
        Self {
            inner,
            base_url,
            headers: HeaderMap::new(),
            plugins: Vec::new(),
            rate_limiter: Mutex::new(RateLimiter::new(min_interval)),
        }
    }

    /// Base URL request paths are joined onto.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Registers a plugin, replacing any plugin with the same name.
    pub fn add_plugin(&mut self, plugin: impl RequestPlugin + 'static) {
        let plugin: Box<dyn RequestPlugin> = Box::new(plugin);
        if let Some(slot) = self.plugins.iter_mut().find(|p| p.name() == plugin.name()) {
            *slot = plugin;
        } else {
            self.plugins.push(plugin);
        }
    }

    /// Names of the registered plugins, in application order.
    #[must_use]
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|plugin| plugin.name()).collect()
    }

    /// Extra headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Merges `headers` into the extra headers, replacing same-named ones.
    pub fn set_headers(&mut self, headers: HeaderMap) {
        for (name, value) in &headers {
            self.headers.insert(name.clone(), value.clone());
        }
    }

    /// Removes every extra header.
    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.request(Method::GET, path, query, None).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn post(
        &self,
        path: &str,
        query: &[(String, String)],
        body: &Value,
    ) -> Result<Value> {
        self.request(Method::POST, path, query, Some(body)).await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::request`].
    pub async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        self.request(Method::DELETE, path, query, None).await
    }

    /// Sends a request and decodes the JSON response.
    ///
    /// Applies extra headers and plugins, paces requests, and retries up to
    /// [`MAX_RETRIES`] times on HTTP 429. An empty body decodes to `null`.
    ///
    /// # Errors
    ///
    /// - [`Error::Url`] if `path` cannot be joined onto the base URL.
    /// - [`Error::RateLimited`] if HTTP 429 persists.
    /// - [`Error::Api`] / [`Error::Status`] for other non-success statuses.
    /// - [`Error::Http`] / [`Error::Json`] for transport or decoding failures.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        self.rate_limiter.lock().await.acquire().await;

        let url = self.base_url.join(path)?;

        let mut retries = 0u32;
        loop {
            let mut builder = self
                .inner
                .request(method.clone(), url.clone())
                .headers(self.headers.clone());
            for plugin in &self.plugins {
                builder = plugin.apply(builder);
            }
            builder = builder.query(query);
            if let Some(body) = body {
                builder = builder.json(body);
            }
            let request = builder.build()?;

            tracing::debug!(url = %redacted(request.url()), "TMDB API request");

            let response = self.inner.execute(request).await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(Error::RateLimited {
                        retries: MAX_RETRIES,
                        path: String::from(path),
                    });
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(RETRY_BACKOFF.saturating_mul(retries)).await;
                self.rate_limiter.lock().await.acquire().await;
                continue;
            }

            if !status.is_success() {
                let text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                if let Ok(error_body) = serde_json::from_str::<ErrorBody>(&text) {
                    return Err(Error::Api {
                        status,
                        code: error_body.status_code,
                        message: error_body.status_message,
                    });
                }
                return Err(Error::Status { status, body: text });
            }

            let text = response.text().await?;
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }
    }
}

/// Renders a request URL with the `api_key` value masked.
fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "api_key" {
                String::from("***")
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();
    if pairs.is_empty() {
        return masked.to_string();
    }
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::indexing_slicing)]

    use reqwest::header::HeaderValue;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::token::ApiToken;

    async fn transport(server: &MockServer) -> HttpClient {
        let base_url = format!("{}/3/", server.uri()).parse().unwrap();
        let mut http = HttpClient::new(reqwest::Client::new(), base_url, Duration::ZERO);
        http.add_plugin(ApiTokenPlugin::new(
            ApiToken::from("test-key"),
            AuthScheme::ApiKey,
        ));
        http.add_plugin(AcceptJsonHeader);
        http
    }

    #[tokio::test]
    async fn test_get_applies_plugins_and_query() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("api_key", "test-key"))
            .and(query_param("language", "de-DE"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":550}"#))
            .expect(1)
            .mount(&server)
            .await;
        let http = transport(&server).await;
        let query = [(String::from("language"), String::from("de-DE"))];

        // Act
        let value = http.get("movie/550", &query).await.unwrap();

        // Assert
        assert_eq!(value, json!({"id": 550}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/3/list"))
            .and(body_json(json!({"name": "Watch later"})))
            .respond_with(ResponseTemplate::new(201).set_body_string(r#"{"success":true}"#))
            .expect(1)
            .mount(&server)
            .await;
        let http = transport(&server).await;

        // Act
        let value = http
            .post("list", &[], &json!({"name": "Watch later"}))
            .await
            .unwrap();

        // Assert
        assert_eq!(value["success"], json!(true));
    }

    #[tokio::test]
    async fn test_custom_headers_are_sent_and_cleared() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("x-trace", "abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;
        let mut http = transport(&server).await;
        let mut headers = HeaderMap::new();
        headers.insert("x-trace", HeaderValue::from_static("abc"));

        // Act
        http.set_headers(headers);
        http.get("configuration", &[]).await.unwrap();
        http.clear_headers();
        http.get("configuration", &[]).await.unwrap();

        // Assert
        assert!(http.headers().is_empty());
    }

    #[tokio::test]
    async fn test_add_plugin_replaces_same_name() {
        // Arrange
        let server = MockServer::start().await;
        let mut http = transport(&server).await;

        // Act
        http.add_plugin(ApiTokenPlugin::new(
            ApiToken::from("other"),
            AuthScheme::Bearer,
        ));

        // Assert
        assert_eq!(
            http.plugin_names(),
            vec![ApiTokenPlugin::NAME, AcceptJsonHeader::NAME]
        );
    }

    #[tokio::test]
    async fn test_error_body_becomes_api_error() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":34,"status_message":"The resource you requested could not be found.","success":false}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string(error_body))
            .mount(&server)
            .await;
        let http = transport(&server).await;

        // Act
        let result = http.get("movie/0", &[]).await;

        // Assert
        assert!(matches!(
            result,
            Err(Error::Api { status: StatusCode::NOT_FOUND, code: 34, .. })
        ));
    }

    #[tokio::test]
    async fn test_plain_error_body_becomes_status_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;
        let http = transport(&server).await;

        // Act
        let result = http.get("movie/550", &[]).await;

        // Assert
        match result {
            Err(Error::Status { status, body }) => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_429_retries() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":25,"status_message":"Your request count is over the allowed limit.","success":false}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(error_body))
            .expect(u64::from(MAX_RETRIES) + 1)
            .mount(&server)
            .await;
        let http = transport(&server).await;

        // Act
        let result = http.get("movie/550", &[]).await;

        // Assert
        assert!(matches!(result, Err(Error::RateLimited { retries: MAX_RETRIES, .. })));
    }

    #[tokio::test]
    async fn test_empty_body_is_null() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        let http = transport(&server).await;

        // Act
        let value = http.delete("list/1", &[]).await.unwrap();

        // Assert
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_path_segment_encodes_separators() {
        // Arrange & Act & Assert
        assert_eq!(path_segment("../account").unwrap(), "..%2Faccount");
        assert_eq!(
            path_segment("x?language=zz#top").unwrap(),
            "x%3Flanguage%3Dzz%23top"
        );
        assert_eq!(
            path_segment("5488c29bc3a3686f4a00004a").unwrap(),
            "5488c29bc3a3686f4a00004a"
        );
    }

    #[test]
    fn test_path_segment_rejects_dot_segments() {
        for raw in ["", ".", ".."] {
            // Arrange & Act
            let result = path_segment(raw);

            // Assert
            assert!(matches!(result, Err(Error::Payload { .. })), "{raw:?}");
        }
    }

    #[test]
    fn test_encoded_segment_stays_under_base() {
        // Arrange
        let base = Url::parse("https://api.themoviedb.org/3/").unwrap();
        let segment = path_segment("a/../../foo").unwrap();

        // Act
        let url = base.join(&format!("review/{segment}")).unwrap();

        // Assert
        assert_eq!(url.path(), "/3/review/a%2F..%2F..%2Ffoo");
    }

    #[test]
    fn test_redacted_masks_api_key() {
        // Arrange
        let url =
            Url::parse("https://api.themoviedb.org/3/movie/550?api_key=secret&language=en")
                .unwrap();

        // Act
        let rendered = redacted(&url);

        // Assert
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("language=en"));
    }
}
