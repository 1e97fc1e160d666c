//! Request plugins applied to every outbound request.

use std::fmt;

use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::token::ApiToken;

/// Hook that decorates every outbound request.
///
/// Plugins are keyed by [`RequestPlugin::name`]; registering a plugin with
/// a name already present replaces the earlier one.
pub trait RequestPlugin: fmt::Debug + Send + Sync {
    /// Registration key.
    fn name(&self) -> &'static str;

    /// Decorates the request.
    fn apply(&self, request: RequestBuilder) -> RequestBuilder;
}

/// How the API token is attached to a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `api_key` query parameter (v3 API key).
    #[default]
    ApiKey,
    /// `Authorization: Bearer` header (v4 read access token).
    Bearer,
}

/// Attaches the API token to every request.
#[derive(Debug, Clone)]
pub struct ApiTokenPlugin {
    token: ApiToken,
    scheme: AuthScheme,
}

impl ApiTokenPlugin {
    /// Registration key of this plugin.
    pub const NAME: &'static str = "api_token";

    /// Creates the plugin.
    #[must_use]
    pub const fn new(token: ApiToken, scheme: AuthScheme) -> Self {
        Self { token, scheme }
    }
}

impl RequestPlugin for ApiTokenPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self.scheme {
            AuthScheme::ApiKey => request.query(&[("api_key", self.token.as_str())]),
            AuthScheme::Bearer => request.bearer_auth(self.token.as_str()),
        }
    }
}

/// Sets `Accept: application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptJsonHeader;

impl AcceptJsonHeader {
    /// Registration key of this plugin.
    pub const NAME: &'static str = "accept_json";
}

impl RequestPlugin for AcceptJsonHeader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        request.header(ACCEPT, HeaderValue::from_static("application/json"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn build(plugin: &dyn RequestPlugin) -> reqwest::Request {
        let client = reqwest::Client::new();
        plugin
            .apply(client.get("http://localhost/3/movie/550"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_api_key_scheme_adds_query_parameter() {
        // Arrange
        let plugin = ApiTokenPlugin::new(ApiToken::from("abc123"), AuthScheme::ApiKey);

        // Act
        let request = build(&plugin);

        // Assert
        assert_eq!(request.url().query(), Some("api_key=abc123"));
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn test_bearer_scheme_adds_authorization_header() {
        // Arrange
        let plugin = ApiTokenPlugin::new(ApiToken::from("abc123"), AuthScheme::Bearer);

        // Act
        let request = build(&plugin);

        // Assert
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer abc123"
        );
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_accept_json_header() {
        // Arrange & Act
        let request = build(&AcceptJsonHeader);

        // Assert
        assert_eq!(
            request.headers().get("accept").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_auth_scheme_deserializes_snake_case() {
        // Arrange & Act
        let scheme: AuthScheme = serde_json::from_str("\"bearer\"").unwrap();

        // Assert
        assert_eq!(scheme, AuthScheme::Bearer);
    }
}
