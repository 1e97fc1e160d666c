//! `configuration` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create;
use crate::model::Configuration;
use crate::query::QueryParameters;

/// API-wide configuration (image base URLs and sizes, change keys).
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationApi<'a> {
    client: &'a Client,
}

impl<'a> ConfigurationApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET configuration`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_configuration(&self) -> Result<Configuration> {
        let data = self
            .client
            .get_json("configuration", &QueryParameters::new())
            .await?;
        create(&data)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::tests::mock_client;

    #[tokio::test]
    async fn test_get_configuration() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../../fixtures/tmdb/configuration.json");
        Mock::given(method("GET"))
            .and(path("/3/configuration"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let config = client.configuration().get_configuration().await.unwrap();

        // Assert
        assert_eq!(config.images.base_url, "http://image.tmdb.org/t/p/");
        assert!(config.change_keys.contains(&String::from("runtime")));
    }
}
