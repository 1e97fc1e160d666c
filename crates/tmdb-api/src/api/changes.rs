//! `changes` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create_page;
use crate::model::{Change, Page};
use crate::query::QueryParameters;

/// Ids of recently changed movies, shows and people. Accepts `start_date`,
/// `end_date` and `page`.
#[derive(Debug, Clone, Copy)]
pub struct ChangesApi<'a> {
    client: &'a Client,
}

impl<'a> ChangesApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET movie/changes`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn movie_changes(&self, params: &QueryParameters) -> Result<Page<Change>> {
        self.changes("movie", params).await
    }

    /// `GET tv/changes`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn tv_changes(&self, params: &QueryParameters) -> Result<Page<Change>> {
        self.changes("tv", params).await
    }

    /// `GET person/changes`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn person_changes(&self, params: &QueryParameters) -> Result<Page<Change>> {
        self.changes("person", params).await
    }

    #[instrument(skip_all, fields(family = family))]
    async fn changes(&self, family: &str, params: &QueryParameters) -> Result<Page<Change>> {
        let data = self
            .client
            .get_json(&format!("{family}/changes"), params)
            .await?;
        create_page(&data)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::tests::mock_client;

    #[tokio::test]
    async fn test_person_changes() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/person/changes"))
            .and(query_param("start_date", "2024-01-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "total_pages": 3,
                "total_results": 250,
                "results": [{"id": 287, "adult": false}, {"id": 819, "adult": null}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().with("start_date", "2024-01-01");

        // Act
        let page = client.changes().person_changes(&params).await.unwrap();

        // Assert
        assert!(page.has_next());
        assert_eq!(page.results[0].adult, Some(false));
        assert_eq!(page.results[1].adult, None);
    }
}
