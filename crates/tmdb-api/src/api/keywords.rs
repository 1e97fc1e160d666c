//! `keywords` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_page};
use crate::model::{Keyword, Movie, Page};
use crate::query::QueryParameters;

/// Keywords and the movies tagged with them.
#[derive(Debug, Clone, Copy)]
pub struct KeywordsApi<'a> {
    client: &'a Client,
}

impl<'a> KeywordsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET keyword/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_keyword(&self, id: u64) -> Result<Keyword> {
        let data = self
            .client
            .get_json(&format!("keyword/{id}"), &QueryParameters::new())
            .await?;
        create(&data)
    }

    /// `GET keyword/{id}/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_movies(&self, id: u64, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self
            .client
            .get_json(&format!("keyword/{id}/movies"), params)
            .await?;
        create_page(&data)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::tests::mock_client;

    #[tokio::test]
    async fn test_get_keyword() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/keyword/9715"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 9715,
                "name": "superhero"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let keyword = client.keywords().get_keyword(9715).await.unwrap();

        // Assert
        assert_eq!(keyword.id, 9715);
        assert_eq!(keyword.name, "superhero");
    }

    #[tokio::test]
    async fn test_get_movies_returns_page() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/keyword/9715/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 9715,
                "page": 1,
                "total_pages": 1,
                "total_results": 1,
                "results": [{"id": 1726, "title": "Iron Man", "release_date": "2008-04-30"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let page = client
            .keywords()
            .get_movies(9715, &QueryParameters::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.results[0].title, "Iron Man");
        assert_eq!(page.results[0].release_date.as_deref(), Some("2008-04-30"));
    }
}
