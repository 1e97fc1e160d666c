//! `search` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create_page;
use crate::hydrate::Hydrate;
use crate::model::{Collection, Company, Keyword, Movie, Page, Person, TvShow};
use crate::query::{NamedParam, QueryParameters};

/// Free-text search across resource families.
#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    client: &'a Client,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET search/movie`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_movies(
        &self,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<Movie>> {
        self.search("movie", query, params).await
    }

    /// `GET search/tv`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_tv(&self, query: &str, params: &QueryParameters) -> Result<Page<TvShow>> {
        self.search("tv", query, params).await
    }

    /// `GET search/person`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_people(
        &self,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<Person>> {
        self.search("person", query, params).await
    }

    /// `GET search/collection`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_collections(
        &self,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<Collection>> {
        self.search("collection", query, params).await
    }

    /// `GET search/company`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_companies(
        &self,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<Company>> {
        self.search("company", query, params).await
    }

    /// `GET search/keyword`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn search_keywords(
        &self,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<Keyword>> {
        self.search("keyword", query, params).await
    }

    #[instrument(skip_all, fields(kind = kind, query = query))]
    async fn search<T: Hydrate + Default>(
        &self,
        kind: &str,
        query: &str,
        params: &QueryParameters,
    ) -> Result<Page<T>> {
        let params = params.clone().push(NamedParam::query(query));
        let data = self
            .client
            .get_json(&format!("search/{kind}"), &params)
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
    async fn test_search_movies() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../../fixtures/tmdb/search_movie_inception.json");
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("query", "Inception"))
            .and(query_param("year", "2010"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().push(NamedParam::year(2010));

        // Act
        let page = client
            .search()
            .search_movies("Inception", &params)
            .await
            .unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].id, 27205);
        assert_eq!(page.results[0].genre_ids, vec![28, 878, 12]);
        assert!(page.results[1].video);
    }

    #[tokio::test]
    async fn test_named_query_overrides_plain_query() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/tv"))
            .and(query_param("query", "Game of Thrones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "total_pages": 1,
                "total_results": 1,
                "results": [{"id": 1399, "name": "Game of Thrones"}]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().with("query", "ignored");

        // Act
        let page = client
            .search()
            .search_tv("Game of Thrones", &params)
            .await
            .unwrap();

        // Assert
        assert_eq!(page.results[0].name, "Game of Thrones");
    }

    #[tokio::test]
    async fn test_search_keywords() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/keyword"))
            .and(query_param("query", "heist"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "total_pages": 1,
                "total_results": 1,
                "results": [{"id": 10051, "name": "heist"}]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let page = client
            .search()
            .search_keywords("heist", &QueryParameters::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(page.results[0].id, 10051);
    }
}
