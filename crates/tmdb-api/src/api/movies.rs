//! `movies` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_collection_at, create_page};
use crate::model::{Credits, Keyword, Movie, Page, Review};
use crate::query::QueryParameters;

/// Movie details, credits and the curated movie lists.
#[derive(Debug, Clone, Copy)]
pub struct MoviesApi<'a> {
    client: &'a Client,
}

impl<'a> MoviesApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET movie/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_movie(&self, id: u64, params: &QueryParameters) -> Result<Movie> {
        let data = self.client.get_json(&format!("movie/{id}"), params).await?;
        create(&data)
    }

    /// `GET movie/{id}/credits`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_credits(&self, id: u64, params: &QueryParameters) -> Result<Credits> {
        let data = self
            .client
            .get_json(&format!("movie/{id}/credits"), params)
            .await?;
        create(&data)
    }

    /// `GET movie/{id}/keywords`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_keywords(&self, id: u64) -> Result<Vec<Keyword>> {
        let data = self
            .client
            .get_json(&format!("movie/{id}/keywords"), &QueryParameters::new())
            .await?;
        create_collection_at(&data, "keywords")
    }

    /// `GET movie/{id}/reviews`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_reviews(&self, id: u64, params: &QueryParameters) -> Result<Page<Review>> {
        let data = self
            .client
            .get_json(&format!("movie/{id}/reviews"), params)
            .await?;
        create_page(&data)
    }

    /// `GET movie/{id}/similar`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_similar(&self, id: u64, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self
            .client
            .get_json(&format!("movie/{id}/similar"), params)
            .await?;
        create_page(&data)
    }

    /// `GET movie/latest`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_latest(&self, params: &QueryParameters) -> Result<Movie> {
        let data = self.client.get_json("movie/latest", params).await?;
        create(&data)
    }

    /// `GET movie/upcoming`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn get_upcoming(&self, params: &QueryParameters) -> Result<Page<Movie>> {
        self.list("upcoming", params).await
    }

    /// `GET movie/now_playing`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn get_now_playing(&self, params: &QueryParameters) -> Result<Page<Movie>> {
        self.list("now_playing", params).await
    }

    /// `GET movie/popular`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn get_popular(&self, params: &QueryParameters) -> Result<Page<Movie>> {
        self.list("popular", params).await
    }

    /// `GET movie/top_rated`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn get_top_rated(&self, params: &QueryParameters) -> Result<Page<Movie>> {
        self.list("top_rated", params).await
    }

    #[instrument(skip_all, fields(list = list))]
    async fn list(&self, list: &str, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self
            .client
            .get_json(&format!("movie/{list}"), params)
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
    use crate::query::NamedParam;

    #[tokio::test]
    async fn test_get_movie_with_language() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../../fixtures/tmdb/movie_550.json");
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("language", "en-US"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().push(NamedParam::language("en-US"));

        // Act
        let movie = client.movies().get_movie(550, &params).await.unwrap();

        // Assert
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.imdb_id.as_deref(), Some("tt0137523"));
        assert_eq!(movie.genres.len(), 3);
    }

    #[tokio::test]
    async fn test_get_movie_not_found() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/0"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "status_code": 34,
                "status_message": "The resource you requested could not be found."
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let result = client
            .movies()
            .get_movie(0, &QueryParameters::new())
            .await;

        // Assert
        assert!(matches!(
            result,
            Err(crate::Error::Api { code: 34, .. })
        ));
    }

    #[tokio::test]
    async fn test_get_keywords_reads_keywords_key() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550/keywords"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "keywords": [
                    {"id": 825, "name": "support group"},
                    {"id": 851, "name": "dual identity"}
                ]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let keywords = client.movies().get_keywords(550).await.unwrap();

        // Assert
        assert_eq!(keywords.len(), 2);
        assert_eq!(keywords[1].name, "dual identity");
    }

    #[tokio::test]
    async fn test_get_credits() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550/credits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 550,
                "cast": [{
                    "id": 819,
                    "name": "Edward Norton",
                    "character": "Narrator",
                    "credit_id": "52fe4250c3a36847f80149f3",
                    "order": 0
                }],
                "crew": [{
                    "id": 7467,
                    "name": "David Fincher",
                    "job": "Director",
                    "department": "Directing",
                    "credit_id": "52fe4250c3a36847f8014a11"
                }]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let credits = client
            .movies()
            .get_credits(550, &QueryParameters::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(credits.cast[0].character.as_deref(), Some("Narrator"));
        assert_eq!(credits.crew[0].job, "Director");
    }

    #[tokio::test]
    async fn test_get_popular_page() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "page": 1,
                "total_pages": 500,
                "total_results": 10000,
                "results": [{"id": 27205, "title": "Inception"}]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().with("page", 1_u32);

        // Act
        let page = client.movies().get_popular(&params).await.unwrap();

        // Assert
        assert!(page.has_next());
        assert_eq!(page.results[0].id, 27205);
    }
}
