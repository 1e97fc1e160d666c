//! `companies` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_page};
use crate::model::{Company, Movie, Page};
use crate::query::QueryParameters;

/// Production companies.
#[derive(Debug, Clone, Copy)]
pub struct CompaniesApi<'a> {
    client: &'a Client,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET company/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_company(&self, id: u64) -> Result<Company> {
        let data = self
            .client
            .get_json(&format!("company/{id}"), &QueryParameters::new())
            .await?;
        create(&data)
    }

    /// `GET company/{id}/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_movies(&self, id: u64, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self
            .client
            .get_json(&format!("company/{id}/movies"), params)
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
    async fn test_get_company() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/company/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "name": "Lucasfilm Ltd.",
                "headquarters": "San Francisco, California",
                "homepage": "https://www.lucasfilm.com",
                "logo_path": "/o86DbpburjxrqAzEDhXZcyE8pDb.png",
                "origin_country": "US",
                "parent_company": null
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let company = client.companies().get_company(1).await.unwrap();

        // Assert
        assert_eq!(company.name, "Lucasfilm Ltd.");
        assert_eq!(company.origin_country.as_deref(), Some("US"));
        assert!(company.description.is_none());
    }

    #[tokio::test]
    async fn test_get_movies_returns_page() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/company/1/movies"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "page": 2,
                "total_pages": 3,
                "total_results": 45,
                "results": [
                    {"id": 11, "title": "Star Wars"},
                    {"id": 1891, "title": "The Empire Strikes Back"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);
        let params = QueryParameters::new().push(NamedParam::page(2));

        // Act
        let page = client.companies().get_movies(1, &params).await.unwrap();

        // Assert
        assert_eq!(page.page, 2);
        assert_eq!(page.total_results, 45);
        assert_eq!(page.results[1].title, "The Empire Strikes Back");
    }
}
