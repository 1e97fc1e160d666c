//! `lists` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create;
use crate::http::path_segment;
use crate::model::{ListItemStatus, MovieList};
use crate::query::{NamedParam, QueryParameters};

/// User-curated movie lists.
#[derive(Debug, Clone, Copy)]
pub struct ListsApi<'a> {
    client: &'a Client,
}

impl<'a> ListsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET list/{list_id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure. [`Error::Payload`] if `list_id`
    /// is empty, `.` or `..`.
    ///
    /// [`Error::Payload`]: crate::Error::Payload
    #[instrument(skip_all, fields(list_id = list_id))]
    pub async fn get_list(&self, list_id: &str, params: &QueryParameters) -> Result<MovieList> {
        let list_id = path_segment(list_id)?;
        let data = self
            .client
            .get_json(&format!("list/{list_id}"), params)
            .await?;
        create(&data)
    }

    /// `GET list/{list_id}/item_status?movie_id=..`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure. [`Error::Payload`] if `list_id`
    /// is empty, `.` or `..`.
    ///
    /// [`Error::Payload`]: crate::Error::Payload
    #[instrument(skip_all, fields(list_id = list_id, movie_id = movie_id))]
    pub async fn item_status(&self, list_id: &str, movie_id: u64) -> Result<ListItemStatus> {
        let list_id = path_segment(list_id)?;
        let params = QueryParameters::new().push(NamedParam::new("movie_id", movie_id.to_string()));
        let data = self
            .client
            .get_json(&format!("list/{list_id}/item_status"), &params)
            .await?;
        create(&data)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::tests::mock_client;

    #[tokio::test]
    async fn test_get_list() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/list/509ec17b19c2950a0600050d"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "509ec17b19c2950a0600050d",
                "name": "The Marvel Universe",
                "created_by": "travisbell",
                "item_count": 1,
                "items": [{"id": 1726, "title": "Iron Man"}]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let list = client
            .lists()
            .get_list("509ec17b19c2950a0600050d", &QueryParameters::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(list.name, "The Marvel Universe");
        assert_eq!(list.items.len(), 1);
    }

    #[tokio::test]
    async fn test_item_status_sends_movie_id() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/list/509ec17b19c2950a0600050d/item_status"))
            .and(query_param("movie_id", "1726"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "509ec17b19c2950a0600050d",
                "item_present": true
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let status = client
            .lists()
            .item_status("509ec17b19c2950a0600050d", 1726)
            .await
            .unwrap();

        // Assert
        assert!(status.item_present);
    }

    #[tokio::test]
    async fn test_item_status_keeps_list_id_in_one_segment() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/list/a%2F..%2F..%2Ffoo/item_status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "a/../../foo",
                "item_present": false
            })))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server);

        // Act
        let status = client
            .lists()
            .item_status("a/../../foo", 1726)
            .await
            .unwrap();

        // Assert
        assert!(!status.item_present);
    }
}
