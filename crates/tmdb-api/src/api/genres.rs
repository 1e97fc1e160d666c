//! `genres` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create_collection_at, create_page};
use crate::model::{Genre, Movie, Page};
use crate::query::QueryParameters;

/// Movie and TV genre lists.
#[derive(Debug, Clone, Copy)]
pub struct GenresApi<'a> {
    client: &'a Client,
}

impl<'a> GenresApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET genre/movie/list`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_movie_genres(&self, params: &QueryParameters) -> Result<Vec<Genre>> {
        let data = self.client.get_json("genre/movie/list", params).await?;
        create_collection_at(&data, "genres")
    }

    /// `GET genre/tv/list`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_tv_genres(&self, params: &QueryParameters) -> Result<Vec<Genre>> {
        let data = self.client.get_json("genre/tv/list", params).await?;
        create_collection_at(&data, "genres")
    }

    /// `GET genre/{id}/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_movies(&self, id: u32, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self
            .client
            .get_json(&format!("genre/{id}/movies"), params)
            .await?;
        create_page(&data)
    }
}
