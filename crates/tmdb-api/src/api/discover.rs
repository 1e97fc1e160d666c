//! `discover` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create_page;
use crate::model::{Movie, Page, TvShow};
use crate::query::QueryParameters;

/// Filtered discovery of movies and shows. Filters are passed as query
/// parameters, e.g. `with_genres` or `primary_release_year`.
#[derive(Debug, Clone, Copy)]
pub struct DiscoverApi<'a> {
    client: &'a Client,
}

impl<'a> DiscoverApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET discover/movie`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn discover_movies(&self, params: &QueryParameters) -> Result<Page<Movie>> {
        let data = self.client.get_json("discover/movie", params).await?;
        create_page(&data)
    }

    /// `GET discover/tv`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn discover_tv(&self, params: &QueryParameters) -> Result<Page<TvShow>> {
        let data = self.client.get_json("discover/tv", params).await?;
        create_page(&data)
    }
}
