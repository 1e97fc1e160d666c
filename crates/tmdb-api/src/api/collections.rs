//! `collections` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create;
use crate::model::Collection;
use crate::query::QueryParameters;

/// Movie collections.
#[derive(Debug, Clone, Copy)]
pub struct CollectionsApi<'a> {
    client: &'a Client,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET collection/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_collection(&self, id: u64, params: &QueryParameters) -> Result<Collection> {
        let data = self
            .client
            .get_json(&format!("collection/{id}"), params)
            .await?;
        create(&data)
    }
}
