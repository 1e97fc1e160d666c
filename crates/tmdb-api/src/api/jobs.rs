//! `jobs` resource.

use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create_collection, create_collection_at};
use crate::model::Department;
use crate::query::QueryParameters;

/// Crew departments and the jobs in each.
#[derive(Debug, Clone, Copy)]
pub struct JobsApi<'a> {
    client: &'a Client,
}

impl<'a> JobsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET job/list`
    ///
    /// Accepts both a bare array and an object with a `jobs` array.
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_jobs(&self) -> Result<Vec<Department>> {
        let data = self
            .client
            .get_json("job/list", &QueryParameters::new())
            .await?;
        match &data {
            Value::Array(_) => create_collection(&data),
            _ => create_collection_at(&data, "jobs"),
        }
    }
}
