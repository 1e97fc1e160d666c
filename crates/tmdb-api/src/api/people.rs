//! `people` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_page};
use crate::model::{Page, Person};
use crate::query::QueryParameters;

/// Cast and crew members.
#[derive(Debug, Clone, Copy)]
pub struct PeopleApi<'a> {
    client: &'a Client,
}

impl<'a> PeopleApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET person/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_person(&self, id: u64, params: &QueryParameters) -> Result<Person> {
        let data = self.client.get_json(&format!("person/{id}"), params).await?;
        create(&data)
    }

    /// `GET person/popular`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_popular(&self, params: &QueryParameters) -> Result<Page<Person>> {
        let data = self.client.get_json("person/popular", params).await?;
        create_page(&data)
    }
}
