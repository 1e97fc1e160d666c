//! `reviews` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create;
use crate::http::path_segment;
use crate::model::Review;
use crate::query::QueryParameters;

/// Single reviews by id.
#[derive(Debug, Clone, Copy)]
pub struct ReviewsApi<'a> {
    client: &'a Client,
}

impl<'a> ReviewsApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET review/{id}`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure. [`Error::Payload`] if `id` is
    /// empty, `.` or `..`.
    ///
    /// [`Error::Payload`]: crate::Error::Payload
    #[instrument(skip_all, fields(id = id))]
    pub async fn get_review(&self, id: &str) -> Result<Review> {
        let id = path_segment(id)?;
        let data = self
            .client
            .get_json(&format!("review/{id}"), &QueryParameters::new())
            .await?;
        create(&data)
    }
}
