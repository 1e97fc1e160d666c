//! `account` resource.

use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::{create, create_page};
use crate::model::{Account, Movie, Page};
use crate::query::{NamedParam, QueryParameters};

/// Account details and the account's movie lists. Every call needs a
/// session id.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a Client,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET account`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn get_account(&self, session_id: &str) -> Result<Account> {
        let params = QueryParameters::new().push(NamedParam::session_id(session_id));
        let data = self.client.get_json("account", &params).await?;
        create(&data)
    }

    /// `GET account/{account_id}/favorite/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn favorite_movies(
        &self,
        account_id: u64,
        session_id: &str,
        params: &QueryParameters,
    ) -> Result<Page<Movie>> {
        self.movie_list(account_id, "favorite", session_id, params)
            .await
    }

    /// `GET account/{account_id}/rated/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn rated_movies(
        &self,
        account_id: u64,
        session_id: &str,
        params: &QueryParameters,
    ) -> Result<Page<Movie>> {
        self.movie_list(account_id, "rated", session_id, params).await
    }

    /// `GET account/{account_id}/watchlist/movies`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    pub async fn watchlist_movies(
        &self,
        account_id: u64,
        session_id: &str,
        params: &QueryParameters,
    ) -> Result<Page<Movie>> {
        self.movie_list(account_id, "watchlist", session_id, params)
            .await
    }

    #[instrument(skip_all, fields(account_id = account_id, list = list))]
    async fn movie_list(
        &self,
        account_id: u64,
        list: &str,
        session_id: &str,
        params: &QueryParameters,
    ) -> Result<Page<Movie>> {
        let params = params.clone().push(NamedParam::session_id(session_id));
        let data = self
            .client
            .get_json(&format!("account/{account_id}/{list}/movies"), &params)
            .await?;
        create_page(&data)
    }
}
