//! `authentication` resource.

use serde_json::json;
use tracing::instrument;

use crate::client::Client;
use crate::error::Result;
use crate::factory::create;
use crate::model::{GuestSession, RequestToken, Session};
use crate::query::QueryParameters;

/// Request tokens and sessions.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticationApi<'a> {
    client: &'a Client,
}

impl<'a> AuthenticationApi<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        self.client
    }

    /// `GET authentication/token/new`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn request_token(&self) -> Result<RequestToken> {
        let data = self
            .client
            .get_json("authentication/token/new", &QueryParameters::new())
            .await?;
        create(&data)
    }

    /// URL the user visits to approve `request_token`.
    #[must_use]
    pub fn authenticate_url(request_token: &str) -> String {
        format!("https://www.themoviedb.org/authenticate/{request_token}")
    }

    /// `POST authentication/session/new` with an approved request token.
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn session(&self, request_token: &str) -> Result<Session> {
        let body = json!({ "request_token": request_token });
        let data = self
            .client
            .post_json("authentication/session/new", &body)
            .await?;
        create(&data)
    }

    /// `GET authentication/guest_session/new`
    ///
    /// # Errors
    ///
    /// Transport, API or hydration failure.
    #[instrument(skip_all)]
    pub async fn guest_session(&self) -> Result<GuestSession> {
        let data = self
            .client
            .get_json("authentication/guest_session/new", &QueryParameters::new())
            .await?;
        create(&data)
    }
}
