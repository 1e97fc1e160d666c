//! Client library for The Movie Database (TMDB) v3 API.
//!
//! [`Client`] binds an [`ApiToken`] to an HTTP transport and hands out
//! per-resource wrappers, either by name through [`Client::api`] or through
//! typed accessors such as [`Client::movies`]. Responses are decoded into
//! models by the [`factory`] functions, which hydrate each model from its
//! declared field table (see [`hydrate`]).
//!
//! ```no_run
//! # async fn run() -> tmdb_api::Result<()> {
//! use tmdb_api::{Client, NamedParam, QueryParameters};
//!
//! let client = Client::new("my-api-key")?;
//! let params = QueryParameters::new().push(NamedParam::language("de-DE"));
//! let movie = client.movies().get_movie(550, &params).await?;
//! assert_eq!(movie.id, 550);
//! # Ok(())
//! # }
//! ```

/// Resource wrappers and name-based dispatch.
pub mod api;
mod client;
mod error;
/// Model construction from decoded responses.
pub mod factory;
/// HTTP transport and request plugins.
pub mod http;
/// Declarative model hydration.
pub mod hydrate;
/// Response models.
pub mod model;
mod options;
/// Query parameters and their normalization.
pub mod query;
mod token;

pub use api::{ResourceHandle, ResourceKind};
pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
pub use http::AuthScheme;
pub use options::{ClientOptions, DECLARED_OPTIONS};
pub use query::{NamedParam, ParamValue, QueryParameter, QueryParameters};
pub use token::ApiToken;
