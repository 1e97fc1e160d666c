//! Per-resource API wrappers and the closed set of resource names.

mod account;
mod authentication;
mod changes;
mod collections;
mod companies;
mod configuration;
mod discover;
mod genres;
mod jobs;
mod keywords;
mod lists;
mod movies;
mod people;
mod reviews;
mod search;
mod tv;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::instrument;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::query::QueryParameters;

pub use account::AccountApi;
pub use authentication::AuthenticationApi;
pub use changes::ChangesApi;
pub use collections::CollectionsApi;
pub use companies::CompaniesApi;
pub use configuration::ConfigurationApi;
pub use discover::DiscoverApi;
pub use genres::GenresApi;
pub use jobs::JobsApi;
pub use keywords::KeywordsApi;
pub use lists::ListsApi;
pub use movies::MoviesApi;
pub use people::PeopleApi;
pub use reviews::ReviewsApi;
pub use search::SearchApi;
pub use tv::TvApi;

/// A TMDB resource family reachable through [`Client::api`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// `configuration`
    Configuration,
    /// `authentication`
    Authentication,
    /// `account`
    Account,
    /// `movies`
    Movies,
    /// `collections`
    Collections,
    /// `tv`, `tvseasons`, `tvepisodes`
    Tv,
    /// `people`
    People,
    /// `lists`
    Lists,
    /// `companies`
    Companies,
    /// `genres`
    Genres,
    /// `keywords`
    Keywords,
    /// `discover`
    Discover,
    /// `search`
    Search,
    /// `reviews`
    Reviews,
    /// `changes`
    Changes,
    /// `jobs`
    Jobs,
}

impl ResourceKind {
    /// Every resource kind.
    pub const ALL: [Self; 16] = [
        Self::Configuration,
        Self::Authentication,
        Self::Account,
        Self::Movies,
        Self::Collections,
        Self::Tv,
        Self::People,
        Self::Lists,
        Self::Companies,
        Self::Genres,
        Self::Keywords,
        Self::Discover,
        Self::Search,
        Self::Reviews,
        Self::Changes,
        Self::Jobs,
    ];

    /// Every accepted resource name, aliases included.
    pub const NAMES: [&'static str; 18] = [
        "configuration",
        "authentication",
        "account",
        "movies",
        "collections",
        "tv",
        "tvseasons",
        "tvepisodes",
        "people",
        "lists",
        "companies",
        "genres",
        "keywords",
        "discover",
        "search",
        "reviews",
        "changes",
        "jobs",
    ];

    /// Canonical resource name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Authentication => "authentication",
            Self::Account => "account",
            Self::Movies => "movies",
            Self::Collections => "collections",
            Self::Tv => "tv",
            Self::People => "people",
            Self::Lists => "lists",
            Self::Companies => "companies",
            Self::Genres => "genres",
            Self::Keywords => "keywords",
            Self::Discover => "discover",
            Self::Search => "search",
            Self::Reviews => "reviews",
            Self::Changes => "changes",
            Self::Jobs => "jobs",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "configuration" => Ok(Self::Configuration),
            "authentication" => Ok(Self::Authentication),
            "account" => Ok(Self::Account),
            "movies" => Ok(Self::Movies),
            "collections" => Ok(Self::Collections),
            "tv" | "tvseasons" | "tvepisodes" => Ok(Self::Tv),
            "people" => Ok(Self::People),
            "lists" => Ok(Self::Lists),
            "companies" => Ok(Self::Companies),
            "genres" => Ok(Self::Genres),
            "keywords" => Ok(Self::Keywords),
            "discover" => Ok(Self::Discover),
            "search" => Ok(Self::Search),
            "reviews" => Ok(Self::Reviews),
            "changes" => Ok(Self::Changes),
            "jobs" => Ok(Self::Jobs),
            _ => Err(Error::UnsupportedResource {
                name: String::from(name),
            }),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource wrapper bound to a [`Client`], as returned by [`Client::api`].
#[derive(Debug, Clone, Copy)]
#[allow(missing_docs)]
pub enum ResourceHandle<'a> {
    Configuration(ConfigurationApi<'a>),
    Authentication(AuthenticationApi<'a>),
    Account(AccountApi<'a>),
    Movies(MoviesApi<'a>),
    Collections(CollectionsApi<'a>),
    Tv(TvApi<'a>),
    People(PeopleApi<'a>),
    Lists(ListsApi<'a>),
    Companies(CompaniesApi<'a>),
    Genres(GenresApi<'a>),
    Keywords(KeywordsApi<'a>),
    Discover(DiscoverApi<'a>),
    Search(SearchApi<'a>),
    Reviews(ReviewsApi<'a>),
    Changes(ChangesApi<'a>),
    Jobs(JobsApi<'a>),
}

impl<'a> ResourceHandle<'a> {
    /// Resource kind of the wrapper.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Configuration(_) => ResourceKind::Configuration,
            Self::Authentication(_) => ResourceKind::Authentication,
            Self::Account(_) => ResourceKind::Account,
            Self::Movies(_) => ResourceKind::Movies,
            Self::Collections(_) => ResourceKind::Collections,
            Self::Tv(_) => ResourceKind::Tv,
            Self::People(_) => ResourceKind::People,
            Self::Lists(_) => ResourceKind::Lists,
            Self::Companies(_) => ResourceKind::Companies,
            Self::Genres(_) => ResourceKind::Genres,
            Self::Keywords(_) => ResourceKind::Keywords,
            Self::Discover(_) => ResourceKind::Discover,
            Self::Search(_) => ResourceKind::Search,
            Self::Reviews(_) => ResourceKind::Reviews,
            Self::Changes(_) => ResourceKind::Changes,
            Self::Jobs(_) => ResourceKind::Jobs,
        }
    }

    /// Client the wrapper is bound to.
    #[must_use]
    pub const fn client(&self) -> &'a Client {
        match self {
            Self::Configuration(api) => api.client(),
            Self::Authentication(api) => api.client(),
            Self::Account(api) => api.client(),
            Self::Movies(api) => api.client(),
            Self::Collections(api) => api.client(),
            Self::Tv(api) => api.client(),
            Self::People(api) => api.client(),
            Self::Lists(api) => api.client(),
            Self::Companies(api) => api.client(),
            Self::Genres(api) => api.client(),
            Self::Keywords(api) => api.client(),
            Self::Discover(api) => api.client(),
            Self::Search(api) => api.client(),
            Self::Reviews(api) => api.client(),
            Self::Changes(api) => api.client(),
            Self::Jobs(api) => api.client(),
        }
    }

    /// Fetches one item by id and returns it as JSON.
    ///
    /// Reviews and lists take string ids; every other lookup expects a
    /// numeric id.
    ///
    /// # Errors
    ///
    /// - [`Error::NoLookup`] if the resource has no by-id lookup.
    /// - [`Error::Payload`] if a numeric id is required but `id` is not one,
    ///   or a string id is empty, `.` or `..`.
    /// - Any transport or hydration error of the underlying call.
    #[instrument(skip_all, fields(resource = %self.kind(), id = %id))]
    pub async fn fetch(&self, id: &str, params: &QueryParameters) -> Result<Value> {
        let value = match self {
            Self::Movies(api) => serde_json::to_value(api.get_movie(numeric(id)?, params).await?)?,
            Self::Tv(api) => serde_json::to_value(api.get_tvshow(numeric(id)?, params).await?)?,
            Self::People(api) => {
                serde_json::to_value(api.get_person(numeric(id)?, params).await?)?
            }
            Self::Collections(api) => {
                serde_json::to_value(api.get_collection(numeric(id)?, params).await?)?
            }
            Self::Companies(api) => serde_json::to_value(api.get_company(numeric(id)?).await?)?,
            Self::Keywords(api) => serde_json::to_value(api.get_keyword(numeric(id)?).await?)?,
            Self::Reviews(api) => serde_json::to_value(api.get_review(id).await?)?,
            Self::Lists(api) => serde_json::to_value(api.get_list(id, params).await?)?,
            other => {
                return Err(Error::NoLookup {
                    resource: other.kind().name(),
                });
            }
        };
        Ok(value)
    }
}

fn numeric(id: &str) -> Result<u64> {
    id.parse().map_err(|_| Error::Payload {
        expected: "a numeric id",
    })
}
